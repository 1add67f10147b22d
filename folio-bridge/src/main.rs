use anyhow::Result;
use folio_bridge::commands::{CommandParser, HELP_TEXT, PreviewCommand};
use folio_bridge::helpers::breakpoint_name;
use folio_bridge::render::render_frame;
use folio_core::GalleryController;
use folio_core::config::ShowcaseConfig;
use folio_metrics::{MetricsFetcher, RobloxCatalog};

use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;

const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = ShowcaseConfig::load_or_default(config_path.as_deref())?;
    let items = config.items.clone();

    let mut gallery = GalleryController::new(items.clone(), &config.gallery)?;
    let catalog = RobloxCatalog::new(&config.catalog)?;
    let fetcher = Arc::new(MetricsFetcher::new(Arc::new(catalog), config.catalog.metric));

    // Both the controller and the fetcher poke this channel; the loop redraws.
    let (redraw_tx, mut redraw_rx) = mpsc::channel::<()>(16);
    let tx = redraw_tx.clone();
    gallery.subscribe(move |_| {
        let _ = tx.try_send(());
    });
    let tx = redraw_tx.clone();
    fetcher.subscribe(move |_| {
        let _ = tx.try_send(());
    });

    // Never awaited: the first frame renders without metrics.
    fetcher.spawn_refresh(items.clone());

    let mut width = DEFAULT_VIEWPORT_WIDTH;
    let draw = |gallery: &GalleryController, width: u32| {
        let breakpoint = config.gallery.breakpoint_for_width(width);
        let page_size = config.gallery.page_size(breakpoint);
        println!(
            "{}({} · {} per page)\n",
            render_frame(gallery, &fetcher.report(), fetcher.metric(), page_size),
            breakpoint_name(breakpoint),
            page_size
        );
    };

    draw(&gallery, width);
    println!("{}\n", HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let deadline = gallery.settle_deadline().map(Instant::from_std);
        let settle_at = deadline.unwrap_or_else(Instant::now);

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match CommandParser::parse(&line) {
                    PreviewCommand::Navigate(direction) => {
                        gallery.navigate(direction);
                    }
                    PreviewCommand::Resize(px) => {
                        width = px;
                        draw(&gallery, width);
                    }
                    PreviewCommand::Refresh => {
                        fetcher.spawn_refresh(items.clone());
                    }
                    PreviewCommand::Redraw => draw(&gallery, width),
                    PreviewCommand::Help => println!("{}\n", HELP_TEXT),
                    PreviewCommand::Quit => break,
                    PreviewCommand::Unknown(input) => {
                        tracing::warn!("Unknown command: {:?} (try 'help')", input);
                    }
                }
            }
            _ = tokio::time::sleep_until(settle_at), if deadline.is_some() => {
                gallery.tick(std::time::Instant::now());
            }
            Some(()) = redraw_rx.recv() => {
                // Coalesce bursts (navigate + metrics landing together).
                while redraw_rx.try_recv().is_ok() {}
                draw(&gallery, width);
            }
        }
    }

    tracing::info!("Preview closed");
    Ok(())
}
