//! Text rendering of the gallery.
//!
//! A frame is the visible window (`page_size` cards from the current
//! position) plus a header and a totals line. Cards get a metric badge only
//! when the metrics map has an entry for their link.

use folio_core::config::MetricKind;
use folio_core::{GalleryController, Item};
use folio_metrics::MetricsReport;

use crate::helpers::{media_line, metric_badge, role_line, total_label, truncate};

pub const FRAME_WIDTH: usize = 72;
pub const SECTION_TITLE: &str = "Games I've Worked On";

/// Render one card. `metric` is the value from the metrics map, if any.
pub fn render_card(item: &Item, metric: Option<u64>, kind: MetricKind) -> String {
    let mut out = String::new();
    let inner = FRAME_WIDTH - 2;

    let title = truncate(item.title(), inner);
    match metric {
        Some(value) => {
            let badge = metric_badge(value, kind);
            let pad = inner.saturating_sub(title.chars().count() + badge.chars().count());
            out.push_str(&format!("┌ {}{}{}\n", title, " ".repeat(pad), badge));
        }
        None => out.push_str(&format!("┌ {}\n", title)),
    }

    if let Some(role) = role_line(item) {
        out.push_str(&format!("│ {}\n", truncate(&role, inner)));
    }
    if !item.description().is_empty() {
        out.push_str(&format!("│ {}\n", truncate(item.description(), inner)));
    }
    if !item.tags().is_empty() {
        let tags: Vec<String> = item.tags().iter().map(|t| format!("#{}", t)).collect();
        out.push_str(&format!("│ {}\n", truncate(&tags.join(" "), inner)));
    }
    if let Some(media) = media_line(item) {
        out.push_str(&format!("│ {}\n", truncate(&media, inner)));
    }

    match item.external_link() {
        Some(link) => out.push_str(&format!("└ {}\n", truncate(link, inner))),
        None => out.push_str("└\n"),
    }

    out
}

/// `visits 4.2M+ · playing 120+`, or `N/A` / `…` per the report state.
pub fn render_totals(report: &MetricsReport) -> String {
    format!(
        "{} {} · {} {}",
        MetricKind::Visits.label(),
        total_label(report, MetricKind::Visits),
        MetricKind::Playing.label(),
        total_label(report, MetricKind::Playing)
    )
}

/// Render the header, the totals line and the visible window.
pub fn render_frame(
    gallery: &GalleryController,
    metrics: &MetricsReport,
    kind: MetricKind,
    page_size: usize,
) -> String {
    let mut out = String::new();

    let position = gallery.current_index() % gallery.len() + 1;
    let state = if gallery.is_transitioning() { " ~" } else { "" };
    let counter = format!("[{}/{}]{}", position, gallery.len(), state);
    let rule = FRAME_WIDTH.saturating_sub(SECTION_TITLE.chars().count() + counter.chars().count() + 4);
    out.push_str(&format!("── {} {} {}\n", SECTION_TITLE, "─".repeat(rule), counter));
    out.push_str(&format!("   {}\n", render_totals(metrics)));

    for item in gallery.window(page_size) {
        let value = item.external_link().and_then(|link| metrics.map.get(link).copied());
        out.push_str(&render_card(item, value, kind));
    }

    out
}
