use anyhow::{Context, Result};
use async_trait::async_trait;
use folio_core::config::CatalogConfig;
use reqwest::Client;
use serde_json::Value;

pub mod fetcher;
pub mod format;
pub mod link;

pub use fetcher::{
    Availability, MetricsFetcher, MetricsMap, MetricsReport, MetricsTotals, fetch_metrics,
    fetch_report,
};
pub use format::format_count;

/// One record of the batch stats response.
/// Fields the catalog left out stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStats {
    pub universe_id: u64,
    pub visits: Option<u64>,
    pub playing: Option<u64>,
}

/// The interface to the external game catalog.
///
/// The fetcher only talks to this trait, so tests can hand it a fake.
#[async_trait]
pub trait CatalogBackend: Send + Sync {
    /// Stage 1: place id -> universe id. `Ok(None)` when the catalog knows no universe.
    async fn resolve_universe(&self, place_id: u64) -> Result<Option<u64>>;

    /// Stage 2: one batched call for every resolved universe.
    async fn game_stats(&self, universe_ids: &[u64]) -> Result<Vec<GameStats>>;
}

/// Direct HTTP client for the public Roblox catalog endpoints.
/// Single attempt per call, no retry.
#[derive(Debug, Clone)]
pub struct RobloxCatalog {
    http: Client,
    universe_endpoint: String,
    games_endpoint: String,
}

impl RobloxCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            universe_endpoint: config.universe_endpoint.trim_end_matches('/').to_string(),
            games_endpoint: config.games_endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// GET a URL and parse the body as JSON. Non-2xx is an error.
    async fn get_json(&self, url: &str) -> Result<Value> {
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to contact catalog at {}", url))?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let snippet: String = text.chars().take(200).collect();
            return Err(anyhow::anyhow!("Catalog returned {}: {}", status, snippet));
        }

        serde_json::from_str(&text).context("Catalog returned invalid JSON")
    }
}

#[async_trait]
impl CatalogBackend for RobloxCatalog {
    async fn resolve_universe(&self, place_id: u64) -> Result<Option<u64>> {
        let url = format!("{}/{}/universe", self.universe_endpoint, place_id);
        let parsed = self.get_json(&url).await?;
        Ok(parsed["universeId"].as_u64())
    }

    async fn game_stats(&self, universe_ids: &[u64]) -> Result<Vec<GameStats>> {
        let joined = universe_ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!("{}?universeIds={}", self.games_endpoint, joined);
        let parsed = self.get_json(&url).await?;

        let records = parsed["data"]
            .as_array()
            .context("Catalog stats response has no data array")?;

        // Records without an id cannot be joined back; drop them here.
        let stats = records
            .iter()
            .filter_map(|rec| {
                Some(GameStats {
                    universe_id: rec["id"].as_u64()?,
                    visits: rec["visits"].as_u64(),
                    playing: rec["playing"].as_u64(),
                })
            })
            .collect();

        Ok(stats)
    }
}
