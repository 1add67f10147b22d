//! Metrics enrichment.
//!
//! Items whose link points at a catalog game get a live counter. The lookup
//! runs in two stages: every place id is resolved to its universe id
//! (concurrently, each failure isolated), then one batched stats call covers
//! all resolved universes. Any failure degrades to "no data"; nothing here
//! ever returns an error to the caller.

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use folio_core::config::MetricKind;
use folio_core::{Item, Observers, SubscriptionId};
use futures::future::join_all;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::link::place_id;
use crate::{CatalogBackend, GameStats};

/// Item link -> counter. A missing link means "unknown", not zero.
pub type MetricsMap = HashMap<String, u64>;

/// Where the latest cycle left the metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Availability {
    /// No cycle has been published yet.
    #[default]
    Pending,
    /// The last cycle reached the catalog (the map may still be empty).
    Ready,
    /// The last cycle could not get any stats from the catalog.
    Unavailable,
}

/// Sums over every stats record that joined back to at least one item.
/// Fields the catalog left out count as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsTotals {
    pub visits: u64,
    pub playing: u64,
}

impl MetricsTotals {
    fn add(&mut self, stat: &GameStats) {
        self.visits = self.visits.saturating_add(stat.visits.unwrap_or(0));
        self.playing = self.playing.saturating_add(stat.playing.unwrap_or(0));
    }

    pub fn get(&self, metric: MetricKind) -> u64 {
        match metric {
            MetricKind::Visits => self.visits,
            MetricKind::Playing => self.playing,
        }
    }
}

/// The outcome of one enrichment cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricsReport {
    pub availability: Availability,
    pub totals: MetricsTotals,
    pub map: MetricsMap,
}

impl MetricsReport {
    fn ready(map: MetricsMap, totals: MetricsTotals) -> Self {
        Self { availability: Availability::Ready, totals, map }
    }

    fn unavailable() -> Self {
        Self { availability: Availability::Unavailable, ..Self::default() }
    }
}

/// Run both lookup stages for `items` and build a fresh map.
pub async fn fetch_metrics(
    backend: &dyn CatalogBackend,
    items: &[Item],
    metric: MetricKind,
) -> MetricsMap {
    fetch_report(backend, items, metric).await.map
}

/// Like [`fetch_metrics`], but also reports totals and whether the catalog
/// could be reached at all.
pub async fn fetch_report(
    backend: &dyn CatalogBackend,
    items: &[Item],
    metric: MetricKind,
) -> MetricsReport {
    let mut links_by_place: HashMap<u64, Vec<String>> = HashMap::new();
    for link in items.iter().filter_map(Item::external_link) {
        if let Some(id) = place_id(link) {
            let links = links_by_place.entry(id).or_default();
            if !links.iter().any(|l| l == link) {
                links.push(link.to_string());
            }
        }
    }

    if links_by_place.is_empty() {
        debug!("No catalog links among {} items; skipping fetch", items.len());
        return MetricsReport::ready(MetricsMap::new(), MetricsTotals::default());
    }

    // Stage 1: fan out, then join. Completion order does not matter.
    let lookups = links_by_place.keys().map(|&place| async move {
        (place, backend.resolve_universe(place).await)
    });

    let mut places_by_universe: HashMap<u64, Vec<u64>> = HashMap::new();
    for (place, outcome) in join_all(lookups).await {
        match outcome {
            // Universe 0 never exists in the catalog.
            Ok(Some(universe)) if universe != 0 => {
                places_by_universe.entry(universe).or_default().push(place)
            }
            Ok(_) => debug!("Place {} has no universe", place),
            Err(e) => debug!("Universe lookup for place {} failed: {:#}", place, e),
        }
    }

    if places_by_universe.is_empty() {
        warn!("No universe ids resolved; metrics unavailable");
        return MetricsReport::unavailable();
    }

    let mut universe_ids: Vec<u64> = places_by_universe.keys().copied().collect();
    universe_ids.sort_unstable();

    // Stage 2: one batched call. Failure here loses everything.
    let stats = match backend.game_stats(&universe_ids).await {
        Ok(stats) => stats,
        Err(e) => {
            warn!("Catalog stats request failed: {:#}", e);
            return MetricsReport::unavailable();
        }
    };

    let mut map = MetricsMap::new();
    let mut totals = MetricsTotals::default();
    for stat in stats {
        let Some(places) = places_by_universe.get(&stat.universe_id) else {
            continue;
        };
        totals.add(&stat);

        let Some(value) = pick(&stat, metric) else {
            continue;
        };
        for link in places.iter().filter_map(|p| links_by_place.get(p)).flatten() {
            map.insert(link.clone(), value);
        }
    }

    info!(
        "Fetched {} {} for {} catalog links ({} total)",
        map.len(),
        metric.label(),
        links_by_place.values().map(Vec::len).sum::<usize>(),
        totals.get(metric)
    );
    MetricsReport::ready(map, totals)
}

fn pick(stat: &GameStats, metric: MetricKind) -> Option<u64> {
    match metric {
        MetricKind::Visits => stat.visits,
        MetricKind::Playing => stat.playing,
    }
}

// ════════════════════════════════════════════════════════════════════
// Fetcher (owns the published report)
// ════════════════════════════════════════════════════════════════════

/// Holds the latest metrics report and tells subscribers when it changes.
///
/// The report is replaced as a whole, so readers see either the previous
/// one or the new one. Every refresh takes a generation number when it
/// starts; a refresh that finishes after a newer one has started is
/// discarded.
pub struct MetricsFetcher {
    backend: Arc<dyn CatalogBackend>,
    metric: MetricKind,
    generation: AtomicU64,
    current: RwLock<Arc<MetricsReport>>,
    observers: Mutex<Observers<Arc<MetricsReport>>>,
}

impl fmt::Debug for MetricsFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report();
        f.debug_struct("MetricsFetcher")
            .field("metric", &self.metric)
            .field("availability", &report.availability)
            .field("entries", &report.map.len())
            .finish()
    }
}

impl MetricsFetcher {
    pub fn new(backend: Arc<dyn CatalogBackend>, metric: MetricKind) -> Self {
        Self {
            backend,
            metric,
            generation: AtomicU64::new(0),
            current: RwLock::new(Arc::new(MetricsReport::default())),
            observers: Mutex::new(Observers::new()),
        }
    }

    pub fn metric(&self) -> MetricKind {
        self.metric
    }

    /// The latest published report.
    pub fn report(&self) -> Arc<MetricsReport> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, link: &str) -> Option<u64> {
        self.report().map.get(link).copied()
    }

    pub fn totals(&self) -> MetricsTotals {
        self.report().totals
    }

    pub fn availability(&self) -> Availability {
        self.report().availability
    }

    /// Fetch and publish, waiting for the result. Returns what this cycle
    /// fetched, even if a newer refresh started meanwhile and it was not
    /// published.
    pub async fn refresh(&self, items: &[Item]) -> Arc<MetricsReport> {
        let generation = self.next_generation();
        let report = Arc::new(fetch_report(self.backend.as_ref(), items, self.metric).await);
        self.publish(generation, report.clone());
        report
    }

    /// Fire-and-forget refresh. The task holds only a weak reference; if the
    /// fetcher is gone by the time the fetch finishes, the result is dropped.
    pub fn spawn_refresh(self: &Arc<Self>, items: Vec<Item>) -> JoinHandle<()> {
        let generation = self.next_generation();
        let owner = Arc::downgrade(self);
        let backend = self.backend.clone();
        let metric = self.metric;

        tokio::spawn(async move {
            let report = fetch_report(backend.as_ref(), &items, metric).await;
            match owner.upgrade() {
                Some(fetcher) => {
                    fetcher.publish(generation, Arc::new(report));
                }
                None => debug!("Fetcher dropped mid-fetch; discarding metrics"),
            }
        })
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install `report` unless a newer refresh has started since `generation`
    /// was taken. Returns whether it was installed.
    fn publish(&self, generation: u64, report: Arc<MetricsReport>) -> bool {
        {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            let latest = self.generation.load(Ordering::SeqCst);
            if generation != latest {
                debug!(
                    "Discarding metrics from refresh {} (latest is {})",
                    generation, latest
                );
                return false;
            }
            *current = report.clone();
        }

        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .notify(&report);
        true
    }

    /// Callbacks run on whichever task published; they must not subscribe
    /// or unsubscribe from inside the callback.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&Arc<MetricsReport>) + Send + Sync + 'static,
    {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .unsubscribe(id)
    }
}
