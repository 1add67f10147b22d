//! Shared utility functions.
//!
//! Zero terminal dependencies. Used by the renderer and the event loop.

use folio_core::config::{Breakpoint, MetricKind};
use folio_core::{Item, Media};
use folio_metrics::{Availability, MetricsReport, format_count};

// ────────────────────────────────────────────────────────────────
// Formatting
// ────────────────────────────────────────────────────────────────

/// Badge text for a known metric, e.g. `4.2M visits`.
pub fn metric_badge(value: u64, metric: MetricKind) -> String {
    format!("{} {}", format_count(value), metric.label())
}

/// Summary value for one total: `4.2M+` once known, `N/A` after a failed
/// cycle, `…` while the first cycle is still running.
pub fn total_label(report: &MetricsReport, metric: MetricKind) -> String {
    let total = report.totals.get(metric);
    match report.availability {
        Availability::Ready if total > 0 => format!("{}+", format_count(total)),
        Availability::Ready => "-".to_string(),
        Availability::Unavailable => "N/A".to_string(),
        Availability::Pending => "…".to_string(),
    }
}

/// Cut a string to `max` characters, ending with an ellipsis when cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn breakpoint_name(breakpoint: Breakpoint) -> &'static str {
    match breakpoint {
        Breakpoint::Mobile => "mobile",
        Breakpoint::Tablet => "tablet",
        Breakpoint::Desktop => "desktop",
    }
}

/// One-line description of an item's media.
pub fn media_line(item: &Item) -> Option<String> {
    match item.media()? {
        Media::Image { url } => Some(format!("image: {}", url)),
        Media::Video { id } => Some(format!("video: {}", id)),
        Media::Custom { content } => Some(format!("custom: {}", truncate(content, 48))),
    }
}

/// `Core Scripter · Active Development`, or whichever half exists.
pub fn role_line(item: &Item) -> Option<String> {
    match (item.role(), item.status()) {
        (Some(role), Some(status)) => Some(format!("{} · {}", role, status.label())),
        (Some(role), None) => Some(role.to_string()),
        (None, Some(status)) => Some(status.label().to_string()),
        (None, None) => None,
    }
}
