//! Showcase configuration.
//!
//! Everything is optional in the JSON file; missing fields take the defaults
//! below and a missing item list falls back to the built-in showcase.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::Item;
use crate::{GalleryError, Result, showcase};

pub const DEFAULT_TRANSITION_MS: u64 = 300;
pub const DEFAULT_UNIVERSE_ENDPOINT: &str = "https://apis.roblox.com/universes/v1/places";
pub const DEFAULT_GAMES_ENDPOINT: &str = "https://games.roblox.com/v1/games";

const CONFIG_FILE: &str = "showcase.json";

// ════════════════════════════════════════════════════════════════════
// Gallery
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Items per page at each breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSizes {
    pub mobile: usize,
    pub tablet: usize,
    pub desktop: usize,
}

impl Default for PageSizes {
    fn default() -> Self {
        Self {
            mobile: 1,
            tablet: 2,
            desktop: 3,
        }
    }
}

/// Minimum viewport widths (px) at which each breakpoint starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub tablet: u32,
    pub desktop: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: 768,
            desktop: 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub transition_ms: u64,
    pub page_sizes: PageSizes,
    pub breakpoints: Breakpoints,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_TRANSITION_MS,
            page_sizes: PageSizes::default(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl GalleryConfig {
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn breakpoint_for_width(&self, width_px: u32) -> Breakpoint {
        if width_px >= self.breakpoints.desktop {
            Breakpoint::Desktop
        } else if width_px >= self.breakpoints.tablet {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }

    /// Never returns 0, even if the config says so.
    pub fn page_size(&self, breakpoint: Breakpoint) -> usize {
        let size = match breakpoint {
            Breakpoint::Mobile => self.page_sizes.mobile,
            Breakpoint::Tablet => self.page_sizes.tablet,
            Breakpoint::Desktop => self.page_sizes.desktop,
        };
        size.max(1)
    }

    pub fn page_size_for_width(&self, width_px: u32) -> usize {
        self.page_size(self.breakpoint_for_width(width_px))
    }
}

// ════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════

/// Which number from the batch stats record ends up in the metrics map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    #[default]
    Visits,
    Playing,
}

impl MetricKind {
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Visits => "visits",
            MetricKind::Playing => "playing",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Stage 1: `{endpoint}/{placeId}/universe`.
    pub universe_endpoint: String,
    /// Stage 2: `{endpoint}?universeIds=1,2,3`.
    pub games_endpoint: String,
    pub metric: MetricKind,
    /// Client-level request timeout. None leaves it to the transport.
    pub timeout_ms: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            universe_endpoint: DEFAULT_UNIVERSE_ENDPOINT.to_string(),
            games_endpoint: DEFAULT_GAMES_ENDPOINT.to_string(),
            metric: MetricKind::Visits,
            timeout_ms: None,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

// ════════════════════════════════════════════════════════════════════
// Showcase (top-level file)
// ════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub gallery: GalleryConfig,
    pub catalog: CatalogConfig,
    pub items: Vec<Item>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            gallery: GalleryConfig::default(),
            catalog: CatalogConfig::default(),
            items: showcase::default_items(),
        }
    }
}

impl ShowcaseConfig {
    /// `<platform config dir>/showcase.json`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "folio", "folio").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    pub fn from_json(text: &str, origin: &Path) -> Result<Self> {
        let mut config: ShowcaseConfig =
            serde_json::from_str(text).map_err(|source| GalleryError::ConfigParse {
                path: origin.to_path_buf(),
                source,
            })?;

        if config.items.is_empty() {
            tracing::info!("No items in {:?}; using built-in showcase", origin);
            config.items = showcase::default_items();
        }

        for item in &config.items {
            item.validate()?;
        }

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GalleryError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text, path)
    }

    /// An explicit path must load. Otherwise try the default location and
    /// fall back to the built-in showcase when there is no file.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::info!("Loading showcase config from {:?}", path);
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading showcase config from {:?}", path);
                Self::load(&path)
            }
            _ => {
                tracing::info!("No showcase config found; using built-in defaults");
                Ok(Self::default())
            }
        }
    }
}
