pub mod config;
pub mod error;
pub mod gallery;
pub mod model;
pub mod observer;
pub mod showcase;

// Re-export the main struct so users can just use `folio_core::GalleryController`
pub use gallery::{Direction, GalleryController, GalleryView};

// Re-export the simpler types for the rendering surface
pub use error::GalleryError;
pub use model::{Item, Media, ProjectStatus};
pub use observer::{Observers, SubscriptionId};

/// Result alias for the core crate.
pub type Result<T> = std::result::Result<T, GalleryError>;
