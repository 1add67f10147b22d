use std::path::PathBuf;

/// Errors raised by the gallery core.
///
/// These indicate caller bugs or broken configuration. Network trouble never
/// shows up here; the metrics side swallows it.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read config {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
