// src/error.rs
use std::path::PathBuf;

/// Library error. Only file-level and configuration problems surface here;
/// data-quality issues inside a sheet are handled by fallbacks, never errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("cannot open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("cannot read sheet `{sheet}`: {reason}")]
    Sheet { sheet: String, reason: String },

    #[error("invalid template layout: {0}")]
    Layout(String),

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
