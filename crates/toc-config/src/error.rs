//! Error types for toc-config

use std::path::PathBuf;

/// Result type for toc-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config at {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
