//! Error types for toc-fs

use std::path::PathBuf;

/// Result type for toc-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toc-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<Error> for toc_core::Error {
    fn from(err: Error) -> Self {
        toc_core::Error::host(err.to_string())
    }
}
