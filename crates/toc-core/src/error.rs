//! Error types for toc-core

use crate::document::TextRange;

/// Result type for toc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in toc-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Edits overlap: {first} and {second}")]
    OverlappingEdits { first: TextRange, second: TextRange },

    #[error("Host operation failed: {message}")]
    Host { message: String },
}

impl Error {
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host {
            message: message.into(),
        }
    }
}
