//! File-backed documents for the Markdown TOC engine
//!
//! [`FileDocument`] implements the engine's document capabilities for a file
//! on disk. Saves go through [`io::write_atomic`], so readers never observe
//! a half-written file.

pub mod document;
pub mod error;
pub mod io;

pub use document::{FileDocument, MARKDOWN_EXTENSIONS, is_markdown_path};
pub use error::{Error, Result};
pub use io::{read_text, write_atomic};
