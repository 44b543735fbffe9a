//! Table-of-contents synchronization for Markdown documents
//!
//! This crate finds the headers of a Markdown document and keeps a generated
//! table of contents, optional section numbers and optional anchor tags in
//! step with them. It never touches files or editors directly: hosts hand
//! the [`TocEngine`] a document implementing [`DocumentView`] and
//! [`EditTransaction`], and receive every change as one [`EditBatch`].
//!
//! # Example
//!
//! ```
//! use toc_core::{Position, TextDocument, TocEngine};
//!
//! let mut doc = TextDocument::new("# Guide\n\n## Install\n");
//! let mut engine = TocEngine::default();
//! engine.update_toc(Some(&mut doc), Position::default(), false).unwrap();
//! assert!(doc.text().starts_with("<!-- TOC -->"));
//! assert!(doc.text().ends_with("<!-- /TOC -->\n# Guide\n\n## Install\n"));
//!
//! let first = doc.text().to_string();
//! engine.update_toc(Some(&mut doc), Position::default(), false).unwrap();
//! assert_eq!(doc.text(), first);
//! ```

pub mod anchor;
pub mod classify;
pub mod document;
pub mod edit;
pub mod error;
pub mod headers;
pub mod locate;
pub mod options;
pub mod render;
pub mod sync;

pub use anchor::AnchorMode;
pub use classify::{FenceKind, FenceState, LineClass, classify_line};
pub use document::{
    DocumentView, EditTransaction, Position, SaveDocument, TextDocument, TextRange,
};
pub use edit::{Edit, EditBatch, EditKind};
pub use error::{Error, Result};
pub use headers::{HeaderRecord, NumberingState, extract_headers};
pub use locate::{TocBlockLocation, locate};
pub use options::{OptionKey, OverrideFlags, TocOptions, parse_inline_options};
pub use render::{
    FormatHints, IndentUnit, LineEnding, ListCounters, RenderHints, RenderedToc, render,
};
pub use sync::TocEngine;
