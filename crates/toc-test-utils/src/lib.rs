//! Shared test utilities for the markdown-toc workspace.
//!
//! This crate is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`fixtures`] - sample Markdown documents
//! - [`workspace`] - [`TestWorkspace`] builder for on-disk scenarios

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
