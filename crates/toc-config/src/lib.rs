//! Layered configuration for the Markdown TOC engine
//!
//! Settings come from three layers, later ones overriding earlier ones:
//!
//! 1. **Process defaults** - the values of [`toc_core::TocOptions::default`]
//!    plus a four-space indent and automatic line endings
//! 2. **Global file** - `<config_dir>/markdown-toc/config.toml`
//! 3. **Workspace file** - the nearest `.markdown-toc.toml`
//!
//! ```toml
//! [toc]
//! depth_from = 2
//! anchor_mode = "gitlab.com"
//!
//! [editor]
//! tab_size = 2
//!
//! [editor.markdown]
//! tab_size = 4
//! ```

pub mod error;
pub mod file;
pub mod resolver;

pub use error::{Error, Result};
pub use file::{ConfigFile, EditorSection, EditorSettings, TocSection};
pub use resolver::{
    APP_DIR, ConfigResolver, GLOBAL_CONFIG_FILE, ResolvedConfig, WORKSPACE_CONFIG_FILE,
};
