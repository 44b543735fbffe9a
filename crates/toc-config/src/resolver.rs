//! Configuration resolution with layered overrides
//!
//! The `ConfigResolver` loads configuration from the global and workspace
//! files, with later layers overriding earlier ones.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use toc_core::{FormatHints, TocOptions};

use crate::file::ConfigFile;
use crate::{Error, Result};

/// Directory under the platform config dir holding the global file
pub const APP_DIR: &str = "markdown-toc";

pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Workspace file, searched for upward from the document's directory
pub const WORKSPACE_CONFIG_FILE: &str = ".markdown-toc.toml";

/// The effective configuration after merging all layers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub options: TocOptions,
    pub hints: FormatHints,
}

/// Resolves configuration by merging multiple sources
///
/// Configuration is loaded from a hierarchy of sources:
/// 1. Process defaults
/// 2. Global file (`<config_dir>/markdown-toc/config.toml`)
/// 3. Workspace file (nearest `.markdown-toc.toml`, or an explicit path)
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    /// Directory the workspace search starts from
    start_dir: PathBuf,

    /// Explicit workspace file. Disables the upward search.
    workspace_config: Option<PathBuf>,

    /// Override for the global config directory.
    /// When `None`, `dirs::config_dir()` is used.
    global_config_dir_override: Option<PathBuf>,
}

impl ConfigResolver {
    /// Create a resolver that searches upward from `start_dir`
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        Self {
            start_dir: start_dir.into(),
            workspace_config: None,
            global_config_dir_override: None,
        }
    }

    /// Use `dir` instead of the platform config directory
    pub fn with_global_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.global_config_dir_override = Some(dir.into());
        self
    }

    /// Use `path` as the workspace file instead of searching for one
    pub fn with_workspace_config(mut self, path: impl Into<PathBuf>) -> Self {
        self.workspace_config = Some(path.into());
        self
    }

    fn global_config_dir(&self) -> Option<PathBuf> {
        if let Some(ref override_dir) = self.global_config_dir_override {
            return Some(override_dir.clone());
        }
        dirs::config_dir().map(|d| d.join(APP_DIR))
    }

    /// Nearest workspace file at or above the start directory
    pub fn find_workspace_config(&self) -> Option<PathBuf> {
        self.start_dir
            .ancestors()
            .map(|dir| dir.join(WORKSPACE_CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Merge all layers into the effective configuration.
    ///
    /// Missing discovered layers are skipped. An explicit workspace file
    /// that cannot be read, or invalid TOML in any layer, is an error.
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let mut config = ConfigFile::default();

        // Layer 1 - Global file
        if let Some(global_dir) = self.global_config_dir() {
            let global_config_path = global_dir.join(GLOBAL_CONFIG_FILE);
            if global_config_path.is_file() {
                tracing::debug!(?global_config_path, "Loading global config (layer 1)");
                config.merge(load(&global_config_path)?);
            } else {
                tracing::debug!(?global_config_path, "No global config found (layer 1), skipping");
            }
        }

        // Layer 2 - Workspace file
        match &self.workspace_config {
            Some(workspace_config_path) => {
                tracing::debug!(
                    ?workspace_config_path,
                    "Loading explicit workspace config (layer 2)"
                );
                config.merge(load(workspace_config_path)?);
            }
            None => match self.find_workspace_config() {
                Some(workspace_config_path) => {
                    tracing::debug!(?workspace_config_path, "Loading workspace config (layer 2)");
                    config.merge(load(&workspace_config_path)?);
                }
                None => {
                    tracing::debug!(
                        start_dir = ?self.start_dir,
                        "No workspace config found (layer 2), skipping"
                    );
                }
            },
        }

        let resolved = config.resolve();
        tracing::debug!(?resolved, "Resolved configuration");
        Ok(resolved)
    }
}

fn load(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    ConfigFile::parse(&content, path)
}
