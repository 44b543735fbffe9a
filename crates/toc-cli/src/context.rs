//! Per-invocation settings shared by all commands

use std::path::{Path, PathBuf};

use toc_config::{ConfigResolver, ResolvedConfig};
use toc_core::TocEngine;

use crate::cli::Cli;
use crate::error::Result;

/// Where configuration comes from for this run
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    config: Option<PathBuf>,
    global_config_dir: Option<PathBuf>,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            global_config_dir: cli.global_config_dir.clone(),
        }
    }

    /// Configuration for `file`, searching upward from its directory
    pub fn resolve_config(&self, file: &Path) -> Result<ResolvedConfig> {
        let absolute = std::env::current_dir()?.join(file);
        let start_dir = absolute
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| absolute.clone());

        let mut resolver = ConfigResolver::new(start_dir);
        if let Some(dir) = &self.global_config_dir {
            resolver = resolver.with_global_config_dir(dir);
        }
        if let Some(path) = &self.config {
            resolver = resolver.with_workspace_config(path);
        }
        Ok(resolver.resolve()?)
    }

    pub fn engine_for(&self, file: &Path) -> Result<TocEngine> {
        let config = self.resolve_config(file)?;
        Ok(TocEngine::new(config.options, config.hints))
    }
}
