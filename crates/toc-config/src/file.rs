//! On-disk configuration layer
//!
//! Every field is optional so that a layer only overrides what it names.

use std::path::Path;

use serde::{Deserialize, Serialize};
use toc_core::{AnchorMode, FormatHints, IndentUnit, LineEnding, TocOptions};

use crate::{Error, ResolvedConfig, Result};

pub const DEFAULT_TAB_SIZE: usize = 4;
pub const DEFAULT_INSERT_SPACES: bool = true;

/// One configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub toc: TocSection,
    pub editor: EditorSection,
}

/// `[toc]`: defaults for the seven TOC options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocSection {
    #[serde(alias = "depthFrom")]
    pub depth_from: Option<i64>,
    #[serde(alias = "depthTo")]
    pub depth_to: Option<i64>,
    #[serde(alias = "insertAnchor")]
    pub insert_anchor: Option<bool>,
    #[serde(alias = "withLinks")]
    pub with_links: Option<bool>,
    #[serde(alias = "orderedList")]
    pub ordered_list: Option<bool>,
    #[serde(alias = "updateOnSave")]
    pub update_on_save: Option<bool>,
    #[serde(alias = "anchorMode")]
    pub anchor_mode: Option<String>,
}

/// `[editor]` and its language-specific `[editor.markdown]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSection {
    #[serde(flatten)]
    pub global: EditorSettings,
    pub markdown: EditorSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    #[serde(alias = "tabSize")]
    pub tab_size: Option<usize>,
    #[serde(alias = "insertSpaces")]
    pub insert_spaces: Option<bool>,
    #[serde(alias = "lineEnding", alias = "eol")]
    pub line_ending: Option<String>,
}

impl EditorSettings {
    fn merge(&mut self, later: EditorSettings) {
        self.tab_size = later.tab_size.or(self.tab_size);
        self.insert_spaces = later.insert_spaces.or(self.insert_spaces);
        self.line_ending = later.line_ending.or(self.line_ending.take());
    }
}

impl ConfigFile {
    /// Parse the TOML `content` of the file at `path`
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Overlay `later` onto this layer, field by field
    pub fn merge(&mut self, later: ConfigFile) {
        let toc = &mut self.toc;
        toc.depth_from = later.toc.depth_from.or(toc.depth_from);
        toc.depth_to = later.toc.depth_to.or(toc.depth_to);
        toc.insert_anchor = later.toc.insert_anchor.or(toc.insert_anchor);
        toc.with_links = later.toc.with_links.or(toc.with_links);
        toc.ordered_list = later.toc.ordered_list.or(toc.ordered_list);
        toc.update_on_save = later.toc.update_on_save.or(toc.update_on_save);
        toc.anchor_mode = later.toc.anchor_mode.or(toc.anchor_mode.take());

        self.editor.global.merge(later.editor.global);
        self.editor.markdown.merge(later.editor.markdown);
    }

    /// Fill unset values from the process defaults
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            options: self.toc_options(),
            hints: self.format_hints(),
        }
    }

    fn toc_options(&self) -> TocOptions {
        let defaults = TocOptions::default();
        let toc = &self.toc;
        let anchor_mode = match toc.anchor_mode.as_deref() {
            None => defaults.anchor_mode,
            Some(value) => AnchorMode::parse(value).unwrap_or_else(|| {
                tracing::warn!(
                    anchor_mode = value,
                    fallback = %AnchorMode::default(),
                    "Unknown anchor mode in config"
                );
                AnchorMode::default()
            }),
        };

        TocOptions {
            depth_from: toc.depth_from.map_or(defaults.depth_from, depth),
            depth_to: toc.depth_to.map_or(defaults.depth_to, depth),
            insert_anchor: toc.insert_anchor.unwrap_or(defaults.insert_anchor),
            with_links: toc.with_links.unwrap_or(defaults.with_links),
            ordered_list: toc.ordered_list.unwrap_or(defaults.ordered_list),
            update_on_save: toc.update_on_save.unwrap_or(defaults.update_on_save),
            anchor_mode,
        }
        .normalized()
    }

    fn format_hints(&self) -> FormatHints {
        let language = &self.editor.markdown;
        let global = &self.editor.global;

        let tab_size = language
            .tab_size
            .or(global.tab_size)
            .unwrap_or(DEFAULT_TAB_SIZE);
        let insert_spaces = language
            .insert_spaces
            .or(global.insert_spaces)
            .unwrap_or(DEFAULT_INSERT_SPACES);
        let line_ending = language
            .line_ending
            .as_deref()
            .or(global.line_ending.as_deref())
            .map_or(LineEnding::Auto, line_ending);

        FormatHints {
            indent: IndentUnit::from_editor(tab_size, insert_spaces),
            line_ending,
        }
    }
}

fn depth(value: i64) -> usize {
    value.clamp(1, 6) as usize
}

fn line_ending(value: &str) -> LineEnding {
    match LineEnding::from_config(value) {
        LineEnding::Literal(text)
            if text.is_empty() || text.chars().any(|c| c != '\r' && c != '\n') =>
        {
            tracing::warn!(line_ending = ?text, "Unusable line ending in config, using auto");
            LineEnding::Auto
        }
        ending => ending,
    }
}
