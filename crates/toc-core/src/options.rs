//! TOC options and inline marker overrides
//!
//! The opening marker of a TOC block may carry `key:value` tokens, for
//! example `<!-- TOC depthFrom:2 orderedList:true -->`. Those tokens shadow
//! the configured defaults for that one document, and the set of keys that
//! were present is remembered so the marker can be written back as authored.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::anchor::AnchorMode;

pub const MIN_DEPTH: usize = 1;
pub const MAX_DEPTH: usize = 6;

static OPTION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9_]+)[:=]([A-Za-z0-9_.]+)").expect("Invalid option token regex")
});

/// Effective settings for one operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocOptions {
    pub depth_from: usize,
    pub depth_to: usize,
    pub insert_anchor: bool,
    pub with_links: bool,
    pub ordered_list: bool,
    pub update_on_save: bool,
    pub anchor_mode: AnchorMode,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            depth_from: MIN_DEPTH,
            depth_to: MAX_DEPTH,
            insert_anchor: false,
            with_links: true,
            ordered_list: false,
            update_on_save: true,
            anchor_mode: AnchorMode::default(),
        }
    }
}

impl TocOptions {
    /// Clamp both depths into range and keep `depth_to >= depth_from`
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.depth_from = clamp_depth(self.depth_from);
        self.depth_to = clamp_depth(self.depth_to).max(self.depth_from);
        self
    }

    pub fn includes_depth(&self, depth: usize) -> bool {
        (self.depth_from..=self.depth_to).contains(&depth)
    }

    /// Value of `key` as written in a marker line
    pub fn value_text(&self, key: OptionKey) -> String {
        match key {
            OptionKey::DepthFrom => self.depth_from.to_string(),
            OptionKey::DepthTo => self.depth_to.to_string(),
            OptionKey::InsertAnchor => self.insert_anchor.to_string(),
            OptionKey::OrderedList => self.ordered_list.to_string(),
            OptionKey::UpdateOnSave => self.update_on_save.to_string(),
            OptionKey::WithLinks => self.with_links.to_string(),
            OptionKey::AnchorMode => self.anchor_mode.to_string(),
        }
    }
}

pub fn clamp_depth(depth: usize) -> usize {
    depth.clamp(MIN_DEPTH, MAX_DEPTH)
}

/// A recognized option name.
///
/// The declaration order is the order options are written back to a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    DepthFrom,
    DepthTo,
    InsertAnchor,
    OrderedList,
    UpdateOnSave,
    WithLinks,
    AnchorMode,
}

impl OptionKey {
    pub const ALL: [OptionKey; 7] = [
        OptionKey::DepthFrom,
        OptionKey::DepthTo,
        OptionKey::InsertAnchor,
        OptionKey::OrderedList,
        OptionKey::UpdateOnSave,
        OptionKey::WithLinks,
        OptionKey::AnchorMode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::DepthFrom => "depthFrom",
            Self::DepthTo => "depthTo",
            Self::InsertAnchor => "insertAnchor",
            Self::OrderedList => "orderedList",
            Self::UpdateOnSave => "updateOnSave",
            Self::WithLinks => "withLinks",
            Self::AnchorMode => "anchorMode",
        }
    }

    /// Case-insensitive lookup by option name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }
}

/// Options explicitly present in a marker line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideFlags(BTreeSet<OptionKey>);

impl OverrideFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: OptionKey) {
        self.0.insert(key);
    }

    pub fn contains(&self, key: OptionKey) -> bool {
        self.0.contains(&key)
    }

    /// Flagged keys in canonical order
    pub fn iter(&self) -> impl Iterator<Item = OptionKey> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<OptionKey> for OverrideFlags {
    fn from_iter<I: IntoIterator<Item = OptionKey>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Overlay the `key:value` tokens of a marker `line` onto `defaults`.
///
/// Unknown keys and malformed depth values are skipped. The returned options
/// are always normalized.
pub fn parse_inline_options(line: &str, defaults: &TocOptions) -> (TocOptions, OverrideFlags) {
    let mut options = *defaults;
    let mut flags = OverrideFlags::new();

    for caps in OPTION_TOKEN.captures_iter(line) {
        let (Some(name), Some(value)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let Some(key) = OptionKey::from_name(name.as_str()) else {
            continue;
        };
        if apply_option(&mut options, key, value.as_str()) {
            flags.insert(key);
        } else {
            tracing::debug!(token = &caps[0], "Skipping malformed TOC option");
        }
    }

    (options.normalized(), flags)
}

/// Returns false when `value` is unusable for `key`
fn apply_option(options: &mut TocOptions, key: OptionKey, value: &str) -> bool {
    match key {
        OptionKey::DepthFrom => match parse_depth(value) {
            Some(depth) => options.depth_from = depth,
            None => return false,
        },
        OptionKey::DepthTo => match parse_depth(value) {
            Some(depth) => options.depth_to = depth.max(options.depth_from),
            None => return false,
        },
        OptionKey::InsertAnchor => options.insert_anchor = parse_bool(value),
        OptionKey::WithLinks => options.with_links = parse_bool(value),
        OptionKey::OrderedList => options.ordered_list = parse_bool(value),
        OptionKey::UpdateOnSave => options.update_on_save = parse_bool(value),
        OptionKey::AnchorMode => options.anchor_mode = AnchorMode::parse_or_default(value),
    }
    true
}

/// Leading decimal digits, clamped into the depth range
fn parse_depth(value: &str) -> Option<usize> {
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let digits = &value[..end];
    if digits.is_empty() {
        return None;
    }
    let depth = digits.parse::<usize>().unwrap_or(usize::MAX);
    Some(clamp_depth(depth))
}

fn parse_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
