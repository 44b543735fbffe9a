//! Header extraction
//!
//! Walks a document line by line, skipping fenced code, and turns every
//! accepted header into a [`HeaderRecord`] carrying its cleaned title,
//! anchor and hierarchical number.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::anchor;
use crate::classify::{FenceState, LineClass, classify_line};
use crate::document::{DocumentView, TextRange};
use crate::options::{MAX_DEPTH, MIN_DEPTH, TocOptions};

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+)\]\([^)]*\)").expect("Invalid link regex"));

static HTML_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<!--.+-->").expect("Invalid comment regex"));

static FORMATTING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#*_").expect("Invalid formatting regex"));

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+\.)+").expect("Invalid number prefix regex"));

/// One accepted header line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// Zero-based line number
    pub line_index: usize,
    pub depth: usize,
    /// Display text with links, comments and formatting removed
    pub title: String,
    /// Raw header text without a leading section number
    pub base_title: String,
    pub anchor: String,
    /// Dotted section number such as `1.2.`
    pub ordered_prefix: String,
    /// The literal run of `#`
    pub marker: String,
    /// The header line, excluding its terminator
    pub span: TextRange,
}

impl HeaderRecord {
    /// Markdown link to this header
    pub fn link(&self) -> String {
        format!("[{}](#{})", self.title, self.anchor)
    }
}

/// Per-depth section counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberingState {
    counters: [usize; MAX_DEPTH],
}

impl NumberingState {
    /// Count one header at `depth`, zeroing every deeper counter.
    #[must_use]
    pub fn advance(mut self, depth: usize) -> Self {
        let slot = depth.clamp(MIN_DEPTH, MAX_DEPTH) - 1;
        self.counters[slot + 1..].fill(0);
        self.counters[slot] += 1;
        self
    }

    /// Counters from `depth_from` down to `depth`, each followed by `.`
    pub fn prefix(&self, depth_from: usize, depth: usize) -> String {
        let from = depth_from.clamp(MIN_DEPTH, MAX_DEPTH);
        let to = depth.min(MAX_DEPTH);
        (from..=to)
            .map(|d| format!("{}.", self.counters[d - 1]))
            .collect()
    }
}

/// Collect the headers of `doc` that fall within the configured depth range
pub fn extract_headers<D>(doc: &D, options: &TocOptions) -> Vec<HeaderRecord>
where
    D: DocumentView + ?Sized,
{
    let mut headers = Vec::new();
    let mut fence = FenceState::default();
    let mut numbering = NumberingState::default();
    let mut repetitions: HashMap<String, usize> = HashMap::new();

    for line_index in 0..doc.line_count() {
        let line = doc.line_text(line_index);
        let class = classify_line(line);

        let was_inside = fence.is_inside();
        fence = fence.advance(&class);
        if was_inside || fence.is_inside() {
            continue;
        }

        let LineClass::HeaderMatch { depth, marker } = class else {
            continue;
        };
        if !options.includes_depth(depth) {
            continue;
        }

        numbering = numbering.advance(depth);
        let raw = line[marker.len()..].trim();
        let title = clean_title(raw);
        let repetition = match repetitions.entry(title.clone()) {
            Entry::Vacant(entry) => *entry.insert(0),
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += 1;
                *entry.get()
            }
        };

        headers.push(HeaderRecord {
            line_index,
            depth,
            anchor: anchor::hash(&title, options.anchor_mode, repetition),
            title,
            base_title: base_title(raw),
            ordered_prefix: numbering.prefix(options.depth_from, depth),
            marker: marker.to_string(),
            span: TextRange::line(line_index, line.len()),
        });
    }

    tracing::debug!(count = headers.len(), "Extracted headers");
    headers
}

/// Display title for the raw header text
pub fn clean_title(raw: &str) -> String {
    let text = LINK.replace_all(raw, "$1");
    let text = HTML_COMMENT.replace_all(&text, "");
    let text = FORMATTING.replace_all(&text, "");
    text.trim().to_string()
}

/// Raw header text without its leading section number
pub fn base_title(raw: &str) -> String {
    NUMBER_PREFIX.replace(raw.trim(), "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("[Docs](https://example.com) page"), "Docs page");
        assert_eq!(clean_title("Setup <!-- note -->"), "Setup");
        assert_eq!(clean_title("__init__ hooks"), "init hooks");
        assert_eq!(clean_title("  spaced  "), "spaced");
    }

    #[test]
    fn test_base_title_keeps_markup() {
        assert_eq!(base_title("1.2. Install *fast*"), "Install *fast*");
        assert_eq!(base_title("10. Ten"), "Ten");
        assert_eq!(base_title("1 not a prefix"), "1 not a prefix");
        assert_eq!(base_title("v1.2. Release"), "v1.2. Release");
    }

    #[test]
    fn test_numbering_resets_deeper_counters() {
        let state = NumberingState::default()
            .advance(1)
            .advance(2)
            .advance(3)
            .advance(3);
        assert_eq!(state.prefix(1, 3), "1.1.2.");

        let state = state.advance(2);
        assert_eq!(state.prefix(1, 2), "1.2.");

        let state = state.advance(3);
        assert_eq!(state.prefix(1, 3), "1.2.1.");
    }

    #[test]
    fn test_numbering_prefix_starts_at_depth_from() {
        let state = NumberingState::default().advance(2).advance(3);
        assert_eq!(state.prefix(2, 3), "1.1.");
    }
}
