//! TOC block rendering
//!
//! A rendered block looks like this (with `\n` standing for the resolved
//! line ending):
//!
//! ```text
//! <!-- TOC depthFrom:2 -->\n
//! \n
//! - [Install](#install)\n
//!     - [From source](#from-source)\n
//! \n
//! <!-- /TOC -->
//! ```
//!
//! There is no line ending after the closing marker, so deleting the block
//! range restores exactly the text that was there before it was inserted.

use serde::{Deserialize, Serialize};

use crate::headers::HeaderRecord;
use crate::options::{MAX_DEPTH, OverrideFlags, TocOptions};

pub const CLOSE_MARKER: &str = "<!-- /TOC -->";

/// Platform line ending used when a document has none of its own
#[cfg(windows)]
pub const PLATFORM_EOL: &str = "\r\n";
#[cfg(not(windows))]
pub const PLATFORM_EOL: &str = "\n";

/// One level of list indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndentUnit {
    Tab,
    Spaces(usize),
}

impl IndentUnit {
    /// Spaces when requested and `tab_size > 0`, otherwise a tab
    pub fn from_editor(tab_size: usize, insert_spaces: bool) -> Self {
        if insert_spaces && tab_size > 0 {
            Self::Spaces(tab_size)
        } else {
            Self::Tab
        }
    }

    pub fn repeat(&self, level: usize) -> String {
        match self {
            Self::Tab => "\t".repeat(level),
            Self::Spaces(width) => " ".repeat(width * level),
        }
    }
}

impl Default for IndentUnit {
    fn default() -> Self {
        Self::Spaces(4)
    }
}

/// Configured line ending
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// Follow the document
    #[default]
    Auto,
    Lf,
    CrLf,
    /// Any other terminator, used verbatim
    Literal(String),
}

impl LineEnding {
    /// Parse a configuration value: `auto`, `lf`, `crlf` or the literal text
    pub fn from_config(value: &str) -> Self {
        match value {
            v if v.eq_ignore_ascii_case("auto") => Self::Auto,
            v if v.eq_ignore_ascii_case("lf") || v == "\n" => Self::Lf,
            v if v.eq_ignore_ascii_case("crlf") || v == "\r\n" => Self::CrLf,
            other => Self::Literal(other.to_string()),
        }
    }

    /// The terminator to write into a document whose own is `document`
    pub fn resolve<'a>(&'a self, document: Option<&'a str>) -> &'a str {
        match self {
            Self::Auto => document.unwrap_or(PLATFORM_EOL),
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Literal(text) => text,
        }
    }
}

/// Formatting settings from configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatHints {
    pub indent: IndentUnit,
    pub line_ending: LineEnding,
}

impl FormatHints {
    /// Hints for one document
    pub fn for_document<'a>(&'a self, document_eol: Option<&'a str>) -> RenderHints<'a> {
        RenderHints {
            indent: self.indent,
            eol: self.line_ending.resolve(document_eol),
        }
    }
}

/// Formatting resolved against a particular document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderHints<'a> {
    pub indent: IndentUnit,
    pub eol: &'a str,
}

/// Running list numbers per indent level.
///
/// A level that has been used since its last reset is zeroed the next time
/// a shallower item is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCounters {
    counts: [usize; MAX_DEPTH],
    pending_reset: [bool; MAX_DEPTH],
}

impl ListCounters {
    /// Count one item at `level`, returning the new state and its number
    #[must_use]
    pub fn advance(mut self, level: usize) -> (Self, usize) {
        let level = level.min(MAX_DEPTH - 1);
        for deeper in level + 1..MAX_DEPTH {
            if self.pending_reset[deeper] {
                self.counts[deeper] = 0;
                self.pending_reset[deeper] = false;
            }
        }
        self.counts[level] += 1;
        self.pending_reset[level] = true;
        (self, self.counts[level])
    }
}

/// An anchor tag to insert above a header line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorInsertion {
    pub line_index: usize,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedToc {
    pub block: String,
    pub anchors: Vec<AnchorInsertion>,
}

/// `<a id="markdown-{anchor}" name="{anchor}"></a>`
pub fn anchor_tag(anchor: &str) -> String {
    format!(r#"<a id="markdown-{anchor}" name="{anchor}"></a>"#)
}

/// Opening marker echoing only the flagged options
pub fn marker_line(options: &TocOptions, flags: &OverrideFlags) -> String {
    let mut line = String::from("<!-- TOC ");
    for key in flags.iter() {
        line.push_str(&format!("{}:{} ", key.name(), options.value_text(key)));
    }
    line.push_str("-->");
    line
}

pub fn render(
    headers: &[HeaderRecord],
    options: &TocOptions,
    flags: &OverrideFlags,
    hints: &RenderHints<'_>,
) -> RenderedToc {
    let min_depth = headers
        .iter()
        .map(|header| header.depth)
        .min()
        .unwrap_or(MAX_DEPTH);
    let start_depth = min_depth.max(options.depth_from);

    let mut lines = vec![marker_line(options, flags), String::new()];
    let mut counters = ListCounters::default();

    for header in headers.iter().filter(|h| options.includes_depth(h.depth)) {
        let level = header.depth.saturating_sub(start_depth);
        let bullet = if options.ordered_list {
            let (next, number) = counters.advance(level);
            counters = next;
            format!("{number}. ")
        } else {
            "- ".to_string()
        };
        let text = if options.with_links {
            header.link()
        } else {
            header.title.clone()
        };
        lines.push(format!("{}{bullet}{text}", hints.indent.repeat(level)));
    }

    lines.push(String::new());
    lines.push(CLOSE_MARKER.to_string());

    let anchors = if options.insert_anchor {
        headers
            .iter()
            .filter(|header| !header.anchor.is_empty())
            .map(|header| AnchorInsertion {
                line_index: header.line_index,
                tag: anchor_tag(&header.anchor),
            })
            .collect()
    } else {
        Vec::new()
    };

    RenderedToc {
        block: lines.join(hints.eol),
        anchors,
    }
}
