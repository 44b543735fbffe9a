//! Per-line classification used by header extraction

use std::sync::LazyLock;

use regex::Regex;

/// Marker that excludes a header line from the table of contents
pub const IGNORE_MARKER: &str = "<!-- TOC ignore:true -->";

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s*(.+)").expect("Invalid header regex"));

/// Which token opened a fenced code block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backtick,
    Tilde,
}

/// What a single line means to the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Starts with a code fence token
    CodeFenceToggle(FenceKind),
    /// A header line. `marker` is the literal run of `#`.
    HeaderMatch { depth: usize, marker: &'a str },
    /// A header line carrying [`IGNORE_MARKER`]
    Ignore,
    Plain,
}

/// Classify `line` (without its terminator)
pub fn classify_line(line: &str) -> LineClass<'_> {
    if line.starts_with("```") {
        return LineClass::CodeFenceToggle(FenceKind::Backtick);
    }
    if line.starts_with("~~~") {
        return LineClass::CodeFenceToggle(FenceKind::Tilde);
    }
    let Some(marker) = HEADER.captures(line).and_then(|caps| caps.get(1)) else {
        return LineClass::Plain;
    };
    if line.contains(IGNORE_MARKER) {
        return LineClass::Ignore;
    }
    LineClass::HeaderMatch {
        depth: marker.len(),
        marker: marker.as_str(),
    }
}

/// Fence tracking across consecutive lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FenceState {
    #[default]
    Outside,
    Inside(FenceKind),
}

impl FenceState {
    /// State after a line of class `class`.
    ///
    /// A fence only closes on the token that opened it.
    #[must_use]
    pub fn advance(self, class: &LineClass<'_>) -> Self {
        match (self, class) {
            (Self::Outside, LineClass::CodeFenceToggle(kind)) => Self::Inside(*kind),
            (Self::Inside(open), LineClass::CodeFenceToggle(kind)) if open == *kind => {
                Self::Outside
            }
            (state, _) => state,
        }
    }

    pub fn is_inside(self) -> bool {
        matches!(self, Self::Inside(_))
    }
}
