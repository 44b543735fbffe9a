//! Document model shared by the engine and its hosts
//!
//! The engine never reaches for an editor on its own. It is handed a
//! [`DocumentView`] to read lines from, an [`EditTransaction`] to apply its
//! changes through and, for save handling, a [`SaveDocument`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edit::EditBatch;
use crate::error::Result;

/// A zero-based line/column position. Columns are byte offsets into the line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Column zero of `line`
    pub fn line_start(line: usize) -> Self {
        Self { line, column: 0 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open range between two positions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// The text of a single line, excluding its terminator
    pub fn line(line: usize, len: usize) -> Self {
        Self::new(Position::new(line, 0), Position::new(line, len))
    }

    /// A whole line including its terminator
    pub fn full_line(line: usize) -> Self {
        Self::new(Position::line_start(line), Position::line_start(line + 1))
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Read-only, line-indexed access to a document
pub trait DocumentView {
    /// Number of lines. A trailing terminator starts one final empty line.
    fn line_count(&self) -> usize;

    /// Text of line `index` without its terminator. Out-of-range lines are empty.
    fn line_text(&self, index: usize) -> &str;

    /// The first line terminator used by the document, if it has one
    fn line_ending(&self) -> Option<&str> {
        None
    }

    /// Whether the document holds Markdown. Save handling ignores other documents.
    fn is_markdown(&self) -> bool {
        true
    }
}

/// Applies a batch of edits as one atomic step
pub trait EditTransaction {
    fn apply_edits(&mut self, batch: EditBatch) -> Result<()>;
}

/// Persists the document
pub trait SaveDocument {
    fn save(&mut self) -> Result<()>;
}

/// In-memory document backed by a single string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    line_starts: Vec<usize>,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = index_lines(&text);
        Self { text, line_starts }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Byte offset of `position`, clamped to the document and to char boundaries.
    ///
    /// Lines past the end map to the end of the text; columns past the end
    /// of a line map to the end of that line.
    pub fn offset_at(&self, position: Position) -> usize {
        let Some(&start) = self.line_starts.get(position.line) else {
            return self.text.len();
        };
        let line = self.line_text(position.line);
        let mut column = position.column.min(line.len());
        while !line.is_char_boundary(column) {
            column -= 1;
        }
        start + column
    }

    fn replace_text(&mut self, text: String) {
        self.line_starts = index_lines(&text);
        self.text = text;
    }
}

impl DocumentView for TextDocument {
    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line_text(&self, index: usize) -> &str {
        let Some(&start) = self.line_starts.get(index) else {
            return "";
        };
        let end = match self.line_starts.get(index + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        let line = &self.text[start..end];
        line.strip_suffix('\r').unwrap_or(line)
    }

    fn line_ending(&self) -> Option<&str> {
        let newline = self.text.find('\n')?;
        if self.text[..newline].ends_with('\r') {
            Some("\r\n")
        } else {
            Some("\n")
        }
    }
}

impl EditTransaction for TextDocument {
    fn apply_edits(&mut self, batch: EditBatch) -> Result<()> {
        let text = batch.apply_to(self)?;
        self.replace_text(text);
        Ok(())
    }
}

fn index_lines(text: &str) -> Vec<usize> {
    std::iter::once(0)
        .chain(text.match_indices('\n').map(|(i, _)| i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count_counts_trailing_empty_line() {
        assert_eq!(TextDocument::new("").line_count(), 1);
        assert_eq!(TextDocument::new("a").line_count(), 1);
        assert_eq!(TextDocument::new("a\n").line_count(), 2);
        assert_eq!(TextDocument::new("a\nb\nc").line_count(), 3);
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let doc = TextDocument::new("one\r\ntwo\nthree");
        assert_eq!(doc.line_text(0), "one");
        assert_eq!(doc.line_text(1), "two");
        assert_eq!(doc.line_text(2), "three");
        assert_eq!(doc.line_text(3), "");
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(TextDocument::new("a\r\nb").line_ending(), Some("\r\n"));
        assert_eq!(TextDocument::new("a\nb\r\n").line_ending(), Some("\n"));
        assert_eq!(TextDocument::new("single line").line_ending(), None);
    }

    #[test]
    fn test_offset_at_clamps() {
        let doc = TextDocument::new("ab\ncd");
        assert_eq!(doc.offset_at(Position::new(0, 1)), 1);
        assert_eq!(doc.offset_at(Position::new(1, 0)), 3);
        assert_eq!(doc.offset_at(Position::new(0, 99)), 2);
        assert_eq!(doc.offset_at(Position::new(7, 0)), 5);
    }

    #[test]
    fn test_offset_at_respects_char_boundaries() {
        let doc = TextDocument::new("é!");
        assert_eq!(doc.offset_at(Position::new(0, 1)), 0);
        assert_eq!(doc.offset_at(Position::new(0, 2)), 2);
    }

    #[test]
    fn test_range_display() {
        let range = TextRange::full_line(3);
        assert_eq!(range.to_string(), "3:0..4:0");
    }
}
