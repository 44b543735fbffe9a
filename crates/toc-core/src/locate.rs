//! Locating an existing TOC block and its anchor tags

use std::sync::LazyLock;

use regex::{Match, Regex};

use crate::classify::IGNORE_MARKER;
use crate::document::{DocumentView, Position, TextRange};

static TOC_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--(.*)TOC(.*)-->").expect("Invalid TOC open regex"));

static TOC_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--(.*)/TOC(.*)-->").expect("Invalid TOC close regex"));

static ANCHOR_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<a id="markdown-.+" name=".+"></a>"#).expect("Invalid anchor tag regex")
});

/// Where an existing TOC block sits in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocBlockLocation {
    pub open_line: usize,
    pub close_line: usize,
    /// From the opening `<!--` to just past the closing `-->`
    pub range: TextRange,
}

impl TocBlockLocation {
    pub fn start(&self) -> Position {
        self.range.start
    }

    pub fn contains_line(&self, line: usize) -> bool {
        (self.open_line..=self.close_line).contains(&line)
    }
}

/// Find the first complete TOC block in `doc`
pub fn locate<D>(doc: &D) -> Option<TocBlockLocation>
where
    D: DocumentView + ?Sized,
{
    let mut open: Option<Position> = None;

    for index in 0..doc.line_count() {
        let line = doc.line_text(index);
        match open {
            None => {
                if let Some(marker) = open_marker(line) {
                    open = Some(Position::new(index, marker.start()));
                }
            }
            Some(start) => {
                if let Some(close) = TOC_CLOSE.find(line) {
                    let location = TocBlockLocation {
                        open_line: start.line,
                        close_line: index,
                        range: TextRange::new(start, Position::new(index, close.end())),
                    };
                    tracing::debug!(range = %location.range, "Located TOC block");
                    return Some(location);
                }
            }
        }
    }

    if open.is_some() {
        tracing::debug!("TOC block has no closing marker");
    }
    None
}

fn open_marker(line: &str) -> Option<Match<'_>> {
    if line.contains(IGNORE_MARKER) {
        return None;
    }
    TOC_OPEN.find(line)
}

/// Lines holding an inserted anchor tag
pub fn anchor_tag_lines<D>(doc: &D) -> Vec<usize>
where
    D: DocumentView + ?Sized,
{
    (0..doc.line_count())
        .filter(|&index| ANCHOR_TAG.is_match(doc.line_text(index)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    #[test]
    fn test_locate_block() {
        let doc = TextDocument::new("# Title\n<!-- TOC -->\n\n- x\n\n<!-- /TOC -->\nrest");
        let location = locate(&doc).unwrap();
        assert_eq!(location.open_line, 1);
        assert_eq!(location.close_line, 5);
        assert_eq!(location.range.start, Position::new(1, 0));
        assert_eq!(location.range.end, Position::new(5, 13));
    }

    #[test]
    fn test_locate_mid_line_block() {
        let doc = TextDocument::new("intro <!-- toc -->\n<!-- /toc --> tail");
        let location = locate(&doc).unwrap();
        assert_eq!(location.range.start, Position::new(0, 6));
        assert_eq!(location.range.end, Position::new(1, 13));
    }

    #[test]
    fn test_unclosed_block_is_none() {
        let doc = TextDocument::new("<!-- TOC -->\n- x\n");
        assert_eq!(locate(&doc), None);
    }

    #[test]
    fn test_ignored_header_is_not_an_open_marker() {
        let doc = TextDocument::new(
            "## Skip <!-- TOC ignore:true -->\n<!-- TOC -->\n<!-- /TOC -->",
        );
        let location = locate(&doc).unwrap();
        assert_eq!(location.open_line, 1);
    }

    #[test]
    fn test_anchor_tag_lines() {
        let doc = TextDocument::new(
            "<a id=\"markdown-intro\" name=\"intro\"></a>\n# Intro\n text <a id=\"markdown-x\" name=\"x\"></a>",
        );
        assert_eq!(anchor_tag_lines(&doc), vec![0]);
    }
}
