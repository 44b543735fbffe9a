//! Synchronization of TOC blocks and section headers
//!
//! [`TocEngine`] ties locating, extraction and rendering together. Every
//! operation re-reads the document, gathers its changes into one
//! [`EditBatch`] and hands that to the host in a single call.

use crate::document::{DocumentView, EditTransaction, Position, SaveDocument, TextRange};
use crate::edit::EditBatch;
use crate::error::Result;
use crate::headers::{HeaderRecord, extract_headers};
use crate::locate::{TocBlockLocation, anchor_tag_lines, locate};
use crate::options::{OverrideFlags, TocOptions, parse_inline_options};
use crate::render::{FormatHints, render};

/// Swallows the save notification caused by the engine's own save
#[derive(Debug, Default)]
struct SaveGuard {
    saved_by_self: bool,
}

impl SaveGuard {
    fn arm(&mut self) {
        self.saved_by_self = true;
    }

    /// Whether the guard was armed. Disarms it.
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.saved_by_self)
    }
}

/// Keeps TOC blocks and section numbers in sync with a document's headers
#[derive(Debug, Default)]
pub struct TocEngine {
    defaults: TocOptions,
    hints: FormatHints,
    save_guard: SaveGuard,
}

impl TocEngine {
    pub fn new(defaults: TocOptions, hints: FormatHints) -> Self {
        Self {
            defaults: defaults.normalized(),
            hints,
            save_guard: SaveGuard::default(),
        }
    }

    pub fn defaults(&self) -> &TocOptions {
        &self.defaults
    }

    pub fn hints(&self) -> &FormatHints {
        &self.hints
    }

    /// True when the next save notification will be ignored
    pub fn is_suppressing_next_save(&self) -> bool {
        self.save_guard.saved_by_self
    }

    /// Defaults overlaid with the inline options of `location`'s marker
    pub fn effective_options<D>(
        &self,
        doc: &D,
        location: Option<&TocBlockLocation>,
    ) -> (TocOptions, OverrideFlags)
    where
        D: DocumentView + ?Sized,
    {
        match location {
            Some(location) => {
                parse_inline_options(doc.line_text(location.open_line), &self.defaults)
            }
            None => (self.defaults, OverrideFlags::new()),
        }
    }

    /// Headers of `doc` under its effective options
    pub fn headers<D>(&self, doc: &D) -> Vec<HeaderRecord>
    where
        D: DocumentView + ?Sized,
    {
        let location = locate(doc);
        let (options, _) = self.effective_options(doc, location.as_ref());
        extract_headers(doc, &options)
    }

    /// Regenerate the TOC block, or insert a new one at `insert_at`.
    ///
    /// A new block never shares its last line with existing text: whatever
    /// follows `insert_at` on its line moves to the line after the block, and
    /// a position past the end lands on a fresh last line. Only an insertion
    /// with nothing after it on the line is undone exactly by
    /// [`delete_toc`](Self::delete_toc).
    ///
    /// When `triggered_by_save` is set, only an existing block with
    /// `updateOnSave` enabled is refreshed.
    pub fn update_toc<D>(
        &mut self,
        doc: Option<&mut D>,
        insert_at: Position,
        triggered_by_save: bool,
    ) -> Result<bool>
    where
        D: DocumentView + EditTransaction + ?Sized,
    {
        let Some(doc) = doc else {
            tracing::debug!("No document to update");
            return Ok(false);
        };

        let location = locate(&*doc);
        let (options, flags) = self.effective_options(&*doc, location.as_ref());
        tracing::debug!(?options, overrides = flags.len(), "Resolved TOC options");

        if triggered_by_save && (!options.update_on_save || location.is_none()) {
            tracing::debug!("Skipping TOC update on save");
            return Ok(false);
        }

        let mut batch = EditBatch::new();
        if let Some(location) = &location {
            delete_block(&*doc, location, &mut batch);
        }

        let headers = extract_headers(&*doc, &options);
        let hints = self.hints.for_document(doc.line_ending());
        let rendered = render(&headers, &options, &flags, &hints);

        let (insert_at, block) = match &location {
            Some(location) => (location.start(), rendered.block),
            None => place_new_block(&*doc, insert_at, rendered.block, hints.eol),
        };
        batch.insert(insert_at, block);
        for anchor in rendered.anchors {
            batch.insert(
                Position::line_start(anchor.line_index),
                format!("{}{}", anchor.tag, hints.eol),
            );
        }

        tracing::debug!(edits = batch.len(), "Updating TOC");
        doc.apply_edits(batch)?;
        Ok(true)
    }

    /// Remove the TOC block and its anchor tags
    pub fn delete_toc<D>(&mut self, doc: Option<&mut D>) -> Result<bool>
    where
        D: DocumentView + EditTransaction + ?Sized,
    {
        let Some(doc) = doc else {
            tracing::debug!("No document to delete from");
            return Ok(false);
        };
        let Some(location) = locate(&*doc) else {
            tracing::debug!("No TOC block to delete");
            return Ok(false);
        };

        let mut batch = EditBatch::new();
        delete_block(&*doc, &location, &mut batch);
        tracing::debug!(edits = batch.len(), "Deleting TOC");
        doc.apply_edits(batch)?;
        Ok(true)
    }

    /// Prefix every header with its section number
    pub fn update_sections<D>(&mut self, doc: Option<&mut D>) -> Result<bool>
    where
        D: DocumentView + EditTransaction + ?Sized,
    {
        self.rewrite_sections(doc, |header| {
            format!(
                "{} {} {}",
                header.marker, header.ordered_prefix, header.base_title
            )
        })
    }

    /// Strip section numbers from every header
    pub fn delete_sections<D>(&mut self, doc: Option<&mut D>) -> Result<bool>
    where
        D: DocumentView + EditTransaction + ?Sized,
    {
        self.rewrite_sections(doc, |header| format!("{} {}", header.marker, header.base_title))
    }

    /// Handle a save notification for `doc`.
    ///
    /// Returns true when the TOC was refreshed and the document saved again.
    pub fn on_document_saved<D>(&mut self, doc: Option<&mut D>) -> Result<bool>
    where
        D: DocumentView + EditTransaction + SaveDocument + ?Sized,
    {
        if self.save_guard.take() {
            tracing::debug!("Ignoring save issued by the engine");
            return Ok(false);
        }
        let Some(doc) = doc else {
            return Ok(false);
        };
        if !doc.is_markdown() {
            tracing::debug!("Ignoring save of a non-Markdown document");
            return Ok(false);
        }

        if !self.update_toc(Some(&mut *doc), Position::default(), true)? {
            return Ok(false);
        }
        doc.save()?;
        self.save_guard.arm();
        Ok(true)
    }

    fn rewrite_sections<D, F>(&mut self, doc: Option<&mut D>, rewrite: F) -> Result<bool>
    where
        D: DocumentView + EditTransaction + ?Sized,
        F: Fn(&HeaderRecord) -> String,
    {
        let Some(doc) = doc else {
            tracing::debug!("No document to rewrite");
            return Ok(false);
        };

        let mut batch = EditBatch::new();
        for header in self.headers(&*doc) {
            let line = rewrite(&header);
            if line != doc.line_text(header.line_index) {
                batch.replace(header.span, line);
            }
        }

        if batch.is_empty() {
            tracing::debug!("Section headers already up to date");
            return Ok(false);
        }
        tracing::debug!(edits = batch.len(), "Rewriting section headers");
        doc.apply_edits(batch)?;
        Ok(true)
    }
}

/// Position and text for a block inserted where none exists
fn place_new_block<D>(doc: &D, at: Position, block: String, eol: &str) -> (Position, String)
where
    D: DocumentView + ?Sized,
{
    let last = doc.line_count().saturating_sub(1);
    if at.line > last {
        let tail = doc.line_text(last).len();
        let end = Position::new(last, tail);
        return if tail == 0 {
            (end, block)
        } else {
            (end, format!("{eol}{block}"))
        };
    }

    if doc.line_text(at.line).len() > at.column {
        tracing::debug!(line = at.line, "Moving text after the insertion point below the block");
        (at, format!("{block}{eol}"))
    } else {
        (at, block)
    }
}

/// Queue deletion of the block range and of every anchor tag line outside it
fn delete_block<D>(doc: &D, location: &TocBlockLocation, batch: &mut EditBatch)
where
    D: DocumentView + ?Sized,
{
    batch.delete(location.range);
    for line in anchor_tag_lines(doc) {
        if !location.contains_line(line) {
            batch.delete(TextRange::full_line(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TextDocument;

    #[test]
    fn test_missing_document_is_a_no_op() {
        let mut engine = TocEngine::default();
        let none: Option<&mut TextDocument> = None;
        assert!(!engine.update_toc(none, Position::default(), false).unwrap());
        assert!(!engine.delete_toc(None::<&mut TextDocument>).unwrap());
        assert!(!engine.update_sections(None::<&mut TextDocument>).unwrap());
    }

    #[test]
    fn test_new_block_gets_lines_of_its_own() {
        let doc = TextDocument::new("# A\nbody");
        let block = String::from("<!-- TOC -->");

        let (at, text) = place_new_block(&doc, Position::line_start(0), block.clone(), "\n");
        assert_eq!((at, text.as_str()), (Position::line_start(0), "<!-- TOC -->\n"));

        let (at, text) = place_new_block(&doc, Position::new(0, 3), block.clone(), "\n");
        assert_eq!((at, text.as_str()), (Position::new(0, 3), "<!-- TOC -->"));

        let (at, text) = place_new_block(&doc, Position::line_start(9), block, "\n");
        assert_eq!((at, text.as_str()), (Position::new(1, 4), "\n<!-- TOC -->"));
    }

    #[test]
    fn test_delete_without_block_leaves_document() {
        let mut engine = TocEngine::default();
        let mut doc = TextDocument::new("# Title\n");
        assert!(!engine.delete_toc(Some(&mut doc)).unwrap());
        assert_eq!(doc.text(), "# Title\n");
    }

    #[test]
    fn test_save_guard_is_single_use() {
        let mut guard = SaveGuard::default();
        assert!(!guard.take());
        guard.arm();
        assert!(guard.take());
        assert!(!guard.take());
    }
}
