//! A document backed by a file on disk

use std::path::{Path, PathBuf};

use toc_core::{DocumentView, EditBatch, EditTransaction, SaveDocument, TextDocument};

use crate::Result;
use crate::io::{read_text, write_atomic};

/// File extensions treated as Markdown, compared case-insensitively
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkd"];

pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// The text of one file, edited in memory and written back on save
#[derive(Debug, Clone)]
pub struct FileDocument {
    path: PathBuf,
    buffer: TextDocument,
    dirty: bool,
}

impl FileDocument {
    /// Load `path` into memory
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let text = read_text(&path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Opened document");
        Ok(Self {
            path,
            buffer: TextDocument::new(text),
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Whether edits were applied since the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl DocumentView for FileDocument {
    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line_text(&self, index: usize) -> &str {
        self.buffer.line_text(index)
    }

    fn line_ending(&self) -> Option<&str> {
        self.buffer.line_ending()
    }

    fn is_markdown(&self) -> bool {
        is_markdown_path(&self.path)
    }
}

impl EditTransaction for FileDocument {
    fn apply_edits(&mut self, batch: EditBatch) -> toc_core::Result<()> {
        self.buffer.apply_edits(batch)?;
        self.dirty = true;
        Ok(())
    }
}

impl SaveDocument for FileDocument {
    fn save(&mut self) -> toc_core::Result<()> {
        write_atomic(&self.path, self.buffer.text().as_bytes())?;
        self.dirty = false;
        Ok(())
    }
}
