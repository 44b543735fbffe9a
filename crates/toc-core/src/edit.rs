//! Edit types for document modification.
//!
//! Every position in an [`EditBatch`] refers to the document as it was
//! before the batch. The batch is applied in one step or not at all.

use serde::{Deserialize, Serialize};

use crate::document::{Position, TextDocument, TextRange};
use crate::error::{Error, Result};

/// The kind of edit operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Insert new content.
    Insert,
    /// Replace existing content.
    Replace,
    /// Delete content.
    Delete,
}

/// An edit operation on document content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// The kind of edit.
    pub kind: EditKind,
    /// Affected range. Inserts use an empty range at the insertion point.
    pub range: TextRange,
    /// New content (empty for Delete).
    pub new_content: String,
}

impl Edit {
    pub fn insert(at: Position, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            range: TextRange::new(at, at),
            new_content: text.into(),
        }
    }

    pub fn delete(range: TextRange) -> Self {
        Self {
            kind: EditKind::Delete,
            range,
            new_content: String::new(),
        }
    }

    pub fn replace(range: TextRange, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Replace,
            range,
            new_content: text.into(),
        }
    }
}

/// An ordered set of edits applied together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    edits: Vec<Edit>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn insert(&mut self, at: Position, text: impl Into<String>) {
        self.push(Edit::insert(at, text));
    }

    pub fn delete(&mut self, range: TextRange) {
        self.push(Edit::delete(range));
    }

    pub fn replace(&mut self, range: TextRange, text: impl Into<String>) {
        self.push(Edit::replace(range, text));
    }

    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply every edit to `doc` and return the resulting text.
    ///
    /// Inserts at the same point keep their batch order and land before any
    /// range starting at that point. Ranges that overlap each other, or an
    /// insert strictly inside a range, are rejected.
    pub fn apply_to(&self, doc: &TextDocument) -> Result<String> {
        let mut resolved: Vec<(usize, usize, &Edit)> = self
            .edits
            .iter()
            .map(|edit| {
                let start = doc.offset_at(edit.range.start);
                let end = doc.offset_at(edit.range.end).max(start);
                (start, end, edit)
            })
            .collect();
        resolved.sort_by_key(|&(start, end, _)| (start, end));

        for pair in resolved.windows(2) {
            let (_, prev_end, prev) = pair[0];
            let (next_start, _, next) = pair[1];
            if next_start < prev_end {
                return Err(Error::OverlappingEdits {
                    first: prev.range,
                    second: next.range,
                });
            }
        }

        let source = doc.text();
        let mut result = String::with_capacity(source.len());
        let mut cursor = 0;
        for (start, end, edit) in resolved {
            result.push_str(&source[cursor..start]);
            result.push_str(&edit.new_content);
            cursor = end;
        }
        result.push_str(&source[cursor..]);

        tracing::debug!(edits = self.edits.len(), "Applied edit batch");
        Ok(result)
    }
}
