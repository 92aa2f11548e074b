//! Text edits and the batching document editor.
//!
//! Edits are computed against one version of a [`Document`] and carry the
//! ranges of that version. Applying a batch produces a new document; every
//! range computed before the batch is stale afterwards.

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::error::EditError;
use crate::position::Position;
use crate::range::Range;

/// A single replacement of a range of text.
///
/// Insertions replace a zero-width range; deletions replace a range with
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Range being replaced.
    range: Range,
    /// Replacement text.
    new_text: String,
}

impl TextEdit {
    /// Replaces `range` with `new_text`.
    #[must_use]
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }

    /// Inserts `new_text` at `position`.
    #[must_use]
    pub fn insert(position: Position, new_text: impl Into<String>) -> Self {
        Self::replace(Range::from_position(position), new_text)
    }

    /// Deletes the text covered by `range`.
    #[must_use]
    pub fn delete(range: Range) -> Self {
        Self::replace(range, String::new())
    }

    /// Returns the range being replaced.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the replacement text.
    #[must_use]
    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Returns `true` for a zero-width edit with text to insert.
    #[must_use]
    pub fn is_insertion(&self) -> bool {
        self.range.is_empty() && !self.new_text.is_empty()
    }

    /// Returns `true` for an edit that removes text without replacing it.
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        !self.range.is_empty() && self.new_text.is_empty()
    }
}

/// Applies a batch of edits to `text` in a single pass.
///
/// Edits are ordered by position; insertions at the same offset keep the
/// order they were submitted in. The batch is rejected as a whole when any
/// edit is out of bounds, splits a character, or overlaps another edit.
///
/// # Errors
///
/// Returns an [`EditError`] describing the first invalid edit.
pub fn apply_text_edits(text: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.range.start.offset, edit.range.end.offset));

    for edit in &ordered {
        validate_bounds(text, edit)?;
    }
    for pair in ordered.windows(2) {
        if let [first, second] = pair {
            let first_range = first.range.byte_range();
            let second_range = second.range.byte_range();
            if first_range.end > second_range.start {
                return Err(EditError::Overlapping {
                    first_start: first_range.start,
                    first_end: first_range.end,
                    second_start: second_range.start,
                    second_end: second_range.end,
                });
            }
        }
    }

    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for edit in ordered {
        let range = edit.range.byte_range();
        output.push_str(text.get(cursor..range.start).unwrap_or_default());
        output.push_str(&edit.new_text);
        cursor = range.end;
    }
    output.push_str(text.get(cursor..).unwrap_or_default());
    Ok(output)
}

fn validate_bounds(text: &str, edit: &TextEdit) -> Result<(), EditError> {
    let range = edit.range.byte_range();
    if range.end > text.len() || range.start > range.end {
        return Err(EditError::OutOfBounds {
            start: range.start,
            end: range.end,
            length: text.len(),
        });
    }
    for offset in [range.start, range.end] {
        if !text.is_char_boundary(offset) {
            return Err(EditError::NotCharBoundary { offset });
        }
    }
    Ok(())
}

/// Receives the new document after each committed batch.
pub trait DocumentObserver {
    /// Called once per [`DocumentEditor::apply_edits`] call.
    fn document_changed(&self, document: &Document);
}

impl<F> DocumentObserver for F
where
    F: Fn(&Document),
{
    fn document_changed(&self, document: &Document) {
        self(document);
    }
}

/// Accumulates edits against a document and commits them atomically.
///
/// # Example
///
/// ```
/// use loupe_core::{Document, DocumentEditor, Range};
///
/// let mut editor = DocumentEditor::new(Document::new("plaintext", "hello"));
/// let range = Range::from_offsets_in_text("hello", 0, 1)?;
/// editor.replace(range, "J");
/// let document = editor.apply_edits()?;
/// assert_eq!(document.content(), "Jello");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct DocumentEditor {
    document: Document,
    pending: Vec<TextEdit>,
    observers: Vec<Box<dyn DocumentObserver>>,
}

impl DocumentEditor {
    /// Creates an editor over `document` with an empty batch.
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self {
            document,
            pending: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Returns the current document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the edits queued since the last commit.
    #[must_use]
    pub fn pending(&self) -> &[TextEdit] {
        &self.pending
    }

    /// Registers an observer notified after every commit.
    pub fn subscribe(&mut self, observer: impl DocumentObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Queues a prepared edit.
    pub fn push(&mut self, edit: TextEdit) -> &mut Self {
        self.pending.push(edit);
        self
    }

    /// Queues a replacement of `range`.
    pub fn replace(&mut self, range: Range, new_text: impl Into<String>) -> &mut Self {
        self.push(TextEdit::replace(range, new_text))
    }

    /// Queues an insertion at `position`.
    pub fn insert(&mut self, position: Position, new_text: impl Into<String>) -> &mut Self {
        self.push(TextEdit::insert(position, new_text))
    }

    /// Queues a deletion of `range`.
    pub fn delete(&mut self, range: Range) -> &mut Self {
        self.push(TextEdit::delete(range))
    }

    /// Commits the queued batch and notifies observers once.
    ///
    /// An empty batch leaves the document untouched but still notifies. A
    /// rejected batch is discarded and observers are not notified.
    ///
    /// # Errors
    ///
    /// Returns an [`EditError`] when the batch cannot be applied to the
    /// current content.
    pub fn apply_edits(&mut self) -> Result<&Document, EditError> {
        let batch = mem::take(&mut self.pending);
        if !batch.is_empty() {
            let content = apply_text_edits(self.document.content(), &batch)?;
            self.document = self.document.with_content(content);
        }
        debug!(
            edits = batch.len(),
            version = self.document.version(),
            "applied edit batch"
        );
        for observer in &self.observers {
            observer.document_changed(&self.document);
        }
        Ok(&self.document)
    }
}

impl fmt::Debug for DocumentEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentEditor")
            .field("document", &self.document)
            .field("pending", &self.pending)
            .field("observers", &self.observers.len())
            .finish()
    }
}
