//! Slots: typed, editable views onto captured text.

use std::fmt;
use std::sync::Arc;

use loupe_core::{Document, Range, TextEdit};

use crate::error::ValuatorError;
use crate::valuator::Valuator;
use crate::value::Value;

/// One captured value of one fragment.
///
/// A slot remembers the document version it was read from. Any edit to
/// that document invalidates the slot's range; see
/// [`is_stale_for`](Slot::is_stale_for).
#[derive(Clone)]
pub struct Slot {
    key: String,
    raw_text: String,
    range: Range,
    document: Document,
    valuator: Arc<dyn Valuator>,
}

impl Slot {
    /// Creates a slot over `raw_text` at `range` of `document`.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        raw_text: impl Into<String>,
        range: Range,
        document: Document,
        valuator: Arc<dyn Valuator>,
    ) -> Self {
        Self {
            key: key.into(),
            raw_text: raw_text.into(),
            range,
            document,
            valuator,
        }
    }

    /// Returns the slot's key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the captured text.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Returns the range of the captured text.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the document the slot was read from.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the slot's valuator.
    #[must_use]
    pub fn valuator(&self) -> &dyn Valuator {
        self.valuator.as_ref()
    }

    /// Reads the slot's typed value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValuatorError`] when the captured text is not in the
    /// valuator's format.
    pub fn value(&self) -> Result<Value, ValuatorError> {
        self.valuator.deserialize(&self.raw_text)
    }

    /// Computes the edit replacing the slot's text with `value`.
    ///
    /// The document is not changed. The edit is only valid against the
    /// document the slot was read from.
    ///
    /// # Errors
    ///
    /// Returns a [`ValuatorError`] when the valuator cannot write `value`.
    pub fn commit(&self, value: &Value) -> Result<TextEdit, ValuatorError> {
        let text = self.valuator.serialize(value)?;
        Ok(TextEdit::replace(self.range, text))
    }

    /// Returns `true` when `document` is not the version this slot was read
    /// from, so the slot's range can no longer be trusted.
    #[must_use]
    pub fn is_stale_for(&self, document: &Document) -> bool {
        self.document.version() != document.version()
            || self.document.language_id() != document.language_id()
            || self.document.content() != document.content()
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("key", &self.key)
            .field("raw_text", &self.raw_text)
            .field("range", &self.range)
            .field("version", &self.document.version())
            .field("valuator", &self.valuator.name())
            .finish()
    }
}
