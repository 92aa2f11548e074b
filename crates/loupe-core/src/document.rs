//! Immutable documents.

use std::fmt;
use std::sync::Arc;

use crate::offset::OffsetConverter;
use crate::range::Range;

/// A text in a known language.
///
/// A document never changes: new content produces a new document with a
/// higher [`version`](Document::version), and owners swap the value they
/// hold. Cloning is cheap because the content and its offset converter are
/// shared.
#[derive(Clone)]
pub struct Document {
    language_id: Arc<str>,
    content: Arc<str>,
    converter: Arc<OffsetConverter>,
    version: u64,
}

impl Document {
    /// Creates a document at version zero.
    #[must_use]
    pub fn new(language_id: impl Into<Arc<str>>, content: impl Into<Arc<str>>) -> Self {
        let text: Arc<str> = content.into();
        let converter = Arc::new(OffsetConverter::new(&text));
        Self {
            language_id: language_id.into(),
            content: text,
            converter,
            version: 0,
        }
    }

    /// Returns the identifier of the document's language.
    #[must_use]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Returns the full text of the document.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns `true` when the document has no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the document version, incremented on every replacement.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the offset converter for the document's content.
    #[must_use]
    pub fn offset_converter(&self) -> &OffsetConverter {
        &self.converter
    }

    /// Returns the text covered by `range`, or `None` when the range does
    /// not describe valid UTF-8 boundaries of this document.
    #[must_use]
    pub fn text_in(&self, range: &Range) -> Option<&str> {
        self.content.get(range.byte_range())
    }

    /// Returns a document with the same language and new content.
    #[must_use]
    pub fn with_content(&self, content: impl Into<Arc<str>>) -> Self {
        let text: Arc<str> = content.into();
        let converter = Arc::new(OffsetConverter::new(&text));
        Self {
            language_id: Arc::clone(&self.language_id),
            content: text,
            converter,
            version: self.version.saturating_add(1),
        }
    }

    /// Returns a document with the same content in another language.
    #[must_use]
    pub fn with_language(&self, language_id: impl Into<Arc<str>>) -> Self {
        Self {
            language_id: language_id.into(),
            content: Arc::clone(&self.content),
            converter: Arc::clone(&self.converter),
            version: self.version.saturating_add(1),
        }
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("language_id", &self.language_id)
            .field("version", &self.version)
            .field("length", &self.content.len())
            .finish()
    }
}
