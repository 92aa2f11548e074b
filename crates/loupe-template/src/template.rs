//! Templates: fragments of a document bound to typed slots.

use std::fmt;

use loupe_core::{Document, TextEdit};
use loupe_syntax::{Fragment, FragmentProvider};
use tracing::debug;

use crate::error::TemplateError;
use crate::insertion::InsertionPolicy;
use crate::slot::Slot;
use crate::specification::SlotSpecification;
use crate::value::Value;

/// One fragment together with the slots it provides.
#[derive(Debug, Clone)]
pub struct FragmentSlots {
    fragment: Fragment,
    slots: Vec<Slot>,
}

impl FragmentSlots {
    /// Returns the fragment.
    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Returns the fragment's slots in specification order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot for `key`, if the fragment captured it.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.key() == key)
    }
}

/// Binds a fragment provider and a slot specification.
///
/// [`recompute`](Template::recompute) runs the provider over a document and
/// builds one [`FragmentSlots`] entry per fragment. Every declared key that
/// a fragment captured becomes a slot; keys without a capture are absent.
///
/// Commits return edits without applying them. Once an edit is applied the
/// template's slots are stale and it must be recomputed against the new
/// document before further edits.
pub struct Template {
    provider: Box<dyn FragmentProvider>,
    specification: SlotSpecification,
    insertion: Box<dyn InsertionPolicy>,
    document: Option<Document>,
    entries: Vec<FragmentSlots>,
}

impl Template {
    /// Creates a template. It holds no entries until the first recompute.
    #[must_use]
    pub fn new(
        provider: impl FragmentProvider + 'static,
        specification: SlotSpecification,
        insertion: impl InsertionPolicy + 'static,
    ) -> Self {
        Self {
            provider: Box::new(provider),
            specification,
            insertion: Box::new(insertion),
            document: None,
            entries: Vec::new(),
        }
    }

    /// Returns the slot specification.
    #[must_use]
    pub const fn specification(&self) -> &SlotSpecification {
        &self.specification
    }

    /// Returns the document of the last recompute.
    #[must_use]
    pub const fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Rebuilds every entry from `document`.
    ///
    /// The new entries are built in full before they replace the old ones.
    pub fn recompute(&mut self, document: &Document) -> &[FragmentSlots] {
        let fresh: Vec<FragmentSlots> = self
            .provider
            .provide_fragments_for_document(document)
            .into_iter()
            .map(|fragment| self.bind(fragment, document))
            .collect();
        debug!(
            language = document.language_id(),
            version = document.version(),
            fragments = fresh.len(),
            slots = fresh.iter().map(|entry| entry.slots.len()).sum::<usize>(),
            "template recomputed"
        );
        self.entries = fresh;
        self.document = Some(document.clone());
        &self.entries
    }

    /// Recomputes only when `document` differs from the last one seen.
    ///
    /// Returns `true` when a recompute ran.
    pub fn refresh(&mut self, document: &Document) -> bool {
        let current = self.document.as_ref().is_some_and(|seen| {
            seen.version() == document.version()
                && seen.language_id() == document.language_id()
                && seen.content() == document.content()
        });
        if !current {
            self.recompute(document);
        }
        !current
    }

    fn bind(&self, fragment: Fragment, document: &Document) -> FragmentSlots {
        let slots = self
            .specification
            .iter()
            .filter_map(|(key, provider)| {
                let capture = fragment.capture(key)?;
                Some(Slot::new(
                    key,
                    capture.text(),
                    capture.range(),
                    document.clone(),
                    provider.valuator_for(capture.text()),
                ))
            })
            .collect();
        FragmentSlots { fragment, slots }
    }

    /// Returns the entries of the last recompute, in document order.
    #[must_use]
    pub fn entries(&self) -> &[FragmentSlots] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the last recompute found no fragments.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the slot `key` of entry `index`.
    #[must_use]
    pub fn slot(&self, index: usize, key: &str) -> Option<&Slot> {
        self.entries.get(index)?.slot(key)
    }

    fn entry(&self, index: usize) -> Result<&FragmentSlots, TemplateError> {
        self.entries
            .get(index)
            .ok_or(TemplateError::UnknownFragment { index })
    }

    /// Computes the edit writing `value` into slot `key` of entry `index`.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnknownFragment`] or
    /// [`TemplateError::MissingSlot`] when there is no such slot, and
    /// [`TemplateError::Valuator`] when the value cannot be written.
    pub fn commit(
        &self,
        index: usize,
        key: &str,
        value: &Value,
    ) -> Result<TextEdit, TemplateError> {
        let slot = self
            .entry(index)?
            .slot(key)
            .ok_or_else(|| TemplateError::MissingSlot {
                index,
                key: key.to_owned(),
            })?;
        Ok(slot.commit(value)?)
    }

    /// Computes the edit adding `key` with `value` to entry `index`.
    ///
    /// Only keys the fragment did not capture can be inserted; captured
    /// keys are changed with [`commit`](Template::commit).
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::SlotPresent`] when the slot exists,
    /// [`TemplateError::UndeclaredSlot`] for keys outside the
    /// specification, and [`TemplateError::InsertionUnsupported`] when the
    /// insertion policy has no place for the key.
    pub fn insert_value(
        &self,
        index: usize,
        key: &str,
        value: &Value,
    ) -> Result<TextEdit, TemplateError> {
        let entry = self.entry(index)?;
        if entry.slot(key).is_some() {
            return Err(TemplateError::SlotPresent {
                index,
                key: key.to_owned(),
            });
        }
        let undeclared = || TemplateError::UndeclaredSlot {
            key: key.to_owned(),
        };
        let provider = self.specification.provider(key).ok_or_else(undeclared)?;
        let prototype = self.specification.prototype(key).ok_or_else(undeclared)?;
        let unsupported = || TemplateError::InsertionUnsupported {
            index,
            key: key.to_owned(),
        };
        let document = self.document.as_ref().ok_or_else(unsupported)?;

        let text = provider.valuator_for(prototype).serialize(value)?;
        self.insertion
            .insertion_for(&entry.fragment, document, key, &text)
            .ok_or_else(unsupported)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("specification", &self.specification)
            .field("document", &self.document)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}
