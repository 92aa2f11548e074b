//! The ordered set of slot keys a template reads.

use std::fmt;
use std::sync::Arc;

use crate::provider::ValuatorProvider;

/// Slot keys mapped to the provider of their valuators.
///
/// Keys keep the order they were declared in; declaring a key again
/// replaces its provider without moving it. Each key also carries a
/// prototype: the raw text its valuator is built from when the key is
/// inserted rather than rewritten.
#[derive(Clone, Default)]
pub struct SlotSpecification {
    entries: Vec<Declaration>,
}

#[derive(Clone)]
struct Declaration {
    key: String,
    provider: Arc<dyn ValuatorProvider>,
    prototype: String,
}

impl SlotSpecification {
    /// Creates an empty specification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Declares `key`, read through `provider`, with an empty prototype.
    #[must_use]
    pub fn with(self, key: impl Into<String>, provider: impl ValuatorProvider + 'static) -> Self {
        self.with_prototype(key, provider, "")
    }

    /// Declares `key`, read through `provider`. Inserted values are
    /// written the way `prototype` would be, so `"0px"` gives a dimension
    /// slot its unit.
    #[must_use]
    pub fn with_prototype(
        mut self,
        key: impl Into<String>,
        provider: impl ValuatorProvider + 'static,
        prototype: impl Into<String>,
    ) -> Self {
        let declaration = Declaration {
            key: key.into(),
            provider: Arc::new(provider),
            prototype: prototype.into(),
        };
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|existing| existing.key == declaration.key)
        {
            *existing = declaration;
        } else {
            self.entries.push(declaration);
        }
        self
    }

    fn declaration(&self, key: &str) -> Option<&Declaration> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    /// Iterates over the declared keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Returns the provider declared for `key`.
    #[must_use]
    pub fn provider(&self, key: &str) -> Option<&dyn ValuatorProvider> {
        self.declaration(key).map(|entry| entry.provider.as_ref())
    }

    /// Returns the prototype declared for `key`.
    #[must_use]
    pub fn prototype(&self, key: &str) -> Option<&str> {
        self.declaration(key).map(|entry| entry.prototype.as_str())
    }

    /// Iterates over keys and providers in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ValuatorProvider)> {
        self.entries
            .iter()
            .map(|entry| (entry.key.as_str(), entry.provider.as_ref()))
    }

    /// Returns `true` when `key` is declared.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.provider(key).is_some()
    }

    /// Returns the number of declared keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no key is declared.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for SlotSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}
