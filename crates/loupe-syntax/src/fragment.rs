//! Fragments: the matches a finder reports for one document.

use std::fmt;

use loupe_core::{Document, Range};

use crate::node::{SyntaxNode, SyntaxTreeNode};

/// Text captured under a name while matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCapture {
    name: String,
    text: String,
    range: Range,
}

impl NamedCapture {
    /// Creates a capture.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>, range: Range) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            range,
        }
    }

    /// Returns the capture's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the captured text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the range of the captured text in the document.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }
}

/// One match within a document.
///
/// Structural matches carry the matched node; textual matches carry only
/// the range and text. Either kind may carry named captures. Ranges refer
/// to the document version the fragment was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    range: Range,
    text: String,
    node: Option<SyntaxNode>,
    captures: Vec<NamedCapture>,
}

impl Fragment {
    /// Creates a fragment covering a matched syntax node.
    #[must_use]
    pub fn from_node(
        node: SyntaxNode,
        text: impl Into<String>,
        captures: Vec<NamedCapture>,
    ) -> Self {
        Self {
            range: node.range(),
            text: text.into(),
            node: Some(node),
            captures,
        }
    }

    /// Creates a fragment for a textual match.
    #[must_use]
    pub fn from_text_match(
        range: Range,
        text: impl Into<String>,
        captures: Vec<NamedCapture>,
    ) -> Self {
        Self {
            range,
            text: text.into(),
            node: None,
            captures,
        }
    }

    /// Returns the matched range.
    #[must_use]
    pub const fn range(&self) -> Range {
        self.range
    }

    /// Returns the matched text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the matched node of a structural match.
    #[must_use]
    pub const fn node(&self) -> Option<&SyntaxNode> {
        self.node.as_ref()
    }

    /// Returns every capture in pattern order.
    #[must_use]
    pub fn captures(&self) -> &[NamedCapture] {
        &self.captures
    }

    /// Returns the first capture called `name`.
    #[must_use]
    pub fn capture(&self, name: &str) -> Option<&NamedCapture> {
        self.captures.iter().find(|capture| capture.name == name)
    }

    /// Returns `true` when the fragment came from a syntax tree.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        self.node.is_some()
    }
}

/// Anything that reports fragments for a document.
///
/// Providers must be deterministic: the same document yields the same
/// fragments in the same order.
pub trait FragmentProvider: Send + Sync {
    /// Returns the fragments of `document` in document order.
    fn provide_fragments_for_document(&self, document: &Document) -> Vec<Fragment>;
}

/// Merges the fragments of several providers.
///
/// Fragments are ordered by start position; fragments starting at the same
/// position keep the order of the providers that produced them.
#[derive(Default)]
pub struct CompositeFragmentProvider {
    providers: Vec<Box<dyn FragmentProvider>>,
}

impl CompositeFragmentProvider {
    /// Creates a composite with no providers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Appends a provider.
    #[must_use]
    pub fn with_provider(mut self, provider: impl FragmentProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Returns the number of providers.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.providers.len()
    }

    /// Returns `true` when the composite has no providers.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl FragmentProvider for CompositeFragmentProvider {
    fn provide_fragments_for_document(&self, document: &Document) -> Vec<Fragment> {
        let mut fragments: Vec<Fragment> = self
            .providers
            .iter()
            .flat_map(|provider| provider.provide_fragments_for_document(document))
            .collect();
        fragments.sort_by_key(|fragment| fragment.range.start);
        fragments
    }
}

impl fmt::Debug for CompositeFragmentProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeFragmentProvider")
            .field("providers", &self.providers.len())
            .finish()
    }
}
