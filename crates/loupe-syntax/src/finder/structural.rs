//! Structural matching over syntax trees.

use std::fmt;
use std::sync::Arc;

use loupe_core::{Document, EngineConfig};
use tracing::{debug, warn};

use crate::fragment::{Fragment, FragmentProvider, NamedCapture};
use crate::language::LanguageRegistry;
use crate::node::{SyntaxNode, SyntaxTree, SyntaxTreeNode};

/// What the walk does below a node that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Descent {
    /// Keep examining the matched node's descendants.
    #[default]
    ContinueIntoDescendants,
    /// Report the match and do not look inside it.
    SkipDescendants,
}

/// A predicate over syntax nodes.
///
/// Only [`matches`](NodePattern::matches) is required. The other methods
/// let a pattern choose how far the walk descends, which node a match
/// reports, and what it captures.
pub trait NodePattern<N: SyntaxTreeNode>: Send + Sync {
    /// Returns `true` when `node` matches. `text` is the parsed source.
    fn matches(&self, node: &N, text: &str) -> bool;

    /// Chooses whether to examine the descendants of a matched node.
    fn descent(&self, _node: &N) -> Descent {
        Descent::ContinueIntoDescendants
    }

    /// Picks the node a match reports, which must lie within `node`.
    fn focus<'n>(&self, node: &'n N) -> &'n N {
        node
    }

    /// Collects named captures from the reported node.
    fn captures(&self, _focus: &N, _text: &str) -> Vec<NamedCapture> {
        Vec::new()
    }
}

/// Walks `root` in pre-order and returns up to `limit` matching nodes.
///
/// Matches come back in pre-order, which for well-formed trees is
/// document order. The walk is iterative, so deeply nested trees cannot
/// exhaust the stack.
pub fn find_matches<'n, N, P>(root: &'n N, text: &str, pattern: &P, limit: usize) -> Vec<&'n N>
where
    N: SyntaxTreeNode,
    P: NodePattern<N> + ?Sized,
{
    let mut matches = Vec::new();
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if matches.len() >= limit {
            break;
        }
        if pattern.matches(node, text) {
            matches.push(node);
            if pattern.descent(node) == Descent::SkipDescendants {
                continue;
            }
        }
        pending.extend(node.child_nodes().iter().rev());
    }
    matches
}

/// A [`FragmentProvider`] that parses documents and matches a
/// [`NodePattern`] against their trees.
///
/// Documents that are empty, in an unknown language, or in a language
/// without a parser yield no fragments. One fragment is reported per match,
/// covering the pattern's focus node.
pub struct StructuralPatternFinder {
    registry: Arc<LanguageRegistry>,
    pattern: Box<dyn NodePattern<SyntaxNode>>,
    config: EngineConfig,
}

impl StructuralPatternFinder {
    /// Creates a finder resolving languages through `registry`.
    #[must_use]
    pub fn new(
        registry: Arc<LanguageRegistry>,
        pattern: impl NodePattern<SyntaxNode> + 'static,
        config: EngineConfig,
    ) -> Self {
        Self {
            registry,
            pattern: Box::new(pattern),
            config,
        }
    }

    /// Matches the pattern against an already parsed tree of `text`.
    #[must_use]
    pub fn find_in_tree(&self, tree: &SyntaxTree, text: &str) -> Vec<Fragment> {
        let limit = self.config.max_fragments_per_pass();
        // One match past the limit shows whether any were dropped.
        let mut matches = find_matches(
            tree.root(),
            text,
            self.pattern.as_ref(),
            limit.saturating_add(1),
        );
        if matches.len() > limit {
            matches.truncate(limit);
            warn!(
                limit,
                language = tree.language_id(),
                "structural match limit reached; remaining matches dropped"
            );
        }
        matches
            .into_iter()
            .map(|node| {
                let focus = self.pattern.focus(node);
                let captures = self.pattern.captures(focus, text);
                Fragment::from_node(focus.clone(), focus.text(text).unwrap_or_default(), captures)
            })
            .collect()
    }
}

impl FragmentProvider for StructuralPatternFinder {
    fn provide_fragments_for_document(&self, document: &Document) -> Vec<Fragment> {
        if document.is_empty() {
            return Vec::new();
        }
        let Some(language) = self.registry.get_language_with_id(document.language_id()) else {
            debug!(
                language = document.language_id(),
                "no language registered for document"
            );
            return Vec::new();
        };
        let Some(parser) = language.parser() else {
            debug!(language = language.id(), "language has no parser");
            return Vec::new();
        };

        let tree = parser.parse(document.content());
        let fragments = self.find_in_tree(&tree, document.content());
        debug!(
            language = language.id(),
            version = document.version(),
            fragments = fragments.len(),
            "structural pass complete"
        );
        fragments
    }
}

impl fmt::Debug for StructuralPatternFinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuralPatternFinder")
            .field("languages", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
