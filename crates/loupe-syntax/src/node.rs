//! Syntax trees and the node abstraction patterns are written against.

use std::sync::Arc;

use loupe_core::Range;

use crate::kind::NodeKind;

/// A node of a syntax tree, as seen by patterns and templates.
///
/// The engine only needs a node's type tag, its range in the source, and
/// its ordered children. A child's range always lies inside its parent's,
/// and siblings appear in source order without overlapping.
pub trait SyntaxTreeNode: Sized {
    /// Returns the node's type tag, such as `"Object"` or `"Declaration"`.
    fn node_type(&self) -> &str;

    /// Returns the range of source text the node covers.
    fn range(&self) -> Range;

    /// Returns the node's children in source order.
    fn child_nodes(&self) -> &[Self];

    /// Returns `true` when the node has no children.
    fn is_leaf(&self) -> bool {
        self.child_nodes().is_empty()
    }

    /// Returns the node's text within `source`.
    fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.range().byte_range())
    }
}

/// The grammar-level identity of a node.
///
/// The grammar name and node name are static strings; `kind_id` is the
/// grammar's numeric symbol, or zero for hand-written parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawNode {
    /// Name of the grammar that produced the node.
    pub grammar: &'static str,
    /// Node name within the grammar.
    pub kind: &'static str,
    /// Numeric symbol within the grammar.
    pub kind_id: u16,
}

impl RawNode {
    /// Creates a raw node description.
    #[must_use]
    pub const fn new(grammar: &'static str, kind: &'static str, kind_id: u16) -> Self {
        Self {
            grammar,
            kind,
            kind_id,
        }
    }
}

/// A node of a parsed document.
///
/// Nodes are plain values: they do not borrow the source, and parsing the
/// same text twice yields equal trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    range: Range,
    raw: RawNode,
    children: Vec<Self>,
}

impl SyntaxNode {
    /// Creates a node with the given children.
    #[must_use]
    pub const fn new(kind: NodeKind, range: Range, raw: RawNode, children: Vec<Self>) -> Self {
        Self {
            kind,
            range,
            raw,
            children,
        }
    }

    /// Creates a childless node.
    #[must_use]
    pub const fn leaf(kind: NodeKind, range: Range, raw: RawNode) -> Self {
        Self::new(kind, range, raw, Vec::new())
    }

    /// Returns the typed kind.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Returns the grammar-level identity.
    #[must_use]
    pub const fn raw(&self) -> RawNode {
        self.raw
    }

    /// Returns the children in source order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the first child with the given type tag.
    #[must_use]
    pub fn child_of_type(&self, node_type: &str) -> Option<&Self> {
        self.children
            .iter()
            .find(|child| child.node_type() == node_type)
    }

    /// Iterates over the node and all its descendants in pre-order.
    pub fn descendants(&self) -> Descendants<'_, Self> {
        Descendants::new(self)
    }

    /// Returns `true` when this node or any descendant is an error node.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.descendants().any(|node| node.kind.is_error())
    }
}

impl SyntaxTreeNode for SyntaxNode {
    fn node_type(&self) -> &str {
        self.kind.type_tag()
    }

    fn range(&self) -> Range {
        self.range
    }

    fn child_nodes(&self) -> &[Self] {
        &self.children
    }
}

/// Pre-order iterator over a node and its descendants.
#[derive(Debug)]
pub struct Descendants<'n, N> {
    stack: Vec<&'n N>,
}

impl<'n, N: SyntaxTreeNode> Descendants<'n, N> {
    /// Starts the walk at `root`.
    #[must_use]
    pub fn new(root: &'n N) -> Self {
        Self { stack: vec![root] }
    }
}

impl<'n, N: SyntaxTreeNode> Iterator for Descendants<'n, N> {
    type Item = &'n N;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.child_nodes().iter().rev());
        Some(node)
    }
}

/// The result of parsing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    language_id: Arc<str>,
    root: SyntaxNode,
}

impl SyntaxTree {
    /// Creates a tree for the given language.
    #[must_use]
    pub fn new(language_id: impl Into<Arc<str>>, root: SyntaxNode) -> Self {
        Self {
            language_id: language_id.into(),
            root,
        }
    }

    /// Returns the identifier of the language the tree was parsed as.
    #[must_use]
    pub fn language_id(&self) -> &str {
        &self.language_id
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Consumes the tree and returns its root.
    #[must_use]
    pub fn into_root(self) -> SyntaxNode {
        self.root
    }

    /// Iterates over every node in pre-order.
    pub fn descendants(&self) -> Descendants<'_, SyntaxNode> {
        self.root.descendants()
    }

    /// Returns `true` when the tree contains an error node.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.root.has_errors()
    }

    /// Returns the text of `node` within `source`, or `None` when the node
    /// lies outside this tree's root.
    #[must_use]
    pub fn text_of<'s>(&self, node: &SyntaxNode, source: &'s str) -> Option<&'s str> {
        if !self.root.range().contains(&node.range()) {
            return None;
        }
        node.text(source)
    }
}
