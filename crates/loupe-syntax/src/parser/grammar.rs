//! Parsers backed by Tree-sitter grammars.

use std::fmt;

use loupe_core::OffsetConverter;
use tracing::warn;

use super::{MAX_NESTING, Parser, error_tree, span};
use crate::kind::{CssKind, JsonKind, NodeKind, PythonKind};
use crate::node::{RawNode, SyntaxNode, SyntaxTree};

/// A [`Parser`] wrapping a Tree-sitter grammar.
///
/// Only named grammar nodes become [`SyntaxNode`]s; punctuation and other
/// anonymous tokens are dropped unless the grammar marks them missing.
/// Error and missing nodes map onto the language's error kind.
pub struct TreeSitterParser {
    language_id: &'static str,
    grammar_name: &'static str,
    grammar: tree_sitter::Language,
    classify: fn(&'static str) -> NodeKind,
    error_kind: NodeKind,
}

impl TreeSitterParser {
    /// Creates a JSON parser.
    #[must_use]
    pub fn json() -> Self {
        Self {
            language_id: "json",
            grammar_name: "tree-sitter-json",
            grammar: tree_sitter_json::LANGUAGE.into(),
            classify: |kind| NodeKind::Json(JsonKind::from_grammar(kind)),
            error_kind: NodeKind::Json(JsonKind::Error),
        }
    }

    /// Creates a CSS parser.
    #[must_use]
    pub fn css() -> Self {
        Self {
            language_id: "css",
            grammar_name: "tree-sitter-css",
            grammar: tree_sitter_css::LANGUAGE.into(),
            classify: |kind| NodeKind::Css(CssKind::from_grammar(kind)),
            error_kind: NodeKind::Css(CssKind::Error),
        }
    }

    /// Creates a Python parser.
    #[must_use]
    pub fn python() -> Self {
        Self {
            language_id: "python",
            grammar_name: "tree-sitter-python",
            grammar: tree_sitter_python::LANGUAGE.into(),
            classify: |kind| NodeKind::Python(PythonKind::from_grammar(kind)),
            error_kind: NodeKind::Python(PythonKind::Error),
        }
    }

    /// Lowers the grammar tree without recursion. Returns `None` when the
    /// kept nodes nest deeper than [`MAX_NESTING`].
    fn lower(
        &self,
        root: tree_sitter::Node<'_>,
        converter: &OffsetConverter,
    ) -> Option<SyntaxNode> {
        let mut stack = vec![Pending::new(root)];
        loop {
            let top = stack.last_mut()?;
            if let Some(child) = top.remaining.next() {
                if stack.len() >= MAX_NESTING {
                    return None;
                }
                stack.push(Pending::new(child));
                continue;
            }
            let finished = stack.pop()?;
            let node = self.build(finished, converter);
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => return Some(node),
            }
        }
    }

    fn build(&self, pending: Pending<'_>, converter: &OffsetConverter) -> SyntaxNode {
        let Pending { node, children, .. } = pending;
        let kind = if node.is_error() || node.is_missing() {
            self.error_kind
        } else {
            (self.classify)(node.kind())
        };
        let raw = RawNode::new(self.grammar_name, node.kind(), node.kind_id());
        let range = span(converter, node.start_byte(), node.end_byte());
        SyntaxNode::new(kind, range, raw, children)
    }

    fn degraded(&self, text: &str) -> SyntaxTree {
        let raw = RawNode::new(self.grammar_name, "ERROR", 0);
        error_tree(self.language_id, text, self.error_kind, raw)
    }
}

impl Parser for TreeSitterParser {
    fn language_id(&self) -> &'static str {
        self.language_id
    }

    fn parse(&self, text: &str) -> SyntaxTree {
        let mut parser = tree_sitter::Parser::new();
        if let Err(error) = parser.set_language(&self.grammar) {
            warn!(
                language = self.language_id,
                %error,
                "failed to initialise grammar"
            );
            return self.degraded(text);
        }
        let Some(tree) = parser.parse(text, None) else {
            warn!(language = self.language_id, "grammar produced no tree");
            return self.degraded(text);
        };

        let converter = OffsetConverter::new(text);
        let Some(root) = self.lower(tree.root_node(), &converter) else {
            warn!(
                language = self.language_id,
                limit = MAX_NESTING,
                "syntax tree nests too deeply"
            );
            return self.degraded(text);
        };
        SyntaxTree::new(self.language_id, root)
    }
}

/// A grammar node whose kept children are still being lowered.
struct Pending<'t> {
    node: tree_sitter::Node<'t>,
    remaining: std::vec::IntoIter<tree_sitter::Node<'t>>,
    children: Vec<SyntaxNode>,
}

impl<'t> Pending<'t> {
    fn new(node: tree_sitter::Node<'t>) -> Self {
        let mut cursor = node.walk();
        let remaining: Vec<_> = node
            .children(&mut cursor)
            .filter(|child| child.is_named() || child.is_missing() || child.is_error())
            .collect();
        Self {
            node,
            remaining: remaining.into_iter(),
            children: Vec::new(),
        }
    }
}

impl fmt::Debug for TreeSitterParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSitterParser")
            .field("language_id", &self.language_id)
            .field("grammar", &self.grammar_name)
            .finish_non_exhaustive()
    }
}
