//! Parsers turning document text into a [`SyntaxTree`].
//!
//! Parsing is total: malformed input yields a tree containing error nodes
//! (or, when nothing can be recovered, a single error leaf spanning the
//! whole text) rather than a failure.

mod grammar;
mod math;
mod plain_text;

use loupe_core::{OffsetConverter, Range};

pub use self::grammar::TreeSitterParser;
pub use self::math::MathParser;
pub use self::plain_text::PlainTextParser;
use crate::kind::NodeKind;
use crate::node::{RawNode, SyntaxNode, SyntaxTree};

/// Deepest syntax tree a parser builds; deeper input degrades to an error
/// leaf.
pub(crate) const MAX_NESTING: usize = 256;

/// Turns text in one language into a syntax tree.
pub trait Parser: Send + Sync {
    /// Returns the identifier of the language this parser reads.
    fn language_id(&self) -> &'static str;

    /// Parses `text`.
    fn parse(&self, text: &str) -> SyntaxTree;
}

/// Builds the range between two byte offsets of the converted text.
pub(crate) fn span(converter: &OffsetConverter, start: usize, end: usize) -> Range {
    Range::from_unsorted_positions(converter.position_at(start), converter.position_at(end))
}

/// Builds a tree whose root is one error leaf covering all of `text`.
pub(crate) fn error_tree(
    language_id: &str,
    text: &str,
    kind: NodeKind,
    raw: RawNode,
) -> SyntaxTree {
    let converter = OffsetConverter::new(text);
    let root = SyntaxNode::leaf(kind, span(&converter, 0, text.len()), raw);
    SyntaxTree::new(language_id, root)
}
