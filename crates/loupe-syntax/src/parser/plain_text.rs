//! Line-oriented parsing of unstructured text.

use loupe_core::OffsetConverter;

use super::{Parser, span};
use crate::kind::{NodeKind, PlainTextKind};
use crate::node::{RawNode, SyntaxNode, SyntaxTree};

const GRAMMAR: &str = "plaintext";

/// A [`Parser`] splitting text into lines.
///
/// The root has kind `Text` and one `Line` child per line. A line's range
/// excludes its `\n` terminator and any `\r` before it. Empty input has no
/// lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextParser;

impl PlainTextParser {
    /// Creates a plain text parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Parser for PlainTextParser {
    fn language_id(&self) -> &'static str {
        "plaintext"
    }

    fn parse(&self, text: &str) -> SyntaxTree {
        let converter = OffsetConverter::new(text);
        let mut lines = Vec::new();
        if !text.is_empty() {
            let mut start = 0;
            for line in text.split('\n') {
                let content = line.strip_suffix('\r').unwrap_or(line);
                lines.push(SyntaxNode::leaf(
                    NodeKind::PlainText(PlainTextKind::Line),
                    span(&converter, start, start + content.len()),
                    RawNode::new(GRAMMAR, "line", 0),
                ));
                start += line.len() + 1;
            }
        }
        let root = SyntaxNode::new(
            NodeKind::PlainText(PlainTextKind::Text),
            span(&converter, 0, text.len()),
            RawNode::new(GRAMMAR, "text", 0),
            lines,
        );
        SyntaxTree::new(self.language_id(), root)
    }
}
