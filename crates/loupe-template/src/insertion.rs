//! Where a template writes a value whose key the fragment lacks.
//!
//! Each language has its own rule, so every template carries an explicit
//! policy.

use loupe_core::{Document, Position, TextEdit};
use loupe_syntax::{Fragment, SyntaxNode, SyntaxTreeNode};

/// Computes the edit adding `key` with serialised `text` to a fragment.
pub trait InsertionPolicy: Send + Sync {
    /// Returns the insertion edit, or `None` when the fragment offers no
    /// place for the key.
    fn insertion_for(
        &self,
        fragment: &Fragment,
        document: &Document,
        key: &str,
        text: &str,
    ) -> Option<TextEdit>;
}

/// Never inserts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInsertion;

impl InsertionPolicy for NoInsertion {
    fn insertion_for(
        &self,
        _fragment: &Fragment,
        _document: &Document,
        _key: &str,
        _text: &str,
    ) -> Option<TextEdit> {
        None
    }
}

/// The position one byte after the start of `node`, just inside its
/// opening brace.
fn inside_opening_brace(node: &SyntaxNode, document: &Document) -> Option<Position> {
    let start = node.range().start.offset;
    let brace = document.content().get(start..=start)?;
    (brace == "{").then(|| document.offset_converter().position_at(start + 1))
}

fn last_child_of_type<'n>(node: &'n SyntaxNode, node_type: &str) -> Option<&'n SyntaxNode> {
    node.children()
        .iter()
        .rev()
        .find(|child| child.node_type() == node_type)
}

/// Adds a property to a JSON object fragment.
///
/// The property goes after the last existing property, or just inside `{`
/// when the object is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonObjectInsertion;

impl InsertionPolicy for JsonObjectInsertion {
    fn insertion_for(
        &self,
        fragment: &Fragment,
        document: &Document,
        key: &str,
        text: &str,
    ) -> Option<TextEdit> {
        let object = fragment.node()?;
        if object.node_type() != "Object" {
            return None;
        }
        let quoted_key = serde_json::to_string(key).ok()?;
        if let Some(last) = last_child_of_type(object, "Property") {
            return Some(TextEdit::insert(
                last.range().end,
                format!(", {quoted_key}: {text}"),
            ));
        }
        let position = inside_opening_brace(object, document)?;
        Some(TextEdit::insert(position, format!("{quoted_key}: {text}")))
    }
}

/// Adds a declaration to a CSS block fragment.
///
/// The declaration goes after the last existing declaration, or just
/// inside `{` when the block is empty. A last declaration missing its `;`
/// gets one first.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssBlockInsertion;

impl InsertionPolicy for CssBlockInsertion {
    fn insertion_for(
        &self,
        fragment: &Fragment,
        document: &Document,
        key: &str,
        text: &str,
    ) -> Option<TextEdit> {
        let block = fragment.node()?;
        if block.node_type() != "Block" {
            return None;
        }
        let Some(last) = last_child_of_type(block, "Declaration") else {
            let position = inside_opening_brace(block, document)?;
            return Some(TextEdit::insert(position, format!(" {key}: {text};")));
        };
        let terminated = document
            .content()
            .get(last.range().byte_range())?
            .trim_end()
            .ends_with(';');
        let separator = if terminated { "" } else { ";" };
        Some(TextEdit::insert(
            last.range().end,
            format!("{separator} {key}: {text};"),
        ))
    }
}
