//! Serialisable records for command output.

use std::collections::BTreeMap;
use std::io::Write;

use loupe_core::{Position, Range};
use loupe_syntax::{Fragment, SyntaxNode, SyntaxTreeNode};
use serde::Serialize;

use crate::errors::AppError;

/// A position as printed: zero-based row and column plus the byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionRecord {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based byte column.
    pub column: usize,
    /// Byte offset from the start of the document.
    pub offset: usize,
}

impl From<Position> for PositionRecord {
    fn from(position: Position) -> Self {
        Self {
            row: position.row,
            column: position.column,
            offset: position.offset,
        }
    }
}

/// A half-open range as printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RangeRecord {
    /// Inclusive start.
    pub start: PositionRecord,
    /// Exclusive end.
    pub end: PositionRecord,
}

impl From<Range> for RangeRecord {
    fn from(range: Range) -> Self {
        Self {
            start: range.start.into(),
            end: range.end.into(),
        }
    }
}

/// One captured group of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaptureRecord {
    /// Captured text.
    pub text: String,
    /// Range of the captured text.
    pub range: RangeRecord,
}

/// One fragment, written as a single JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentRecord {
    /// Range of the fragment.
    pub range: RangeRecord,
    /// Type tag of the matched node; absent for textual matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    /// Matched text.
    pub text: String,
    /// Captures by name.
    pub captures: BTreeMap<String, CaptureRecord>,
}

impl From<&Fragment> for FragmentRecord {
    fn from(fragment: &Fragment) -> Self {
        let captures = fragment
            .captures()
            .iter()
            .map(|capture| {
                (
                    capture.name().to_owned(),
                    CaptureRecord {
                        text: capture.text().to_owned(),
                        range: capture.range().into(),
                    },
                )
            })
            .collect();
        Self {
            range: fragment.range().into(),
            node_type: fragment.node().map(|node| node.node_type().to_owned()),
            text: fragment.text().to_owned(),
            captures,
        }
    }
}

/// Writes one JSON line per fragment.
pub(crate) fn write_fragments(out: &mut impl Write, fragments: &[Fragment]) -> Result<(), AppError> {
    for fragment in fragments {
        let line =
            serde_json::to_string(&FragmentRecord::from(fragment)).map_err(AppError::Serialise)?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Writes a tree with one `Tag row:column..row:column` line per node,
/// indented by depth.
pub(crate) fn write_tree(out: &mut impl Write, root: &SyntaxNode) -> Result<(), AppError> {
    let mut stack = vec![(root, 0_usize)];
    while let Some((node, depth)) = stack.pop() {
        let range = node.range();
        writeln!(
            out,
            "{}{} {}:{}..{}:{}",
            "  ".repeat(depth),
            node.node_type(),
            range.start.row,
            range.start.column,
            range.end.row,
            range.end.column
        )?;
        stack.extend(node.children().iter().rev().map(|child| (child, depth + 1)));
    }
    Ok(())
}
