//! Unit and behaviour tests for loupe-syntax.

mod language_tests;
mod parser_tests;

use std::io;
use std::sync::{Arc, Mutex};

use crate::{SyntaxNode, SyntaxTreeNode};

/// Shared sink for log lines written during a test.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer lock").extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `action` and returns what it logged at `WARN` and above.
fn warnings_from<T>(action: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, action);
    let bytes = buffer.0.lock().expect("log buffer lock").clone();
    (result, String::from_utf8(bytes).expect("logs should be UTF-8"))
}

/// Renders a tree as one `Tag start..end` line per node, indented by depth.
fn render(node: &SyntaxNode) -> String {
    let mut lines = Vec::new();
    render_into(node, 0, &mut lines);
    lines.join("\n")
}

fn render_into(node: &SyntaxNode, depth: usize, lines: &mut Vec<String>) {
    let range = node.range().byte_range();
    lines.push(format!(
        "{}{} {}..{}",
        "  ".repeat(depth),
        node.node_type(),
        range.start,
        range.end
    ));
    for child in node.children() {
        render_into(child, depth + 1, lines);
    }
}

/// Asserts children nest inside their parent and siblings do not overlap.
fn assert_well_nested(node: &SyntaxNode) {
    let mut previous_end = node.range().start;
    for child in node.children() {
        assert!(
            node.range().contains(&child.range()),
            "{} {:?} escapes parent {} {:?}",
            child.node_type(),
            child.range(),
            node.node_type(),
            node.range()
        );
        assert!(
            previous_end <= child.range().start,
            "{} {:?} overlaps its previous sibling",
            child.node_type(),
            child.range()
        );
        previous_end = child.range().end;
        assert_well_nested(child);
    }
}

fn node_types(node: &SyntaxNode) -> Vec<&str> {
    node.descendants().map(SyntaxTreeNode::node_type).collect()
}
