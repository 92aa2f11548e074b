//! Ready-made structural patterns.

use loupe_core::Range;

use super::structural::{Descent, NodePattern};
use crate::fragment::NamedCapture;
use crate::node::SyntaxTreeNode;

/// Matches every node with a given type tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTypePattern {
    node_type: String,
    descent: Descent,
}

impl NodeTypePattern {
    /// Matches nodes whose type tag is `node_type`.
    #[must_use]
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            descent: Descent::default(),
        }
    }

    /// Stops the walk from looking inside a match.
    #[must_use]
    pub const fn skipping_descendants(mut self) -> Self {
        self.descent = Descent::SkipDescendants;
        self
    }
}

impl<N: SyntaxTreeNode> NodePattern<N> for NodeTypePattern {
    fn matches(&self, node: &N, _text: &str) -> bool {
        node.node_type() == self.node_type
    }

    fn descent(&self, _node: &N) -> Descent {
        self.descent
    }
}

/// Matches JSON properties by key and reports their value.
///
/// When the value is an object, each of its properties is captured under
/// its key, with the value's text and range. Keys are compared without
/// their quotes and without decoding escapes.
///
/// ```json
/// {"mark": {"fill": "red"}}
/// ```
///
/// `JsonPropertyPattern::new("mark")` reports `{"fill": "red"}` and
/// captures `fill` as `"red"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPropertyPattern {
    key: String,
    value_type: Option<String>,
}

impl JsonPropertyPattern {
    /// Matches properties called `key`.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value_type: None,
        }
    }

    /// Additionally requires the value to have the type tag `value_type`.
    #[must_use]
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(text)
}

/// Splits a JSON property into its key text and value node.
fn property_parts<'n, N: SyntaxTreeNode>(node: &'n N, text: &'n str) -> Option<(&'n str, &'n N)> {
    if node.node_type() != "Property" {
        return None;
    }
    let [key, value] = node.child_nodes() else {
        return None;
    };
    Some((unquote(key.text(text)?), value))
}

impl<N: SyntaxTreeNode> NodePattern<N> for JsonPropertyPattern {
    fn matches(&self, node: &N, text: &str) -> bool {
        property_parts(node, text).is_some_and(|(key, value)| {
            key == self.key
                && self
                    .value_type
                    .as_deref()
                    .is_none_or(|expected| value.node_type() == expected)
        })
    }

    fn focus<'n>(&self, node: &'n N) -> &'n N {
        match node.child_nodes() {
            [_, value] => value,
            _ => node,
        }
    }

    fn captures(&self, focus: &N, text: &str) -> Vec<NamedCapture> {
        if focus.node_type() != "Object" {
            return Vec::new();
        }
        focus
            .child_nodes()
            .iter()
            .filter_map(|member| property_parts(member, text))
            .filter_map(|(key, value)| {
                let value_text = value.text(text)?;
                Some(NamedCapture::new(key, value_text, value.range()))
            })
            .collect()
    }
}

/// Matches CSS rules by selector and reports their declaration block.
///
/// Each declaration in the block is captured under its property name. The
/// captured range runs from the first value token to the last, so it
/// excludes the colon, any `!important` marker, and the semicolon.
/// Selectors are compared after collapsing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRulePattern {
    selector: String,
}

impl CssRulePattern {
    /// Matches rules whose selector list reads `selector`.
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self {
            selector: normalise_selector(selector),
        }
    }
}

fn normalise_selector(selector: &str) -> String {
    selector.split_whitespace().collect::<Vec<_>>().join(" ")
}

const NON_VALUE_TYPES: &[&str] = &["PropertyName", "Important", "Comment", "Error"];

fn declaration_capture<N: SyntaxTreeNode>(declaration: &N, text: &str) -> Option<NamedCapture> {
    let children = declaration.child_nodes();
    let name = children
        .iter()
        .find(|child| child.node_type() == "PropertyName")?
        .text(text)?;
    let mut values = children
        .iter()
        .filter(|child| !NON_VALUE_TYPES.contains(&child.node_type()));
    let first = values.next()?;
    let last = values.last().unwrap_or(first);
    let range = Range::new(first.range().start, last.range().end);
    let value_text = text.get(range.byte_range())?;
    Some(NamedCapture::new(name, value_text, range))
}

impl<N: SyntaxTreeNode> NodePattern<N> for CssRulePattern {
    fn matches(&self, node: &N, text: &str) -> bool {
        if node.node_type() != "RuleSet" {
            return false;
        }
        node.child_nodes()
            .iter()
            .find(|child| child.node_type() == "Selectors")
            .and_then(|selectors| selectors.text(text))
            .is_some_and(|selectors| normalise_selector(selectors) == self.selector)
    }

    fn focus<'n>(&self, node: &'n N) -> &'n N {
        node.child_nodes()
            .iter()
            .find(|child| child.node_type() == "Block")
            .unwrap_or(node)
    }

    fn captures(&self, focus: &N, text: &str) -> Vec<NamedCapture> {
        focus
            .child_nodes()
            .iter()
            .filter(|child| child.node_type() == "Declaration")
            .filter_map(|declaration| declaration_capture(declaration, text))
            .collect()
    }
}
