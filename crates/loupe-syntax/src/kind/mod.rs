//! Typed node kinds for every built-in language.
//!
//! Each language has its own closed enumeration of the node kinds the
//! engine cares about, an `Other` variant carrying the grammar's name for
//! anything else, and an `Error` variant for input the parser could not
//! make sense of. [`NodeKind`] wraps them so trees from any language share
//! one node type.

mod css;
mod json;
mod math;
mod plain_text;
mod python;

use std::fmt;

pub use css::CssKind;
pub use json::JsonKind;
pub use math::MathKind;
pub use plain_text::PlainTextKind;
pub use python::PythonKind;

/// The kind of a [`SyntaxNode`](crate::SyntaxNode), tagged by language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A JSON node.
    Json(JsonKind),
    /// A CSS node.
    Css(CssKind),
    /// A Python node.
    Python(PythonKind),
    /// A node of a mathematical expression.
    Math(MathKind),
    /// A node of unstructured text.
    PlainText(PlainTextKind),
}

impl NodeKind {
    /// Returns the type tag patterns match against, such as `"Object"`.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Json(kind) => kind.type_tag(),
            Self::Css(kind) => kind.type_tag(),
            Self::Python(kind) => kind.type_tag(),
            Self::Math(kind) => kind.type_tag(),
            Self::PlainText(kind) => kind.type_tag(),
        }
    }

    /// Returns `true` for the error kind of any language.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Self::Json(JsonKind::Error)
                | Self::Css(CssKind::Error)
                | Self::Python(PythonKind::Error)
                | Self::Math(MathKind::Error)
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}

impl From<JsonKind> for NodeKind {
    fn from(kind: JsonKind) -> Self {
        Self::Json(kind)
    }
}

impl From<CssKind> for NodeKind {
    fn from(kind: CssKind) -> Self {
        Self::Css(kind)
    }
}

impl From<PythonKind> for NodeKind {
    fn from(kind: PythonKind) -> Self {
        Self::Python(kind)
    }
}

impl From<MathKind> for NodeKind {
    fn from(kind: MathKind) -> Self {
        Self::Math(kind)
    }
}

impl From<PlainTextKind> for NodeKind {
    fn from(kind: PlainTextKind) -> Self {
        Self::PlainText(kind)
    }
}
