//! Plain text node kinds.

/// Kinds of nodes in a plain text tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlainTextKind {
    /// The whole text.
    Text,
    /// One line, without its terminator.
    Line,
}

impl PlainTextKind {
    /// Returns the type tag of the kind.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Line => "Line",
        }
    }
}
