//! JSON node kinds.

/// Kinds of nodes in a JSON tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    /// The whole document.
    Document,
    /// An object literal.
    Object,
    /// A `"key": value` member of an object.
    Property,
    /// An array literal.
    Array,
    /// A string literal including its quotes.
    String,
    /// The characters between a string's quotes.
    StringContent,
    /// A backslash escape inside a string.
    EscapeSequence,
    /// A number literal.
    Number,
    /// `true` or `false`.
    Boolean,
    /// `null`.
    Null,
    /// A comment, which the grammar tolerates.
    Comment,
    /// Input that could not be parsed.
    Error,
    /// Any other named grammar node.
    Other(&'static str),
}

impl JsonKind {
    /// Maps a grammar node name onto a kind.
    #[must_use]
    pub fn from_grammar(kind: &'static str) -> Self {
        match kind {
            "document" => Self::Document,
            "object" => Self::Object,
            "pair" => Self::Property,
            "array" => Self::Array,
            "string" => Self::String,
            "string_content" => Self::StringContent,
            "escape_sequence" => Self::EscapeSequence,
            "number" => Self::Number,
            "true" | "false" => Self::Boolean,
            "null" => Self::Null,
            "comment" => Self::Comment,
            "ERROR" => Self::Error,
            other => Self::Other(other),
        }
    }

    /// Returns the type tag of the kind.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Object => "Object",
            Self::Property => "Property",
            Self::Array => "Array",
            Self::String => "String",
            Self::StringContent => "StringContent",
            Self::EscapeSequence => "EscapeSequence",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Null => "Null",
            Self::Comment => "Comment",
            Self::Error => "Error",
            Self::Other(name) => name,
        }
    }
}
