//! CSS node kinds.

/// Kinds of nodes in a CSS tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssKind {
    /// The whole stylesheet.
    Stylesheet,
    /// A selector list followed by a declaration block.
    RuleSet,
    /// The selector list of a rule.
    Selectors,
    /// A `{ ... }` block.
    Block,
    /// A `property: value;` declaration.
    Declaration,
    /// The property name of a declaration.
    PropertyName,
    /// A bare keyword value such as `red`.
    PlainValue,
    /// A hexadecimal colour such as `#fff`.
    ColorValue,
    /// An integer, possibly with a unit.
    IntegerValue,
    /// A float, possibly with a unit.
    FloatValue,
    /// The unit suffix of a number.
    Unit,
    /// A quoted string.
    StringValue,
    /// A function call such as `rgb(0, 0, 0)`.
    CallExpression,
    /// An `!important` marker.
    Important,
    /// A class selector such as `.mark`.
    ClassSelector,
    /// An id selector such as `#main`.
    IdSelector,
    /// A tag selector such as `div`.
    TagName,
    /// An at-rule such as `@media`.
    AtRule,
    /// A comment.
    Comment,
    /// Input that could not be parsed.
    Error,
    /// Any other named grammar node.
    Other(&'static str),
}

impl CssKind {
    /// Maps a grammar node name onto a kind.
    #[must_use]
    pub fn from_grammar(kind: &'static str) -> Self {
        match kind {
            "stylesheet" => Self::Stylesheet,
            "rule_set" => Self::RuleSet,
            "selectors" => Self::Selectors,
            "block" => Self::Block,
            "declaration" => Self::Declaration,
            "property_name" => Self::PropertyName,
            "plain_value" => Self::PlainValue,
            "color_value" => Self::ColorValue,
            "integer_value" => Self::IntegerValue,
            "float_value" => Self::FloatValue,
            "unit" => Self::Unit,
            "string_value" => Self::StringValue,
            "call_expression" => Self::CallExpression,
            "important" => Self::Important,
            "class_selector" => Self::ClassSelector,
            "id_selector" => Self::IdSelector,
            "tag_name" => Self::TagName,
            "at_rule" | "media_statement" | "import_statement" | "keyframes_statement"
            | "supports_statement" | "charset_statement" | "namespace_statement" => Self::AtRule,
            "comment" => Self::Comment,
            "ERROR" => Self::Error,
            other => Self::Other(other),
        }
    }

    /// Returns the type tag of the kind.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Stylesheet => "Stylesheet",
            Self::RuleSet => "RuleSet",
            Self::Selectors => "Selectors",
            Self::Block => "Block",
            Self::Declaration => "Declaration",
            Self::PropertyName => "PropertyName",
            Self::PlainValue => "PlainValue",
            Self::ColorValue => "ColorValue",
            Self::IntegerValue => "IntegerValue",
            Self::FloatValue => "FloatValue",
            Self::Unit => "Unit",
            Self::StringValue => "StringValue",
            Self::CallExpression => "CallExpression",
            Self::Important => "Important",
            Self::ClassSelector => "ClassSelector",
            Self::IdSelector => "IdSelector",
            Self::TagName => "TagName",
            Self::AtRule => "AtRule",
            Self::Comment => "Comment",
            Self::Error => "Error",
            Self::Other(name) => name,
        }
    }
}
