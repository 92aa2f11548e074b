//! Python node kinds.

/// Kinds of nodes in a Python tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PythonKind {
    /// The whole module.
    Module,
    /// A statement consisting of one expression.
    ExpressionStatement,
    /// `target = value`.
    Assignment,
    /// A function or method call.
    Call,
    /// The parenthesised arguments of a call.
    ArgumentList,
    /// A `name=value` argument.
    KeywordArgument,
    /// `object.name`.
    NamedAccess,
    /// A bare name.
    Identifier,
    /// An integer literal.
    Integer,
    /// A float literal.
    Float,
    /// A string literal including its quotes.
    String,
    /// `True` or `False`.
    Boolean,
    /// `None`.
    None,
    /// A list display.
    List,
    /// A dictionary display.
    Dictionary,
    /// A `key: value` entry of a dictionary.
    Pair,
    /// `a + b` and the other binary operators.
    BinaryOperator,
    /// A `def` statement.
    FunctionDefinition,
    /// A comment.
    Comment,
    /// Input that could not be parsed.
    Error,
    /// Any other named grammar node.
    Other(&'static str),
}

impl PythonKind {
    /// Maps a grammar node name onto a kind.
    #[must_use]
    pub fn from_grammar(kind: &'static str) -> Self {
        match kind {
            "module" => Self::Module,
            "expression_statement" => Self::ExpressionStatement,
            "assignment" => Self::Assignment,
            "call" => Self::Call,
            "argument_list" => Self::ArgumentList,
            "keyword_argument" => Self::KeywordArgument,
            "attribute" => Self::NamedAccess,
            "identifier" => Self::Identifier,
            "integer" => Self::Integer,
            "float" => Self::Float,
            "string" => Self::String,
            "true" | "false" => Self::Boolean,
            "none" => Self::None,
            "list" => Self::List,
            "dictionary" => Self::Dictionary,
            "pair" => Self::Pair,
            "binary_operator" => Self::BinaryOperator,
            "function_definition" => Self::FunctionDefinition,
            "comment" => Self::Comment,
            "ERROR" => Self::Error,
            other => Self::Other(other),
        }
    }

    /// Returns the type tag of the kind.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Module => "Module",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::Assignment => "Assignment",
            Self::Call => "Call",
            Self::ArgumentList => "ArgumentList",
            Self::KeywordArgument => "KeywordArgument",
            Self::NamedAccess => "NamedAccess",
            Self::Identifier => "Identifier",
            Self::Integer => "Integer",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::None => "None",
            Self::List => "List",
            Self::Dictionary => "Dictionary",
            Self::Pair => "Pair",
            Self::BinaryOperator => "BinaryOperator",
            Self::FunctionDefinition => "FunctionDefinition",
            Self::Comment => "Comment",
            Self::Error => "Error",
            Self::Other(name) => name,
        }
    }
}
