//! Node kinds of mathematical expressions.

/// Kinds of nodes in a mathematical expression tree.
///
/// Binary operations have exactly two children, unary ones exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathKind {
    /// The root, spanning the whole input.
    Expression,
    /// `a + b`.
    Sum,
    /// `a - b`.
    Difference,
    /// `a * b`, or two operands written side by side.
    Product,
    /// `a / b`.
    Fraction,
    /// `a ^ b`.
    Exponent,
    /// `-a`.
    Negation,
    /// `( a )`.
    Group,
    /// A number literal.
    Number,
    /// A single name.
    Variable,
    /// `name(a, b)`; the first child is the name.
    FunctionCall,
    /// Input that could not be parsed.
    Error,
}

impl MathKind {
    /// Returns the type tag of the kind.
    #[must_use]
    pub const fn type_tag(self) -> &'static str {
        match self {
            Self::Expression => "Math",
            Self::Sum => "Sum",
            Self::Difference => "Difference",
            Self::Product => "Product",
            Self::Fraction => "Fraction",
            Self::Exponent => "Exponent",
            Self::Negation => "Negation",
            Self::Group => "Group",
            Self::Number => "Number",
            Self::Variable => "Variable",
            Self::FunctionCall => "FunctionCall",
            Self::Error => "Error",
        }
    }
}
