//! Mathematical expressions: a logos lexer feeding a recursive-descent
//! parser.
//!
//! Precedence, loosest first: `+ -`, then `* /` and juxtaposition (`2x`),
//! then unary minus, then right-associative `^`. Function calls take a
//! comma-separated argument list: `sin(x)`, `max(a, b)`.

use logos::Logos;
use loupe_core::OffsetConverter;
use tracing::debug;

use super::{MAX_NESTING, Parser, error_tree, span};
use crate::kind::{MathKind, NodeKind};
use crate::node::{RawNode, SyntaxNode, SyntaxTree, SyntaxTreeNode};

const GRAMMAR: &str = "math";
const LANGUAGE_ID: &str = "math";

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum Token {
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Number,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
}

#[derive(Debug, Clone, Copy)]
struct Lexeme {
    token: Token,
    start: usize,
    end: usize,
}

/// The input does not form an expression.
#[derive(Debug)]
struct Unparseable;

fn lex(text: &str) -> Result<Vec<Lexeme>, Unparseable> {
    Token::lexer(text)
        .spanned()
        .map(|(result, bytes)| {
            result
                .map(|token| Lexeme {
                    token,
                    start: bytes.start,
                    end: bytes.end,
                })
                .map_err(|()| Unparseable)
        })
        .collect()
}

struct ExpressionParser<'c> {
    lexemes: Vec<Lexeme>,
    cursor: usize,
    depth: usize,
    converter: &'c OffsetConverter,
}

impl ExpressionParser<'_> {
    fn peek(&self) -> Option<Token> {
        self.lexemes.get(self.cursor).map(|lexeme| lexeme.token)
    }

    fn bump(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(lexeme)
    }

    fn expect(&mut self, token: Token) -> Result<Lexeme, Unparseable> {
        match self.bump() {
            Some(lexeme) if lexeme.token == token => Ok(lexeme),
            _ => Err(Unparseable),
        }
    }

    const fn at_end(&self) -> bool {
        self.cursor >= self.lexemes.len()
    }

    const fn enter(&mut self) -> Result<(), Unparseable> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(Unparseable);
        }
        Ok(())
    }

    const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn node(
        &self,
        kind: MathKind,
        start: usize,
        end: usize,
        children: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        SyntaxNode::new(
            NodeKind::Math(kind),
            span(self.converter, start, end),
            RawNode::new(GRAMMAR, kind.type_tag(), 0),
            children,
        )
    }

    fn binary(&self, kind: MathKind, lhs: SyntaxNode, rhs: SyntaxNode) -> SyntaxNode {
        let start = lhs.range().start.offset;
        let end = rhs.range().end.offset;
        self.node(kind, start, end, vec![lhs, rhs])
    }

    fn expression(&mut self) -> Result<SyntaxNode, Unparseable> {
        self.enter()?;
        let mut lhs = self.term()?;
        while let Some(operator @ (Token::Plus | Token::Minus)) = self.peek() {
            self.cursor += 1;
            let rhs = self.term()?;
            let kind = if operator == Token::Plus {
                MathKind::Sum
            } else {
                MathKind::Difference
            };
            lhs = self.binary(kind, lhs, rhs);
        }
        self.leave();
        Ok(lhs)
    }

    fn term(&mut self) -> Result<SyntaxNode, Unparseable> {
        let mut lhs = self.unary()?;
        loop {
            let kind = match self.peek() {
                Some(Token::Star) => {
                    self.cursor += 1;
                    MathKind::Product
                }
                Some(Token::Slash) => {
                    self.cursor += 1;
                    MathKind::Fraction
                }
                // Juxtaposition multiplies without consuming an operator.
                Some(Token::Number | Token::Identifier | Token::OpenParen) => MathKind::Product,
                _ => return Ok(lhs),
            };
            let rhs = self.unary()?;
            lhs = self.binary(kind, lhs, rhs);
        }
    }

    fn unary(&mut self) -> Result<SyntaxNode, Unparseable> {
        if self.peek() != Some(Token::Minus) {
            return self.power();
        }
        self.enter()?;
        let minus = self.expect(Token::Minus)?;
        let operand = self.unary()?;
        self.leave();
        let end = operand.range().end.offset;
        Ok(self.node(MathKind::Negation, minus.start, end, vec![operand]))
    }

    fn power(&mut self) -> Result<SyntaxNode, Unparseable> {
        let base = self.primary()?;
        if self.peek() != Some(Token::Caret) {
            return Ok(base);
        }
        self.cursor += 1;
        self.enter()?;
        let exponent = self.unary()?;
        self.leave();
        Ok(self.binary(MathKind::Exponent, base, exponent))
    }

    fn primary(&mut self) -> Result<SyntaxNode, Unparseable> {
        let lexeme = self.bump().ok_or(Unparseable)?;
        match lexeme.token {
            Token::Number => Ok(self.node(
                MathKind::Number,
                lexeme.start,
                lexeme.end,
                Vec::new(),
            )),
            Token::Identifier => {
                let name = self.node(MathKind::Variable, lexeme.start, lexeme.end, Vec::new());
                if self.peek() == Some(Token::OpenParen) {
                    self.call(name)
                } else {
                    Ok(name)
                }
            }
            Token::OpenParen => {
                let inner = self.expression()?;
                let close = self.expect(Token::CloseParen)?;
                Ok(self.node(MathKind::Group, lexeme.start, close.end, vec![inner]))
            }
            _ => Err(Unparseable),
        }
    }

    fn call(&mut self, name: SyntaxNode) -> Result<SyntaxNode, Unparseable> {
        self.expect(Token::OpenParen)?;
        let start = name.range().start.offset;
        let mut children = vec![name];
        if self.peek() != Some(Token::CloseParen) {
            loop {
                children.push(self.expression()?);
                if self.peek() == Some(Token::Comma) {
                    self.cursor += 1;
                } else {
                    break;
                }
            }
        }
        let close = self.expect(Token::CloseParen)?;
        Ok(self.node(MathKind::FunctionCall, start, close.end, children))
    }
}

/// A [`Parser`] for arithmetic expressions with variables and function
/// calls.
///
/// The root has kind `Math` and spans the whole input; its single child is
/// the expression. Whitespace-only input yields a childless root. Input
/// that does not form one complete expression yields a single error leaf.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathParser;

impl MathParser {
    /// Creates a mathematical expression parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Parser for MathParser {
    fn language_id(&self) -> &'static str {
        LANGUAGE_ID
    }

    fn parse(&self, text: &str) -> SyntaxTree {
        let error = || {
            let raw = RawNode::new(GRAMMAR, "error", 0);
            error_tree(LANGUAGE_ID, text, NodeKind::Math(MathKind::Error), raw)
        };
        let Ok(lexemes) = lex(text) else {
            debug!(length = text.len(), "expression contains an unknown character");
            return error();
        };

        let converter = OffsetConverter::new(text);
        let mut parser = ExpressionParser {
            lexemes,
            cursor: 0,
            depth: 0,
            converter: &converter,
        };
        let children = if parser.at_end() {
            Vec::new()
        } else {
            match parser.expression() {
                Ok(expression) if parser.at_end() => vec![expression],
                _ => {
                    debug!(length = text.len(), "input is not a single expression");
                    return error();
                }
            }
        };
        let root = parser.node(MathKind::Expression, 0, text.len(), children);
        SyntaxTree::new(LANGUAGE_ID, root)
    }
}
