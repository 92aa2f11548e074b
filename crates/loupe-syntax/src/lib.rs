//! Parsing and pattern finding for the loupe engine.
//!
//! Documents are parsed into [`SyntaxTree`]s by a per-language [`Parser`]
//! looked up in a [`LanguageRegistry`]. Finders then report [`Fragment`]s:
//!
//! - [`StructuralPatternFinder`] walks the tree with a [`NodePattern`] such
//!   as [`JsonPropertyPattern`] or [`CssRulePattern`].
//! - [`RegexPatternFinder`] scans the raw text with a regular expression.
//!
//! # Built-in languages
//!
//! - JSON, CSS, and Python, parsed with Tree-sitter grammars
//! - arithmetic expressions (`math`), parsed by a hand-written parser
//! - plain text, split into lines
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use loupe_core::{Document, EngineConfig};
//! use loupe_syntax::{
//!     FragmentProvider, JsonPropertyPattern, LanguageRegistry, StructuralPatternFinder,
//! };
//!
//! let registry = Arc::new(LanguageRegistry::with_builtin_languages());
//! let finder = StructuralPatternFinder::new(
//!     registry,
//!     JsonPropertyPattern::new("mark"),
//!     EngineConfig::default(),
//! );
//! let document = Document::new("json", r#"{"mark": {"fill": "red"}}"#);
//! let fragments = finder.provide_fragments_for_document(&document);
//! assert_eq!(fragments[0].text(), r#"{"fill": "red"}"#);
//! ```

mod error;
mod finder;
mod fragment;
mod kind;
mod language;
mod node;
mod parser;

pub use error::SyntaxError;
pub use finder::{
    CssRulePattern, Descent, JsonPropertyPattern, NodePattern, NodeTypePattern,
    RegexPatternFinder, StructuralPatternFinder, find_matches,
};
pub use fragment::{CompositeFragmentProvider, Fragment, FragmentProvider, NamedCapture};
pub use kind::{CssKind, JsonKind, MathKind, NodeKind, PlainTextKind, PythonKind};
pub use language::{BuiltinLanguage, Language, LanguageParseError, LanguageRegistry};
pub use node::{Descendants, RawNode, SyntaxNode, SyntaxTree, SyntaxTreeNode};
pub use parser::{MathParser, Parser, PlainTextParser, TreeSitterParser};

#[cfg(test)]
mod tests;
