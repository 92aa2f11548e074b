//! Error types for parsing and pattern finding.

use thiserror::Error;

/// Errors from constructing parsers, languages, and finders.
///
/// Parsing itself never fails: malformed input yields a tree holding an
/// error node instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A regular expression did not compile.
    #[error("invalid regular expression '{pattern}': {message}")]
    InvalidRegex {
        /// The pattern as supplied.
        pattern: String,
        /// Description of the compilation failure.
        message: String,
    },

    /// No language with this identifier is registered.
    #[error("unknown language: '{id}'")]
    UnknownLanguage {
        /// The identifier that was looked up.
        id: String,
    },

    /// The language is registered but has no parser.
    #[error("language '{id}' has no parser")]
    NoParser {
        /// The identifier of the language.
        id: String,
    },
}

impl SyntaxError {
    /// Creates an invalid regular expression error.
    #[must_use]
    pub fn invalid_regex(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRegex {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates an unknown language error.
    #[must_use]
    pub fn unknown_language(id: impl Into<String>) -> Self {
        Self::UnknownLanguage { id: id.into() }
    }

    /// Creates a missing parser error.
    #[must_use]
    pub fn no_parser(id: impl Into<String>) -> Self {
        Self::NoParser { id: id.into() }
    }
}
