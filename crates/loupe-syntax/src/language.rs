//! Languages and the registry that resolves document language identifiers.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::parser::{MathParser, Parser, PlainTextParser, TreeSitterParser};

/// Languages available without registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinLanguage {
    /// Python source (`.py`, `.pyi`).
    Python,
    /// Cascading style sheets (`.css`).
    Css,
    /// JSON data (`.json`).
    Json,
    /// Arithmetic expressions (`.math`).
    Math,
    /// Unstructured text (`.txt`).
    PlainText,
}

impl BuiltinLanguage {
    /// Detects the language from a file extension.
    ///
    /// Returns `None` if the extension is not recognised.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let normalised = ext.to_ascii_lowercase();
        match normalised.as_str() {
            "py" | "pyi" => Some(Self::Python),
            "css" => Some(Self::Css),
            "json" => Some(Self::Json),
            "math" => Some(Self::Math),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Detects the language from a file path by examining its extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Returns the language identifier documents carry.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Css => "css",
            Self::Json => "json",
            Self::Math => "math",
            Self::PlainText => "plaintext",
        }
    }

    /// Returns the human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Css => "CSS",
            Self::Json => "JSON",
            Self::Math => "Math",
            Self::PlainText => "Plain text",
        }
    }

    /// Returns the identifier editors use for syntax highlighting.
    #[must_use]
    pub const fn editor_language_id(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Css => "css",
            Self::Json => "json",
            Self::Math => "latex",
            Self::PlainText => "plaintext",
        }
    }

    /// Creates the parser for this language.
    #[must_use]
    pub fn parser(self) -> Arc<dyn Parser> {
        match self {
            Self::Python => Arc::new(TreeSitterParser::python()),
            Self::Css => Arc::new(TreeSitterParser::css()),
            Self::Json => Arc::new(TreeSitterParser::json()),
            Self::Math => Arc::new(MathParser::new()),
            Self::PlainText => Arc::new(PlainTextParser::new()),
        }
    }

    /// Builds the registry entry for this language.
    #[must_use]
    pub fn language(self) -> Language {
        Language::new(self.as_str(), self.display_name(), self.editor_language_id())
            .with_parser(self.parser())
    }

    /// Returns all built-in languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Python,
            Self::Css,
            Self::Json,
            Self::Math,
            Self::PlainText,
        ]
    }
}

impl fmt::Display for BuiltinLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised when parsing a language identifier fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported language: '{0}'")]
pub struct LanguageParseError(String);

impl LanguageParseError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for BuiltinLanguage {
    type Err = LanguageParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        match normalised.as_str() {
            "python" | "py" => Ok(Self::Python),
            "css" => Ok(Self::Css),
            "json" => Ok(Self::Json),
            "math" => Ok(Self::Math),
            "plaintext" | "text" | "txt" => Ok(Self::PlainText),
            other => Err(LanguageParseError(other.to_owned())),
        }
    }
}

/// A language a document can be written in.
///
/// Languages without a parser only support textual matching.
#[derive(Clone)]
pub struct Language {
    id: String,
    name: String,
    editor_language_id: String,
    parser: Option<Arc<dyn Parser>>,
}

impl Language {
    /// Creates a language without a parser.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        editor_language_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            editor_language_id: editor_language_id.into(),
            parser: None,
        }
    }

    /// Attaches a parser.
    #[must_use]
    pub fn with_parser(mut self, parser: Arc<dyn Parser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Returns the identifier documents refer to the language by.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the human-readable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier editors use for syntax highlighting.
    #[must_use]
    pub fn editor_language_id(&self) -> &str {
        &self.editor_language_id
    }

    /// Returns the parser, if the language has one.
    #[must_use]
    pub fn parser(&self) -> Option<&dyn Parser> {
        self.parser.as_deref()
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Language")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("editor_language_id", &self.editor_language_id)
            .field("has_parser", &self.parser.is_some())
            .finish()
    }
}

/// Languages known to the engine, keyed by identifier.
///
/// The registry is built once and then shared read-only.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: BTreeMap<String, Language>,
}

impl LanguageRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            languages: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every [`BuiltinLanguage`].
    #[must_use]
    pub fn with_builtin_languages() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinLanguage::all() {
            registry.register(builtin.language());
        }
        registry
    }

    /// Adds `language`, returning the entry it replaced.
    pub fn register(&mut self, language: Language) -> Option<Language> {
        self.languages.insert(language.id.clone(), language)
    }

    /// Looks a language up by identifier.
    #[must_use]
    pub fn get_language_with_id(&self, id: &str) -> Option<&Language> {
        self.languages.get(id)
    }

    /// Iterates over the registered languages in identifier order.
    pub fn languages(&self) -> impl Iterator<Item = &Language> {
        self.languages.values()
    }

    /// Returns the number of registered languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Returns `true` when no language is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}
