//! Tests for built-in languages and the registry.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use rstest::rstest;

use crate::{BuiltinLanguage, Language, LanguageRegistry, PlainTextParser};

#[rstest]
#[case("py", BuiltinLanguage::Python)]
#[case("PYI", BuiltinLanguage::Python)]
#[case("css", BuiltinLanguage::Css)]
#[case("json", BuiltinLanguage::Json)]
#[case("math", BuiltinLanguage::Math)]
#[case("txt", BuiltinLanguage::PlainText)]
fn from_extension_recognises_builtin_languages(
    #[case] ext: &str,
    #[case] expected: BuiltinLanguage,
) {
    assert_eq!(BuiltinLanguage::from_extension(ext), Some(expected));
}

#[test]
fn from_path_returns_none_without_extension() {
    assert_eq!(BuiltinLanguage::from_path(Path::new("Makefile")), None);
    assert_eq!(
        BuiltinLanguage::from_path(Path::new("styles/site.css")),
        Some(BuiltinLanguage::Css)
    );
}

#[rstest]
#[case("JSON", BuiltinLanguage::Json)]
#[case(" python ", BuiltinLanguage::Python)]
#[case("text", BuiltinLanguage::PlainText)]
fn from_str_parses_language_names(#[case] input: &str, #[case] expected: BuiltinLanguage) {
    assert_eq!(BuiltinLanguage::from_str(input), Ok(expected));
}

#[test]
fn from_str_reports_the_rejected_input() {
    let error = BuiltinLanguage::from_str("Rust").expect_err("rust is not built in");
    assert_eq!(error.input(), "rust");
}

#[test]
fn builtin_registry_lists_languages_in_id_order() {
    let registry = LanguageRegistry::with_builtin_languages();
    let ids: Vec<_> = registry.languages().map(Language::id).collect();
    assert_eq!(ids, ["css", "json", "math", "plaintext", "python"]);
    assert!(registry.languages().all(|language| language.parser().is_some()));
}

#[test]
fn builtin_language_metadata_is_exposed() {
    let registry = LanguageRegistry::with_builtin_languages();
    let math = registry.get_language_with_id("math").expect("math language");
    assert_eq!(math.name(), "Math");
    assert_eq!(math.editor_language_id(), "latex");
    let parser = math.parser().expect("math parser");
    assert_eq!(parser.language_id(), "math");
}

#[test]
fn unknown_ids_are_absent() {
    let registry = LanguageRegistry::with_builtin_languages();
    assert!(registry.get_language_with_id("JSON").is_none());
    assert!(LanguageRegistry::new().is_empty());
}

#[test]
fn registering_an_existing_id_replaces_it() {
    let mut registry = LanguageRegistry::new();
    assert!(
        registry
            .register(Language::new("notes", "Notes", "markdown"))
            .is_none()
    );
    let previous = registry
        .register(
            Language::new("notes", "Field notes", "plaintext")
                .with_parser(Arc::new(PlainTextParser::new())),
        )
        .expect("previous entry");

    assert!(previous.parser().is_none());
    assert_eq!(registry.len(), 1);
    let current = registry.get_language_with_id("notes").expect("notes");
    assert_eq!(current.name(), "Field notes");
    assert!(current.parser().is_some());
}
