//! End-to-end tests for loupe-syntax through its public API.

use std::sync::Arc;

use insta::assert_snapshot;
use rstest::{fixture, rstest};

use loupe_core::{Document, EngineConfig};
use loupe_syntax::{
    BuiltinLanguage, CssRulePattern, Fragment, FragmentProvider, JsonPropertyPattern,
    LanguageRegistry, NodeTypePattern, RegexPatternFinder, StructuralPatternFinder,
};

#[fixture]
fn registry() -> Arc<LanguageRegistry> {
    Arc::new(LanguageRegistry::with_builtin_languages())
}

fn summarise(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|fragment| {
            let start = fragment.range().start;
            let captures: Vec<_> = fragment
                .captures()
                .iter()
                .map(|capture| format!("{}={}", capture.name(), capture.text()))
                .collect();
            format!(
                "{}:{} {} [{}]",
                start.row,
                start.column,
                fragment.text(),
                captures.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[rstest]
fn json_properties_across_nesting(registry: Arc<LanguageRegistry>) {
    let text = "{\n  \"mark\": {\"fill\": \"red\", \"size\": 3},\n  \"legend\": {\"mark\": {\"fill\": \"blue\"}}\n}";
    let finder = StructuralPatternFinder::new(
        registry,
        JsonPropertyPattern::new("mark").with_value_type("Object"),
        EngineConfig::default(),
    );
    let fragments = finder.provide_fragments_for_document(&Document::new("json", text));
    assert_snapshot!(summarise(&fragments), @r#"
    1:10 {"fill": "red", "size": 3} [fill="red", size=3]
    2:21 {"fill": "blue"} [fill="blue"]
    "#);
}

#[rstest]
fn css_rules_with_shared_properties(registry: Arc<LanguageRegistry>) {
    let text = ".mark { fill: red; }\n.legend .mark { fill: blue; stroke: #000; }";
    let finder = StructuralPatternFinder::new(
        registry,
        CssRulePattern::new(".legend   .mark"),
        EngineConfig::default(),
    );
    let fragments = finder.provide_fragments_for_document(&Document::new("css", text));
    assert_snapshot!(summarise(&fragments), @"1:14 { fill: blue; stroke: #000; } [fill=blue, stroke=#000]");
}

#[test]
fn regex_over_python_source() {
    let text = "width = 10\nheight = 20\n";
    let finder = RegexPatternFinder::new(r"(?<name>\w+) = (?<value>\d+)")
        .unwrap_or_else(|err| panic!("regex: {err}"));
    let fragments = finder.provide_fragments_for_document(&Document::new("python", text));
    assert_snapshot!(summarise(&fragments), @r"
    0:0 width = 10 [name=width, value=10]
    1:0 height = 20 [name=height, value=20]
    ");
}

#[rstest]
fn math_variables_in_document_order(registry: Arc<LanguageRegistry>) {
    let finder = StructuralPatternFinder::new(
        registry,
        NodeTypePattern::new("Variable"),
        EngineConfig::default(),
    );
    let document = Document::new(BuiltinLanguage::Math.as_str(), "sin(theta) * r^2");
    let fragments = finder.provide_fragments_for_document(&document);
    assert_snapshot!(summarise(&fragments), @r"
    0:0 sin []
    0:4 theta []
    0:13 r []
    ");
}
