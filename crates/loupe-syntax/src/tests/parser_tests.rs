//! Tests for the built-in parsers.

use insta::assert_snapshot;
use rstest::rstest;

use super::{assert_well_nested, node_types, render};
use crate::{
    BuiltinLanguage, JsonKind, MathKind, MathParser, NodeKind, Parser, PlainTextParser,
    SyntaxTreeNode, TreeSitterParser,
};

#[test]
fn math_respects_precedence_and_juxtaposition() {
    let tree = MathParser::new().parse("2x^2 + 1");
    assert_snapshot!(render(tree.root()), @r"
    Math 0..8
      Sum 0..8
        Product 0..4
          Number 0..1
          Exponent 1..4
            Variable 1..2
            Number 3..4
        Number 7..8
    ");
}

#[test]
fn math_parses_calls_groups_and_negation() {
    let tree = MathParser::new().parse("-max(a, (b - 1) / 2)");
    assert_snapshot!(render(tree.root()), @r"
    Math 0..20
      Negation 0..20
        FunctionCall 1..20
          Variable 1..4
          Variable 5..6
          Fraction 8..19
            Group 8..15
              Difference 9..14
                Variable 9..10
                Number 13..14
            Number 18..19
    ");
}

#[test]
fn math_exponent_is_right_associative() {
    let tree = MathParser::new().parse("a^b^c");
    assert_snapshot!(render(tree.root()), @r"
    Math 0..5
      Exponent 0..5
        Variable 0..1
        Exponent 2..5
          Variable 2..3
          Variable 4..5
    ");
}

#[rstest]
#[case("2 +")]
#[case("(1")]
#[case("2 $ 3")]
#[case("1 2)")]
#[case("f(,)")]
fn malformed_math_yields_single_error_leaf(#[case] text: &str) {
    let tree = MathParser::new().parse(text);
    let root = tree.root();
    assert_eq!(root.kind(), NodeKind::Math(MathKind::Error));
    assert!(root.is_leaf());
    assert_eq!(root.range().byte_range(), 0..text.len());
}

#[rstest]
#[case("")]
#[case("  \n ")]
fn blank_math_has_childless_root(#[case] text: &str) {
    let tree = MathParser::new().parse(text);
    assert_eq!(tree.root().kind(), NodeKind::Math(MathKind::Expression));
    assert!(tree.root().is_leaf());
    assert!(!tree.has_errors());
}

#[rstest]
#[case(format!("{}1{}", "(".repeat(1_000), ")".repeat(1_000)))]
#[case(format!("{}2", "2^".repeat(5_000)))]
#[case(format!("{}1", "-".repeat(5_000)))]
fn deeply_nested_math_degrades_to_error(#[case] text: String) {
    let tree = MathParser::new().parse(&text);
    assert_eq!(tree.root().kind(), NodeKind::Math(MathKind::Error));
    assert!(tree.root().is_leaf());
}

#[test]
fn short_exponent_chains_still_parse() {
    let tree = MathParser::new().parse("2^3^4");
    assert!(!tree.has_errors());
    assert_eq!(
        node_types(tree.root()),
        ["Math", "Exponent", "Number", "Exponent", "Number", "Number"]
    );
}

#[rstest]
#[case(format!("{}{}", "[".repeat(5_000), "]".repeat(5_000)))]
#[case(format!("{}1{}", r#"{"a": "#.repeat(5_000), "}".repeat(5_000)))]
fn deeply_nested_json_degrades_to_error(#[case] text: String) {
    let tree = TreeSitterParser::json().parse(&text);
    assert!(tree.has_errors());
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().range().byte_range(), 0..text.len());
}

#[test]
fn moderately_nested_json_keeps_its_structure() {
    let text = format!("{}{}", "[".repeat(100), "]".repeat(100));
    let tree = TreeSitterParser::json().parse(&text);
    assert!(!tree.has_errors());
    assert_eq!(tree.root().descendants().count(), 101);
}

#[test]
fn plain_text_lines_exclude_terminators() {
    let tree = PlainTextParser::new().parse("ab\r\ncd\n");
    assert_snapshot!(render(tree.root()), @r"
    Text 0..7
      Line 0..2
      Line 4..6
      Line 7..7
    ");
}

#[test]
fn empty_plain_text_has_no_lines() {
    let tree = PlainTextParser::new().parse("");
    assert!(tree.root().is_leaf());
    assert_eq!(tree.root().node_type(), "Text");
}

#[test]
fn json_properties_hold_key_and_value() {
    let text = r#"{"a": {"b": 1}}"#;
    let tree = TreeSitterParser::json().parse(text);
    let root = tree.root();
    assert_eq!(root.kind(), NodeKind::Json(JsonKind::Document));

    let properties: Vec<_> = tree
        .descendants()
        .filter(|node| node.kind() == NodeKind::Json(JsonKind::Property))
        .collect();
    assert_eq!(properties.len(), 2);
    let outer = properties[0];
    assert_eq!(outer.children().len(), 2);
    assert_eq!(outer.children()[0].text(text), Some(r#""a""#));
    assert_eq!(outer.children()[1].node_type(), "Object");
    assert_eq!(outer.children()[1].text(text), Some(r#"{"b": 1}"#));
    assert_eq!(outer.raw().kind, "pair");
    assert_eq!(outer.raw().grammar, "tree-sitter-json");
}

#[test]
fn css_declarations_expose_property_and_value() {
    let text = ".mark { fill: red; width: 10px; }";
    let tree = TreeSitterParser::css().parse(text);
    let types = node_types(tree.root());
    assert_eq!(types.first(), Some(&"Stylesheet"));
    for expected in ["RuleSet", "Selectors", "Block", "Declaration", "PropertyName"] {
        assert!(types.contains(&expected), "missing {expected} in {types:?}");
    }
    let names: Vec<_> = tree
        .descendants()
        .filter(|node| node.node_type() == "PropertyName")
        .filter_map(|node| node.text(text))
        .collect();
    assert_eq!(names, ["fill", "width"]);
}

#[test]
fn python_assignment_is_structural() {
    let text = "x = 1\n";
    let tree = TreeSitterParser::python().parse(text);
    assert_eq!(tree.root().node_type(), "Module");
    let assignment = tree
        .descendants()
        .find(|node| node.node_type() == "Assignment")
        .expect("assignment node");
    assert_eq!(assignment.text(text), Some("x = 1"));
    let child_types: Vec<_> = assignment
        .children()
        .iter()
        .map(SyntaxTreeNode::node_type)
        .collect();
    assert_eq!(child_types, ["Identifier", "Integer"]);
}

#[rstest]
#[case(TreeSitterParser::json(), r#"{"a": }"#)]
#[case(TreeSitterParser::json(), "[1, 2")]
#[case(TreeSitterParser::python(), "def broken(")]
#[case(TreeSitterParser::css(), ".a { color: ; ")]
fn malformed_grammar_input_contains_error_nodes(
    #[case] parser: TreeSitterParser,
    #[case] text: &str,
) {
    let tree = parser.parse(text);
    assert!(tree.has_errors(), "{}", render(tree.root()));
}

#[rstest]
#[case(BuiltinLanguage::Json, r#"{"a": [1, 2, {"b": null}], "c": "d\n"}"#)]
#[case(BuiltinLanguage::Json, r#"{"a": 1,, "b": }"#)]
#[case(BuiltinLanguage::Css, ".a, .b > p { color: red; margin: 1px 2px; }")]
#[case(BuiltinLanguage::Css, "@media screen { .a { color: #fff; } }")]
#[case(BuiltinLanguage::Python, "def f(x):\n    return g(x, y=2) + 1\n")]
#[case(BuiltinLanguage::Python, "if (:\n")]
#[case(BuiltinLanguage::Math, "a*(b+c)^2 - sin(x)/2")]
#[case(BuiltinLanguage::PlainText, "one\ntwo\r\n\nthree")]
fn every_parser_produces_well_nested_ranges(
    #[case] language: BuiltinLanguage,
    #[case] text: &str,
) {
    let tree = language.parser().parse(text);
    assert_eq!(tree.language_id(), language.as_str());
    assert!(tree.root().range().end.offset <= text.len());
    assert_well_nested(tree.root());
}

#[rstest]
#[case(BuiltinLanguage::Json, r#"{"mark": {"fill": "red"}}"#)]
#[case(BuiltinLanguage::Css, ".mark { fill: red; }")]
#[case(BuiltinLanguage::Python, "print(1)\n")]
#[case(BuiltinLanguage::Math, "x^2")]
fn parsing_is_deterministic(#[case] language: BuiltinLanguage, #[case] text: &str) {
    let parser = language.parser();
    assert_eq!(parser.parse(text), parser.parse(text));
}

#[test]
fn positions_track_rows_across_lines() {
    let text = "{\n  \"a\": 1\n}";
    let tree = TreeSitterParser::json().parse(text);
    let number = tree
        .descendants()
        .find(|node| node.node_type() == "Number")
        .expect("number node");
    let start = number.range().start;
    assert_eq!((start.row, start.column, start.offset), (1, 7, 9));
}

#[test]
fn text_of_rejects_nodes_from_other_trees() {
    let short = TreeSitterParser::json().parse("1");
    let long = TreeSitterParser::json().parse("[1, 2, 3]");
    assert_eq!(short.text_of(long.root(), "[1, 2, 3]"), None);
    assert_eq!(long.text_of(long.root(), "[1, 2, 3]"), Some("[1, 2, 3]"));
}

#[test]
fn python_method_calls_use_named_access() {
    let text = "canvas.draw(1)\n";
    let tree = TreeSitterParser::python().parse(text);
    let call = tree
        .descendants()
        .find(|node| node.node_type() == "Call")
        .expect("call node");
    let callee = &call.children()[0];
    assert_eq!(callee.node_type(), "NamedAccess");
    assert_eq!(callee.text(text), Some("canvas.draw"));
    assert_eq!(call.children()[1].node_type(), "ArgumentList");
}
