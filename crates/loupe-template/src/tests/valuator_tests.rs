//! Tests for the built-in valuators.

use rstest::rstest;

use crate::{
    BooleanValuator, DimensionValuator, NumberValuator, QuotedStringValuator, TextValuator,
    Valuator, ValuatorError, Value,
};

fn round_trip(valuator: &dyn Valuator, value: &Value) -> Value {
    let text = valuator.serialize(value).expect("value should serialise");
    valuator
        .deserialize(&text)
        .unwrap_or_else(|err| panic!("'{text}' should deserialise: {err}"))
}

#[rstest]
#[case::empty("")]
#[case::plain("red")]
#[case::quotes("say \"hi\"")]
#[case::backslash("C:\\fonts")]
#[case::unicode("ünïcode ☂")]
fn quoted_strings_round_trip(#[case] text: &str) {
    let value = Value::from(text);
    assert_eq!(round_trip(&QuotedStringValuator::new(), &value), value);
    assert_eq!(
        round_trip(&QuotedStringValuator::from_raw("'x'"), &value),
        value
    );
}

#[test]
fn quoted_strings_keep_their_quote_character() {
    let single = QuotedStringValuator::from_raw("'Helvetica'");
    assert_eq!(single.quote(), '\'');
    assert_eq!(
        single.serialize(&Value::from("it's")).expect("serialise"),
        "'it\\'s'"
    );
    assert_eq!(
        single.deserialize("'it\\'s'").expect("deserialise"),
        Value::from("it's")
    );

    let double = QuotedStringValuator::from_raw("\"red\"");
    assert_eq!(
        double.serialize(&Value::from("blue")).expect("serialise"),
        "\"blue\""
    );
}

#[rstest]
#[case::bare("red")]
#[case::unterminated("'red")]
#[case::stray_quote("'a'b'")]
#[case::bad_escape("\"\\q\"")]
fn malformed_quoted_strings_are_unreadable(#[case] text: &str) {
    let valuator = QuotedStringValuator::from_raw(text);
    assert!(matches!(
        valuator.deserialize(text),
        Err(ValuatorError::Unreadable { .. })
    ));
}

#[rstest]
#[case::zero(0.0, "0")]
#[case::integer(3.0, "3")]
#[case::negative(-1.5, "-1.5")]
#[case::fraction(0.1, "0.1")]
#[case::large(1000.0, "1000")]
fn numbers_use_their_shortest_form(#[case] number: f64, #[case] expected: &str) {
    let text = NumberValuator
        .serialize(&Value::Number(number))
        .expect("finite numbers serialise");
    assert_eq!(text, expected);
    assert_eq!(round_trip(&NumberValuator, &Value::Number(number)), Value::Number(number));
}

#[test]
fn numbers_accept_exponents_and_surrounding_space() {
    assert_eq!(NumberValuator.deserialize("1e3").expect("parse"), Value::Number(1000.0));
    assert_eq!(NumberValuator.deserialize(" 7 ").expect("parse"), Value::Number(7.0));
}

#[rstest]
#[case::nan(f64::NAN)]
#[case::infinity(f64::INFINITY)]
fn non_finite_numbers_cannot_be_written(#[case] number: f64) {
    assert!(matches!(
        NumberValuator.serialize(&Value::Number(number)),
        Err(ValuatorError::NonFinite { .. })
    ));
}

#[rstest]
#[case::word("ten")]
#[case::unit("10px")]
#[case::overflow("1e999")]
fn non_numbers_are_unreadable(#[case] text: &str) {
    assert!(matches!(
        NumberValuator.deserialize(text),
        Err(ValuatorError::Unreadable { .. })
    ));
}

#[rstest]
#[case::pixels("10px", "px", 10.0)]
#[case::ems("1.5em", "em", 1.5)]
#[case::negative("-2em", "em", -2.0)]
#[case::percent("50%", "%", 50.0)]
#[case::unitless("4", "", 4.0)]
fn dimensions_keep_their_unit(#[case] raw: &str, #[case] unit: &str, #[case] number: f64) {
    let valuator = DimensionValuator::from_raw(raw);
    assert_eq!(valuator.unit(), unit);
    assert_eq!(valuator.deserialize(raw).expect("parse"), Value::Number(number));
    assert_eq!(
        valuator.serialize(&Value::Number(12.0)).expect("serialise"),
        format!("12{unit}")
    );
}

#[test]
fn dimensions_reject_a_different_unit() {
    let valuator = DimensionValuator::new("px");
    assert!(matches!(
        valuator.deserialize("10em"),
        Err(ValuatorError::Unreadable { .. })
    ));
}

#[rstest]
#[case::lower("true", "false")]
#[case::python("True", "False")]
fn booleans_keep_their_capitalisation(#[case] raw: &str, #[case] expected_false: &str) {
    let valuator = BooleanValuator::from_raw(raw);
    assert_eq!(valuator.deserialize(raw).expect("parse"), Value::Boolean(true));
    assert_eq!(
        valuator.serialize(&Value::Boolean(false)).expect("serialise"),
        expected_false
    );
    for flag in [true, false] {
        assert_eq!(round_trip(&valuator, &Value::Boolean(flag)), Value::Boolean(flag));
    }
}

#[test]
fn booleans_read_any_case() {
    assert_eq!(
        BooleanValuator::new().deserialize("FALSE").expect("parse"),
        Value::Boolean(false)
    );
    assert!(BooleanValuator::new().deserialize("yes").is_err());
}

#[rstest]
#[case::text(Box::new(TextValuator), Value::Number(1.0))]
#[case::quoted(Box::new(QuotedStringValuator::new()), Value::Boolean(true))]
#[case::number(Box::new(NumberValuator), Value::from("one"))]
#[case::dimension(Box::new(DimensionValuator::new("px")), Value::from("wide"))]
#[case::boolean(Box::new(BooleanValuator::new()), Value::Number(0.0))]
fn valuators_reject_values_of_another_type(
    #[case] valuator: Box<dyn Valuator>,
    #[case] value: Value,
) {
    assert!(matches!(
        valuator.serialize(&value),
        Err(ValuatorError::UnsupportedValue { .. })
    ));
}

#[test]
fn text_is_read_verbatim() {
    assert_eq!(
        TextValuator.deserialize(" 1px solid ").expect("parse"),
        Value::from(" 1px solid ")
    );
}

#[rstest]
#[case::boolean("true", Value::Boolean(true))]
#[case::number("1.5", Value::Number(1.5))]
#[case::text("\"red\"", Value::from("red"))]
fn values_deserialise_untagged(#[case] json: &str, #[case] expected: Value) {
    let value: Value = serde_json::from_str(json).expect("valid JSON value");
    assert_eq!(value, expected);
}
