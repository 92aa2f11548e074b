//! Conversions between slot text and typed values.
//!
//! A valuator is built from the raw text it will read, so it can keep the
//! surface details of that text (quote character, unit suffix,
//! capitalisation) when writing a new value back.
//!
//! Every valuator round-trips: `deserialize(serialize(v)) == v` for every
//! value it can write.

use std::fmt;

use crate::error::ValuatorError;
use crate::value::Value;

/// Reads and writes one kind of slot text.
pub trait Valuator: Send + Sync + fmt::Debug {
    /// Returns a short name used in error messages.
    fn name(&self) -> &'static str;

    /// Reads a value from slot text.
    ///
    /// # Errors
    ///
    /// Returns [`ValuatorError::Unreadable`] when the text is not in this
    /// valuator's format.
    fn deserialize(&self, text: &str) -> Result<Value, ValuatorError>;

    /// Writes a value as slot text.
    ///
    /// # Errors
    ///
    /// Returns a [`ValuatorError`] when the value has the wrong type or no
    /// textual form.
    fn serialize(&self, value: &Value) -> Result<String, ValuatorError>;
}

/// Reads slot text verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextValuator;

impl Valuator for TextValuator {
    fn name(&self) -> &'static str {
        "text"
    }

    fn deserialize(&self, text: &str) -> Result<Value, ValuatorError> {
        Ok(Value::Text(text.to_owned()))
    }

    fn serialize(&self, value: &Value) -> Result<String, ValuatorError> {
        value
            .as_text()
            .map(str::to_owned)
            .ok_or_else(|| ValuatorError::unsupported(self.name(), value.kind()))
    }
}

/// Reads quoted string literals such as `"red"` or `'Helvetica'`.
///
/// Double-quoted text uses JSON escaping. Single-quoted text escapes only
/// the backslash and the single quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotedStringValuator {
    quote: char,
}

impl QuotedStringValuator {
    /// Creates a valuator writing double-quoted literals.
    #[must_use]
    pub const fn new() -> Self {
        Self { quote: '"' }
    }

    /// Creates a valuator keeping the quote character of `raw`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        if raw.starts_with('\'') {
            Self { quote: '\'' }
        } else {
            Self::new()
        }
    }

    /// Returns the quote character written.
    #[must_use]
    pub const fn quote(&self) -> char {
        self.quote
    }

    fn unreadable(self, text: &str, reason: impl Into<String>) -> ValuatorError {
        ValuatorError::unreadable(self.name(), text, reason)
    }
}

impl Default for QuotedStringValuator {
    fn default() -> Self {
        Self::new()
    }
}

fn unescape_single_quoted(inner: &str) -> Option<String> {
    let mut output = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(current) = chars.next() {
        match current {
            '\\' => output.push(chars.next()?),
            '\'' => return None,
            other => output.push(other),
        }
    }
    Some(output)
}

impl Valuator for QuotedStringValuator {
    fn name(&self) -> &'static str {
        "quoted string"
    }

    fn deserialize(&self, text: &str) -> Result<Value, ValuatorError> {
        match text.chars().next() {
            Some('"') => serde_json::from_str::<String>(text)
                .map(Value::Text)
                .map_err(|error| self.unreadable(text, error.to_string())),
            Some('\'') => text
                .strip_prefix('\'')
                .and_then(|rest| rest.strip_suffix('\''))
                .and_then(unescape_single_quoted)
                .map(Value::Text)
                .ok_or_else(|| self.unreadable(text, "unterminated single-quoted string")),
            _ => Err(self.unreadable(text, "expected a quoted string")),
        }
    }

    fn serialize(&self, value: &Value) -> Result<String, ValuatorError> {
        let text = value
            .as_text()
            .ok_or_else(|| ValuatorError::unsupported(self.name(), value.kind()))?;
        if self.quote == '"' {
            return serde_json::to_string(text)
                .map_err(|error| self.unreadable(text, error.to_string()));
        }
        let mut output = String::with_capacity(text.len() + 2);
        output.push('\'');
        for current in text.chars() {
            if matches!(current, '\\' | '\'') {
                output.push('\\');
            }
            output.push(current);
        }
        output.push('\'');
        Ok(output)
    }
}

/// Writes a finite number in its shortest round-tripping decimal form.
fn format_number(number: f64) -> Result<String, ValuatorError> {
    if !number.is_finite() {
        return Err(ValuatorError::NonFinite {
            value: number.to_string(),
        });
    }
    Ok(number.to_string())
}

fn parse_number(valuator: &'static str, text: &str, digits: &str) -> Result<f64, ValuatorError> {
    let number: f64 = digits
        .parse()
        .map_err(|_| ValuatorError::unreadable(valuator, text, "expected a decimal number"))?;
    if !number.is_finite() {
        return Err(ValuatorError::unreadable(
            valuator,
            text,
            "number is not finite",
        ));
    }
    Ok(number)
}

/// Reads decimal number literals such as `3`, `-0.5`, or `1e3`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberValuator;

impl Valuator for NumberValuator {
    fn name(&self) -> &'static str {
        "number"
    }

    fn deserialize(&self, text: &str) -> Result<Value, ValuatorError> {
        parse_number(self.name(), text, text.trim()).map(Value::Number)
    }

    fn serialize(&self, value: &Value) -> Result<String, ValuatorError> {
        let number = value
            .as_number()
            .ok_or_else(|| ValuatorError::unsupported(self.name(), value.kind()))?;
        format_number(number)
    }
}

/// Splits `10px` into `("10", "px")`.
///
/// The numeric part is an optional sign, digits, and at most one decimal
/// point; everything after it is the unit.
fn split_dimension(text: &str) -> (&str, &str) {
    let mut seen_point = false;
    let end = text
        .char_indices()
        .find(|&(index, current)| match current {
            '+' | '-' => index != 0,
            '.' if !seen_point => {
                seen_point = true;
                false
            }
            digit => !digit.is_ascii_digit(),
        })
        .map_or(text.len(), |(index, _)| index);
    text.split_at(end)
}

/// Reads numbers with a unit suffix such as `10px`, `1.5em`, or `50%`.
///
/// The unit comes from the raw text the valuator is built for and is kept
/// when writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionValuator {
    unit: String,
}

impl DimensionValuator {
    /// Creates a valuator for the given unit.
    #[must_use]
    pub fn new(unit: impl Into<String>) -> Self {
        Self { unit: unit.into() }
    }

    /// Creates a valuator keeping the unit of `raw`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let (_, unit) = split_dimension(raw.trim());
        Self::new(unit)
    }

    /// Returns the unit written after every number.
    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }
}

impl Valuator for DimensionValuator {
    fn name(&self) -> &'static str {
        "dimension"
    }

    fn deserialize(&self, text: &str) -> Result<Value, ValuatorError> {
        let (digits, unit) = split_dimension(text.trim());
        if unit != self.unit {
            return Err(ValuatorError::unreadable(
                self.name(),
                text,
                format!("expected unit '{}'", self.unit),
            ));
        }
        parse_number(self.name(), text, digits).map(Value::Number)
    }

    fn serialize(&self, value: &Value) -> Result<String, ValuatorError> {
        let number = value
            .as_number()
            .ok_or_else(|| ValuatorError::unsupported(self.name(), value.kind()))?;
        Ok(format!("{}{}", format_number(number)?, self.unit))
    }
}

/// Reads `true` and `false` in any capitalisation.
///
/// Written values are lower case unless the raw text started with an upper
/// case letter, as Python's `True` does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanValuator {
    capitalised: bool,
}

impl BooleanValuator {
    /// Creates a valuator writing lower-case literals.
    #[must_use]
    pub const fn new() -> Self {
        Self { capitalised: false }
    }

    /// Creates a valuator keeping the capitalisation of `raw`.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self {
            capitalised: raw.trim().starts_with(|first: char| first.is_ascii_uppercase()),
        }
    }
}

impl Valuator for BooleanValuator {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn deserialize(&self, text: &str) -> Result<Value, ValuatorError> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("true") {
            Ok(Value::Boolean(true))
        } else if trimmed.eq_ignore_ascii_case("false") {
            Ok(Value::Boolean(false))
        } else {
            Err(ValuatorError::unreadable(
                self.name(),
                text,
                "expected true or false",
            ))
        }
    }

    fn serialize(&self, value: &Value) -> Result<String, ValuatorError> {
        let flag = value
            .as_boolean()
            .ok_or_else(|| ValuatorError::unsupported(self.name(), value.kind()))?;
        let literal = match (flag, self.capitalised) {
            (true, false) => "true",
            (false, false) => "false",
            (true, true) => "True",
            (false, true) => "False",
        };
        Ok(literal.to_owned())
    }
}
