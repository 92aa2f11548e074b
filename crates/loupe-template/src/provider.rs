//! Factories building a valuator for each captured text.

use std::sync::Arc;

use crate::valuator::Valuator;

/// Builds the valuator for one slot from the text the slot captured.
///
/// Providers are pure: the same raw text always yields an equivalent
/// valuator. Any `Fn(&str) -> Arc<dyn Valuator>` is a provider.
pub trait ValuatorProvider: Send + Sync {
    /// Returns the valuator for a slot holding `raw_text`.
    fn valuator_for(&self, raw_text: &str) -> Arc<dyn Valuator>;
}

impl<F> ValuatorProvider for F
where
    F: Fn(&str) -> Arc<dyn Valuator> + Send + Sync,
{
    fn valuator_for(&self, raw_text: &str) -> Arc<dyn Valuator> {
        self(raw_text)
    }
}

/// Providers for the built-in valuators.
pub mod providers {
    use std::sync::Arc;

    use super::ValuatorProvider;
    use crate::valuator::{
        BooleanValuator, DimensionValuator, NumberValuator, QuotedStringValuator, TextValuator,
        Valuator,
    };

    /// Reads slot text verbatim.
    #[must_use]
    pub fn text() -> impl ValuatorProvider {
        |_raw: &str| -> Arc<dyn Valuator> { Arc::new(TextValuator) }
    }

    /// Reads quoted strings, keeping the slot's quote character.
    #[must_use]
    pub fn quoted_string() -> impl ValuatorProvider {
        |raw: &str| -> Arc<dyn Valuator> { Arc::new(QuotedStringValuator::from_raw(raw)) }
    }

    /// Reads plain numbers.
    #[must_use]
    pub fn number() -> impl ValuatorProvider {
        |_raw: &str| -> Arc<dyn Valuator> { Arc::new(NumberValuator) }
    }

    /// Reads numbers with a unit, keeping the slot's unit.
    #[must_use]
    pub fn dimension() -> impl ValuatorProvider {
        |raw: &str| -> Arc<dyn Valuator> { Arc::new(DimensionValuator::from_raw(raw)) }
    }

    /// Reads booleans, keeping the slot's capitalisation.
    #[must_use]
    pub fn boolean() -> impl ValuatorProvider {
        |raw: &str| -> Arc<dyn Valuator> { Arc::new(BooleanValuator::from_raw(raw)) }
    }
}
