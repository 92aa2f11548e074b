//! Error types for valuators and templates.

use thiserror::Error;

/// Errors from reading or writing slot text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValuatorError {
    /// The text does not hold a value this valuator understands.
    #[error("{valuator} valuator cannot read '{text}': {reason}")]
    Unreadable {
        /// Name of the valuator.
        valuator: &'static str,
        /// The text that was read.
        text: String,
        /// Description of the problem.
        reason: String,
    },

    /// The value has a type this valuator does not write.
    #[error("{valuator} valuator cannot write {kind} values")]
    UnsupportedValue {
        /// Name of the valuator.
        valuator: &'static str,
        /// Type of the rejected value.
        kind: &'static str,
    },

    /// Infinite and NaN numbers have no literal form.
    #[error("cannot write non-finite number {value}")]
    NonFinite {
        /// The number as displayed.
        value: String,
    },
}

impl ValuatorError {
    /// Creates an unreadable text error.
    #[must_use]
    pub fn unreadable(
        valuator: &'static str,
        text: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Unreadable {
            valuator,
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported value error.
    #[must_use]
    pub const fn unsupported(valuator: &'static str, kind: &'static str) -> Self {
        Self::UnsupportedValue { valuator, kind }
    }
}

/// Errors from template slot operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// The template holds fewer fragments than the index requires.
    #[error("no fragment at index {index}")]
    UnknownFragment {
        /// The requested fragment index.
        index: usize,
    },

    /// The key is not part of the slot specification.
    #[error("slot '{key}' is not declared")]
    UndeclaredSlot {
        /// The requested key.
        key: String,
    },

    /// The fragment has no text for this key.
    #[error("fragment {index} has no slot '{key}'")]
    MissingSlot {
        /// The fragment index.
        index: usize,
        /// The requested key.
        key: String,
    },

    /// The fragment already has text for this key; commit to it instead.
    #[error("fragment {index} already has slot '{key}'")]
    SlotPresent {
        /// The fragment index.
        index: usize,
        /// The requested key.
        key: String,
    },

    /// The template's insertion policy cannot place this key.
    #[error("cannot insert slot '{key}' into fragment {index}")]
    InsertionUnsupported {
        /// The fragment index.
        index: usize,
        /// The requested key.
        key: String,
    },

    /// The valuator rejected the value.
    #[error(transparent)]
    Valuator(#[from] ValuatorError),
}
