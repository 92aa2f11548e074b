//! Typed, editable views onto pattern matches.
//!
//! A [`Template`] runs a fragment provider over a [`loupe_core::Document`]
//! and binds each fragment's named captures to [`Slot`]s according to a
//! [`SlotSpecification`]. A slot reads its text through a [`Valuator`] and
//! turns a new [`Value`] into a [`loupe_core::TextEdit`] for the caller to
//! apply. Applying any edit makes every slot stale; recompute the template
//! against the edited document before computing further edits.
//!
//! ```ignore
//! let registry = Arc::new(LanguageRegistry::with_builtin_languages());
//! let specification = SlotSpecification::new().with("fill", providers::quoted_string());
//! let mut template =
//!     json_object_template(registry, "mark", specification, EngineConfig::default());
//! template.recompute(&document);
//! let edit = template.commit(0, "fill", &Value::from("blue"))?;
//! ```

mod error;
mod insertion;
mod provider;
mod slot;
mod specification;
mod template;
mod valuator;
mod value;
pub mod variants;

pub use error::{TemplateError, ValuatorError};
pub use insertion::{CssBlockInsertion, InsertionPolicy, JsonObjectInsertion, NoInsertion};
pub use provider::{ValuatorProvider, providers};
pub use slot::Slot;
pub use specification::SlotSpecification;
pub use template::{FragmentSlots, Template};
pub use valuator::{
    BooleanValuator, DimensionValuator, NumberValuator, QuotedStringValuator, TextValuator,
    Valuator,
};
pub use value::Value;

#[cfg(test)]
mod tests;
