//! Ready-made templates for the common document shapes.

use std::sync::Arc;

use loupe_core::EngineConfig;
use loupe_syntax::{
    CssRulePattern, JsonPropertyPattern, LanguageRegistry, RegexPatternFinder,
    StructuralPatternFinder, SyntaxError,
};

use crate::insertion::{CssBlockInsertion, JsonObjectInsertion, NoInsertion};
use crate::specification::SlotSpecification;
use crate::template::Template;

/// Binds the members of every JSON object stored under `key`.
///
/// Each object's properties become slots by key. Absent keys are inserted
/// after the object's last property.
#[must_use]
pub fn json_object_template(
    registry: Arc<LanguageRegistry>,
    key: &str,
    specification: SlotSpecification,
    config: EngineConfig,
) -> Template {
    let pattern = JsonPropertyPattern::new(key).with_value_type("Object");
    Template::new(
        StructuralPatternFinder::new(registry, pattern, config),
        specification,
        JsonObjectInsertion,
    )
}

/// Binds the declarations of every CSS rule with `selector`.
///
/// Absent properties are inserted after the block's last declaration.
#[must_use]
pub fn css_rule_template(
    registry: Arc<LanguageRegistry>,
    selector: &str,
    specification: SlotSpecification,
    config: EngineConfig,
) -> Template {
    Template::new(
        StructuralPatternFinder::new(registry, CssRulePattern::new(selector), config),
        specification,
        CssBlockInsertion,
    )
}

/// Binds the named groups of every match of `pattern`.
///
/// Textual matches have no structure to insert into, so absent groups
/// cannot be inserted.
///
/// # Errors
///
/// Returns [`SyntaxError::InvalidRegex`] when `pattern` does not compile.
pub fn regex_template(
    pattern: &str,
    specification: SlotSpecification,
    config: EngineConfig,
) -> Result<Template, SyntaxError> {
    let finder = RegexPatternFinder::with_config(pattern, config)?;
    Ok(Template::new(finder, specification, NoInsertion))
}
