//! Pattern finders producing [`Fragment`](crate::Fragment)s.
//!
//! The structural finder parses a document and walks its tree with a
//! [`NodePattern`]; the regex finder scans the raw text. Both stop after
//! [`EngineConfig::max_fragments_per_pass`](loupe_core::EngineConfig)
//! fragments.

mod patterns;
mod structural;
mod textual;

pub use self::patterns::{CssRulePattern, JsonPropertyPattern, NodeTypePattern};
pub use self::structural::{Descent, NodePattern, StructuralPatternFinder, find_matches};
pub use self::textual::RegexPatternFinder;
