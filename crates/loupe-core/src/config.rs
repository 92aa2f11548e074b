//! Engine configuration shared by the pattern finders.

use serde::{Deserialize, Serialize};

const DEFAULT_MAX_FRAGMENTS_PER_PASS: usize = 10_000;

const fn default_max_fragments_per_pass() -> usize {
    DEFAULT_MAX_FRAGMENTS_PER_PASS
}

/// Limits applied to every match pass.
///
/// # Defaults
///
/// - `max_fragments_per_pass`: 10 000
///
/// Missing fields take their default when deserialising, so an empty JSON
/// object is a valid configuration.
///
/// # Example
///
/// ```
/// use loupe_core::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.max_fragments_per_pass(), 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of fragments a finder reports before truncating.
    #[serde(default = "default_max_fragments_per_pass")]
    max_fragments_per_pass: usize,
}

impl EngineConfig {
    /// Creates a configuration with explicit limits.
    #[must_use]
    pub const fn new(max_fragments_per_pass: usize) -> Self {
        Self {
            max_fragments_per_pass,
        }
    }

    /// Returns the maximum number of fragments per pass.
    #[must_use]
    pub const fn max_fragments_per_pass(&self) -> usize {
        self.max_fragments_per_pass
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_fragments_per_pass: DEFAULT_MAX_FRAGMENTS_PER_PASS,
        }
    }
}
