//! Runtime configuration resolved from flags, environment, and files.

use std::fs;
use std::path::Path;

use loupe_core::EngineConfig;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::cli::Cli;
use crate::errors::AppError;

/// Supported log line formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    /// Human-readable single line output.
    #[default]
    Compact,
}

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    log_filter: String,
    log_format: LogFormat,
    engine: EngineConfig,
}

impl Config {
    /// Returns the tracing filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log line format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the engine limits.
    #[must_use]
    pub const fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Resolves the configuration of a parsed command line.
    ///
    /// The engine configuration file is read first; `--max-fragments`
    /// overrides its limit.
    pub(crate) fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let file_engine = cli
            .engine_config
            .as_deref()
            .map(load_engine_config)
            .transpose()?
            .unwrap_or_default();
        let engine = cli
            .max_fragments
            .map_or(file_engine, EngineConfig::new);
        Ok(Self {
            log_filter: cli.log_filter.clone(),
            log_format: cli.log_format,
            engine,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: String::from("warn"),
            log_format: LogFormat::default(),
            engine: EngineConfig::default(),
        }
    }
}

fn load_engine_config(path: &Path) -> Result<EngineConfig, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::ReadEngineConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| AppError::ParseEngineConfig {
        path: path.to_path_buf(),
        source,
    })
}
