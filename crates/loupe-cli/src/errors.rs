//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;

use loupe_core::EditError;
use loupe_syntax::SyntaxError;
use loupe_template::TemplateError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to read engine configuration {}: {source}", path.display())]
    ReadEngineConfig { path: PathBuf, source: io::Error },
    #[error("invalid engine configuration {}: {source}", path.display())]
    ParseEngineConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to read {}: {source}", path.display())]
    ReadDocument { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    WriteDocument { path: PathBuf, source: io::Error },
    #[error("cannot infer the language of {}; pass --language", path.display())]
    UndeterminedLanguage { path: PathBuf },
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    #[error("expected KEY=VALUE, found '{0}'")]
    MalformedAssignment(String),
    #[error("no fragment matched in {}", path.display())]
    NoFragments { path: PathBuf },
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("edits could not be applied: {0}")]
    Edit(#[from] EditError),
    #[error("failed to serialise output: {0}")]
    Serialise(serde_json::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}
