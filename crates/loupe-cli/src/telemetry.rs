//! Log output for one CLI invocation.
//!
//! Logs go to stderr so stdout stays reserved for command output. Compact
//! lines carry only the level and the event, which is what a person
//! watching a single run needs; JSON lines add a UTC timestamp and the
//! target for log collectors.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::{Subscriber, subscriber::SetGlobalDefaultError};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};

use crate::config::{Config, LogFormat};

static TELEMETRY_GUARD: OnceCell<()> = OnceCell::new();

/// Errors encountered while configuring telemetry.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The log filter expression does not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),
    /// Another subscriber is already installed.
    #[error("failed to install telemetry subscriber: {0}")]
    Subscriber(SetGlobalDefaultError),
}

/// Installs the stderr subscriber on the first call.
///
/// Later calls leave the installed subscriber in place, even when their
/// configuration differs.
///
/// # Errors
///
/// Returns a [`TelemetryError`] when the filter is invalid or a foreign
/// subscriber was installed first.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    TELEMETRY_GUARD.get_or_try_init(|| {
        let ansi = io::stderr().is_terminal();
        let subscriber = subscriber(config, io::stderr, ansi)?;
        tracing::subscriber::set_global_default(subscriber).map_err(TelemetryError::Subscriber)
    })?;
    Ok(())
}

/// Builds the subscriber `config` asks for, writing through `writer`.
///
/// `ansi` colours compact lines; JSON lines are never coloured.
pub(crate) fn subscriber<W>(
    config: &Config,
    writer: W,
    ansi: bool,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(config.log_filter())
        .map_err(|error| TelemetryError::Filter(error.to_string()))?;
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(writer);

    Ok(match config.log_format() {
        LogFormat::Json => Box::new(
            builder
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .json()
                .flatten_event(true)
                .finish(),
        ),
        LogFormat::Compact => Box::new(
            builder
                .with_ansi(ansi)
                .without_time()
                .with_target(false)
                .compact()
                .finish(),
        ),
    })
}
