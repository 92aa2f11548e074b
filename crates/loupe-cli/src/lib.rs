//! Command-line runtime for `loupe`.
//!
//! [`run`] parses arguments, resolves configuration, installs telemetry, and
//! executes one command against a document on disk. Reports go to the
//! supplied stdout; errors go to the supplied stderr. Log events are always
//! written to the process's stderr.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
pub mod config;
mod errors;
pub mod output;
pub mod telemetry;

use cli::Cli;
pub use config::{Config, LogFormat};
use errors::AppError;

const USAGE_EXIT_CODE: u8 = 2;

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    match try_run(args, stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            let _ = write!(stdout, "{}", error.render());
            ExitCode::SUCCESS
        }
        Err(AppError::CliUsage(error)) => {
            let _ = write!(stderr, "{}", error.render());
            ExitCode::from(USAGE_EXIT_CODE)
        }
        Err(error) => {
            let _ = writeln!(stderr, "loupe: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_run<I, W>(args: I, stdout: &mut W) -> Result<(), AppError>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let cli = Cli::try_parse_from(args).map_err(AppError::CliUsage)?;
    let config = Config::from_cli(&cli)?;
    telemetry::initialise(&config)?;
    commands::execute(&cli.command, &config, stdout)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests;
