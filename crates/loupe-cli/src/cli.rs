//! Command-line argument definitions for `loupe`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::LogFormat;

/// Structural search and templated editing for JSON, CSS, Python, math,
/// and plain text.
#[derive(Parser, Debug)]
#[command(name = "loupe", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Tracing filter directive.
    #[arg(long, env = "LOUPE_LOG_FILTER", default_value = "warn", global = true)]
    pub(crate) log_filter: String,
    /// Log line format written to stderr.
    #[arg(long, env = "LOUPE_LOG_FORMAT", default_value_t = LogFormat::Compact, global = true)]
    pub(crate) log_format: LogFormat,
    /// Maximum fragments reported per pass; overrides the engine
    /// configuration file.
    #[arg(long, env = "LOUPE_MAX_FRAGMENTS", global = true)]
    pub(crate) max_fragments: Option<usize>,
    /// JSON file holding the engine configuration.
    #[arg(long, value_name = "PATH", global = true)]
    pub(crate) engine_config: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

/// The file a command reads and how to interpret it.
#[derive(Args, Debug, Clone)]
pub(crate) struct Source {
    /// The document to read.
    pub(crate) file: PathBuf,
    /// Language identifier; inferred from the file extension when omitted.
    #[arg(long, short = 'l')]
    pub(crate) language: Option<String>,
}

/// Subcommands of `loupe`.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Command {
    /// Lists the built-in languages.
    Languages,
    /// Prints the syntax tree of a document.
    Tree {
        #[command(flatten)]
        source: Source,
    },
    /// Reports every match of a regular expression with its named groups.
    Grep {
        /// The regular expression.
        pattern: String,
        #[command(flatten)]
        source: Source,
    },
    /// Reports every node with a type tag, such as `Number` or `Call`.
    Nodes {
        /// The type tag to match.
        #[arg(long = "type", value_name = "TAG")]
        node_type: String,
        /// Stops descending into a node once it matches.
        #[arg(long)]
        skip_descendants: bool,
        #[command(flatten)]
        source: Source,
    },
    /// Writes slot values into the JSON objects or CSS rules of a document.
    Set(SetArgs),
}

/// Arguments of `loupe set`.
#[derive(Args, Debug, Clone)]
pub(crate) struct SetArgs {
    #[command(flatten)]
    pub(crate) source: Source,
    /// Edits the JSON objects stored under this key.
    #[arg(long, value_name = "KEY", conflicts_with = "selector", required_unless_present = "selector")]
    pub(crate) object: Option<String>,
    /// Edits the CSS rules with this selector.
    #[arg(long, value_name = "SELECTOR")]
    pub(crate) selector: Option<String>,
    /// Only edits the fragment with this zero-based index.
    #[arg(long, value_name = "INDEX")]
    pub(crate) fragment: Option<usize>,
    /// Rewrites the file instead of printing the result.
    #[arg(long)]
    pub(crate) write: bool,
    /// Assignments of the form `key=value`; values are JSON literals or
    /// bare text.
    #[arg(value_name = "KEY=VALUE", required = true, num_args = 1..)]
    pub(crate) assignments: Vec<String>,
}
