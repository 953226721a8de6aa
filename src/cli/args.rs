//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report whether a comment carries the marker tag
//! - `clean`: Print the comment with directive lines removed
//! - `lines`: Show how each line of a comment is classified
//! - `init`: Initialize the mcptag configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the comment commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// File holding the comment text (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Marker tag to look for, without the leading `@` (overrides config file)
    #[arg(long, env = "MCPTAG_TAG")]
    pub tag: Option<String>,

    /// Literal directive prefix to strip (overrides config file)
    /// Can be specified multiple times: --strip-prefix buf:lint:ignore --strip-prefix nolint
    #[arg(long = "strip-prefix", value_name = "PREFIX")]
    pub strip_prefixes: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Only report through the exit status
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Args)]
pub struct CleanCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct LinesCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a comment carries the marker tag (exit status 1 if not)
    Check(CheckCommand),
    /// Print a comment with all directive lines removed
    Clean(CleanCommand),
    /// Show the classification of every line of a comment
    Lines(LinesCommand),
    /// Initialize a new .mcptagrc.json configuration file
    Init,
}
