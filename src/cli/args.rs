//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Run catalog checks (unfinished, conflicts, placeholders, etc.)
//! - `lookup`: Print the string an application would display for a message
//! - `fmt`: Rewrite catalogs in canonical `lupdate` layout
//! - `stats`: Translation progress per catalog and context
//! - `export`: Dump catalog entries as JSON
//! - `init`: Initialize tsglot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::commands::check::CheckRule;

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

    /// Get the verbose flag from the command's args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Fmt(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.common.verbose,
            Some(Command::Lookup(cmd)) => cmd.verbose,
            Some(Command::Export(cmd)) => cmd.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by commands that scan a project.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root to scan for .ts catalogs
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Parser)]
pub struct FmtArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,
}

#[derive(Debug, Args)]
pub struct FmtCommand {
    #[command(flatten)]
    pub args: FmtArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LookupCommand {
    /// Catalog file to read
    pub file: PathBuf,

    /// Context (owning UI component) of the message
    pub context: String,

    /// Source text to translate
    pub source: String,

    /// Disambiguating comment
    #[arg(long)]
    pub comment: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Catalog file to read
    pub file: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for unfinished, conflicting or inconsistent translations
    Check(CheckCommand),
    /// Print the displayed string for a message (translation or source fallback)
    Lookup(LookupCommand),
    /// Rewrite catalogs in canonical lupdate layout
    Fmt(FmtCommand),
    /// Show translation progress per catalog and context
    Stats(StatsCommand),
    /// Export catalog entries as JSON
    Export(ExportCommand),
    /// Initialize a new .tsglotrc.json configuration file
    Init,
}
