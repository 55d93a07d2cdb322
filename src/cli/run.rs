//! Command dispatch for the tsglot CLI.

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, check::check, export::export, fmt::fmt, init::init, lookup::lookup,
        stats::stats,
    },
};

/// Run the parsed command and collect its result for reporting.
///
/// # Errors
///
/// Returns `Err` when the command cannot run at all (bad `--path`, invalid
/// config, unreadable catalog for `lookup`/`export`). Problems found inside
/// catalogs are returned as issues instead.
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Lookup(cmd)) => lookup(cmd),
        Some(Command::Fmt(cmd)) => fmt(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        Some(Command::Export(cmd)) => export(cmd),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
