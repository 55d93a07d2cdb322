//! Command-line interface layer.
//!
//! Parsing lives in [`args`], each subcommand in [`commands`], and all
//! terminal output in `report` so the library stays usable without it.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub mod args;
pub mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::{ExitStatus, exit_status_from_result};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();
    init_logging(verbose);

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_target(false),
        )
        .with(filter)
        .try_init();
}
