//! Spotrep: streaming reader for SpotBugs/FindBugs XML defect reports.
//!
//! This is the main entry point for the `spotrep` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and reports
//! errors on stderr.

mod cli;
mod commands;

use std::process::ExitCode;

use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Diagnostics go to stderr so command output stays pipeable.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
