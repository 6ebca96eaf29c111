//! CLI argument parsing for spotrep.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spotrep: streaming reader for SpotBugs/FindBugs XML defect reports.
///
/// Reads the `BugInstance` elements out of an XML report in one forward
/// pass, without loading the whole document into memory, and prints them
/// for inspection.
#[derive(Parser, Debug)]
#[command(name = "spotrep")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for spotrep.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every bug in a report.
    ///
    /// Prints one line per bug with its type, primary source location,
    /// and message, in report order.
    List(ListArgs),

    /// Summarize a report by bug type.
    ///
    /// Prints a count per bug type, most frequent first, and a total.
    Summary(SummaryArgs),
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Path to the XML report (e.g. target/spotbugsXml.xml).
    pub report: PathBuf,

    /// Emit one JSON object per bug instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `summary` command.
#[derive(Parser, Debug)]
pub struct SummaryArgs {
    /// Path to the XML report.
    pub report: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list() {
        let cli = Cli::try_parse_from(["spotrep", "list", "target/spotbugsXml.xml"]).unwrap();
        if let Command::List(args) = cli.command {
            assert_eq!(args.report, PathBuf::from("target/spotbugsXml.xml"));
            assert!(!args.json);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_list_json() {
        let cli = Cli::try_parse_from(["spotrep", "list", "report.xml", "--json"]).unwrap();
        if let Command::List(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn parse_summary() {
        let cli = Cli::try_parse_from(["spotrep", "summary", "report.xml"]).unwrap();
        if let Command::Summary(args) = cli.command {
            assert_eq!(args.report, PathBuf::from("report.xml"));
        } else {
            panic!("Expected Summary command");
        }
    }

    #[test]
    fn report_path_is_required() {
        assert!(Cli::try_parse_from(["spotrep", "list"]).is_err());
    }
}
