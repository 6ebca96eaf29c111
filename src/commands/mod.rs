//! Command implementations for spotrep.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command opens the report through the library's
//! [`XmlReportParser`] and only differs in how it prints the result.

use std::collections::BTreeMap;

use anyhow::Result;
use spotrep::XmlReportParser;

use crate::cli::{Command, ListArgs, SummaryArgs};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::List(args) => cmd_list(args),
        Command::Summary(args) => cmd_summary(args),
    }
}

/// Print every bug in report order.
///
/// Plain output is one tab-separated line per bug: type, primary source
/// location (`-` when the bug has none), message. With `--json`, each bug
/// becomes one JSON object per line.
fn cmd_list(args: ListArgs) -> Result<()> {
    let parser = XmlReportParser::new(&args.report)?;
    for bug in parser.bug_instances()? {
        if args.json {
            println!("{}", serde_json::to_string(&bug)?);
        } else {
            match bug.primary_source_line() {
                Some(line) => println!("{}\t{}\t{}", bug.bug_type, line, bug.long_message),
                None => println!("{}\t-\t{}", bug.bug_type, bug.long_message),
            }
        }
    }
    Ok(())
}

/// Print a per-type count, most frequent first, then a total.
fn cmd_summary(args: SummaryArgs) -> Result<()> {
    let parser = XmlReportParser::new(&args.report)?;
    let bugs = parser.bug_instances()?;

    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for bug in &bugs {
        *counts.entry(bug.bug_type.as_str()).or_default() += 1;
    }

    let mut ordered: Vec<(&str, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    for (bug_type, count) in ordered {
        println!("{count:>6}  {bug_type}");
    }
    println!("{:>6}  total", bugs.len());
    Ok(())
}
