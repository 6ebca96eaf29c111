//! Streaming reader for SpotBugs/FindBugs XML defect reports.
//!
//! The core of the crate is [`report::XmlReportParser`], which walks a
//! report in one forward pass and produces [`report::BugInstance`] values
//! with their source-line annotations, ready for correlation against
//! project sources. The library owns no CLI and reads no configuration;
//! the bundled `spotrep` binary is just one consumer.

pub mod error;
pub mod report;

pub use error::{Result, SpotrepError};
pub use report::{BugInstance, SourceLineAnnotation, XmlReportParser};
