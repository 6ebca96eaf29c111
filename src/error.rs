//! Error types for spotrep.
//!
//! Uses thiserror for derive macros. The core can only fail in two ways:
//! the report file is missing, or its content cannot be parsed as XML.
//! Everything else a report producer gets wrong (bad line numbers, missing
//! attributes, unknown elements) degrades to defaults instead of erroring.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for spotrep operations.
///
/// Both variants carry the resolved absolute path of the report so the
/// message always names the offending file. Both are fatal for the call
/// that produced them; the caller may retry by re-constructing the parser.
#[derive(Error, Debug)]
pub enum SpotrepError {
    /// The defect report does not exist at the resolved path.
    #[error("defect report not found at '{}'", path.display())]
    ReportNotFound {
        /// Resolved absolute path of the missing report.
        path: PathBuf,
    },

    /// The defect report could not be read as well-formed XML.
    #[error("unable to parse defect report '{}': {source}", path.display())]
    ReportParse {
        /// Resolved absolute path of the report.
        path: PathBuf,
        /// The underlying tokenization, encoding, or IO failure.
        #[source]
        source: quick_xml::Error,
    },
}

/// Result type alias for spotrep operations.
pub type Result<T> = std::result::Result<T, SpotrepError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[test]
    fn not_found_message_names_the_path() {
        let err = SpotrepError::ReportNotFound {
            path: PathBuf::from("/work/target/spotbugsXml.xml"),
        };
        assert_eq!(
            err.to_string(),
            "defect report not found at '/work/target/spotbugsXml.xml'"
        );
    }

    #[test]
    fn parse_message_names_path_and_cause() {
        let cause = quick_xml::Error::Io(Arc::new(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "unexpected end of document inside 'BugInstance'",
        )));
        let err = SpotrepError::ReportParse {
            path: PathBuf::from("/work/report.xml"),
            source: cause,
        };
        let message = err.to_string();
        assert!(message.starts_with("unable to parse defect report '/work/report.xml'"));
        assert!(message.contains("unexpected end of document"));
    }

    #[test]
    fn parse_error_exposes_its_source() {
        use std::error::Error as _;

        let cause = quick_xml::Error::Io(Arc::new(io::Error::from(io::ErrorKind::UnexpectedEof)));
        let err = SpotrepError::ReportParse {
            path: PathBuf::from("/work/report.xml"),
            source: cause,
        };
        assert!(err.source().is_some());
    }
}
