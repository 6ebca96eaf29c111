//! Defect report model for spotrep.
//!
//! A SpotBugs/FindBugs XML report is a single root element holding zero or
//! more `BugInstance` elements:
//!
//! ```text
//! <BugCollection>
//!   <BugInstance type="URF_UNREAD_FIELD">
//!     <LongMessage>Unread field: com.example.Foo.count</LongMessage>
//!     <SourceLine classname="com.example.Foo" start="12" end="14" primary="true"/>
//!   </BugInstance>
//! </BugCollection>
//! ```
//!
//! [`XmlReportParser`] streams a report into [`BugInstance`] values in a
//! single forward pass; each bug owns its [`SourceLineAnnotation`]s in
//! document order. Attributes that are absent or malformed degrade to
//! defaults instead of failing the report.

use std::fmt;

use serde::Serialize;

mod helpers;
mod parser;


pub use parser::XmlReportParser;

/// One defect occurrence from a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BugInstance {
    /// Defect-category token, as reported. Opaque: spotrep does not
    /// validate it against any rule catalog.
    #[serde(rename = "type")]
    pub bug_type: String,

    /// Human-readable description; empty when the report carries none.
    pub long_message: String,

    /// Source locations in document order. Fixed once the parser has
    /// finished the element.
    source_lines: Vec<SourceLineAnnotation>,
}

impl BugInstance {
    pub(crate) fn new(
        bug_type: String,
        long_message: String,
        source_lines: Vec<SourceLineAnnotation>,
    ) -> Self {
        Self {
            bug_type,
            long_message,
            source_lines,
        }
    }

    /// The source locations attached to this bug, in document order.
    pub fn source_lines(&self) -> &[SourceLineAnnotation] {
        &self.source_lines
    }

    /// The authoritative location for this bug.
    ///
    /// SpotBugs documents exactly one annotation as primary per bug, but
    /// real reports violate that; when none is flagged, the first
    /// annotation stands in. A bug without any location returns `None`,
    /// which callers must treat as legitimate, not as a failure.
    pub fn primary_source_line(&self) -> Option<&SourceLineAnnotation> {
        self.source_lines
            .iter()
            .find(|line| line.primary)
            .or_else(|| self.source_lines.first())
    }
}

/// One source location attached to a [`BugInstance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLineAnnotation {
    /// First line of the range, when the report carries a usable value.
    pub start: Option<u32>,

    /// Last line of the range, when the report carries a usable value.
    pub end: Option<u32>,

    /// Whether the report flags this as the authoritative location.
    pub primary: bool,

    /// Fully qualified name of the reported type, possibly nested
    /// (e.g. `com.example.Outer$Inner`).
    pub class_name: String,
}

impl SourceLineAnnotation {
    /// Key of the compilation unit containing this location: the class
    /// name truncated at the first nested-type separator.
    ///
    /// `com.example.Outer$Inner` maps back to `com.example.Outer`; a name
    /// without a `$` is returned unchanged.
    pub fn source_file_key(&self) -> &str {
        match self.class_name.find('$') {
            Some(sep) => &self.class_name[..sep],
            None => &self.class_name,
        }
    }
}

impl fmt::Display for SourceLineAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_name)?;
        match (self.start, self.end) {
            (Some(start), Some(end)) if end != start => write!(f, ":{start}-{end}"),
            (Some(start), _) => write!(f, ":{start}"),
            (None, _) => Ok(()),
        }
    }
}
