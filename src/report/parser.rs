//! Streaming parser for SpotBugs/FindBugs XML defect reports.
//!
//! Reports can be large, so the document is consumed in a single forward
//! pass; at no point is the XML tree materialized. Only the direct
//! children of the root are inspected for `BugInstance` elements, and only
//! the direct children of each `BugInstance` are inspected for
//! `LongMessage` and `SourceLine`; everything else is skipped wholesale,
//! which keeps the parser tolerant of report fields it does not know.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use crate::error::{Result, SpotrepError};

use super::helpers::{parse_line_number, parse_primary_flag};
use super::{BugInstance, SourceLineAnnotation};

type XmlResult<T> = std::result::Result<T, quick_xml::Error>;

/// Streaming reader for one on-disk defect report.
///
/// Each call to [`bug_instances`](Self::bug_instances) re-opens and fully
/// re-reads the report, so a parser instance is normally used exactly once
/// per report. Independent instances over distinct reports need no
/// coordination.
#[derive(Debug)]
pub struct XmlReportParser {
    report_path: PathBuf,
}

impl XmlReportParser {
    /// Open a parser for the report at `path`.
    ///
    /// Fails with [`SpotrepError::ReportNotFound`] if nothing exists at
    /// the path; the error carries the resolved absolute path.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let report_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if !report_path.exists() {
            return Err(SpotrepError::ReportNotFound { path: report_path });
        }
        Ok(Self { report_path })
    }

    /// The resolved absolute path of the report.
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Extract every `BugInstance` element from the report, in document
    /// order.
    ///
    /// The whole report parses or none of it does: any malformed XML fails
    /// the call with [`SpotrepError::ReportParse`] and no partial sequence
    /// is returned. The file handle is dropped with the reader on every
    /// exit path.
    pub fn bug_instances(&self) -> Result<Vec<BugInstance>> {
        debug!(report = %self.report_path.display(), "reading defect report");
        let mut reader = Reader::from_file(&self.report_path).map_err(|e| self.parse_error(e))?;
        let bugs = read_document(&mut reader).map_err(|e| self.parse_error(e))?;
        debug!(count = bugs.len(), "extracted bug instances");
        Ok(bugs)
    }

    fn parse_error(&self, source: quick_xml::Error) -> SpotrepError {
        SpotrepError::ReportParse {
            path: self.report_path.clone(),
            source,
        }
    }
}

/// Advance past the prolog to the document root, then scan the root's
/// direct children for `BugInstance` elements.
fn read_document<R: BufRead>(reader: &mut Reader<R>) -> XmlResult<Vec<BugInstance>> {
    let mut bugs = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => break,
            // A self-closing root has no children, so no bugs.
            Event::Empty(_) => return Ok(bugs),
            Event::Eof => return Err(structural_error("no root element in document")),
            _ => {}
        }
        buf.clear();
    }
    buf.clear();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(child) if child.local_name().as_ref() == b"BugInstance" => {
                let bug = read_bug_instance(reader, &child)?;
                bugs.push(bug);
            }
            // Skipping a non-BugInstance child consumes its whole subtree,
            // so a BugInstance nested inside one is never collected.
            Event::Start(child) => skip_element(reader, &child)?,
            Event::Empty(child) if child.local_name().as_ref() == b"BugInstance" => {
                let bug_type = attr_value(&child, b"type")?.unwrap_or_default();
                bugs.push(BugInstance::new(bug_type, String::new(), Vec::new()));
            }
            Event::Empty(_) => {}
            Event::End(_) => break,
            Event::Eof => return Err(structural_error("unexpected end of document inside root")),
            _ => {}
        }
        buf.clear();
    }

    Ok(bugs)
}

/// Read one `BugInstance` element: its `type` attribute plus its direct
/// `LongMessage` and `SourceLine` children. Unrecognized children are
/// skipped for forward compatibility with newer report fields.
fn read_bug_instance<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart<'_>,
) -> XmlResult<BugInstance> {
    let bug_type = attr_value(start, b"type")?.unwrap_or_default();
    let mut long_message = String::new();
    let mut source_lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(child) => match child.local_name().as_ref() {
                // The last LongMessage in document order wins.
                b"LongMessage" => long_message = collect_descendant_text(reader)?,
                b"SourceLine" => {
                    let line = source_line_from_attrs(&child)?;
                    // SpotBugs puts Message children inside SourceLine.
                    skip_element(reader, &child)?;
                    source_lines.push(line);
                }
                _ => skip_element(reader, &child)?,
            },
            Event::Empty(child) => match child.local_name().as_ref() {
                b"LongMessage" => long_message = String::new(),
                b"SourceLine" => source_lines.push(source_line_from_attrs(&child)?),
                _ => {}
            },
            Event::End(_) => break,
            Event::Eof => {
                return Err(structural_error(
                    "unexpected end of document inside 'BugInstance'",
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(BugInstance::new(bug_type, long_message, source_lines))
}

/// Concatenate the text of the current element and all of its
/// descendants, dropping any nested markup.
fn collect_descendant_text<R: BufRead>(reader: &mut Reader<R>) -> XmlResult<String> {
    let mut text = String::new();
    let mut depth = 0u32;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(t) => text.push_str(&reader.decoder().decode(&t)?),
            Event::Eof => {
                return Err(structural_error(
                    "unexpected end of document inside 'LongMessage'",
                ));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(text)
}

/// Build an annotation from the attributes of a `SourceLine` element.
///
/// Absent attributes keep their defaults; malformed values degrade
/// through the lenient helpers instead of failing the report.
fn source_line_from_attrs(start: &BytesStart<'_>) -> XmlResult<SourceLineAnnotation> {
    let mut annotation = SourceLineAnnotation {
        start: None,
        end: None,
        primary: false,
        class_name: String::new(),
    };

    for attr in start.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.local_name().as_ref() {
            b"start" => annotation.start = parse_line_number(&value),
            b"end" => annotation.end = parse_line_number(&value),
            b"primary" => annotation.primary = parse_primary_flag(&value),
            b"classname" => annotation.class_name = value.into_owned(),
            _ => {}
        }
    }

    Ok(annotation)
}

/// Read the value of one attribute, if present.
fn attr_value(start: &BytesStart<'_>, name: &[u8]) -> XmlResult<Option<String>> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Consume an element and its whole subtree without inspecting it.
fn skip_element<R: BufRead>(reader: &mut Reader<R>, start: &BytesStart<'_>) -> XmlResult<()> {
    let end = start.to_end().into_owned();
    let mut buf = Vec::new();
    reader.read_to_end_into(end.name(), &mut buf)?;
    Ok(())
}

/// A structural failure the underlying reader does not report itself.
fn structural_error(detail: &str) -> quick_xml::Error {
    quick_xml::Error::Io(Arc::new(io::Error::new(
        io::ErrorKind::UnexpectedEof,
        detail.to_string(),
    )))
}
