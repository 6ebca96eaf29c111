//! Lenient attribute parsing for defect reports.
//!
//! Report producers routinely emit attributes spotrep cannot use: line
//! numbers that are not numbers, primary flags that are not booleans.
//! These helpers normalize such values to defaults so one bad annotation
//! never aborts the whole report.

/// Parse a line-number attribute value.
///
/// Returns `None` for anything that is not a positive integer: empty
/// text, words, decimals, negative numbers, or values past `u32::MAX`.
/// Valid integer text round-trips exactly; a leading `+` is accepted.
pub(super) fn parse_line_number(value: &str) -> Option<u32> {
    value.parse().ok()
}

/// Parse a `primary` attribute value.
///
/// Only a case-insensitive `"true"` counts; every other token is `false`.
pub(super) fn parse_primary_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}
