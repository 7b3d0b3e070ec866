//! Line-change record data model

use chrono::{DateTime, FixedOffset};

/// One line touched by one commit - the atomic unit of the loc log
///
/// Numeric fields use `None` as the sentinel for values that failed
/// coercion; aggregates must skip them instead of folding them into
/// arithmetic.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRecord {
    /// File path the line belongs to
    pub file: String,

    /// Commit identifier the change belongs to
    pub commit: String,

    /// Author name or email
    pub author: String,

    /// Absolute timestamp of the change, in the author's UTC offset
    pub datetime: DateTime<FixedOffset>,

    /// Line number within the file
    pub line: Option<u32>,

    /// Indentation depth of the line
    pub depth: Option<u32>,

    /// Line length in characters
    pub length: Option<u32>,

    /// Category tag, usually the language or file type (e.g. "rs", "css")
    pub kind: String,
}
