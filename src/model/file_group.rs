//! Per-file grouping of line records

use crate::model::LineRecord;

/// All line records that touch one file, across a set of commits.
/// Borrowed from the commits it was derived from; rebuilt whenever the
/// visible window changes.
#[derive(Debug, Clone)]
pub struct FileGroup<'a> {
    /// File path shared by every record in the group
    pub name: &'a str,

    /// Records touching this file, in log order
    pub lines: Vec<&'a LineRecord>,
}

impl FileGroup<'_> {
    /// Number of line records in the group
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
