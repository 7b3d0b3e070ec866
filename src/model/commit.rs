//! Commit summary data model

use std::collections::HashSet;

use chrono::{DateTime, FixedOffset, Timelike};

use crate::model::LineRecord;

/// One commit, summarized from the line records that belong to it
#[derive(Debug, Clone, PartialEq)]
pub struct Commit {
    /// Commit identifier (full hash as it appears in the log)
    pub id: String,

    /// Author of the commit, taken from the first record in log order
    pub author: String,

    /// Commit timestamp, taken from the first record in log order
    pub datetime: DateTime<FixedOffset>,

    /// Fractional hour of day in the author's offset, in `[0.0, 24.0)`
    pub hour_frac: f64,

    /// Number of line records that belong to this commit
    pub total_lines: usize,

    /// The records themselves, in log order
    pub lines: Vec<LineRecord>,
}

impl Commit {
    /// Build a commit summary from its records. The first record in log
    /// order supplies the commit-level metadata; per-record inconsistencies
    /// are not reconciled. `None` when `lines` is empty.
    pub fn from_lines(id: String, lines: Vec<LineRecord>) -> Option<Self> {
        let first = lines.first()?;
        let datetime = first.datetime;
        Some(Self {
            id,
            author: first.author.clone(),
            datetime,
            hour_frac: hour_frac(datetime),
            total_lines: lines.len(),
            lines,
        })
    }

    /// Abbreviated commit id for display
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map(|(i, _)| i)
            .unwrap_or(self.id.len());
        &self.id[..end]
    }

    /// Number of distinct files touched by this commit
    pub fn file_count(&self) -> usize {
        self.lines
            .iter()
            .map(|r| r.file.as_str())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Hour of day plus minutes as a fraction, e.g. 14:30 becomes 14.5
fn hour_frac(datetime: DateTime<FixedOffset>) -> f64 {
    f64::from(datetime.hour()) + f64::from(datetime.minute()) / 60.0
}
