//! loc log loader
//!
//! One-shot: the whole log is read and parsed at startup. Rows that
//! cannot yield a usable timestamp are dropped and counted rather than
//! aborting the load; malformed numeric fields degrade to `None` within
//! an otherwise usable row.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset};

use super::LocError;
use super::csv::{Header, split_fields};
use crate::model::LineRecord;

/// Outcome of loading the log: the usable records plus a count of
/// dropped rows for user-facing feedback
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Records in file order
    pub records: Vec<LineRecord>,
    /// Data rows dropped (too few fields, or no usable timestamp)
    pub skipped: usize,
}

/// Read and parse the loc log at `path`
pub fn load_path(path: &Path) -> Result<LoadReport, LocError> {
    let text = fs::read_to_string(path)?;
    parse_log(&text)
}

/// Parse loc log text into line records.
///
/// The first non-empty line is the header; every later non-empty line is
/// a data row. Blank lines are ignored wherever they appear.
pub fn parse_log(text: &str) -> Result<LoadReport, LocError> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let header_line = lines
        .by_ref()
        .find(|l| !l.trim().is_empty())
        .ok_or(LocError::NoHeader)?;
    let header = Header::parse(header_line)?;

    let mut report = LoadReport::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(&header, line) {
            Some(record) => report.records.push(record),
            None => report.skipped += 1,
        }
    }
    Ok(report)
}

/// Parse one data row. `None` when the row is too short or carries no
/// usable timestamp.
fn parse_row(header: &Header, line: &str) -> Option<LineRecord> {
    let fields = split_fields(line);
    if fields.len() < header.width() {
        return None;
    }

    let field = |i: usize| fields.get(i).map(String::as_str).unwrap_or("").trim();

    let datetime = header
        .datetime
        .and_then(|i| parse_datetime(field(i)))
        .or_else(|| {
            rebuild_datetime(field(header.date), field(header.time), field(header.timezone))
        })?;

    Some(LineRecord {
        file: field(header.file).to_string(),
        commit: field(header.commit).to_string(),
        author: field(header.author).to_string(),
        datetime,
        line: parse_count(field(header.line)),
        depth: parse_count(field(header.depth)),
        length: parse_count(field(header.length)),
        kind: field(header.kind).to_string(),
    })
}

/// Parse an absolute timestamp, accepting RFC 3339 and the same shape
/// with a colon-less offset ("2025-02-04T12:03:09+0900")
fn parse_datetime(s: &str) -> Option<DateTime<FixedOffset>> {
    if s.is_empty() {
        return None;
    }
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

/// Rebuild the timestamp from the date/time/timezone columns.
/// An empty time means midnight; seconds are optional.
fn rebuild_datetime(date: &str, time: &str, timezone: &str) -> Option<DateTime<FixedOffset>> {
    if date.is_empty() || timezone.is_empty() {
        return None;
    }
    let time = match time {
        "" => "00:00:00",
        t => t,
    };
    let joined = format!("{date}T{time}{timezone}");
    parse_datetime(&joined)
        .or_else(|| DateTime::parse_from_str(&joined, "%Y-%m-%dT%H:%M%z").ok())
}

/// Numeric coercion with a `None` sentinel for anything unusable
fn parse_count(s: &str) -> Option<u32> {
    s.parse().ok()
}
