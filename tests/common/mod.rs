//! Common test utilities for integration and scenario tests.
//!
//! Provides canned loc CSV logs and a helper for putting them on disk.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::path::Path;

use tempfile::TempDir;

/// Column header shared by the canned logs
pub const HEADER: &str = "commit,file,author,date,time,timezone,line,depth,length,type,datetime";

/// Two commit log: c1 with 3 lines at 09:00, c2 with 7 lines at 15:30.
///
/// Chosen so the aggregates are easy to check by hand: 10 records,
/// longest line 45, mean length 37.5 (rounds to 38), mean commit hour
/// (9.0 + 15.5) / 2 = 12.25, which labels as 12PM.
pub const TWO_COMMIT_LOG: &str = "\
commit,file,author,date,time,timezone,line,depth,length,type,datetime
c1,src/main.rs,alice,2024-01-01,09:00:00,+00:00,1,0,45,rs,2024-01-01T09:00:00+00:00
c1,src/main.rs,alice,2024-01-01,09:00:00,+00:00,2,1,40,rs,2024-01-01T09:00:00+00:00
c1,README.md,alice,2024-01-01,09:00:00,+00:00,1,0,20,md,2024-01-01T09:00:00+00:00
c2,src/main.rs,bob,2024-01-05,15:30:00,+00:00,3,1,45,rs,2024-01-05T15:30:00+00:00
c2,src/main.rs,bob,2024-01-05,15:30:00,+00:00,4,2,45,rs,2024-01-05T15:30:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,1,0,40,rs,2024-01-05T15:30:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,2,1,40,rs,2024-01-05T15:30:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,3,1,35,rs,2024-01-05T15:30:00+00:00
c2,README.md,bob,2024-01-05,15:30:00,+00:00,2,0,35,md,2024-01-05T15:30:00+00:00
c2,README.md,bob,2024-01-05,15:30:00,+00:00,3,1,30,md,2024-01-05T15:30:00+00:00
";

/// Log with one short row, one row with unusable timestamp, and one row
/// with malformed numeric fields that must degrade to sentinels
pub const MESSY_LOG: &str = "\
commit,file,author,date,time,timezone,line,depth,length,type,datetime
ok1,a.rs,alice,2024-02-01,10:00:00,+00:00,1,0,30,rs,2024-02-01T10:00:00+00:00
short,row
ok1,a.rs,alice,2024-02-01,10:00:00,+00:00,oops,0,,rs,2024-02-01T10:00:00+00:00
bad,b.rs,bob,????,??:??,+00:00,1,0,20,rs,not-a-date
ok2,\"weird, name.rs\",carol,2024-02-02,23:59:00,+00:00,2,1,50,rs,2024-02-02T23:59:00+00:00
";

/// A temporary loc CSV log on disk.
///
/// The file is cleaned up when the TestLog is dropped.
pub struct TestLog {
    dir: TempDir,
    path: std::path::PathBuf,
}

impl TestLog {
    /// Write `contents` as loc.csv inside a fresh temp directory.
    pub fn new(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("loc.csv");
        std::fs::write(&path, contents).expect("Failed to write log");
        Self { dir, path }
    }

    /// Path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
