//! Data models for Gitale
//!
//! This module contains UI-independent data structures representing
//! the loc log: line records, commit summaries, and derived statistics.

mod commit;
mod file_group;
mod notification;
mod record;
mod summary;

pub use commit::Commit;
pub use file_group::FileGroup;
pub use notification::{Notification, NotificationKind};
pub use record::LineRecord;
pub use summary::Summary;
