//! Narrative position and the visible commit window
//!
//! The story walks commit history in time order. Entering a step reports
//! that step's timestamp as the current position, and the visible window
//! becomes every commit at or before it. Because commits are sorted
//! ascending, the window is always a prefix of the full list.

use chrono::{DateTime, FixedOffset};

use crate::model::Commit;

/// Owns the story position and derives the visible window from it
#[derive(Debug)]
pub struct Story {
    /// Commit timestamps in ascending order, one per commit
    cutoffs: Vec<DateTime<FixedOffset>>,
    /// Timestamp reported by the most recent step entry, `None` before
    /// any step has been entered
    position: Option<DateTime<FixedOffset>>,
    /// Number of commits at or before `position` (prefix length)
    visible: usize,
}

impl Story {
    /// Build from commits already sorted ascending by timestamp.
    /// Before any interaction the whole history is visible.
    pub fn new(commits: &[Commit]) -> Self {
        let cutoffs: Vec<_> = commits.iter().map(|c| c.datetime).collect();
        let visible = cutoffs.len();
        Self {
            cutoffs,
            position: None,
            visible,
        }
    }

    /// Enter a step: recompute the window from the reported position
    /// alone. Moving backwards through the story goes through the exact
    /// same recomputation, never an incremental delta.
    pub fn enter_step(&mut self, position: DateTime<FixedOffset>) {
        self.position = Some(position);
        self.visible = self.cutoffs.partition_point(|cutoff| *cutoff <= position);
    }

    /// Forget the position and show the whole history again
    pub fn reset(&mut self) {
        self.position = None;
        self.visible = self.cutoffs.len();
    }

    /// The current position, if a step has been entered
    pub fn position(&self) -> Option<DateTime<FixedOffset>> {
        self.position
    }

    /// How many commits the window currently holds
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// The visible window as a slice of the same sorted list this story
    /// was built from
    pub fn window<'a>(&self, commits: &'a [Commit]) -> &'a [Commit] {
        &commits[..self.visible.min(commits.len())]
    }
}
