//! Narrative view - the commit story, one step per commit
//!
//! The main interactive pane. Moving the selection enters that step,
//! which reports the step's timestamp as the new story position and
//! narrows what the chart and file breakdown show.

mod input;
mod render;

use std::cell::Cell;

use chrono::{DateTime, FixedOffset};

use crate::model::Commit;

/// Actions that the narrative can request from App
#[derive(Debug, Clone, PartialEq)]
pub enum StoryAction {
    /// No action needed
    None,
    /// A step was entered; its timestamp is the new story position
    StepEntered(DateTime<FixedOffset>),
    /// Drop the position and show the whole history
    ShowAll,
}

/// One narrative step, derived from a commit at startup
#[derive(Debug, Clone)]
pub struct Step {
    /// Full commit id
    pub id: String,
    /// Abbreviated id for display
    pub short_id: String,
    /// Commit timestamp (the position this step reports)
    pub datetime: DateTime<FixedOffset>,
    /// Narrative sentence for the step body
    pub sentence: String,
}

impl Step {
    fn from_commit(index: usize, commit: &Commit) -> Self {
        let date_label = commit.datetime.format("%A, %B %-d, %Y at %-I:%M %p");
        let flavor = if index == 0 {
            "my first commit, and it was glorious"
        } else {
            "another glorious commit"
        };
        let sentence = format!(
            "On {date_label}, I made {flavor}. I edited {} lines across {} files.",
            commit.total_lines,
            commit.file_count(),
        );
        Self {
            id: commit.id.clone(),
            short_id: commit.short_id().to_string(),
            datetime: commit.datetime,
            sentence,
        }
    }
}

/// Narrative view state
#[derive(Debug, Default)]
pub struct NarrativeView {
    /// Steps in story order (same order as the sorted commits)
    pub steps: Vec<Step>,
    /// Currently selected step
    pub selected_index: usize,
    /// Scroll offset in rendered lines, adjusted during render to keep
    /// the selection visible
    scroll_offset: Cell<usize>,
    /// Steps that fit the viewport, measured during render (drives paging)
    page_size: Cell<usize>,
}

pub mod empty_text {
    pub const TITLE: &str = "No commits in this log.";
    pub const HINT: &str = "Hint: point gitale at a loc CSV with data rows";
}

impl NarrativeView {
    /// Build steps from commits already sorted ascending by time
    pub fn new(commits: &[Commit]) -> Self {
        let steps = commits
            .iter()
            .enumerate()
            .map(|(i, c)| Step::from_commit(i, c))
            .collect();
        Self {
            steps,
            selected_index: 0,
            scroll_offset: Cell::new(0),
            page_size: Cell::new(1),
        }
    }

    /// Get the currently selected step
    pub fn selected_step(&self) -> Option<&Step> {
        self.steps.get(self.selected_index)
    }

    /// Move selection up. Returns true when the selection changed.
    pub fn move_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    /// Move selection down. Returns true when the selection changed.
    pub fn move_down(&mut self) -> bool {
        if self.selected_index + 1 < self.steps.len() {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    /// Move to the first step
    pub fn move_to_top(&mut self) -> bool {
        if self.selected_index != 0 && !self.steps.is_empty() {
            self.selected_index = 0;
            true
        } else {
            false
        }
    }

    /// Move to the last step
    pub fn move_to_bottom(&mut self) -> bool {
        let last = self.steps.len().saturating_sub(1);
        if self.selected_index != last && !self.steps.is_empty() {
            self.selected_index = last;
            true
        } else {
            false
        }
    }

    /// Move a whole page of steps (negative = up)
    pub fn move_page(&mut self, pages: isize) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        let step = (self.page_size.get().max(1) as isize) * pages;
        let target = (self.selected_index as isize + step)
            .clamp(0, self.steps.len() as isize - 1) as usize;
        if target != self.selected_index {
            self.selected_index = target;
            true
        } else {
            false
        }
    }

    /// Half a page of steps (negative = up)
    pub fn move_half_page(&mut self, direction: isize) -> bool {
        if self.steps.is_empty() {
            return false;
        }
        let step = ((self.page_size.get().max(2) / 2) as isize).max(1) * direction;
        let target = (self.selected_index as isize + step)
            .clamp(0, self.steps.len() as isize - 1) as usize;
        if target != self.selected_index {
            self.selected_index = target;
            true
        } else {
            false
        }
    }

    /// Action for the current selection's timestamp
    fn entered(&self) -> StoryAction {
        match self.selected_step() {
            Some(step) => StoryAction::StepEntered(step.datetime),
            None => StoryAction::None,
        }
    }
}
