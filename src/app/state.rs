//! Application state and pane focus management

use std::cell::Cell;

use ratatui::layout::Rect;

use crate::loc;
use crate::model::{Commit, Notification, Summary};
use crate::story::Story;
use crate::ui::views::{ChartView, FilesView, NarrativeView, StoryAction};

/// Available views in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Story,
    Help,
}

/// Which dashboard pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Narrative,
    Files,
}

/// Dashboard pane rectangles from the last render, for mouse routing
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Panes {
    pub narrative: Rect,
    pub chart: Rect,
    pub files: Rect,
}

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Current view
    pub current_view: View,
    /// Focused dashboard pane
    pub focus: Focus,
    /// Full commit history, ascending by timestamp
    pub commits: Vec<Commit>,
    /// Aggregates over the whole log, computed once at startup
    pub summary: Summary,
    /// Story position; everything at or before it is visible
    pub story: Story,
    /// Narrative pane state
    pub narrative: NarrativeView,
    /// Chart pane state
    pub chart: ChartView,
    /// File breakdown pane state
    pub files: FilesView,
    /// Base URL for commit links in the hover tooltip
    pub repo_url: Option<String>,
    /// Notification to display (info/warning messages)
    pub notification: Option<Notification>,
    /// Last pointer position, anchors the hover tooltip
    pub(crate) pointer: Option<(u16, u16)>,
    /// Pane rectangles from the last render (Cell for interior mutability)
    pub(crate) panes: Cell<Panes>,
    /// Last known main area height (updated during render)
    pub(crate) last_frame_height: Cell<u16>,
    /// Help view scroll offset
    pub(crate) help_scroll: u16,
}

impl App {
    /// Construct the app over an aggregated commit history.
    ///
    /// `skipped` is the count of malformed log rows the loader dropped;
    /// a warning notification reports it when nonzero.
    pub fn new(commits: Vec<Commit>, skipped: usize, repo_url: Option<String>) -> Self {
        let summary = loc::summarize(&commits);
        let story = Story::new(&commits);
        let narrative = NarrativeView::new(&commits);
        let mut chart = ChartView::new(&commits);
        let mut files = FilesView::new();
        let window = story.window(&commits);
        chart.update(window);
        files.update(window);

        let notification = (skipped > 0)
            .then(|| Notification::warning(format!("Skipped {skipped} malformed log rows")));

        Self {
            running: true,
            current_view: View::Story,
            focus: Focus::Narrative,
            commits,
            summary,
            story,
            narrative,
            chart,
            files,
            repo_url,
            notification,
            pointer: None,
            panes: Cell::new(Panes::default()),
            last_frame_height: Cell::new(24),
            help_scroll: 0,
        }
    }

    /// Push the story window into the panes that follow it
    pub(crate) fn apply_story(&mut self) {
        let window = self.story.window(&self.commits);
        self.chart.update(window);
        self.files.update(window);
    }

    /// React to a narrative action by moving the story position
    pub(crate) fn handle_story_action(&mut self, action: StoryAction) {
        match action {
            StoryAction::None => {}
            StoryAction::StepEntered(position) => {
                self.story.enter_step(position);
                self.apply_story();
            }
            StoryAction::ShowAll => {
                self.story.reset();
                self.apply_story();
                self.notification = Some(Notification::info(format!(
                    "Showing all {} commits",
                    self.commits.len()
                )));
            }
        }
    }

    /// Switch focus between the narrative and files panes (Tab key)
    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Narrative => Focus::Files,
            Focus::Files => Focus::Narrative,
        };
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        self.running = false;
    }

    /// Idle tick between input events
    pub fn on_tick(&mut self) {
        self.clear_expired_notification();
    }

    /// Clear expired notification
    pub(crate) fn clear_expired_notification(&mut self) {
        if let Some(ref notification) = self.notification
            && notification.is_expired()
        {
            self.notification = None;
        }
    }
}
