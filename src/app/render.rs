//! Rendering logic for the application

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::state::{App, Focus, Panes, View};
use crate::keys;
use crate::ui::views::render_stats;
use crate::ui::widgets::{
    build_window_prefix, max_help_scroll, render_help_panel, render_plain_status_bar,
    render_status_bar, render_tooltip,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_view {
            View::Story => self.render_story_view(frame),
            View::Help => self.render_help_view(frame),
        }
    }

    fn render_story_view(&self, frame: &mut Frame) {
        let area = frame.area();

        // Reserve the bottom row for the status bar
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let [stats_area, dashboard] =
            Layout::vertical([Constraint::Length(6), Constraint::Min(8)]).areas(main_area);
        let [narrative_area, right] =
            Layout::horizontal([Constraint::Percentage(42), Constraint::Percentage(58)])
                .areas(dashboard);
        let [chart_area, files_area] =
            Layout::vertical([Constraint::Percentage(62), Constraint::Percentage(38)]).areas(right);

        self.panes.set(Panes {
            narrative: narrative_area,
            chart: chart_area,
            files: files_area,
        });
        self.last_frame_height.set(main_area.height);

        render_stats(frame, stats_area, &self.summary);

        let notification = self.notification.as_ref().filter(|n| !n.is_expired());
        self.narrative.render(
            frame,
            narrative_area,
            self.story.visible_count(),
            notification,
            self.focus == Focus::Narrative,
        );
        self.chart.render(frame, chart_area);
        self.files
            .render(frame, files_area, self.focus == Focus::Files);

        let position = self
            .story
            .position()
            .map(|p| p.format("%b %-d, %Y %H:%M").to_string());
        let prefix = build_window_prefix(self.story.visible_count(), self.commits.len(), position);
        render_status_bar(
            frame,
            prefix,
            &keys::current_hints(self.current_view, self.focus),
        );

        // Tooltip paints last so it floats over the panes
        self.render_hover_tooltip(frame);
    }

    fn render_help_view(&self, frame: &mut Frame) {
        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        self.last_frame_height.set(main_area.height);

        let scroll = self.help_scroll.min(max_help_scroll(main_area.height));
        render_help_panel(frame, main_area, scroll);
        render_plain_status_bar(frame, &keys::current_hints(View::Help, self.focus));
    }

    fn render_hover_tooltip(&self, frame: &mut Frame) {
        let Some(pointer) = self.pointer else {
            return;
        };
        let Some(id) = self.chart.hovered() else {
            return;
        };
        let Some(commit) = self.commits.iter().find(|c| c.id == id) else {
            return;
        };
        render_tooltip(frame, commit, self.repo_url.as_deref(), pointer);
    }
}
