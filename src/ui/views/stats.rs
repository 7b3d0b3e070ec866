//! Summary statistics strip
//!
//! Six aggregate figures over the whole log, in two rows of three.
//! These come from the full dataset and never change with the story
//! position.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::Summary;
use crate::ui::{components, theme};

/// Render the summary strip. Needs four inner rows; smaller areas get
/// the border only.
pub fn render_stats(frame: &mut Frame, area: Rect, summary: &Summary) {
    let title = Line::from(" Summary ").bold().cyan().centered();
    let block = components::bordered_block(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 4 || inner.width < 24 {
        return;
    }

    let [top, bottom] =
        Layout::vertical([Constraint::Length(2), Constraint::Length(2)]).areas(inner);
    render_stat_row(
        frame,
        top,
        &[
            ("Lines of code", summary.total_lines.to_string()),
            ("Commits", summary.total_commits.to_string()),
            ("Largest commit", summary.max_commit_lines.to_string()),
        ],
    );
    render_stat_row(
        frame,
        bottom,
        &[
            ("Longest line", summary.longest_line.to_string()),
            ("Avg line length", summary.mean_line_length.to_string()),
            ("Avg commit hour", summary.hour_label()),
        ],
    );
}

fn render_stat_row(frame: &mut Frame, area: Rect, cells: &[(&str, String); 3]) {
    let columns: [Rect; 3] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area);
    for ((label, value), cell) in cells.iter().zip(columns) {
        let lines = vec![
            Line::from(Span::styled(*label, theme::stats::LABEL)),
            Line::from(Span::styled(value.clone(), theme::stats::VALUE)).bold(),
        ];
        frame.render_widget(Paragraph::new(lines), cell);
    }
}
