//! Hover tooltip widget
//!
//! Floats commit details next to the mouse pointer while a chart dot is
//! hovered. Cleared and redrawn every frame, so it never leaves residue
//! when the hover ends.

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::Commit;

/// Offset from the pointer so the tooltip does not sit under the cursor
const POINTER_GAP: u16 = 2;

/// Build the tooltip body for a commit
pub fn build_tooltip_lines(commit: &Commit, repo_url: Option<&str>) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                commit.short_id().to_string(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(" by "),
            Span::raw(commit.author.clone()),
        ]),
        Line::from(commit.datetime.format("%A, %B %-d, %Y").to_string()),
        Line::from(commit.datetime.format("%-I:%M %p").to_string()),
        Line::from(format!(
            "{} lines across {} files",
            commit.total_lines,
            commit.file_count()
        )),
    ];
    if let Some(base) = repo_url {
        lines.push(Line::from(
            Span::styled(
                format!("{base}{}", commit.id),
                Style::default().fg(Color::DarkGray),
            ),
        ));
    }
    lines
}

/// Render the tooltip near `pointer`, clamped to the frame
pub fn render_tooltip(frame: &mut Frame, commit: &Commit, repo_url: Option<&str>, pointer: (u16, u16)) {
    let area = frame.area();
    let lines = build_tooltip_lines(commit, repo_url);

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let width = (content_width + 2).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    if width < 3 || height < 3 {
        return;
    }

    let (px, py) = pointer;
    let x = if px + POINTER_GAP + width <= area.right() {
        px + POINTER_GAP
    } else {
        px.saturating_sub(POINTER_GAP + width).max(area.x)
    };
    let y = if py + 1 + height <= area.bottom() {
        py + 1
    } else {
        py.saturating_sub(height).max(area.y)
    };

    let tooltip_area = Rect {
        x,
        y,
        width,
        height,
    };

    frame.render_widget(Clear, tooltip_area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        tooltip_area,
    );
}
