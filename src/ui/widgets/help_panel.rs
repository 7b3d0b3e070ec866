//! Help panel widget
//!
//! Full-screen key binding reference. `build_help_lines()` is the single
//! source of truth so scroll clamping can count the same lines rendering
//! sees.

use ratatui::{
    prelude::*,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::keys;

/// Build all help panel lines
pub fn build_help_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from("Key bindings:".bold()));
    lines.push(Line::from(""));

    push_section(&mut lines, "Global", keys::GLOBAL_KEYS);
    push_section(&mut lines, "Navigation", keys::NAV_KEYS);
    push_section(&mut lines, "Story", keys::STORY_KEYS);
    push_section(&mut lines, "Chart", keys::CHART_KEYS);
    push_section(&mut lines, "File Breakdown", keys::FILES_KEYS);

    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, entries: &[keys::KeyBindEntry]) {
    lines.push(Line::from(format!("{title}:")).underlined());

    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:10}", entry.key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(entry.description.to_string()),
        ]));
    }

    // Blank separator
    lines.push(Line::from(""));
}

/// Highest useful scroll offset for the given viewport height
pub fn max_help_scroll(viewport_height: u16) -> u16 {
    let content = build_help_lines().len() as u16;
    let inner = viewport_height.saturating_sub(2); // block borders
    content.saturating_sub(inner)
}

/// Render help content showing key bindings.
///
/// `scroll` is the vertical scroll offset (0 = top).
pub fn render_help_panel(frame: &mut Frame, area: Rect, scroll: u16) {
    let title = Line::from(" Gitale - Help ").bold().white().centered();

    frame.render_widget(
        Paragraph::new(build_help_lines())
            .block(Block::default().borders(Borders::ALL).title(title))
            .scroll((scroll, 0)),
        area,
    );
}
