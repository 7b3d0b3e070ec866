//! Empty state components
//!
//! Display messages when there's no content to show.

use ratatui::{style::Stylize, text::Line, widgets::Paragraph};

/// Create a centered empty state display
///
/// # Arguments
/// * `title` - Main message to display
/// * `hint` - Optional hint text (displayed in gray)
pub fn empty_state(title: &str, hint: Option<&str>) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""), Line::from(title.to_string()).centered()];

    if let Some(hint_text) = hint {
        lines.push(Line::from(""));
        lines.push(Line::from(hint_text.to_string()).dark_gray().centered());
    }

    lines.push(Line::from(""));

    Paragraph::new(lines)
}

/// Empty state for a log that produced no commits at all
pub fn no_commits_state() -> Paragraph<'static> {
    empty_state("No commits in this log.", None)
}

/// Empty state for a story position before the first commit
pub fn nothing_visible_state() -> Paragraph<'static> {
    empty_state(
        "Nothing to show yet.",
        Some("Step forward with j, or press a to show everything"),
    )
}
