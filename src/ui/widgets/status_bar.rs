//! Status bar widget

use ratatui::{Frame, prelude::*, text::Line, widgets::Paragraph};

use crate::keys::KeyHint;

/// Build a status bar line from key hints
pub fn build_status_bar(hints: &[KeyHint]) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Build a status bar line with a prefix and key hints
pub fn build_status_bar_with_prefix(
    prefix: Vec<Span<'static>>,
    hints: &[KeyHint],
) -> Line<'static> {
    let mut spans = prefix;

    for hint in hints {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" [{}] {} ", hint.key, hint.label),
            Style::default().fg(Color::Black).bg(hint.color),
        ));
    }

    Line::from(spans)
}

/// Calculate status bar area at bottom of screen
fn status_bar_area(frame: &Frame) -> Option<Rect> {
    let area = frame.area();
    if area.height < 2 {
        return None;
    }

    Some(Rect {
        x: area.x,
        y: area.y + area.height - 1,
        width: area.width,
        height: 1,
    })
}

/// Build the window prefix, e.g. " 3/12 commits " plus the position date
pub fn build_window_prefix(visible: usize, total: usize, position: Option<String>) -> Vec<Span<'static>> {
    let mut prefix = vec![Span::styled(
        format!(" {}/{} commits ", visible, total),
        Style::default().fg(Color::Black).bg(Color::Yellow),
    )];
    if let Some(date) = position {
        prefix.push(Span::raw(" "));
        prefix.push(Span::styled(
            format!(" through {} ", date),
            Style::default().fg(Color::Cyan),
        ));
    }
    prefix
}

/// Render the status bar: window prefix plus key hints
pub fn render_status_bar(frame: &mut Frame, prefix: Vec<Span<'static>>, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar_with_prefix(prefix, hints);
    frame.render_widget(Paragraph::new(status), status_area);
}

/// Render a status bar with hints only (help view)
pub fn render_plain_status_bar(frame: &mut Frame, hints: &[KeyHint]) {
    let Some(status_area) = status_bar_area(frame) else {
        return;
    };

    let status = build_status_bar(hints);
    frame.render_widget(Paragraph::new(status), status_area);
}
