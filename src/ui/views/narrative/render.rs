//! Rendering for NarrativeView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::model::Notification;
use crate::ui::{components, symbols, theme};

use super::{NarrativeView, Step, empty_text};

impl NarrativeView {
    /// Render the view with optional notification in title bar.
    ///
    /// `revealed` is the number of steps at or before the story position;
    /// later steps draw dimmed as "not yet told".
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        revealed: usize,
        notification: Option<&Notification>,
        focused: bool,
    ) {
        let title = Line::from(" Gitale - Story ").bold().cyan().centered();

        let title_width = title.width();
        let available_for_notif = area.width.saturating_sub(title_width as u16 + 4) as usize;
        let notif_line = notification
            .filter(|n| !n.is_expired())
            .map(|n| components::build_notification_title(n, Some(available_for_notif)))
            .filter(|line| !line.spans.is_empty());

        let block = components::pane_block(title, focused);
        let block = match notif_line {
            Some(line) => block.title_top(line.right_aligned()),
            None => block,
        };

        if self.steps.is_empty() {
            let paragraph =
                components::empty_state(empty_text::TITLE, Some(empty_text::HINT)).block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;
        if inner_height == 0 || inner_width == 0 {
            frame.render_widget(block, area);
            return;
        }

        // Lay out every step, remembering where the selected one lands
        let mut lines: Vec<Line> = Vec::new();
        let mut selected_range = (0usize, 0usize);
        for (idx, step) in self.steps.iter().enumerate() {
            let start = lines.len();
            let selected = idx == self.selected_index;
            let future = idx >= revealed;
            push_step_lines(&mut lines, step, inner_width, selected, future);
            if selected {
                selected_range = (start, lines.len());
            }
        }

        // Keep the selected step inside the viewport
        let (sel_start, sel_end) = selected_range;
        let mut offset = self.scroll_offset.get();
        if sel_start < offset {
            offset = sel_start;
        } else if sel_end > offset + inner_height {
            offset = sel_end.saturating_sub(inner_height);
        }
        offset = offset.min(lines.len().saturating_sub(inner_height));
        self.scroll_offset.set(offset);

        let avg_step_height = (lines.len() / self.steps.len()).max(1);
        self.page_size.set((inner_height / avg_step_height).max(1));

        let visible: Vec<Line> = lines
            .into_iter()
            .skip(offset)
            .take(inner_height)
            .collect();

        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

/// Append one step's header, wrapped body, and trailing blank line
fn push_step_lines(lines: &mut Vec<Line>, step: &Step, width: usize, selected: bool, future: bool) {
    let marker = if selected {
        symbols::markers::ACTIVE
    } else {
        symbols::markers::STEP
    };
    let marker_color = match (selected, future) {
        (true, _) => theme::narrative::ACTIVE_MARKER,
        (false, true) => theme::narrative::FUTURE,
        (false, false) => theme::narrative::MARKER,
    };
    let id_color = if future {
        theme::narrative::FUTURE
    } else {
        theme::narrative::COMMIT_ID
    };

    let mut header = Line::from(vec![
        Span::styled(format!("{marker} "), Style::default().fg(marker_color)),
        Span::styled(step.short_id.clone(), Style::default().fg(id_color)),
        Span::styled(
            format!(" {}", step.datetime.format("%b %-d %H:%M")),
            Style::default().fg(theme::narrative::TIMESTAMP),
        ),
    ]);
    if selected {
        header = header.style(
            Style::default()
                .bg(theme::narrative::SELECTED_BG)
                .add_modifier(Modifier::BOLD),
        );
    }
    lines.push(header);

    let body_style = if future {
        Style::default().fg(theme::narrative::FUTURE)
    } else {
        Style::default()
    };
    let body_width = width.saturating_sub(2).max(8);
    for wrapped in wrap_words(&step.sentence, body_width) {
        lines.push(Line::from(Span::styled(format!("  {wrapped}"), body_style)));
    }
    lines.push(Line::from(""));
}

/// Greedy word wrap. Words longer than `width` get a line of their own
/// and are left for the terminal to clip.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
