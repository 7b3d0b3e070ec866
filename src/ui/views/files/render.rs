//! Rendering for FilesView

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::{components, symbols, theme};

use super::{FilePanel, FilesView};

impl FilesView {
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let title = Line::from(" File breakdown ").bold().cyan().centered();
        let block = components::pane_block(title, focused);

        if self.panels.is_empty() {
            let paragraph = components::nothing_visible_state().block(block);
            frame.render_widget(paragraph, area);
            return;
        }

        let inner_height = area.height.saturating_sub(2) as usize;
        let inner_width = area.width.saturating_sub(2) as usize;
        if inner_height == 0 || inner_width == 0 {
            frame.render_widget(block, area);
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for (idx, panel) in self.panels.iter().enumerate() {
            if idx > 0 {
                lines.push(Line::default());
            }
            push_panel_lines(&mut lines, panel, inner_width);
        }

        let max_scroll = lines.len().saturating_sub(inner_height);
        self.max_scroll.set(max_scroll);
        self.page_size.set(inner_height);
        let offset = self.scroll.get().min(max_scroll);
        self.scroll.set(offset);

        let visible: Vec<Line> = lines.into_iter().skip(offset).take(inner_height).collect();
        frame.render_widget(Paragraph::new(visible).block(block), area);
    }
}

fn push_panel_lines(lines: &mut Vec<Line<'static>>, panel: &FilePanel, width: usize) {
    lines.push(Line::from(vec![
        Span::styled(panel.name.clone(), theme::files::NAME),
        Span::styled(
            format!(" ({} lines)", panel.dots.len()),
            theme::files::COUNT,
        ),
    ]));

    for chunk in panel.dots.chunks(width.max(1)) {
        lines.push(Line::from(dot_spans(chunk)));
    }
}

/// Collapse consecutive same-colored units into one span per run
fn dot_spans(chunk: &[Color]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_color: Option<Color> = None;
    for &color in chunk {
        if run_color != Some(color) {
            if let Some(previous) = run_color {
                spans.push(Span::styled(std::mem::take(&mut run), previous));
            }
            run_color = Some(color);
        }
        run.push(symbols::files::UNIT);
    }
    if let Some(previous) = run_color {
        spans.push(Span::styled(run, previous));
    }
    spans
}
