//! Rendering for ChartView
//!
//! Braille canvas scatter with an hour gutter on the left and date tick
//! labels along the bottom. The hovered dot paints last so it sits on
//! top of its neighbors.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Paragraph,
        canvas::{Canvas, Circle, Context, Line as CanvasLine, Points},
    },
};

use crate::ui::{components, theme};

use super::{ChartView, Mark, X_MAX, Y_MAX};

/// Width of the hour label gutter in cells
const GUTTER_WIDTH: u16 = 6;

/// Horizontal gridline hours
const GRID_HOURS: [f64; 3] = [6.0, 12.0, 18.0];

/// Hour axis labels, top to bottom
const HOUR_LABELS: [(f64, &str); 5] = [
    (24.0, "24:00"),
    (18.0, "18:00"),
    (12.0, "12:00"),
    (6.0, "06:00"),
    (0.0, "00:00"),
];

impl ChartView {
    /// Render the scatter. The chart is mouse driven and takes no part
    /// in the Tab focus cycle. Remembers the plot rectangle for mouse
    /// hit-testing on later events.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = Line::from(" Commits by time of day ")
            .bold()
            .cyan()
            .centered();
        let block = components::bordered_block(title);

        if !self.has_data {
            let paragraph = components::no_commits_state().block(block);
            frame.render_widget(paragraph, area);
            self.set_plot_area(Rect::default());
            return;
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height < 4 || inner.width <= GUTTER_WIDTH + 4 {
            self.set_plot_area(Rect::default());
            return;
        }

        let [upper, tick_row] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        let [gutter, plot] =
            Layout::horizontal([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)]).areas(upper);

        self.render_hour_gutter(frame, gutter);
        // Tick labels sit under the plot columns, past the gutter
        self.render_tick_row(
            frame,
            Rect {
                x: plot.x,
                width: plot.width,
                ..tick_row
            },
        );
        self.render_plot(frame, plot);
        self.set_plot_area(plot);
    }

    fn render_hour_gutter(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let rows = area.height as usize;
        let mut lines = vec![Line::default(); rows];
        for (hour, label) in HOUR_LABELS {
            let rel = ((Y_MAX - hour) / Y_MAX * (rows - 1) as f64).round() as usize;
            if lines[rel].spans.is_empty() {
                lines[rel] = Line::from(Span::styled(
                    format!("{label} "),
                    theme::chart::AXIS_LABEL,
                ))
                .right_aligned();
            }
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_tick_row(&self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;
        let mut row = vec![b' '; width];
        for (x, label) in &self.ticks {
            if label.len() > width {
                continue;
            }
            let center = (x / X_MAX * width.saturating_sub(1) as f64).round() as usize;
            let start = center
                .saturating_sub(label.len() / 2)
                .min(width - label.len());
            let end = start + label.len();
            // Keep a one cell margin between neighboring labels
            let margin_lo = start.saturating_sub(1);
            let margin_hi = (end + 1).min(width);
            if row[margin_lo..margin_hi].iter().any(|&b| b != b' ') {
                continue;
            }
            row[start..end].copy_from_slice(label.as_bytes());
        }
        let text = String::from_utf8_lossy(&row).into_owned();
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(text, theme::chart::AXIS_LABEL))),
            area,
        );
    }

    fn render_plot(&self, frame: &mut Frame, area: Rect) {
        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, X_MAX])
            .y_bounds([0.0, Y_MAX])
            .paint(|ctx| {
                for hour in GRID_HOURS {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: hour,
                        x2: X_MAX,
                        y2: hour,
                        color: theme::chart::GRID,
                    });
                }
                ctx.layer();
                for id in &self.order {
                    if self.hovered.as_deref() == Some(id.as_str()) {
                        continue;
                    }
                    if let Some(mark) = self.marks.get(id) {
                        draw_mark(ctx, mark, theme::chart::MARK);
                    }
                }
                if let Some(mark) = self.hovered.as_ref().and_then(|id| self.marks.get(id)) {
                    draw_mark(ctx, mark, theme::chart::MARK_HOVER);
                }
            });
        frame.render_widget(canvas, area);
    }
}

fn draw_mark(ctx: &mut Context<'_>, mark: &Mark, color: Color) {
    ctx.draw(&Circle {
        x: mark.x,
        y: mark.y,
        radius: mark.radius,
        color,
    });
    // Fill the center so tiny dots stay visible
    ctx.draw(&Points {
        coords: &[(mark.x, mark.y)],
        color,
    });
}
