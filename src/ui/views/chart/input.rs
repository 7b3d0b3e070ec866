//! Mouse handling for ChartView
//!
//! Hit-testing works in cell space. A dot drawn with radius `r` plot
//! units spans `r * cells_per_x_unit` cells horizontally but
//! `r * cells_per_y_unit` cells vertically, so the on-screen shape is an
//! ellipse and the test follows it.

use ratatui::layout::{Position, Rect};

use super::{ChartView, X_MAX, Y_MAX};

/// Extra pick slack in cells, so thin dots are still hoverable
const PICK_SLACK: f64 = 0.5;

impl ChartView {
    /// Update the hover from a pointer position in screen cells.
    /// Returns true when the hovered commit changed.
    pub fn hover_at(&mut self, column: u16, row: u16) -> bool {
        let plot = self.plot_area.get();
        if !plot.contains(Position::new(column, row)) || plot.width == 0 || plot.height == 0 {
            return self.clear_hover();
        }

        // Pointer in plot units, from the cell's center
        let fx = (f64::from(column - plot.x) + 0.5) / f64::from(plot.width) * X_MAX;
        let fy = Y_MAX * (1.0 - (f64::from(row - plot.y) + 0.5) / f64::from(plot.height));

        let cells_per_x = f64::from(plot.width) / X_MAX;
        let cells_per_y = f64::from(plot.height) / Y_MAX;

        // Later in draw order means drawn on top, so the last hit wins
        let mut hit: Option<&str> = None;
        for id in &self.order {
            let Some(mark) = self.marks.get(id) else {
                continue;
            };
            let a = mark.radius * cells_per_x + PICK_SLACK;
            let b = mark.radius * cells_per_y + PICK_SLACK;
            let dx = (fx - mark.x) * cells_per_x;
            let dy = (fy - mark.y) * cells_per_y;
            if (dx / a).powi(2) + (dy / b).powi(2) <= 1.0 {
                hit = Some(id);
            }
        }

        let hit = hit.map(str::to_string);
        if hit != self.hovered {
            self.hovered = hit;
            true
        } else {
            false
        }
    }

    /// Drop the hover (pointer left the plot). Returns true when there
    /// was one to drop.
    pub fn clear_hover(&mut self) -> bool {
        if self.hovered.is_some() {
            self.hovered = None;
            true
        } else {
            false
        }
    }

    pub(super) fn set_plot_area(&self, area: Rect) {
        self.plot_area.set(area);
    }
}
