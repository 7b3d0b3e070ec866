//! Categorical color assignment for line types
//!
//! Colors stick for the whole session: the first type seen takes the
//! first palette slot, the second the next one, and a type keeps its
//! color even when the visible window stops containing it. Past ten
//! types the palette wraps.

use std::collections::HashMap;

use ratatui::style::Color;

use crate::ui::theme::TYPE_PALETTE;

/// First-seen ordinal mapping from line type to color
#[derive(Debug, Default)]
pub struct TypePalette {
    assigned: HashMap<String, Color>,
    next: usize,
}

impl TypePalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for a line type, assigning the next palette slot on first sight
    pub fn color_for(&mut self, kind: &str) -> Color {
        if let Some(&color) = self.assigned.get(kind) {
            return color;
        }
        let color = TYPE_PALETTE[self.next % TYPE_PALETTE.len()];
        self.assigned.insert(kind.to_string(), color);
        self.next += 1;
        color
    }

    /// Number of types assigned so far
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_type_same_color() {
        let mut palette = TypePalette::new();
        let first = palette.color_for("rs");
        let second = palette.color_for("rs");
        assert_eq!(first, second);
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_assignment_follows_first_seen_order() {
        let mut palette = TypePalette::new();
        let rs = palette.color_for("rs");
        let css = palette.color_for("css");
        assert_eq!(rs, TYPE_PALETTE[0]);
        assert_eq!(css, TYPE_PALETTE[1]);
    }

    #[test]
    fn test_color_survives_absence() {
        // A type missing from the current window keeps its slot
        let mut palette = TypePalette::new();
        let rs = palette.color_for("rs");
        palette.color_for("css");
        palette.color_for("html");
        assert_eq!(palette.color_for("rs"), rs);
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_palette_wraps_after_ten() {
        let mut palette = TypePalette::new();
        for i in 0..TYPE_PALETTE.len() {
            palette.color_for(&format!("t{i}"));
        }
        let eleventh = palette.color_for("t10");
        assert_eq!(eleventh, TYPE_PALETTE[0]);
    }
}
