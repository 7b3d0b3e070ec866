//! File breakdown view
//!
//! One panel per touched file in the visible window, largest first,
//! with a unit square per line colored by the line's type. Panels are
//! keyed by file name so a file present across windows keeps its panel,
//! and the type palette lives for the whole session so colors never
//! shift when the window changes.

mod input;
mod render;

use std::cell::Cell;
use std::collections::HashMap;

use ratatui::style::Color;

use crate::loc::group_files;
use crate::model::Commit;
use crate::ui::palette::TypePalette;

/// One file's panel: header plus a run of colored line units
#[derive(Debug, Clone, PartialEq)]
pub struct FilePanel {
    /// File path from the log
    pub name: String,
    /// One color per line, in log order
    pub dots: Vec<Color>,
}

impl FilePanel {
    fn new(name: String) -> Self {
        Self {
            name,
            dots: Vec::new(),
        }
    }
}

/// File breakdown view state
#[derive(Debug)]
pub struct FilesView {
    /// Panels in display order, largest file first
    pub panels: Vec<FilePanel>,
    /// Session-wide type to color assignment
    palette: TypePalette,
    /// Scroll offset in rendered lines, clamped during render
    scroll: Cell<usize>,
    /// Greatest useful scroll offset, set during render
    max_scroll: Cell<usize>,
    /// Viewport height from the last render
    page_size: Cell<usize>,
}

impl FilesView {
    pub fn new() -> Self {
        Self {
            panels: Vec::new(),
            palette: TypePalette::new(),
            scroll: Cell::new(0),
            max_scroll: Cell::new(0),
            page_size: Cell::new(1),
        }
    }

    /// Rebuild panels for the visible window.
    ///
    /// Files present in both the old and new window keep their panel,
    /// entering files get a fresh one, departed files lose theirs. The
    /// palette only ever grows, so a type keeps its color even while no
    /// visible line carries it.
    pub fn update(&mut self, window: &[Commit]) {
        let mut existing: HashMap<String, FilePanel> = self
            .panels
            .drain(..)
            .map(|panel| (panel.name.clone(), panel))
            .collect();

        let palette = &mut self.palette;
        let panels: Vec<FilePanel> = group_files(window)
            .into_iter()
            .map(|group| {
                let mut panel = existing
                    .remove(group.name)
                    .unwrap_or_else(|| FilePanel::new(group.name.to_string()));
                panel.dots.clear();
                panel
                    .dots
                    .extend(group.lines.iter().map(|line| palette.color_for(&line.kind)));
                panel
            })
            .collect();
        self.panels = panels;
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Number of known line types, for the palette
    pub fn type_count(&self) -> usize {
        self.palette.len()
    }
}

impl Default for FilesView {
    fn default() -> Self {
        Self::new()
    }
}
