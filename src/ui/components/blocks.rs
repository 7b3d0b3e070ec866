//! Block components for UI rendering
//!
//! Common block patterns used across panes.

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders},
};

/// Create a block with title and specified borders
pub fn titled_block<'a>(title: Line<'a>, borders: Borders) -> Block<'a> {
    Block::default().borders(borders).title(title)
}

/// Create a block with all borders and a title
pub fn bordered_block<'a>(title: Line<'a>) -> Block<'a> {
    titled_block(title, Borders::ALL)
}

/// Create a pane block whose border shows whether the pane holds focus
pub fn pane_block<'a>(title: Line<'a>, focused: bool) -> Block<'a> {
    let block = bordered_block(title);
    if focused {
        block.border_style(Style::default().fg(Color::Cyan))
    } else {
        block
    }
}
