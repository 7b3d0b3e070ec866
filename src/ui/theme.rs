//! Color theme definitions
//!
//! Centralized color constants for consistent UI appearance.

use ratatui::style::Color;

/// Colors for the narrative panel
pub mod narrative {
    use super::*;

    /// Step marker for the currently selected step
    pub const ACTIVE_MARKER: Color = Color::Green;
    /// Step marker for other steps
    pub const MARKER: Color = Color::Blue;
    /// Commit id color
    pub const COMMIT_ID: Color = Color::Yellow;
    /// Timestamp color
    pub const TIMESTAMP: Color = Color::DarkGray;
    /// Steps past the story position (not yet revealed)
    pub const FUTURE: Color = Color::DarkGray;
    /// Selected step background
    pub const SELECTED_BG: Color = Color::DarkGray;
}

/// Colors for the commit chart
pub mod chart {
    use super::*;

    /// Commit dot color
    pub const MARK: Color = Color::Blue;
    /// Commit dot color while hovered
    pub const MARK_HOVER: Color = Color::LightCyan;
    /// Hour gridlines
    pub const GRID: Color = Color::DarkGray;
    /// Axis tick labels
    pub const AXIS_LABEL: Color = Color::DarkGray;
}

/// Colors for the file breakdown
pub mod files {
    use super::*;

    /// File name color
    pub const NAME: Color = Color::Cyan;
    /// Line count color
    pub const COUNT: Color = Color::DarkGray;
}

/// Colors for the summary panel
pub mod stats {
    use super::*;

    /// Stat label color
    pub const LABEL: Color = Color::DarkGray;
    /// Stat value color
    pub const VALUE: Color = Color::White;
}

/// Categorical palette for line types, assigned in first-seen order.
/// Terminal take on the Tableau 10 scheme.
pub const TYPE_PALETTE: [Color; 10] = [
    Color::Blue,
    Color::LightRed,
    Color::Green,
    Color::Red,
    Color::Magenta,
    Color::Cyan,
    Color::Yellow,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightMagenta,
];
