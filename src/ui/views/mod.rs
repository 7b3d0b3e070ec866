//! View components
//!
//! Each view owns one pane of the dashboard.

mod chart;
mod files;
mod narrative;
mod stats;

pub use chart::{ChartView, Mark};
pub use files::{FilePanel, FilesView};
pub use narrative::{NarrativeView, Step, StoryAction};
pub use stats::render_stats;
