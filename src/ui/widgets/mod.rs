//! Reusable UI widgets

mod help_panel;
mod status_bar;
mod tooltip;

pub use help_panel::{build_help_lines, max_help_scroll, render_help_panel};
pub use status_bar::{
    build_status_bar, build_status_bar_with_prefix, build_window_prefix, render_plain_status_bar,
    render_status_bar,
};
pub use tooltip::{build_tooltip_lines, render_tooltip};
