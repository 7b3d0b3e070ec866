//! Rendering tests for the help panel

use gitale::ui::widgets::{max_help_scroll, render_help_panel};
use ratatui::{Terminal, backend::TestBackend};

fn render(width: u16, height: u16, scroll: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_help_panel(frame, frame.area(), scroll))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_help_panel_covers_every_section() {
    let rendered = render(80, 30, 0);

    assert!(rendered.contains("Gitale - Help"));
    assert!(rendered.contains("Key bindings:"));
    for section in ["Global:", "Navigation:", "Story:", "Chart:", "File Breakdown:"] {
        assert!(rendered.contains(section), "missing section {section}");
    }
    assert!(rendered.contains("Switch focus (story / files)"));
    assert!(rendered.contains("Hover a dot for commit details"));
}

#[test]
fn test_help_panel_scrolls() {
    let rendered = render(80, 30, 5);

    assert!(!rendered.contains("Key bindings:"), "top scrolled away");
    assert!(rendered.contains("File Breakdown:"));
}

#[test]
fn test_help_panel_max_scroll_reaches_bottom() {
    let scroll = max_help_scroll(12);
    let rendered = render(80, 12, scroll);

    assert!(rendered.contains("File Breakdown:"));
    assert!(rendered.contains("Go to top/bottom"));
}
