//! Rendering tests for the status bar

use gitale::app::{Focus, View};
use gitale::keys::current_hints;
use gitale::ui::widgets::{build_window_prefix, render_plain_status_bar, render_status_bar};
use ratatui::{Terminal, backend::TestBackend};

#[test]
fn test_status_bar_shows_window_and_hints() {
    let mut terminal = Terminal::new(TestBackend::new(130, 4)).unwrap();
    terminal
        .draw(|frame| {
            let prefix = build_window_prefix(3, 12, Some("Jan 3, 2024 18:00".to_string()));
            render_status_bar(frame, prefix, &current_hints(View::Story, Focus::Narrative));
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("3/12 commits"));
    assert!(rendered.contains("through Jan 3, 2024 18:00"));
    assert!(rendered.contains("[j/k] Step"));
    assert!(rendered.contains("[q] Quit"));
}

#[test]
fn test_files_focus_swaps_hints() {
    let mut terminal = Terminal::new(TestBackend::new(130, 4)).unwrap();
    terminal
        .draw(|frame| {
            let prefix = build_window_prefix(12, 12, None);
            render_status_bar(frame, prefix, &current_hints(View::Story, Focus::Files));
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("[j/k] Scroll"));
    assert!(!rendered.contains("[j/k] Step"));
}

#[test]
fn test_plain_status_bar_for_help_view() {
    let mut terminal = Terminal::new(TestBackend::new(80, 4)).unwrap();
    terminal
        .draw(|frame| {
            render_plain_status_bar(frame, &current_hints(View::Help, Focus::Narrative));
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(rendered.contains("[j/k] Scroll"));
    assert!(rendered.contains("[q] Back"));
    assert!(!rendered.contains("commits"));
}

#[test]
fn test_status_bar_needs_two_rows() {
    let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
    terminal
        .draw(|frame| {
            let prefix = build_window_prefix(1, 1, None);
            render_status_bar(frame, prefix, &current_hints(View::Story, Focus::Narrative));
        })
        .unwrap();

    let rendered = terminal.backend().to_string();
    assert!(!rendered.contains("commits"));
}
