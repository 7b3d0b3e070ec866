//! Rendering tests for the file breakdown pane

use gitale::loc::{aggregate_commits, parse_log};
use gitale::model::Commit;
use gitale::ui::views::FilesView;
use ratatui::{Terminal, backend::TestBackend};

const LOG: &str = "\
commit,file,author,date,time,timezone,line,depth,length,type,datetime
c1,src/main.rs,alice,2024-01-01,09:00:00,+00:00,1,0,45,rs,2024-01-01T09:00:00+00:00
c1,src/main.rs,alice,2024-01-01,09:00:00,+00:00,2,1,40,rs,2024-01-01T09:00:00+00:00
c1,README.md,alice,2024-01-01,09:00:00,+00:00,1,0,20,md,2024-01-01T09:00:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,1,0,40,rs,2024-01-05T15:30:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,2,1,35,rs,2024-01-05T15:30:00+00:00
";

fn commits() -> Vec<Commit> {
    aggregate_commits(parse_log(LOG).expect("fixture log should parse").records)
}

fn render(view: &FilesView, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| view.render(frame, frame.area(), false))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_files_lists_panels_largest_first() {
    let commits = commits();
    let mut view = FilesView::new();
    view.update(&commits);

    let rendered = render(&view, 40, 14);
    assert!(rendered.contains("File breakdown"));
    assert!(rendered.contains("src/main.rs (2 lines)"));
    assert!(rendered.contains("src/lib.rs (2 lines)"));
    assert!(rendered.contains("README.md (1 lines)"));

    // Descending by size, ties in first-appearance order
    let main_at = rendered.find("src/main.rs").unwrap();
    let lib_at = rendered.find("src/lib.rs").unwrap();
    let readme_at = rendered.find("README.md").unwrap();
    assert!(main_at < lib_at);
    assert!(lib_at < readme_at);
}

#[test]
fn test_files_one_unit_per_line() {
    let commits = commits();
    let mut view = FilesView::new();
    view.update(&commits);

    let rendered = render(&view, 40, 14);
    assert_eq!(rendered.matches('▪').count(), 5);
}

#[test]
fn test_files_empty_window_shows_hint() {
    let mut view = FilesView::new();
    view.update(&[]);

    let rendered = render(&view, 40, 14);
    assert!(rendered.contains("Nothing to show yet."));
}

#[test]
fn test_files_narrowed_window_drops_files() {
    let commits = commits();
    let mut view = FilesView::new();
    view.update(&commits);
    view.update(&commits[..1]);

    let rendered = render(&view, 40, 14);
    assert!(rendered.contains("src/main.rs (2 lines)"));
    assert!(rendered.contains("README.md (1 lines)"));
    assert!(!rendered.contains("src/lib.rs"));
}
