//! Rendering tests for the summary panel

use gitale::loc::{aggregate_commits, parse_log, summarize};
use gitale::model::Summary;
use gitale::ui::views::render_stats;
use insta::assert_snapshot;
use ratatui::{Terminal, backend::TestBackend};

const LOG: &str = "\
commit,file,author,date,time,timezone,line,depth,length,type,datetime
c1,src/main.rs,alice,2024-01-01,09:00:00,+00:00,1,0,45,rs,2024-01-01T09:00:00+00:00
c1,src/main.rs,alice,2024-01-01,09:00:00,+00:00,2,1,40,rs,2024-01-01T09:00:00+00:00
c1,README.md,alice,2024-01-01,09:00:00,+00:00,1,0,20,md,2024-01-01T09:00:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,1,0,40,rs,2024-01-05T15:30:00+00:00
c2,src/lib.rs,bob,2024-01-05,15:30:00,+00:00,2,1,35,rs,2024-01-05T15:30:00+00:00
";

fn summary() -> Summary {
    let report = parse_log(LOG).expect("fixture log should parse");
    summarize(&aggregate_commits(report.records))
}

fn render(summary: &Summary, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_stats(frame, frame.area(), summary))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_stats_panel_shows_all_figures() {
    let summary = summary();
    let rendered = render(&summary, 72, 6);

    for label in [
        "Lines of code",
        "Commits",
        "Largest commit",
        "Longest line",
        "Avg line length",
        "Avg commit hour",
    ] {
        assert!(rendered.contains(label), "missing label {label}");
    }
    // 5 records, longest 45, mean length 180/5 = 36
    assert!(rendered.contains("45"));
    assert!(rendered.contains("36"));
    assert!(rendered.contains("12PM"));
}

#[test]
fn test_stats_mean_hour_is_noonish() {
    // (9.0 + 15.5) / 2 = 12.25, which reads as noon
    assert_snapshot!(summary().hour_label(), @"12PM");
}

#[test]
fn test_stats_empty_dataset_shows_placeholder() {
    let summary = summarize(&[]);
    let rendered = render(&summary, 72, 6);
    assert!(rendered.contains("--"));
}

#[test]
fn test_stats_too_small_to_draw() {
    let summary = summary();
    let rendered = render(&summary, 72, 3);
    assert!(!rendered.contains("Lines of code"));
}
