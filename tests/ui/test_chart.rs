//! Rendering and hover tests for the scatter chart pane

use gitale::loc::{aggregate_commits, parse_log};
use gitale::model::Commit;
use gitale::ui::views::ChartView;
use gitale::ui::widgets::build_tooltip_lines;
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

fn commits() -> Vec<Commit> {
    aggregate_commits(parse_log(LOG).expect("fixture log should parse").records)
}

fn render(chart: &ChartView, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| chart.render(frame, frame.area()))
        .unwrap();
    terminal.backend().to_string()
}

#[test]
fn test_chart_draws_axes_and_marks() {
    let commits = commits();
    let mut chart = ChartView::new(&commits);
    chart.update(&commits);

    let rendered = render(&chart, 70, 20);
    assert!(rendered.contains("Commits by time of day"));
    for label in ["00:00", "06:00", "12:00", "18:00", "24:00"] {
        assert!(rendered.contains(label), "missing hour label {label}");
    }
    assert!(rendered.contains("Jan 1"));
    assert!(rendered.contains("Jan 5"));
    assert_eq!(chart.mark_count(), 2);
}

#[test]
fn test_chart_empty_log() {
    let chart = ChartView::new(&[]);
    let rendered = render(&chart, 70, 20);
    assert!(rendered.contains("No commits in this log."));
}

#[test]
fn test_chart_axis_stays_stable_when_window_narrows() {
    let commits = commits();
    let mut chart = ChartView::new(&commits);
    chart.update(&commits[..1]);
    assert_eq!(chart.mark_count(), 1);

    // The filtered-out commit's date keeps its place on the axis
    let rendered = render(&chart, 70, 20);
    assert!(rendered.contains("Jan 5"));
}

#[test]
fn test_chart_hover_finds_dot_and_builds_tooltip() {
    let commits = commits();
    let mut chart = ChartView::new(&commits);
    chart.update(&commits[..1]);

    let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
    terminal
        .draw(|frame| chart.render(frame, frame.area()))
        .unwrap();

    // Sweep the frame until the pointer lands on the dot
    'scan: for row in 0..20 {
        for column in 0..70 {
            chart.hover_at(column, row);
            if chart.hovered().is_some() {
                break 'scan;
            }
        }
    }
    assert_eq!(chart.hovered(), Some("c1"));

    let flat: Vec<String> = build_tooltip_lines(&commits[0], None)
        .iter()
        .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
        .collect();
    assert_snapshot!(
        flat.join(" | "),
        @"c1 by alice | Monday, January 1, 2024 | 9:00 AM | 3 lines across 2 files"
    );

    let with_url = build_tooltip_lines(&commits[0], Some("https://example.com/commit/"));
    let last: String = with_url
        .last()
        .unwrap()
        .spans
        .iter()
        .map(|s| s.content.as_ref())
        .collect();
    assert_eq!(last, "https://example.com/commit/c1");
}
