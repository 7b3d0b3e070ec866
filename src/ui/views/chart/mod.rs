//! Chart view - commits by date and time of day
//!
//! A scatter over the whole history: x is the commit instant, y the hour
//! of day, dot size tracks the commit's line count. Scales are fixed to
//! the full dataset at startup, so dots keep their place while the story
//! filter adds and removes them instead of the axes re-fitting.

mod input;
mod render;

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use ratatui::layout::Rect;

use crate::model::Commit;

/// Horizontal canvas extent in plot units
pub(crate) const X_MAX: f64 = 100.0;
/// Vertical canvas extent, hours of day
pub(crate) const Y_MAX: f64 = 24.0;
/// Dot radius endpoints in horizontal plot units (sqrt scale range)
const R_MIN: f64 = 0.8;
const R_MAX: f64 = 5.0;
/// Number of x axis tick labels
const X_TICKS: usize = 4;

/// One plotted commit
#[derive(Debug, Clone, PartialEq)]
pub struct Mark {
    /// Commit id, the lifecycle key
    pub id: String,
    /// Horizontal position in `[0, X_MAX]`
    pub x: f64,
    /// Hour of day in `[0, 24)`
    pub y: f64,
    /// Radius in horizontal plot units
    pub radius: f64,
    /// Line count, drives draw order
    pub total_lines: usize,
}

/// Chart view state
#[derive(Debug)]
pub struct ChartView {
    /// Time domain in unix seconds, fixed to the full dataset
    x_domain: (i64, i64),
    /// Line count domain, fixed to the full dataset
    r_domain: (usize, usize),
    /// X tick positions and labels, fixed to the full dataset
    ticks: Vec<(f64, String)>,
    /// Whether the log produced any commits at all
    has_data: bool,
    /// Marks keyed by commit id
    marks: HashMap<String, Mark>,
    /// Draw order: descending line count, so small dots land on top
    order: Vec<String>,
    /// Currently hovered commit id
    hovered: Option<String>,
    /// Plot area of the last render, for mouse hit-testing
    plot_area: Cell<Rect>,
}

impl ChartView {
    /// Fix scales and ticks from the full commit list (sorted ascending).
    /// Marks start empty; call [`ChartView::update`] with the initial
    /// window to populate them.
    pub fn new(full: &[Commit]) -> Self {
        let x_domain = match (full.first(), full.last()) {
            (Some(first), Some(last)) => (first.datetime.timestamp(), last.datetime.timestamp()),
            _ => (0, 0),
        };
        let r_domain = {
            let mut lines = full.iter().map(|c| c.total_lines);
            match lines.next() {
                Some(first) => {
                    let (mut lo, mut hi) = (first, first);
                    for n in lines {
                        lo = lo.min(n);
                        hi = hi.max(n);
                    }
                    (lo, hi)
                }
                None => (0, 0),
            }
        };
        let ticks = build_ticks(full, x_domain);

        Self {
            x_domain,
            r_domain,
            ticks,
            has_data: !full.is_empty(),
            marks: HashMap::new(),
            order: Vec::new(),
            hovered: None,
            plot_area: Cell::new(Rect::default()),
        }
    }

    /// Reconcile marks against the visible window.
    ///
    /// Entering commits gain a mark, departed commits lose theirs, and
    /// staying commits have their attributes refreshed in place. The
    /// hover is dropped if its commit left the window.
    pub fn update(&mut self, window: &[Commit]) {
        for commit in window {
            let mark = self.place(commit);
            match self.marks.get_mut(&commit.id) {
                Some(existing) => *existing = mark,
                None => {
                    self.marks.insert(commit.id.clone(), mark);
                }
            }
        }

        let keep: HashSet<&str> = window.iter().map(|c| c.id.as_str()).collect();
        self.marks.retain(|id, _| keep.contains(id.as_str()));

        let mut order: Vec<&Mark> = self.marks.values().collect();
        order.sort_by(|a, b| {
            b.total_lines
                .cmp(&a.total_lines)
                .then(a.x.total_cmp(&b.x))
                .then(a.id.cmp(&b.id))
        });
        self.order = order.into_iter().map(|m| m.id.clone()).collect();

        if let Some(hovered) = &self.hovered {
            if !self.marks.contains_key(hovered) {
                self.hovered = None;
            }
        }
    }

    /// Commit id under the pointer, if any
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Number of marks currently plotted
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    /// Mark for a commit id, if plotted
    pub fn mark(&self, id: &str) -> Option<&Mark> {
        self.marks.get(id)
    }

    fn place(&self, commit: &Commit) -> Mark {
        Mark {
            id: commit.id.clone(),
            x: self.scale_x(commit.datetime.timestamp()),
            y: commit.hour_frac,
            radius: self.scale_r(commit.total_lines),
            total_lines: commit.total_lines,
        }
    }

    /// Map a timestamp onto the horizontal extent. A single-instant
    /// domain pins everything to the middle.
    fn scale_x(&self, timestamp: i64) -> f64 {
        let (lo, hi) = self.x_domain;
        if hi <= lo {
            return X_MAX / 2.0;
        }
        (timestamp - lo) as f64 / (hi - lo) as f64 * X_MAX
    }

    /// Square-root radius scale, so dot area tracks line count
    fn scale_r(&self, total_lines: usize) -> f64 {
        let (lo, hi) = self.r_domain;
        if hi <= lo {
            return (R_MIN + R_MAX) / 2.0;
        }
        let (lo, hi) = ((lo as f64).sqrt(), (hi as f64).sqrt());
        let t = ((total_lines as f64).sqrt() - lo) / (hi - lo);
        R_MIN + t.clamp(0.0, 1.0) * (R_MAX - R_MIN)
    }
}

/// Evenly spaced date labels across the full time extent
fn build_ticks(full: &[Commit], x_domain: (i64, i64)) -> Vec<(f64, String)> {
    if full.is_empty() {
        return Vec::new();
    }
    let (lo, hi) = x_domain;
    if hi <= lo {
        // One commit (or one instant): a single centered label
        return vec![(X_MAX / 2.0, full[0].datetime.format("%b %-d").to_string())];
    }

    let span_years = full
        .first()
        .zip(full.last())
        .is_some_and(|(a, b)| a.datetime.format("%Y").to_string() != b.datetime.format("%Y").to_string());
    let format = if span_years { "%b %-d '%y" } else { "%b %-d" };

    let base = full[0].datetime;
    (0..X_TICKS)
        .map(|i| {
            let t = i as f64 / (X_TICKS - 1) as f64;
            let ts = lo + ((hi - lo) as f64 * t) as i64;
            let label = (base + chrono::Duration::seconds(ts - lo)).format(format).to_string();
            (t * X_MAX, label)
        })
        .collect()
}
