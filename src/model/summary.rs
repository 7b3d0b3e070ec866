//! Whole-dataset summary statistics

/// Aggregate figures for the full dataset. Computed once after loading
/// and never affected by the story position.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Total number of line records
    pub total_lines: usize,

    /// Total number of commits
    pub total_commits: usize,

    /// Largest single-commit line count
    pub max_commit_lines: usize,

    /// Longest recorded line length, skipping unusable values
    pub longest_line: u32,

    /// Mean line length rounded to the nearest whole number,
    /// skipping unusable values
    pub mean_line_length: u32,

    /// Mean of the per-commit fractional hours, `None` when there
    /// are no commits
    pub mean_hour_frac: Option<f64>,
}

impl Summary {
    /// The mean commit hour as a 12-hour clock label, e.g. "9AM" or "4PM".
    /// "--" when there are no commits to average.
    pub fn hour_label(&self) -> String {
        let Some(mean) = self.mean_hour_frac else {
            return "--".to_string();
        };
        let hour = (mean.round() as u32) % 24;
        match hour {
            0 => "12AM".to_string(),
            1..=11 => format!("{hour}AM"),
            12 => "12PM".to_string(),
            _ => format!("{}PM", hour - 12),
        }
    }
}
