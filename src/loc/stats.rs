//! Dataset summary computation

use crate::model::{Commit, Summary};

/// Compute the whole-dataset figures shown in the summary panel.
///
/// Runs once over the full commit list at startup; the story position
/// never re-scopes these numbers. Length statistics skip records whose
/// length failed numeric coercion.
pub fn summarize(commits: &[Commit]) -> Summary {
    let total_commits = commits.len();
    let total_lines: usize = commits.iter().map(|c| c.total_lines).sum();
    let max_commit_lines = commits.iter().map(|c| c.total_lines).max().unwrap_or(0);

    let mut longest_line = 0u32;
    let mut length_sum = 0u64;
    let mut length_count = 0u64;
    for commit in commits {
        for record in &commit.lines {
            if let Some(length) = record.length {
                longest_line = longest_line.max(length);
                length_sum += u64::from(length);
                length_count += 1;
            }
        }
    }
    let mean_line_length = if length_count == 0 {
        0
    } else {
        (length_sum as f64 / length_count as f64).round() as u32
    };

    let mean_hour_frac = if commits.is_empty() {
        None
    } else {
        Some(commits.iter().map(|c| c.hour_frac).sum::<f64>() / total_commits as f64)
    };

    Summary {
        total_lines,
        total_commits,
        max_commit_lines,
        longest_line,
        mean_line_length,
        mean_hour_frac,
    }
}
