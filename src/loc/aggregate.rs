//! Record-to-commit aggregation
//!
//! Pure transformations from flat line records into the shapes the UI
//! renders: commit summaries sorted by time, and per-file groupings.

use std::collections::HashMap;

use crate::model::{Commit, FileGroup, LineRecord};

/// Group records by commit id and summarize each group.
///
/// Grouping preserves first-appearance order, so each commit's metadata
/// comes from its first record in the log. The result is sorted ascending
/// by timestamp; the sort is stable, so commits sharing a timestamp keep
/// their first-appearance order.
pub fn aggregate_commits(records: Vec<LineRecord>) -> Vec<Commit> {
    let mut groups: Vec<(String, Vec<LineRecord>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        match index.get(&record.commit) {
            Some(&i) => groups[i].1.push(record),
            None => {
                index.insert(record.commit.clone(), groups.len());
                let id = record.commit.clone();
                groups.push((id, vec![record]));
            }
        }
    }

    let mut commits: Vec<Commit> = groups
        .into_iter()
        .filter_map(|(id, lines)| Commit::from_lines(id, lines))
        .collect();
    commits.sort_by_key(|c| c.datetime);
    commits
}

/// Group every line record in `commits` by file, sorted descending by
/// line count. The sort is stable, so equal-sized files keep their
/// first-appearance order.
pub fn group_files(commits: &[Commit]) -> Vec<FileGroup<'_>> {
    let mut groups: Vec<FileGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for commit in commits {
        for record in &commit.lines {
            match index.get(record.file.as_str()) {
                Some(&i) => groups[i].lines.push(record),
                None => {
                    index.insert(&record.file, groups.len());
                    groups.push(FileGroup {
                        name: &record.file,
                        lines: vec![record],
                    });
                }
            }
        }
    }

    groups.sort_by(|a, b| b.len().cmp(&a.len()));
    groups
}
