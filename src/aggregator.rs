// src/aggregator.rs

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Timelike};

use crate::model::{CommitSummary, LineRecord, COMMIT_URL_PREFIX};

/// Groups line records into commit summaries, keyed by commit id in
/// first-seen order.
///
/// Metadata comes from the first record of each group in input order
/// (first-row-wins, not an aggregate), so the caller must hand records over
/// in parse order. Pure: the input is only read.
pub fn aggregate(lines: &[LineRecord]) -> Vec<CommitSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut commits: Vec<CommitSummary> = Vec::new();

    for (i, record) in lines.iter().enumerate() {
        let pos = *positions.entry(record.commit_id.as_str()).or_insert_with(|| {
            commits.push(CommitSummary {
                id: record.commit_id.clone(),
                url: format!("{COMMIT_URL_PREFIX}{}", record.commit_id),
                author: record.author.clone(),
                datetime: record.datetime,
                hour_frac: hour_frac(&record.datetime),
                total_lines: 0,
                line_indices: Vec::new(),
            });
            commits.len() - 1
        });
        commits[pos].line_indices.push(i);
        commits[pos].total_lines += 1;
    }

    commits
}

/// Fractional hour of day in [0, 24), in the timestamp's own offset.
pub fn hour_frac(datetime: &DateTime<FixedOffset>) -> f64 {
    datetime.hour() as f64 + datetime.minute() as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(commit: &str, line: u32, author: &str, datetime: &str) -> LineRecord {
        LineRecord {
            commit_id: commit.to_string(),
            file: "x.js".to_string(),
            line,
            kind: "js".to_string(),
            depth: 0,
            length: 10,
            author: author.to_string(),
            datetime: DateTime::parse_from_rfc3339(datetime).unwrap(),
        }
    }

    #[test]
    fn groups_by_commit_in_first_seen_order() {
        let lines = vec![
            record("a1", 1, "u", "2024-01-01T10:30:00+00:00"),
            record("b2", 1, "v", "2024-01-01T09:00:00+00:00"),
            record("a1", 2, "u", "2024-01-01T10:30:00+00:00"),
        ];
        let commits = aggregate(&lines);

        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].id, "a1");
        assert_eq!(commits[0].total_lines, 2);
        assert_eq!(commits[0].line_indices, vec![0, 2]);
        assert_eq!(commits[1].id, "b2");
        assert_eq!(commits[1].total_lines, 1);
    }

    #[test]
    fn metadata_is_first_row_wins() {
        let lines = vec![
            record("a1", 1, "first", "2024-01-01T10:30:00+00:00"),
            record("a1", 2, "second", "2024-06-01T23:59:00+00:00"),
        ];
        let commits = aggregate(&lines);

        assert_eq!(commits[0].author, "first");
        assert_eq!(
            commits[0].datetime,
            DateTime::parse_from_rfc3339("2024-01-01T10:30:00+00:00").unwrap()
        );
    }

    #[test]
    fn hour_frac_uses_the_local_offset() {
        let lines = vec![record("a1", 1, "u", "2024-01-01T14:45:00-08:00")];
        let commits = aggregate(&lines);
        assert_eq!(commits[0].hour_frac, 14.75);
    }

    #[test]
    fn url_is_prefix_plus_id() {
        let commits = aggregate(&[record("a1", 1, "u", "2024-01-01T10:00:00+00:00")]);
        assert_eq!(commits[0].url, format!("{COMMIT_URL_PREFIX}a1"));
    }

    #[test]
    fn empty_input_yields_no_commits() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn singleton_group_counts_one_line() {
        let commits = aggregate(&[record("a1", 1, "u", "2024-01-01T10:00:00+00:00")]);
        assert_eq!(commits[0].total_lines, 1);
    }
}
