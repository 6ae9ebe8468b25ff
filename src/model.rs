// src/model.rs

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Prefix prepended to a commit id to form its web URL.
pub const COMMIT_URL_PREFIX: &str = "https://github.com/vis-society/lab-7/commit/";

/// One line of source code as it existed at one commit.
#[derive(Debug, Clone, Serialize)]
pub struct LineRecord {
    /// Opaque commit identifier from the log's `commit` column.
    pub commit_id: String,
    pub file: String,
    /// 1-based position within the file. Not unique across files.
    pub line: u32,
    /// Language/category tag (the log's `type` column).
    pub kind: String,
    /// Nesting depth of the line.
    pub depth: u32,
    /// Character count of the line.
    pub length: u32,
    pub author: String,
    /// Timestamp with the log's timezone offset preserved.
    pub datetime: DateTime<FixedOffset>,
}

/// Aggregate view of every LineRecord sharing a commit id.
///
/// `author` and `datetime` are copied from the first record of the group in
/// input order; rows that disagree within a group are not reconciled.
#[derive(Debug, Clone, Serialize)]
pub struct CommitSummary {
    pub id: String,
    pub url: String,
    pub author: String,
    pub datetime: DateTime<FixedOffset>,
    /// Fractional hour of day in [0, 24), e.g. 14.5 for 14:30, in the
    /// commit's own offset.
    pub hour_frac: f64,
    /// Always equals `line_indices.len()`.
    pub total_lines: usize,
    /// Indices into the line sequence this commit was aggregated from.
    /// Skipped on serialization so line storage is never duplicated into
    /// output; consumers resolve them through `TimelineIndex::lines_of`.
    #[serde(skip)]
    pub line_indices: Vec<usize>,
}
