// src/index.rs

use chrono::{DateTime, FixedOffset};

use crate::error::Error;
use crate::model::{CommitSummary, LineRecord};

/// The immutable, time-sorted view of one commit log: every commit summary
/// plus the flat line records they were aggregated from.
///
/// Built once per session and passed by reference to every query; nothing
/// mutates it afterwards, so repeated queries in any order see the same
/// data.
#[derive(Debug)]
pub struct TimelineIndex {
    lines: Vec<LineRecord>,
    commits: Vec<CommitSummary>,
}

impl TimelineIndex {
    /// Sorts commits ascending by datetime. The sort is stable, so commits
    /// with identical timestamps keep their aggregation order.
    pub fn build(lines: Vec<LineRecord>, mut commits: Vec<CommitSummary>) -> Self {
        commits.sort_by_key(|c| c.datetime);
        TimelineIndex { lines, commits }
    }

    /// All line records, in input order.
    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// All commit summaries, ascending by datetime.
    pub fn commits(&self) -> &[CommitSummary] {
        &self.commits
    }

    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// The line records belonging to one commit, in input order.
    pub fn lines_of<'a>(
        &'a self,
        commit: &'a CommitSummary,
    ) -> impl Iterator<Item = &'a LineRecord> {
        commit.line_indices.iter().map(|&i| &self.lines[i])
    }

    /// (min, max) commit datetime. Fails on an empty index; guard with
    /// `is_empty` before computing scales from this.
    pub fn extent_datetime(&self) -> Result<(DateTime<FixedOffset>, DateTime<FixedOffset>), Error> {
        let first = self.commits.first().ok_or(Error::EmptyIndex)?;
        let last = self.commits.last().ok_or(Error::EmptyIndex)?;
        Ok((first.datetime, last.datetime))
    }

    /// (min, max) of `total_lines` over all commits.
    pub fn extent_total_lines(&self) -> Result<(usize, usize), Error> {
        let mut sizes = self.commits.iter().map(|c| c.total_lines);
        let first = sizes.next().ok_or(Error::EmptyIndex)?;
        let (mut lo, mut hi) = (first, first);
        for size in sizes {
            lo = lo.min(size);
            hi = hi.max(size);
        }
        Ok((lo, hi))
    }

    /// (min, max) of `hour_frac` over all commits.
    pub fn extent_hour_frac(&self) -> Result<(f64, f64), Error> {
        let mut hours = self.commits.iter().map(|c| c.hour_frac);
        let first = hours.next().ok_or(Error::EmptyIndex)?;
        let (mut lo, mut hi) = (first, first);
        for hour in hours {
            lo = lo.min(hour);
            hi = hi.max(hour);
        }
        Ok((lo, hi))
    }
}
