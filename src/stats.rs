// src/stats.rs

use std::collections::HashSet;

use chrono::Timelike;
use serde::Serialize;

use crate::model::{CommitSummary, LineRecord};

/// Coarse time-of-day bucket for a line record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayPeriod {
    Night,
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=5 => DayPeriod::Night,
            6..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }
}

const PERIODS: [DayPeriod; 4] = [
    DayPeriod::Night,
    DayPeriod::Morning,
    DayPeriod::Afternoon,
    DayPeriod::Evening,
];

/// Scalar summaries over a set of line records and their commits.
///
/// Every field is well defined for empty input: counts and maxima are zero,
/// the breakdown is empty, `busiest_period` is `None`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatBundle {
    pub commit_count: usize,
    /// Number of distinct `file` values.
    pub file_count: usize,
    pub total_loc: usize,
    pub max_depth: u32,
    pub max_line_length: u32,
    pub max_lines_in_single_commit: usize,
    /// Maximum 1-based line position seen in any file.
    pub max_file_length: u32,
    /// Mean of `length`; 0.0 when there are no lines.
    pub avg_line_length: f64,
    /// Time-of-day bucket holding the most line records; earliest-seen
    /// bucket wins ties. `None` when there are no lines.
    pub busiest_period: Option<DayPeriod>,
    /// Line count per language tag, in first-seen order.
    pub language_breakdown: Vec<(String, usize)>,
}

impl StatBundle {
    /// Share of each language tag, in first-seen order. Empty when there
    /// are no lines, so no proportion is ever computed from a zero total.
    pub fn language_proportions(&self) -> Vec<(&str, f64)> {
        if self.total_loc == 0 {
            return Vec::new();
        }
        self.language_breakdown
            .iter()
            .map(|(kind, count)| (kind.as_str(), *count as f64 / self.total_loc as f64))
            .collect()
    }
}

/// Computes summary statistics over any subset of the index, global or
/// filtered. One pass over the lines, one over the commits.
pub fn reduce<'a, L, C>(lines: L, commits: C) -> StatBundle
where
    L: IntoIterator<Item = &'a LineRecord>,
    C: IntoIterator<Item = &'a CommitSummary>,
{
    let mut bundle = StatBundle::default();
    let mut files: HashSet<&str> = HashSet::new();
    let mut length_sum: u64 = 0;
    let mut period_counts = [0usize; 4];
    // Periods in the order they first appear, so ties resolve to the
    // earliest-seen bucket.
    let mut period_order: Vec<usize> = Vec::new();

    for line in lines {
        bundle.total_loc += 1;
        length_sum += u64::from(line.length);
        bundle.max_depth = bundle.max_depth.max(line.depth);
        bundle.max_line_length = bundle.max_line_length.max(line.length);
        bundle.max_file_length = bundle.max_file_length.max(line.line);

        files.insert(line.file.as_str());

        match bundle
            .language_breakdown
            .iter_mut()
            .find(|(kind, _)| kind == &line.kind)
        {
            Some((_, count)) => *count += 1,
            None => bundle.language_breakdown.push((line.kind.clone(), 1)),
        }

        let period = PERIODS
            .iter()
            .position(|p| *p == DayPeriod::from_hour(line.datetime.hour()))
            .unwrap_or(0);
        if period_counts[period] == 0 {
            period_order.push(period);
        }
        period_counts[period] += 1;
    }

    bundle.file_count = files.len();
    if bundle.total_loc > 0 {
        bundle.avg_line_length = length_sum as f64 / bundle.total_loc as f64;
        let mut busiest: Option<usize> = None;
        for &period in &period_order {
            if busiest.map_or(true, |b| period_counts[period] > period_counts[b]) {
                busiest = Some(period);
            }
        }
        bundle.busiest_period = busiest.map(|i| PERIODS[i]);
    }

    for commit in commits {
        bundle.commit_count += 1;
        bundle.max_lines_in_single_commit =
            bundle.max_lines_in_single_commit.max(commit.total_lines);
    }

    bundle
}
