// src/filter.rs

use chrono::{DateTime, FixedOffset};

use crate::index::TimelineIndex;
use crate::model::{CommitSummary, LineRecord};
use crate::stats::{self, StatBundle};

/// Sentinel accepted by the line-type filter to select every commit.
pub const ALL_TYPES: &str = "*";

/// One filter request, regardless of which UI control triggered it.
#[derive(Debug, Clone)]
pub enum FilterCriteria {
    /// No filtering; the whole index.
    All,
    /// Commits at or before the cutoff (progress slider, playback).
    UpTo(DateTime<FixedOffset>),
    /// Commits inside a time range crossed with an hour-of-day range,
    /// all bounds inclusive (brush selection).
    Region {
        t_min: DateTime<FixedOffset>,
        t_max: DateTime<FixedOffset>,
        h_min: f64,
        h_max: f64,
    },
    /// Commits touching at least one line of the given type (legend click).
    LineType(String),
}

/// A transient subset of the index: the matching commits and the line
/// records reachable from them. Borrows the index; never stored.
#[derive(Debug)]
pub struct FilteredView<'a> {
    pub commits: Vec<&'a CommitSummary>,
    pub lines: Vec<&'a LineRecord>,
}

/// The single entry point every trigger goes through: derive the matching
/// subset, then recompute its summary statistics. Pure; re-callable with
/// any criteria in any order.
pub fn apply_filter<'a>(
    index: &'a TimelineIndex,
    criteria: &FilterCriteria,
) -> (FilteredView<'a>, StatBundle) {
    let commits: Vec<&CommitSummary> = match criteria {
        FilterCriteria::All => index.commits().iter().collect(),
        FilterCriteria::UpTo(cutoff) => select_by_time(index, *cutoff).iter().collect(),
        FilterCriteria::Region {
            t_min,
            t_max,
            h_min,
            h_max,
        } => select_by_region(index, *t_min, *t_max, *h_min, *h_max),
        FilterCriteria::LineType(kind) => select_by_line_type(index, kind),
    };

    let lines: Vec<&LineRecord> = commits
        .iter()
        .flat_map(|commit| index.lines_of(commit))
        .collect();
    let bundle = stats::reduce(lines.iter().copied(), commits.iter().copied());

    (FilteredView { commits, lines }, bundle)
}

/// Commits with `datetime <= cutoff`. Binary search over the pre-sorted
/// sequence, so the slider can drag without rescanning.
pub fn select_by_time(
    index: &TimelineIndex,
    cutoff: DateTime<FixedOffset>,
) -> &[CommitSummary] {
    let end = index.commits().partition_point(|c| c.datetime <= cutoff);
    &index.commits()[..end]
}

/// Commits inside [t_min, t_max] x [h_min, h_max], bounds inclusive.
/// A degenerate or non-matching region yields an empty vector.
pub fn select_by_region(
    index: &TimelineIndex,
    t_min: DateTime<FixedOffset>,
    t_max: DateTime<FixedOffset>,
    h_min: f64,
    h_max: f64,
) -> Vec<&CommitSummary> {
    index
        .commits()
        .iter()
        .filter(|c| {
            c.datetime >= t_min
                && c.datetime <= t_max
                && c.hour_frac >= h_min
                && c.hour_frac <= h_max
        })
        .collect()
}

/// Commits with at least one member line of the given type. `ALL_TYPES`
/// selects the full sequence.
pub fn select_by_line_type<'a>(index: &'a TimelineIndex, kind: &str) -> Vec<&'a CommitSummary> {
    if kind == ALL_TYPES {
        return index.commits().iter().collect();
    }
    index
        .commits()
        .iter()
        .filter(|commit| index.lines_of(commit).any(|line| line.kind == kind))
        .collect()
}
