// src/lib.rs

//! Aggregation engine behind a portfolio site's commit-history page.
//!
//! Turns a line-level commit log (one CSV row per line of code per commit)
//! into commit summaries, a time-sorted index, and range-queryable filtered
//! views with summary statistics. Rendering is someone else's job: every
//! result here is plain data.

pub mod aggregator;
pub mod cli;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod parser;
pub mod stats;

pub use error::Error;
pub use filter::{apply_filter, FilterCriteria, FilteredView};
pub use index::TimelineIndex;
pub use model::{CommitSummary, LineRecord};
pub use stats::{DayPeriod, StatBundle};
