// src/error.rs

use thiserror::Error;

/// Everything that can go wrong between raw log rows and a queryable index.
///
/// Parse-time errors (`MalformedRow`, `InvalidTimestamp`) abort the whole
/// load; a partially parsed index is never exposed. `EmptyIndex` is the one
/// query-time error and is recoverable by guarding with
/// `TimelineIndex::is_empty`.
#[derive(Debug, Error)]
pub enum Error {
    /// A row is missing a required field, or a count column does not parse
    /// as a non-negative integer. Row numbers are 1-based, header excluded.
    #[error("malformed row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// The datetime and timezone columns do not combine into a valid
    /// timestamp.
    #[error("row {row}: invalid timestamp `{value}`")]
    InvalidTimestamp { row: usize, value: String },

    /// An extent was requested on an index with no commits.
    #[error("timeline index is empty")]
    EmptyIndex,

    #[error("failed to read commit log: {0}")]
    Io(#[from] std::io::Error),
}
