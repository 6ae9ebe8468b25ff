// src/parser.rs

use std::io::Read;

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::error::Error;
use crate::model::LineRecord;

/// One raw CSV row prior to validation. Every column deserializes as an
/// optional string so a missing field can be reported by name rather than
/// as an opaque decoding error.
#[derive(Debug, Deserialize)]
struct RawRow {
    commit: Option<String>,
    file: Option<String>,
    line: Option<String>,
    depth: Option<String>,
    length: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    author: Option<String>,
    datetime: Option<String>,
    timezone: Option<String>,
}

/// Parses the raw commit log into line records.
///
/// Output order equals input row order exactly; the aggregator's
/// first-row-wins metadata selection depends on it. The first bad row
/// aborts the parse, so the result is all-or-nothing.
pub fn parse<R: Read>(reader: R) -> Result<Vec<LineRecord>, Error> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (i, row) in rdr.deserialize::<RawRow>().enumerate() {
        let row_no = i + 1;
        let row = row.map_err(|e| Error::MalformedRow {
            row: row_no,
            reason: e.to_string(),
        })?;
        records.push(parse_row(row_no, row)?);
    }

    Ok(records)
}

fn parse_row(row_no: usize, row: RawRow) -> Result<LineRecord, Error> {
    let commit_id = require(row_no, "commit", row.commit)?;
    let file = require(row_no, "file", row.file)?;
    let kind = require(row_no, "type", row.kind)?;
    let author = require(row_no, "author", row.author)?;
    let line = parse_count(row_no, "line", &require(row_no, "line", row.line)?)?;
    let depth = parse_count(row_no, "depth", &require(row_no, "depth", row.depth)?)?;
    let length = parse_count(row_no, "length", &require(row_no, "length", row.length)?)?;

    let datetime_raw = require(row_no, "datetime", row.datetime)?;
    let timezone = require(row_no, "timezone", row.timezone)?;
    let datetime = parse_timestamp(row_no, &datetime_raw, &timezone)?;

    Ok(LineRecord {
        commit_id,
        file,
        line,
        kind,
        depth,
        length,
        author,
        datetime,
    })
}

fn require(row: usize, field: &'static str, value: Option<String>) -> Result<String, Error> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MalformedRow {
            row,
            reason: format!("missing field `{field}`"),
        }),
    }
}

fn parse_count(row: usize, field: &'static str, value: &str) -> Result<u32, Error> {
    value.parse::<u32>().map_err(|_| Error::MalformedRow {
        row,
        reason: format!("field `{field}` is not a non-negative integer: `{value}`"),
    })
}

/// Builds the record timestamp, preserving the log's offset.
///
/// The `datetime` column may already carry its offset (RFC 3339); if not,
/// the `timezone` column is appended, mirroring how the log writes a local
/// timestamp next to a separate offset.
fn parse_timestamp(
    row: usize,
    datetime: &str,
    timezone: &str,
) -> Result<DateTime<FixedOffset>, Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime) {
        return Ok(dt);
    }

    let combined = format!("{datetime}{timezone}");
    const FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%:z", "%Y-%m-%dT%H:%M%:z"];
    for format in FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&combined, format) {
            return Ok(dt);
        }
    }

    Err(Error::InvalidTimestamp {
        row,
        value: combined,
    })
}
