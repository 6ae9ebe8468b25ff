// src/cli.rs

use chrono::{DateTime, FixedOffset};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the line-level commit log (CSV)
    #[arg(short, long)]
    pub log: PathBuf,

    /// Only count commits at or before this instant (RFC 3339)
    #[arg(long, value_parser = parse_rfc3339)]
    pub until: Option<DateTime<FixedOffset>>,

    /// Only count commits touching at least one line of this type
    #[arg(long)]
    pub line_type: Option<String>,
}

fn parse_rfc3339(value: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value)
}
