// src/main.rs

use std::fs::File;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use loc_meter::cli::Args;
use loc_meter::{aggregator, parser, Error};
use loc_meter::{apply_filter, FilterCriteria, StatBundle, TimelineIndex};

fn main() -> ExitCode {
    let args = Args::parse();
    let start_time = Instant::now();

    // A load failure is surfaced exactly once; no partial index survives it.
    let index = match load_index(&args.log) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error loading commit log: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let criteria = match criteria_from_args(&args) {
        Ok(criteria) => criteria,
        Err(message) => {
            eprintln!("Error: {}", message);
            return ExitCode::FAILURE;
        }
    };

    println!(
        "Loaded {} lines across {} commits in {:.2?}.",
        index.lines().len(),
        index.commits().len(),
        start_time.elapsed()
    );
    if let Ok((min, max)) = index.extent_datetime() {
        println!(
            "History spans from {} to {}.",
            min.to_rfc2822(),
            max.to_rfc2822()
        );
    }

    let (view, bundle) = apply_filter(&index, &criteria);
    print_report(&bundle, view.commits.len());

    ExitCode::SUCCESS
}

fn load_index(path: &Path) -> Result<TimelineIndex, Error> {
    let file = File::open(path)?;
    let lines = parser::parse(file)?;
    let commits = aggregator::aggregate(&lines);
    Ok(TimelineIndex::build(lines, commits))
}

fn criteria_from_args(args: &Args) -> Result<FilterCriteria, String> {
    match (args.until, &args.line_type) {
        (Some(_), Some(_)) => Err("--until and --line-type cannot be combined".to_string()),
        (Some(cutoff), None) => Ok(FilterCriteria::UpTo(cutoff)),
        (None, Some(kind)) => Ok(FilterCriteria::LineType(kind.clone())),
        (None, None) => Ok(FilterCriteria::All),
    }
}

fn print_report(bundle: &StatBundle, selected_commits: usize) {
    println!("Selected {} commits.", selected_commits);
    println!("  Total LOC:        {}", bundle.total_loc);
    println!("  Files:            {}", bundle.file_count);
    println!("  Max depth:        {}", bundle.max_depth);
    println!("  Max line length:  {}", bundle.max_line_length);
    println!("  Max file length:  {}", bundle.max_file_length);
    println!("  Largest commit:   {} lines", bundle.max_lines_in_single_commit);
    println!("  Avg line length:  {:.1}", bundle.avg_line_length);
    if let Some(period) = bundle.busiest_period {
        println!("  Most work done:   {:?}", period);
    }
    for (kind, proportion) in bundle.language_proportions() {
        println!("  {:<8} {:>5.1}%", kind, proportion * 100.0);
    }
}
