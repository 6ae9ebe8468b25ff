// tests/pipeline.rs
//
// End-to-end properties over the parse -> aggregate -> index -> filter
// pipeline, starting from CSV text the way the binary does.

use std::collections::HashSet;

use chrono::Duration;
use loc_meter::{aggregator, apply_filter, parser, FilterCriteria, TimelineIndex};

const LOG: &str = "\
commit,file,line,depth,length,type,author,date,time,timezone,datetime
a1,x.js,1,0,10,js,u,2024-01-01,10:00,+00:00,2024-01-01T10:00
a1,x.js,2,0,5,js,u,2024-01-01,10:00,+00:00,2024-01-01T10:00
b2,y.css,1,1,20,css,u,2024-01-02,11:30,+00:00,2024-01-02T11:30
c3,x.js,3,2,8,js,v,2024-01-03,22:15,+00:00,2024-01-03T22:15
b2,z.html,1,0,15,html,u,2024-01-02,11:30,+00:00,2024-01-02T11:30
";

fn load() -> TimelineIndex {
    let lines = parser::parse(LOG.as_bytes()).expect("log parses");
    let commits = aggregator::aggregate(&lines);
    TimelineIndex::build(lines, commits)
}

#[test]
fn index_counts_match_the_input() {
    let index = load();

    let distinct: HashSet<&str> = index.lines().iter().map(|l| l.commit_id.as_str()).collect();
    assert_eq!(index.commits().len(), distinct.len());
    assert_eq!(index.lines().len(), 5);

    let total: usize = index.commits().iter().map(|c| c.total_lines).sum();
    assert_eq!(total, index.lines().len());
}

#[test]
fn every_commit_counts_its_own_lines() {
    let index = load();
    for commit in index.commits() {
        let members = index
            .lines()
            .iter()
            .filter(|l| l.commit_id == commit.id)
            .count();
        assert_eq!(commit.total_lines, members, "commit {}", commit.id);
        assert_eq!(index.lines_of(commit).count(), members);
    }
}

#[test]
fn time_cutoff_grows_monotonically() {
    let index = load();
    let (min_dt, max_dt) = index.extent_datetime().unwrap();

    let mut previous = 0;
    let mut cutoff = min_dt - Duration::seconds(1);
    let (view, _) = apply_filter(&index, &FilterCriteria::UpTo(cutoff));
    assert!(view.commits.is_empty());

    while cutoff < max_dt {
        cutoff = cutoff + Duration::hours(12);
        let (view, bundle) = apply_filter(&index, &FilterCriteria::UpTo(cutoff));
        assert!(view.commits.len() >= previous);
        assert_eq!(bundle.commit_count, view.commits.len());
        previous = view.commits.len();
    }
    assert_eq!(previous, index.commits().len());
}

#[test]
fn full_extent_region_matches_the_unfiltered_view() {
    let index = load();
    let (t_min, t_max) = index.extent_datetime().unwrap();
    let (h_min, h_max) = index.extent_hour_frac().unwrap();

    let (all, all_stats) = apply_filter(&index, &FilterCriteria::All);
    let (region, region_stats) = apply_filter(
        &index,
        &FilterCriteria::Region {
            t_min,
            t_max,
            h_min,
            h_max,
        },
    );

    assert_eq!(all.commits.len(), region.commits.len());
    assert_eq!(all_stats.total_loc, region_stats.total_loc);
    assert_eq!(all_stats.file_count, 3);
}

#[test]
fn filtered_stats_cover_only_reachable_lines() {
    let index = load();
    let (view, bundle) = apply_filter(&index, &FilterCriteria::LineType("css".to_string()));

    // b2 is the only commit touching css, but its stats span all of b2's
    // lines, html included.
    assert_eq!(view.commits.len(), 1);
    assert_eq!(view.commits[0].id, "b2");
    assert_eq!(bundle.total_loc, 2);
    assert_eq!(bundle.max_line_length, 20);
    assert_eq!(
        bundle.language_breakdown,
        vec![("css".to_string(), 1), ("html".to_string(), 1)]
    );
}

#[test]
fn worked_example_statistics() {
    let index = load();
    let (_, bundle) = apply_filter(&index, &FilterCriteria::All);

    assert_eq!(bundle.commit_count, 3);
    assert_eq!(bundle.file_count, 3);
    assert_eq!(bundle.total_loc, 5);
    assert_eq!(bundle.max_depth, 2);
    assert_eq!(bundle.max_line_length, 20);
    assert_eq!(bundle.max_lines_in_single_commit, 2);
    assert_eq!(bundle.max_file_length, 3);

    let kinds: Vec<&str> = bundle
        .language_breakdown
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(kinds, ["js", "css", "html"]);
}
