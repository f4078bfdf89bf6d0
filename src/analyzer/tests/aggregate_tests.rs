//! Aggregation and statistics tests

use crate::analyzer::aggregate::{aggregate, average_per_hour};
use crate::analyzer::scanner::{FolderResult, ScanError};
use std::collections::BTreeMap;
use std::path::Path;

fn success_result(path: &str, dates: &[(&str, u64)]) -> FolderResult {
    let mut result = FolderResult::new(Path::new(path));
    for (date, count) in dates {
        result.date_counts.insert(date.to_string(), *count);
        result.total_count += count;
    }
    result
}

#[test]
fn test_two_folder_merge() {
    let results = vec![
        success_result("/logs/a", &[("2024-01-15", 10)]),
        success_result("/logs/b", &[("2024-01-15", 5), ("2024-02-01", 2)]),
    ];

    let report = aggregate(&results);

    assert_eq!(report.date_counts.get("2024-01-15"), Some(&15));
    assert_eq!(report.date_counts.get("2024-02-01"), Some(&2));
    assert_eq!(report.total_count, 17);
    assert_eq!(report.distinct_dates, 2);
    assert_eq!(report.folders_attempted, 2);
    assert_eq!(report.folders_succeeded, 2);
    assert_eq!(report.average_per_day(), Some(8.5));
}

#[test]
fn test_failed_results_counted_but_skipped() {
    let results = vec![
        success_result("/logs/a", &[("2024-01-15", 10)]),
        FolderResult::failed(Path::new("/logs/missing"), ScanError::NoMatchingFiles),
    ];

    let report = aggregate(&results);

    assert_eq!(report.folders_attempted, 2);
    assert_eq!(report.folders_succeeded, 1);
    assert_eq!(report.total_count, 10);
    assert_eq!(report.distinct_dates, 1);
}

#[test]
fn test_merge_is_order_independent() {
    let a = success_result("/logs/a", &[("2024-01-15", 3), ("2024-01-16", 1)]);
    let b = success_result("/logs/b", &[("2024-01-15", 4)]);
    let c = FolderResult::failed(Path::new("/logs/c"), ScanError::NoMatchingFiles);

    let forward = aggregate(&[a.clone(), b.clone(), c.clone()]);
    let backward = aggregate(&[c, b, a]);

    assert_eq!(forward, backward);
}

#[test]
fn test_empty_aggregate_has_no_average() {
    let report = aggregate(&[]);

    assert!(report.is_empty());
    assert_eq!(report.average_per_day(), None);
    assert_eq!(report.folders_attempted, 0);
}

#[test]
fn test_all_failed_aggregate_is_empty() {
    let results = vec![
        FolderResult::failed(Path::new("/a"), ScanError::NoMatchingFiles),
        FolderResult::failed(
            Path::new("/b"),
            ScanError::FolderAccess {
                reason: "permission denied".to_string(),
            },
        ),
    ];

    let report = aggregate(&results);

    assert!(report.is_empty());
    assert_eq!(report.folders_attempted, 2);
    assert_eq!(report.folders_succeeded, 0);
    assert_eq!(report.average_per_day(), None);
}

#[test]
fn test_average_per_hour_over_span() {
    let hourly: BTreeMap<u8, u64> = [(9, 3), (11, 2)].into_iter().collect();

    // Total 5 over the inclusive span 9..=11.
    let average = average_per_hour(&hourly, 5);
    assert!((average - 5.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_average_per_hour_single_bucket() {
    let hourly: BTreeMap<u8, u64> = [(14, 4)].into_iter().collect();
    assert_eq!(average_per_hour(&hourly, 4), 4.0);
}

#[test]
fn test_average_per_hour_empty_map() {
    let hourly: BTreeMap<u8, u64> = BTreeMap::new();
    assert_eq!(average_per_hour(&hourly, 7), 0.0);
}
