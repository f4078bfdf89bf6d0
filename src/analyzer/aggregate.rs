//! Merging per-folder results into a global report.
//!
//! Aggregation is a commutative sum over the successful folder results, so
//! the report is identical for any permutation of the inputs. Failed
//! results are counted but contribute nothing.

use crate::analyzer::scanner::FolderResult;
use serde::Serialize;
use std::collections::BTreeMap;

/// Combined statistics across all scanned folders.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateReport {
    /// Matches per date, summed over all successful folders
    pub date_counts: BTreeMap<String, u64>,
    /// Grand total of matches
    pub total_count: u64,
    /// Number of distinct dates seen
    pub distinct_dates: usize,
    /// Folders requested, successful or not
    pub folders_attempted: usize,
    /// Folders scanned without a terminal failure
    pub folders_succeeded: usize,
}

impl AggregateReport {
    /// Average matches per distinct date.
    ///
    /// `None` when no dates were seen; the caller reports "no entries"
    /// instead of dividing by zero.
    pub fn average_per_day(&self) -> Option<f64> {
        if self.distinct_dates == 0 {
            None
        } else {
            Some(self.total_count as f64 / self.distinct_dates as f64)
        }
    }

    /// Whether any matching entry was found anywhere.
    pub fn is_empty(&self) -> bool {
        self.date_counts.is_empty()
    }
}

/// Merge per-folder results into an [`AggregateReport`].
pub fn aggregate(results: &[FolderResult]) -> AggregateReport {
    let mut report = AggregateReport {
        folders_attempted: results.len(),
        ..Default::default()
    };

    for result in results {
        if !result.is_success() {
            continue;
        }
        report.folders_succeeded += 1;
        report.total_count += result.total_count;
        for (date, count) in &result.date_counts {
            *report.date_counts.entry(date.clone()).or_insert(0) += count;
        }
    }

    report.distinct_dates = report.date_counts.len();
    report
}

/// Average matches per hour for one date.
///
/// The span is the inclusive range between the earliest and latest observed
/// hour; an empty hourly map yields 0.0. The span is floored to 1, which
/// cannot trigger with min ≤ max but guards the division regardless.
pub fn average_per_hour(hourly: &BTreeMap<u8, u64>, total_count: u64) -> f64 {
    let (Some(min_hour), Some(max_hour)) = (hourly.keys().next(), hourly.keys().next_back()) else {
        return 0.0;
    };

    let hours_span = (i32::from(*max_hour) - i32::from(*min_hour) + 1).max(1);
    total_count as f64 / hours_span as f64
}
