//! Interval merging for one station's availability reports
//!
//! Reports are sorted by `start` (ties broken by `end`) and swept once.
//! An incoming "up" window that overlaps or touches the current "up" run is
//! folded into it; everything else becomes a new entry. "Down" windows are
//! never merged, and an "up" and a "down" window that overlap both survive
//! as separate entries.
//!
//! Guarantees on the output:
//! - ordered ascending by `(start, end)`
//! - no two "up" entries overlap or touch
//! - merging the output again yields the same list

use crate::report::{AvailabilityReport, MergedInterval};

/// Merge a station's reports into ordered, coalesced intervals
///
/// Empty input yields an empty list.
pub fn merge_reports(reports: &[AvailabilityReport]) -> Vec<MergedInterval> {
    let mut sorted: Vec<MergedInterval> = reports.iter().map(MergedInterval::from).collect();
    sorted.sort_by_key(|interval| (interval.start, interval.end));

    let mut merged: Vec<MergedInterval> = Vec::with_capacity(sorted.len());
    // Index of the most recent "up" run in `merged`
    let mut up_run: Option<usize> = None;

    for interval in sorted {
        if interval.up {
            if let Some(idx) = up_run {
                let run = &mut merged[idx];
                if interval.start <= run.end {
                    run.end = run.end.max(interval.end);
                    continue;
                }
            }
            up_run = Some(merged.len());
        }
        merged.push(interval);
    }

    // Extending a run can move it past a later "down" entry with the same start.
    merged.sort_by_key(|interval| (interval.start, interval.end));
    merged
}
