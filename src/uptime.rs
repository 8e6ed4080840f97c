//! Per-station uptime aggregation
//!
//! For each station the reports are merged, "up" durations are summed and
//! divided by the observed span (first start to furthest end). Gaps between
//! reports count toward the span but never toward uptime, so sparsely
//! reporting stations score lower than their raw report ratio.

use crate::merge::merge_reports;
use crate::parser::StationReports;
use crate::report::AvailabilityReport;
use std::collections::BTreeMap;
use tracing::debug;

/// Uptime breakdown for a single station
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationUptime {
    pub station_id: u32,
    /// Reports assigned to the station
    pub reports: usize,
    /// Entries left after merging
    pub merged_intervals: usize,
    /// Summed duration of merged "up" intervals
    pub up_time: u64,
    /// Observed span including gaps and "down" intervals
    pub total_time: u64,
    /// `floor(up_time * 100 / total_time)`, 0 when the span is empty
    pub percent: u8,
}

/// Uptime for every declared station, keyed by station id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UptimeResult {
    stations: BTreeMap<u32, StationUptime>,
}

impl UptimeResult {
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn get(&self, station_id: u32) -> Option<&StationUptime> {
        self.stations.get(&station_id)
    }

    pub fn percent(&self, station_id: u32) -> Option<u8> {
        self.get(station_id).map(|s| s.percent)
    }

    /// Stations in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &StationUptime> {
        self.stations.values()
    }

    /// Plain `station_id -> percent` view
    pub fn percentages(&self) -> BTreeMap<u32, u8> {
        self.stations
            .iter()
            .map(|(id, uptime)| (*id, uptime.percent))
            .collect()
    }
}

impl FromIterator<StationUptime> for UptimeResult {
    fn from_iter<I: IntoIterator<Item = StationUptime>>(iter: I) -> Self {
        Self {
            stations: iter.into_iter().map(|s| (s.station_id, s)).collect(),
        }
    }
}

/// Compute uptime for one station's reports
pub fn station_uptime(station_id: u32, reports: &[AvailabilityReport]) -> StationUptime {
    let merged = merge_reports(reports);

    let (up_time, total_time) = match merged.first() {
        None => (0, 0),
        Some(first) => {
            let up_time: u64 = merged
                .iter()
                .filter(|interval| interval.up)
                .map(|interval| interval.duration())
                .sum();
            let last_end = merged.iter().map(|interval| interval.end).max().unwrap_or(first.end);
            (up_time, last_end.saturating_sub(first.start))
        }
    };

    let percent = uptime_percent(up_time, total_time);
    debug!(
        station_id,
        reports = reports.len(),
        merged = merged.len(),
        up_time,
        total_time,
        percent,
        "computed station uptime"
    );

    StationUptime {
        station_id,
        reports: reports.len(),
        merged_intervals: merged.len(),
        up_time,
        total_time,
        percent,
    }
}

/// Compute uptime for every station
///
/// The result has one entry per declared station; stations with no reports
/// score 0.
pub fn calculate_uptime(stations: &StationReports) -> UptimeResult {
    stations
        .iter()
        .map(|(station_id, reports)| station_uptime(station_id, reports))
        .collect()
}

/// `floor(up_time * 100 / total_time)` without overflow
pub fn uptime_percent(up_time: u64, total_time: u64) -> u8 {
    if total_time == 0 {
        return 0;
    }
    let ratio = u128::from(up_time) * 100 / u128::from(total_time);
    ratio.min(100) as u8
}
