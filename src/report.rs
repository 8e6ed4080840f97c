//! Availability report types
//!
//! An `AvailabilityReport` is one observation of a charger's state over a
//! closed time window. A `MergedInterval` is what the merger produces after
//! coalescing overlapping "up" windows of one station.

/// One charger's up/down status over `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityReport {
    /// Charger that produced the report
    pub charger_id: u32,
    /// Window start (inclusive)
    pub start: u64,
    /// Window end (inclusive); `end >= start` is assumed
    pub end: u64,
    /// `true` when the charger was available for the whole window
    pub up: bool,
}

impl AvailabilityReport {
    pub fn new(charger_id: u32, start: u64, end: u64, up: bool) -> Self {
        Self {
            charger_id,
            start,
            end,
            up,
        }
    }
}

/// A coalesced run of report windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergedInterval {
    pub start: u64,
    pub end: u64,
    pub up: bool,
}

impl MergedInterval {
    /// Length of the interval, saturating at zero for inverted windows
    pub fn duration(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

impl From<&AvailabilityReport> for MergedInterval {
    fn from(report: &AvailabilityReport) -> Self {
        Self {
            start: report.start,
            end: report.end,
            up: report.up,
        }
    }
}

impl From<MergedInterval> for AvailabilityReport {
    /// Re-wrap a merged interval as a report (charger 0) so it can be merged again
    fn from(interval: MergedInterval) -> Self {
        Self::new(0, interval.start, interval.end, interval.up)
    }
}
