//! JSON output format for uptime reports

use crate::uptime::{StationUptime, UptimeResult};
use serde::{Deserialize, Serialize};

/// A single station entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonStation {
    pub station_id: u32,
    /// Uptime percentage (0-100)
    pub uptime_percent: u8,
    /// Summed "up" duration
    pub up_time: u64,
    /// Observed span
    pub total_time: u64,
    pub reports: usize,
    pub merged_intervals: usize,
}

impl From<&StationUptime> for JsonStation {
    fn from(uptime: &StationUptime) -> Self {
        Self {
            station_id: uptime.station_id,
            uptime_percent: uptime.percent,
            up_time: uptime.up_time,
            total_time: uptime.total_time,
            reports: uptime.reports,
            merged_intervals: uptime.merged_intervals,
        }
    }
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Crate version that produced the report
    pub version: String,
    /// Format name
    pub format: String,
    /// Stations in ascending id order
    pub stations: Vec<JsonStation>,
}

impl JsonOutput {
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "charger-uptime-json-v1".to_string(),
            stations: Vec::new(),
        }
    }

    pub fn from_result(result: &UptimeResult) -> Self {
        let mut output = Self::new();
        output.stations = result.iter().map(JsonStation::from).collect();
        output
    }

    /// Serialize to a pretty-printed JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AvailabilityReport;
    use crate::uptime::station_uptime;

    #[test]
    fn test_json_empty_output() {
        let output = JsonOutput::new();
        let json = output.to_json().unwrap();
        assert!(json.contains("\"format\": \"charger-uptime-json-v1\""));
        assert!(json.contains("\"stations\": []"));
    }

    #[test]
    fn test_json_stations_in_order() {
        let result: UptimeResult = vec![
            station_uptime(2, &[AvailabilityReport::new(1004, 0, 50_000, true)]),
            station_uptime(1, &[]),
        ]
        .into_iter()
        .collect();

        let output = JsonOutput::from_result(&result);
        assert_eq!(output.stations.len(), 2);
        assert_eq!(output.stations[0].station_id, 1);
        assert_eq!(output.stations[1].station_id, 2);
        assert_eq!(output.stations[1].uptime_percent, 100);
    }

    #[test]
    fn test_json_roundtrip_fields() {
        let result: UptimeResult = vec![station_uptime(
            0,
            &[
                AvailabilityReport::new(1, 0, 10, true),
                AvailabilityReport::new(1, 10, 20, false),
            ],
        )]
        .into_iter()
        .collect();

        let json = JsonOutput::from_result(&result).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let station = &value["stations"][0];
        assert_eq!(station["station_id"], 0);
        assert_eq!(station["uptime_percent"], 50);
        assert_eq!(station["up_time"], 10);
        assert_eq!(station["total_time"], 20);
        assert_eq!(station["merged_intervals"], 2);
    }
}
