//! CSV output format for uptime reports

use crate::uptime::{StationUptime, UptimeResult};

/// CSV record for a single station
#[derive(Debug, Clone)]
pub struct CsvStation {
    pub station_id: u32,
    pub uptime_percent: u8,
    pub up_time: u64,
    pub total_time: u64,
}

impl From<&StationUptime> for CsvStation {
    fn from(uptime: &StationUptime) -> Self {
        Self {
            station_id: uptime.station_id,
            uptime_percent: uptime.percent,
            up_time: uptime.up_time,
            total_time: uptime.total_time,
        }
    }
}

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput {
    stations: Vec<CsvStation>,
    include_timing: bool,
}

impl CsvOutput {
    /// Create a new CSV output formatter
    pub fn new(include_timing: bool) -> Self {
        Self {
            stations: Vec::new(),
            include_timing,
        }
    }

    pub fn from_result(result: &UptimeResult, include_timing: bool) -> Self {
        let mut output = Self::new(include_timing);
        for uptime in result.iter() {
            output.add_station(CsvStation::from(uptime));
        }
        output
    }

    pub fn add_station(&mut self, station: CsvStation) {
        self.stations.push(station);
    }

    fn header(&self) -> &'static str {
        if self.include_timing {
            "station_id,uptime_percent,up_time,total_time"
        } else {
            "station_id,uptime_percent"
        }
    }

    fn format_station(&self, station: &CsvStation) -> String {
        let mut fields = vec![
            station.station_id.to_string(),
            station.uptime_percent.to_string(),
        ];

        if self.include_timing {
            fields.push(station.up_time.to_string());
            fields.push(station.total_time.to_string());
        }

        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(self.header());
        output.push('\n');

        for station in &self.stations {
            output.push_str(&self.format_station(station));
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(station_id: u32, uptime_percent: u8) -> CsvStation {
        CsvStation {
            station_id,
            uptime_percent,
            up_time: 150_000,
            total_time: 200_000,
        }
    }

    #[test]
    fn test_csv_basic_header() {
        let output = CsvOutput::new(false);
        assert_eq!(output.header(), "station_id,uptime_percent");
    }

    #[test]
    fn test_csv_header_with_timing() {
        let output = CsvOutput::new(true);
        assert_eq!(output.header(), "station_id,uptime_percent,up_time,total_time");
    }

    #[test]
    fn test_csv_format_station_basic() {
        let output = CsvOutput::new(false);
        assert_eq!(output.format_station(&station(2, 75)), "2,75");
    }

    #[test]
    fn test_csv_format_station_with_timing() {
        let output = CsvOutput::new(true);
        assert_eq!(output.format_station(&station(2, 75)), "2,75,150000,200000");
    }

    #[test]
    fn test_csv_to_csv_output() {
        let mut output = CsvOutput::new(false);
        output.add_station(station(0, 100));
        output.add_station(station(1, 0));

        assert_eq!(output.to_csv(), "station_id,uptime_percent\n0,100\n1,0\n");
    }

    #[test]
    fn test_csv_empty_output_has_header() {
        assert_eq!(CsvOutput::new(false).to_csv(), "station_id,uptime_percent\n");
    }
}
