//! Result reporting
//!
//! The text format is one `<station_id> <percent>` line per station in
//! ascending id order. JSON and CSV renderers live in their own modules.

use crate::cli::OutputFormat;
use crate::csv_output::CsvOutput;
use crate::json_output::JsonOutput;
use crate::uptime::UptimeResult;
use std::io::{self, Write};

/// Render `<station_id> <percent>` lines
pub fn render_text(result: &UptimeResult) -> String {
    let mut output = String::new();
    for station in result.iter() {
        output.push_str(&format!("{} {}\n", station.station_id, station.percent));
    }
    output
}

/// Render the report in the requested format
///
/// `detailed` adds up/total time columns to CSV output.
pub fn render(result: &UptimeResult, format: OutputFormat, detailed: bool) -> io::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result)),
        OutputFormat::Json => {
            let mut json = JsonOutput::from_result(result).to_json()?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => Ok(CsvOutput::from_result(result, detailed).to_csv()),
    }
}

/// Write the report to `out`
pub fn write_report<W: Write>(
    out: &mut W,
    result: &UptimeResult,
    format: OutputFormat,
    detailed: bool,
) -> io::Result<()> {
    out.write_all(render(result, format, detailed)?.as_bytes())?;
    out.flush()
}

/// Per-station breakdown table
pub fn render_summary(result: &UptimeResult) -> String {
    if result.is_empty() {
        return "No stations.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("station   reports  intervals          up_time       total_time  uptime\n");
    output.push_str("------- --------- ---------- ---------------- ---------------- -------\n");

    let mut total_reports = 0usize;
    let mut total_intervals = 0usize;
    for station in result.iter() {
        total_reports += station.reports;
        total_intervals += station.merged_intervals;
        output.push_str(&format!(
            "{:>7} {:>9} {:>10} {:>16} {:>16} {:>6}%\n",
            station.station_id,
            station.reports,
            station.merged_intervals,
            station.up_time,
            station.total_time,
            station.percent
        ));
    }

    output.push_str("------- --------- ---------- ---------------- ---------------- -------\n");
    output.push_str(&format!(
        "{:>7} {:>9} {:>10}\n",
        "total", total_reports, total_intervals
    ));
    output
}

/// Print the breakdown table to stderr
pub fn print_summary(result: &UptimeResult) {
    eprint!("{}", render_summary(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;
    use crate::uptime::calculate_uptime;

    fn canonical() -> UptimeResult {
        let input = "\
[Stations]
2 1004
0 1001 1002
1 1003

[Charger Availability Reports]
1001 0 50000 true
1001 50000 100000 true
1002 50000 100000 true
1003 25000 75000 false
1004 0 50000 true
1004 100000 200000 true
";
        calculate_uptime(&parse_str(input).unwrap())
    }

    #[test]
    fn test_text_sorted_by_station() {
        assert_eq!(render_text(&canonical()), "0 100\n1 0\n2 75\n");
    }

    #[test]
    fn test_text_empty() {
        assert_eq!(render_text(&UptimeResult::default()), "");
    }

    #[test]
    fn test_render_dispatches_text() {
        let text = render(&canonical(), OutputFormat::Text, true).unwrap();
        assert_eq!(text, "0 100\n1 0\n2 75\n");
    }

    #[test]
    fn test_render_csv() {
        let csv = render(&canonical(), OutputFormat::Csv, false).unwrap();
        assert_eq!(csv, "station_id,uptime_percent\n0,100\n1,0\n2,75\n");
    }

    #[test]
    fn test_render_csv_detailed() {
        let csv = render(&canonical(), OutputFormat::Csv, true).unwrap();
        assert!(csv.starts_with("station_id,uptime_percent,up_time,total_time\n"));
        assert!(csv.contains("2,75,150000,200000\n"));
    }

    #[test]
    fn test_render_json_parses() {
        let json = render(&canonical(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stations"].as_array().unwrap().len(), 3);
        assert_eq!(value["stations"][2]["uptime_percent"], 75);
    }

    #[test]
    fn test_write_report_to_buffer() {
        let mut buf = Vec::new();
        write_report(&mut buf, &canonical(), OutputFormat::Text, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 100\n1 0\n2 75\n");
    }

    #[test]
    fn test_summary_table() {
        let summary = render_summary(&canonical());
        assert!(summary.starts_with("station   reports"));
        assert!(summary.contains("    75%"));
        assert!(summary.contains(&format!("{:>7} {:>9} {:>10}\n", "total", 6, 4)));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(render_summary(&UptimeResult::default()), "No stations.\n");
    }
}
