//! charger-uptime - per-station uptime from charger availability reports
//!
//! This library parses availability files, merges each station's report
//! windows into coalesced intervals, and derives an integer uptime
//! percentage per station.

pub mod cli;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod merge;
pub mod output;
pub mod parser;
pub mod report;
pub mod uptime;

pub use error::{ParseErrorKind, Result, UptimeError};
pub use merge::merge_reports;
pub use parser::{parse_file, parse_reader, parse_str, StationReports};
pub use report::{AvailabilityReport, MergedInterval};
pub use uptime::{calculate_uptime, station_uptime, StationUptime, UptimeResult};
