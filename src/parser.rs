//! Availability file parser
//!
//! Input is line oriented with two recognized sections:
//!
//! ```text
//! [Stations]
//! <station_id> <charger_id> [<charger_id> ...]
//!
//! [Charger Availability Reports]
//! <charger_id> <start> <end> <true|other>
//! ```
//!
//! Any line starting with `[` switches the active section. Headers other than
//! the two above are accepted and their bodies ignored. Sections may come in
//! any order: reports are held back until the whole input has been read and
//! are then assigned to stations through the final charger→station index.

use crate::error::{ParseErrorKind, Result, UptimeError};
use crate::report::AvailabilityReport;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace};

const STATIONS_HEADER: &str = "[Stations]";
const REPORTS_HEADER: &str = "[Charger Availability Reports]";

/// Reports grouped by the station owning the reporting charger
///
/// Every station declared in `[Stations]` has an entry, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationReports {
    stations: BTreeMap<u32, Vec<AvailabilityReport>>,
}

impl StationReports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of declared stations
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Reports for one station, in file order
    pub fn get(&self, station_id: u32) -> Option<&[AvailabilityReport]> {
        self.stations.get(&station_id).map(Vec::as_slice)
    }

    /// Iterate stations in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[AvailabilityReport])> {
        self.stations.iter().map(|(id, reports)| (*id, reports.as_slice()))
    }

    /// Total number of reports assigned to any station
    pub fn report_count(&self) -> usize {
        self.stations.values().map(Vec::len).sum()
    }
}

impl From<BTreeMap<u32, Vec<AvailabilityReport>>> for StationReports {
    fn from(stations: BTreeMap<u32, Vec<AvailabilityReport>>) -> Self {
        Self { stations }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Before the first header
    Preamble,
    Stations,
    Reports,
    Unknown,
}

impl Section {
    fn from_header(header: &str) -> Self {
        match header {
            STATIONS_HEADER => Self::Stations,
            REPORTS_HEADER => Self::Reports,
            _ => Self::Unknown,
        }
    }
}

/// Line-by-line parser state
#[derive(Debug)]
struct Parser {
    section: Section,
    stations: BTreeMap<u32, Vec<AvailabilityReport>>,
    charger_stations: HashMap<u32, u32>,
    pending: Vec<AvailabilityReport>,
}

impl Parser {
    fn new() -> Self {
        Self {
            section: Section::Preamble,
            stations: BTreeMap::new(),
            charger_stations: HashMap::new(),
            pending: Vec::new(),
        }
    }

    fn feed_line(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = raw.trim();
        if line.is_empty() {
            return Ok(());
        }

        if line.starts_with('[') {
            self.section = Section::from_header(line);
            match self.section {
                Section::Unknown => {
                    debug!(line = line_no, header = line, "ignoring unknown section")
                }
                section => trace!(line = line_no, ?section, "entering section"),
            }
            return Ok(());
        }

        match self.section {
            Section::Stations => self.station_line(line_no, line),
            Section::Reports => self.report_line(line_no, line),
            Section::Preamble | Section::Unknown => {
                trace!(line = line_no, "skipping line outside a known section");
                Ok(())
            }
        }
    }

    /// `<station_id> <charger_id>+`
    fn station_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(UptimeError::parse(
                line_no,
                ParseErrorKind::StationLine(line.to_string()),
            ));
        }

        let station_id: u32 = parse_number(parts[0], "station id", line_no)?;
        self.stations.entry(station_id).or_default();

        for token in &parts[1..] {
            let charger_id: u32 = parse_number(token, "charger id", line_no)?;
            if let Some(previous) = self.charger_stations.insert(charger_id, station_id) {
                if previous != station_id {
                    debug!(
                        charger_id,
                        previous, station_id, "charger reassigned to another station"
                    );
                }
            }
        }
        Ok(())
    }

    /// `<charger_id> <start> <end> <up>`
    fn report_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(UptimeError::parse(
                line_no,
                ParseErrorKind::ReportLine(line.to_string()),
            ));
        }

        let charger_id: u32 = parse_number(parts[0], "charger id", line_no)?;
        let start: u64 = parse_number(parts[1], "start", line_no)?;
        let end: u64 = parse_number(parts[2], "end", line_no)?;
        // Only the exact literal "true" marks a charger as up.
        let up = parts[3] == "true";

        self.pending.push(AvailabilityReport::new(charger_id, start, end, up));
        Ok(())
    }

    fn finish(mut self) -> StationReports {
        let mut dropped = 0usize;
        for report in self.pending.drain(..) {
            match self.charger_stations.get(&report.charger_id) {
                Some(station_id) => {
                    self.stations.entry(*station_id).or_default().push(report)
                }
                None => {
                    dropped += 1;
                    trace!(
                        charger_id = report.charger_id,
                        "dropping report for unmapped charger"
                    );
                }
            }
        }

        let reports = StationReports::from(self.stations);
        debug!(
            stations = reports.len(),
            reports = reports.report_count(),
            dropped,
            "parsed availability input"
        );
        reports
    }
}

fn parse_number<T: FromStr>(token: &str, field: &'static str, line_no: usize) -> Result<T> {
    token.parse().map_err(|_| {
        UptimeError::parse(
            line_no,
            ParseErrorKind::InvalidNumber {
                field,
                token: token.to_string(),
            },
        )
    })
}

/// Parse availability data from any buffered reader
///
/// Lines are decoded lossily: bytes that are not UTF-8 are harmless in
/// ignored sections and fail as malformed tokens inside known ones.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<StationReports> {
    let mut parser = Parser::new();
    for (idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        parser.feed_line(idx + 1, &String::from_utf8_lossy(&line))?;
    }
    Ok(parser.finish())
}

/// Parse availability data held in memory
pub fn parse_str(input: &str) -> Result<StationReports> {
    let mut parser = Parser::new();
    for (idx, line) in input.lines().enumerate() {
        parser.feed_line(idx + 1, line)?;
    }
    Ok(parser.finish())
}

/// Open and parse an availability file
///
/// The file handle is dropped on every return path. Read failures are
/// reported as [`UptimeError::File`] carrying the path.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<StationReports> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| UptimeError::File {
        path: path.to_path_buf(),
        source,
    })?;

    parse_reader(BufReader::new(file)).map_err(|err| match err {
        UptimeError::Io(source) => UptimeError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
