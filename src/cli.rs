//! CLI argument parsing for charger-uptime

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the uptime report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<station_id> <percent>` lines (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "charger-uptime")]
#[command(version)]
#[command(about = "Per-station uptime from charger availability reports", long_about = None)]
pub struct Cli {
    /// Path to the availability file (exactly one is expected)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print a per-station breakdown (reports, intervals, up/total time) to stderr
    #[arg(short = 'c', long = "summary")]
    pub summary: bool,

    /// Enable debug logging on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
