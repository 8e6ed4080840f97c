//! Error types for uptime calculation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading and parsing an availability file
#[derive(Error, Debug)]
pub enum UptimeError {
    #[error("expected one argument, the path to a file")]
    Usage,

    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What was wrong with a line inside a recognized section
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("invalid station line: {0:?} (expected <station_id> <charger_id>...)")]
    StationLine(String),

    #[error("invalid report line: {0:?} (expected <charger_id> <start> <end> <up>)")]
    ReportLine(String),

    #[error("invalid {field}: {token:?}")]
    InvalidNumber { field: &'static str, token: String },
}

/// Result type for uptime operations
pub type Result<T> = std::result::Result<T, UptimeError>;

impl UptimeError {
    pub(crate) fn parse(line: usize, kind: ParseErrorKind) -> Self {
        Self::Parse { line, kind }
    }
}
