//! Errors raised while building a report.

use thiserror::Error;

/// Errors that can occur while aggregating participant records.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// The meeting had no participant records, so there is no date to
    /// label the report with.
    #[error("no participant records to report on")]
    Empty,

    /// The configured time zone is not a known IANA name.
    #[error("unknown time zone: {0}")]
    InvalidTimeZone(String),
}
