//! Time zone handling for attendance timestamps.
//!
//! Zoom reports every timestamp in UTC. The report is produced in a single
//! fixed time zone, [`DEFAULT_TIME_ZONE`] unless configured otherwise, and
//! all timestamps are rendered with [`TIMESTAMP_FORMAT`].

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ReportError;

/// Time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::Australia::Sydney;

/// Format of rendered join/leave timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the report date label.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an IANA time zone name such as `Australia/Sydney`.
pub fn parse_time_zone(name: &str) -> Result<Tz, ReportError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ReportError::InvalidTimeZone(name.to_string()))
}

/// Converts a UTC instant into the report time zone.
pub fn to_report_zone(dt: DateTime<Utc>, tz: Tz) -> DateTime<Tz> {
    dt.with_timezone(&tz)
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS` in its own zone.
pub fn format_timestamp<Z: TimeZone>(dt: &DateTime<Z>) -> String
where
    Z::Offset: std::fmt::Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
