//! Core types: participant records, report aggregation, time zones, tracing

pub mod error;
pub mod participant;
pub mod report;
pub mod time;
pub mod tracing;

pub use error::ReportError;
pub use participant::ParticipantRecord;
pub use report::{
    AggregatedReportRow, CellValue, DEFAULT_FILE_PREFIX, ParticipantReport, REPORT_COLUMNS,
    aggregate, report_date, seconds_to_hours,
};
pub use time::{DEFAULT_TIME_ZONE, TIMESTAMP_FORMAT, parse_time_zone};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
