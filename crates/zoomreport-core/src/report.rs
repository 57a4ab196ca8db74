//! Attendance aggregation.
//!
//! Turns the flat list of attendance spans returned by Zoom into one row per
//! participant, with total time in the meeting and the first join / last
//! leave times in the report time zone.
//!
//! ```text
//! ParticipantRecord ─┐
//! ParticipantRecord ─┼─ group by (id, name, user_email) ─▶ AggregatedReportRow
//! ParticipantRecord ─┘
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ReportError;
use crate::participant::ParticipantRecord;
use crate::time::{format_date, format_timestamp, to_report_zone};

/// Column names of the published sheet, in order.
pub const REPORT_COLUMNS: [&str; 6] = [
    "id",
    "name",
    "user_email",
    "total_duration",
    "join_time",
    "leave_time",
];

/// Default prefix of the spreadsheet name.
pub const DEFAULT_FILE_PREFIX: &str = "zoom_report";

const SECONDS_PER_HOUR: f64 = 3600.0;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Literal text.
    Text(String),
    /// A number, written without formatting.
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Attendance of one participant over the whole meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedReportRow {
    /// Participant identity.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address, possibly empty.
    pub user_email: String,
    /// Sum of all span durations, in seconds.
    pub total_seconds: u64,
    /// Earliest join time of all spans.
    pub first_join: DateTime<Tz>,
    /// Latest leave time of all spans.
    pub last_leave: DateTime<Tz>,
}

impl AggregatedReportRow {
    fn start(record: &ParticipantRecord, join: DateTime<Tz>, leave: DateTime<Tz>) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            user_email: record.user_email.clone(),
            total_seconds: record.duration,
            first_join: join,
            last_leave: leave,
        }
    }

    fn absorb(&mut self, duration: u64, join: DateTime<Tz>, leave: DateTime<Tz>) {
        self.total_seconds = self.total_seconds.saturating_add(duration);
        if join < self.first_join {
            self.first_join = join;
        }
        if leave > self.last_leave {
            self.last_leave = leave;
        }
    }

    /// Total attendance in hours, rounded to two decimals.
    pub fn total_duration(&self) -> f64 {
        seconds_to_hours(self.total_seconds)
    }

    /// First join time as `YYYY-MM-DD HH:MM:SS`.
    pub fn join_time(&self) -> String {
        format_timestamp(&self.first_join)
    }

    /// Last leave time as `YYYY-MM-DD HH:MM:SS`.
    pub fn leave_time(&self) -> String {
        format_timestamp(&self.last_leave)
    }

    /// The row as sheet cells, in [`REPORT_COLUMNS`] order.
    pub fn to_cells(&self) -> Vec<CellValue> {
        vec![
            self.id.as_str().into(),
            self.name.as_str().into(),
            self.user_email.as_str().into(),
            self.total_duration().into(),
            self.join_time().into(),
            self.leave_time().into(),
        ]
    }
}

/// Converts seconds to hours rounded to two decimals.
///
/// Ties round to even, so `18s` (0.005h) becomes `0.0`.
pub fn seconds_to_hours(seconds: u64) -> f64 {
    let hours = seconds as f64 / SECONDS_PER_HOUR;
    (hours * 100.0).round_ties_even() / 100.0
}

fn span_order(a: &ParticipantRecord, b: &ParticipantRecord) -> Ordering {
    a.id.cmp(&b.id)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.join_time.cmp(&b.join_time))
}

/// Groups attendance spans into one row per participant.
///
/// Rows are ordered by `(id, name, user_email)`. The result only depends on
/// the input, so calling this twice gives the same rows.
pub fn aggregate(records: &[ParticipantRecord], tz: Tz) -> Vec<AggregatedReportRow> {
    let mut spans: Vec<&ParticipantRecord> = records.iter().collect();
    spans.sort_by(|a, b| span_order(a, b));

    let mut groups: BTreeMap<(&str, &str, &str), AggregatedReportRow> = BTreeMap::new();
    for record in spans {
        let join = to_report_zone(record.join_time, tz);
        let leave = to_report_zone(record.leave_time, tz);

        match groups.entry(record.group_key()) {
            Entry::Occupied(mut entry) => entry.get_mut().absorb(record.duration, join, leave),
            Entry::Vacant(entry) => {
                entry.insert(AggregatedReportRow::start(record, join, leave));
            }
        }
    }

    debug!(
        "grouped {} attendance spans into {} participants",
        records.len(),
        groups.len()
    );
    groups.into_values().collect()
}

/// Date of the earliest join across all rows.
///
/// Fails with [`ReportError::Empty`] when there are no rows.
pub fn report_date(rows: &[AggregatedReportRow]) -> Result<NaiveDate, ReportError> {
    rows.iter()
        .map(|row| &row.first_join)
        .min()
        .map(|first| first.date_naive())
        .ok_or(ReportError::Empty)
}

/// The aggregated attendance report of one meeting.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantReport {
    rows: Vec<AggregatedReportRow>,
    date: NaiveDate,
    time_zone: Tz,
}

impl ParticipantReport {
    /// Aggregates the records and labels the report with its meeting date.
    pub fn build(records: &[ParticipantRecord], tz: Tz) -> Result<Self, ReportError> {
        let rows = aggregate(records, tz);
        let date = report_date(&rows)?;

        info!(
            spans = records.len(),
            participants = rows.len(),
            date = %date,
            "built participant report"
        );

        Ok(Self {
            rows,
            date,
            time_zone: tz,
        })
    }

    /// The aggregated rows.
    pub fn rows(&self) -> &[AggregatedReportRow] {
        &self.rows
    }

    /// The report date as `YYYY-MM-DD`.
    pub fn label(&self) -> String {
        format_date(self.date)
    }

    /// Time zone all timestamps are rendered in.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Name of the spreadsheet, e.g. `zoom_report_2024-03-15`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.label())
    }

    /// Total attendance of all participants, in seconds.
    pub fn total_seconds(&self) -> u64 {
        self.rows.iter().map(|row| row.total_seconds).sum()
    }

    /// The header row.
    pub fn header() -> Vec<CellValue> {
        REPORT_COLUMNS.iter().map(|c| CellValue::from(*c)).collect()
    }

    /// Header row followed by one row per participant.
    pub fn to_values(&self) -> Vec<Vec<CellValue>> {
        std::iter::once(Self::header())
            .chain(self.rows.iter().map(AggregatedReportRow::to_cells))
            .collect()
    }

    /// Renders the report as an aligned plain-text table.
    pub fn render_table(&self) -> String {
        let lines: Vec<[String; 6]> = std::iter::once(REPORT_COLUMNS.map(String::from))
            .chain(self.rows.iter().map(|row| {
                [
                    row.id.clone(),
                    row.name.clone(),
                    row.user_email.clone(),
                    format!("{:.2}", row.total_duration()),
                    row.join_time(),
                    row.leave_time(),
                ]
            }))
            .collect();

        let mut widths = [0usize; 6];
        for line in &lines {
            for (width, cell) in widths.iter_mut().zip(line) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        for line in &lines {
            let last = line.len() - 1;
            let cells: Vec<String> = line
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i == last {
                        cell.clone()
                    } else {
                        format!("{:<width$}", cell, width = widths[i])
                    }
                })
                .collect();
            out.push_str(&cells.join(" | "));
            out.push('\n');
        }
        out
    }
}
