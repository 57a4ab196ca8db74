//! The default command: run the report job and print a summary.

use serde::Serialize;
use zoomreport_core::{CellValue, ParticipantReport, seconds_to_hours};
use zoomreport_providers::google::PublishedReport;

use crate::config::ReportConfig;
use crate::error::{ClientError, ClientResult};
use crate::pipeline::{self, RunOutcome};
use crate::settings::{Overrides, RunSettings};

/// JSON shape of a dry run.
#[derive(Debug, Serialize)]
struct PreviewSummary<'a> {
    file_name: &'a str,
    date: String,
    time_zone: String,
    participants: usize,
    total_hours: f64,
    values: Vec<Vec<CellValue>>,
}

/// Runs the job and prints the outcome to stdout.
pub async fn execute(
    config: &ReportConfig,
    overrides: &Overrides,
    dry_run: bool,
    json: bool,
) -> ClientResult<()> {
    let settings = RunSettings::resolve(config, overrides, !dry_run)?;
    let outcome = pipeline::run(&settings).await?;
    print!("{}", render(&outcome, json)?);
    Ok(())
}

/// Formats the outcome as text or JSON.
pub fn render(outcome: &RunOutcome, json: bool) -> ClientResult<String> {
    match outcome {
        RunOutcome::Published(published) if json => to_json(published),
        RunOutcome::Published(published) => Ok(published_text(published)),
        RunOutcome::Preview { report, file_name } if json => {
            to_json(&preview_summary(report, file_name))
        }
        RunOutcome::Preview { report, file_name } => Ok(format!(
            "Dry run, nothing was published.\nfile: {}\n\n{}",
            file_name,
            report.render_table()
        )),
    }
}

fn published_text(published: &PublishedReport) -> String {
    format!(
        "Finished uploading Zoom report.\n\
         spreadsheetId: {}\n\
         updatedRange: {}\n\
         updatedRows: {}\n\
         updatedCells: {}\n\
         link: {}\n",
        published.spreadsheet_id,
        published.updated_range,
        published.updated_rows,
        published.updated_cells,
        published.link
    )
}

fn preview_summary<'a>(report: &ParticipantReport, file_name: &'a str) -> PreviewSummary<'a> {
    PreviewSummary {
        file_name,
        date: report.label(),
        time_zone: report.time_zone().name().to_string(),
        participants: report.rows().len(),
        total_hours: seconds_to_hours(report.total_seconds()),
        values: report.to_values(),
    }
}

fn to_json<T: Serialize>(value: &T) -> ClientResult<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(ClientError::from)
}
