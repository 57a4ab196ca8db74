//! The report job: fetch, aggregate, publish.

use tracing::info;
use zoomreport_core::ParticipantReport;
use zoomreport_providers::google::{PublishedReport, ReportPublisher};
use zoomreport_providers::zoom::ZoomReportClient;

use crate::error::ClientResult;
use crate::settings::RunSettings;

/// Result of a run.
#[derive(Debug)]
pub enum RunOutcome {
    /// Nothing was published; the report and the name it would have had.
    Preview {
        report: ParticipantReport,
        file_name: String,
    },
    /// The report was written to a new spreadsheet.
    Published(PublishedReport),
}

/// Runs the job once. Publishes only when Google settings were resolved.
pub async fn run(settings: &RunSettings) -> ClientResult<RunOutcome> {
    let client = ZoomReportClient::new(settings.zoom.clone(), settings.retry.clone())?;
    let records = client.fetch_participants(&settings.meeting_id).await?;

    let report = ParticipantReport::build(&records, settings.time_zone)?;
    let file_name = report.file_name(&settings.file_prefix);

    let Some(ref google) = settings.google else {
        return Ok(RunOutcome::Preview { report, file_name });
    };

    let publisher = ReportPublisher::connect(google.clone(), settings.retry.clone()).await?;
    let published = publisher
        .publish(&report, &settings.folder, &file_name)
        .await?;
    info!("published {} ({})", published.file_name, published.link);

    Ok(RunOutcome::Published(published))
}
