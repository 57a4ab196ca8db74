//! Publishes a report as a new spreadsheet in a Drive folder.

use serde::Serialize;
use tracing::info;
use zoomreport_core::ParticipantReport;

use crate::error::{ProviderError, ProviderResult};
use crate::http::build_client;
use crate::retry::RetryPolicy;

use super::auth::ServiceAccountAuth;
use super::config::GoogleConfig;
use super::drive::DriveClient;
use super::sheets::SheetsClient;

/// Folder reports are published to unless configured otherwise.
pub const DEFAULT_FOLDER: &str = "Zoom";

/// Where a report ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishedReport {
    pub spreadsheet_id: String,
    pub file_name: String,
    pub folder_id: String,
    pub updated_range: String,
    pub updated_rows: u64,
    pub updated_cells: u64,
    pub link: String,
}

/// Creates report spreadsheets with a service account.
pub struct ReportPublisher {
    drive: DriveClient,
    sheets: SheetsClient,
}

impl ReportPublisher {
    /// Validates `config`, obtains an access token and prepares the clients.
    pub async fn connect(config: GoogleConfig, retry: RetryPolicy) -> ProviderResult<Self> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(e).with_provider("google"))?;

        let http = build_client(config.timeout).map_err(|e| e.with_provider("google"))?;
        let auth = ServiceAccountAuth::new(http.clone(), config.clone(), retry.clone());
        let token = auth.fetch_token().await?;
        info!(
            "authenticated as {} (token valid until {})",
            config.credentials.client_email,
            token.expires_at()
        );

        let drive = DriveClient::new(
            http.clone(),
            config.drive_base_url.clone(),
            token.clone(),
            retry,
            config.max_pages,
        );
        let sheets = SheetsClient::new(http, config.sheets_base_url, token);
        Ok(Self::new(drive, sheets))
    }

    /// Assembles a publisher from ready clients.
    pub fn new(drive: DriveClient, sheets: SheetsClient) -> Self {
        Self { drive, sheets }
    }

    /// Writes `report` to a new spreadsheet `file_name` in `folder`.
    ///
    /// A new file is created on every call.
    pub async fn publish(
        &self,
        report: &ParticipantReport,
        folder: &str,
        file_name: &str,
    ) -> ProviderResult<PublishedReport> {
        let folder_id = self.drive.find_folder(folder).await?;
        let spreadsheet_id = self.drive.create_spreadsheet(file_name, &folder_id).await?;

        let values = report.to_values();
        let appended = self.sheets.append_rows(&spreadsheet_id, &values).await?;
        info!(
            "appended {} rows to {} ({})",
            appended.updates.updated_rows, file_name, appended.updates.updated_range
        );

        let link = self.drive.web_view_link(&spreadsheet_id).await?;

        Ok(PublishedReport {
            spreadsheet_id,
            file_name: file_name.to_string(),
            folder_id,
            updated_range: appended.updates.updated_range,
            updated_rows: appended.updates.updated_rows,
            updated_cells: appended.updates.updated_cells,
            link,
        })
    }
}
