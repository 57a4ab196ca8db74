//! Google Sheets v4: appending rows.

use serde::{Deserialize, Serialize};
use tracing::debug;
use zoomreport_core::CellValue;

use crate::error::ProviderResult;
use crate::http::execute;

use super::auth::AccessToken;

/// Range rows are appended after.
pub const APPEND_RANGE: &str = "A1";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange<'a> {
    major_dimension: &'static str,
    values: &'a [Vec<CellValue>],
}

/// What an append changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSummary {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub updated_range: String,
    #[serde(default)]
    pub updated_rows: u64,
    #[serde(default)]
    pub updated_cells: u64,
}

/// Response of `values:append`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendResponse {
    #[serde(default)]
    pub spreadsheet_id: String,
    #[serde(default)]
    pub updates: UpdateSummary,
}

/// Client for the Sheets values API.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
}

impl SheetsClient {
    /// Creates a client authorized by `token`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, token: AccessToken) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
        }
    }

    /// Appends `rows` to the first sheet, values stored as given.
    ///
    /// Not retried, a repeated request would duplicate rows.
    pub async fn append_rows(
        &self,
        spreadsheet_id: &str,
        rows: &[Vec<CellValue>],
    ) -> ProviderResult<AppendResponse> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}:append",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            APPEND_RANGE
        );
        debug!("appending {} rows to {}", rows.len(), spreadsheet_id);

        let request = self
            .http
            .post(&url)
            .bearer_auth(self.token.secret())
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange {
                major_dimension: "ROWS",
                values: rows,
            });

        execute("Sheets append", request)
            .await
            .map_err(|e| e.with_provider("google"))
    }
}
