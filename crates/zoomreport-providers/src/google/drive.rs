//! Google Drive v3: folder lookup, spreadsheet creation and share links.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, ProviderResult};
use crate::http::{execute, execute_with_retry};
use crate::retry::RetryPolicy;

use super::auth::AccessToken;

/// MIME type Drive uses for folders.
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// MIME type Drive uses for native spreadsheets.
pub const SPREADSHEET_MIME_TYPE: &str = "application/vnd.google-apps.spreadsheet";

/// A file or folder as returned by Drive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub web_view_link: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
    #[serde(default)]
    next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NewFile<'a> {
    name: &'a str,
    mime_type: &'a str,
    parents: [&'a str; 1],
}

/// Client for the Drive files API.
pub struct DriveClient {
    http: reqwest::Client,
    base_url: String,
    token: AccessToken,
    retry: RetryPolicy,
    max_pages: usize,
}

impl DriveClient {
    /// Creates a client authorized by `token`.
    pub fn new(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: AccessToken,
        retry: RetryPolicy,
        max_pages: usize,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token,
            retry,
            max_pages,
        }
    }

    fn files_url(&self) -> String {
        format!("{}/files", self.base_url)
    }

    /// Finds the id of the folder named `name`.
    ///
    /// The first folder whose name matches exactly wins.
    pub async fn find_folder(&self, name: &str) -> ProviderResult<String> {
        let query = format!(
            "mimeType='{}' and name='{}' and trashed=false",
            FOLDER_MIME_TYPE,
            escape_query(name)
        );
        let url = self.files_url();
        let mut cursor: Option<String> = None;
        let mut pages = 0;

        loop {
            if pages >= self.max_pages {
                return Err(ProviderError::limit_exceeded(format!(
                    "folder listing exceeded {} pages",
                    self.max_pages
                ))
                .with_provider("google"));
            }
            pages += 1;

            let list: FileList = execute_with_retry(&self.retry, "Drive folder listing", || {
                let mut request = self
                    .http
                    .get(&url)
                    .bearer_auth(self.token.secret())
                    .query(&[
                        ("q", query.as_str()),
                        ("fields", "nextPageToken,files(id,name)"),
                        ("spaces", "drive"),
                    ]);
                if let Some(ref cursor) = cursor {
                    request = request.query(&[("pageToken", cursor.as_str())]);
                }
                request
            })
            .await
            .map_err(|e| e.with_provider("google"))?;

            if let Some(folder) = list.files.into_iter().find(|f| f.name == name) {
                debug!("found folder '{}' with id {}", name, folder.id);
                return Ok(folder.id);
            }

            match list.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Err(ProviderError::not_found(format!("Drive folder '{}' not found", name))
            .with_provider("google"))
    }

    /// Creates an empty spreadsheet named `name` inside `folder_id`.
    ///
    /// Not retried, a repeated request would create a second file.
    pub async fn create_spreadsheet(&self, name: &str, folder_id: &str) -> ProviderResult<String> {
        let body = NewFile {
            name,
            mime_type: SPREADSHEET_MIME_TYPE,
            parents: [folder_id],
        };
        let request = self
            .http
            .post(self.files_url())
            .bearer_auth(self.token.secret())
            .query(&[("fields", "id,name")])
            .json(&body);

        let file: DriveFile = execute("Drive spreadsheet creation", request)
            .await
            .map_err(|e| e.with_provider("google"))?;
        debug!("created spreadsheet '{}' with id {}", name, file.id);
        Ok(file.id)
    }

    /// The browser link of a file.
    pub async fn web_view_link(&self, file_id: &str) -> ProviderResult<String> {
        let url = format!("{}/{}", self.files_url(), urlencoding::encode(file_id));
        let file: DriveFile = execute_with_retry(&self.retry, "Drive link lookup", || {
            self.http
                .get(&url)
                .bearer_auth(self.token.secret())
                .query(&[("fields", "id,webViewLink")])
        })
        .await
        .map_err(|e| e.with_provider("google"))?;

        file.web_view_link.ok_or_else(|| {
            ProviderError::invalid_response(format!("file {} has no webViewLink", file_id))
                .with_provider("google")
        })
    }
}

/// Escapes a literal for a Drive search query.
fn escape_query(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}
