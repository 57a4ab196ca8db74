//! Zoom reporting API client.

use std::borrow::Cow;

use tracing::debug;
use zoomreport_core::ParticipantRecord;

use crate::error::{ProviderError, ProviderResult};
use crate::http::{build_client, execute_with_retry};
use crate::retry::RetryPolicy;
use crate::source::{BoxFuture, ParticipantPage, ParticipantSource, fetch_all_participants};

use super::config::ZoomConfig;
use super::token::TokenIssuer;

/// Client for the meeting participants report.
///
/// A token is issued when the client is created and used for every page.
pub struct ZoomReportClient {
    http: reqwest::Client,
    config: ZoomConfig,
    retry: RetryPolicy,
    token: String,
}

impl ZoomReportClient {
    /// Validates the configuration and issues an API token.
    pub fn new(config: ZoomConfig, retry: RetryPolicy) -> ProviderResult<Self> {
        config
            .validate()
            .map_err(|e| ProviderError::configuration(e).with_provider("zoom"))?;

        let token = TokenIssuer::new(&config.api_key, &config.api_secret).issue()?;
        let http = build_client(config.timeout).map_err(|e| e.with_provider("zoom"))?;

        Ok(Self {
            http,
            config,
            retry,
            token,
        })
    }

    /// The bearer token sent with every request.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// URL of the participants report of a meeting.
    pub fn participants_url(&self, meeting_id: &str) -> String {
        format!(
            "{}/report/meetings/{}/participants",
            self.config.base_url,
            encode_meeting_id(meeting_id)
        )
    }

    /// Fetches every participant record of a meeting.
    pub async fn fetch_participants(
        &self,
        meeting_id: &str,
    ) -> ProviderResult<Vec<ParticipantRecord>> {
        fetch_all_participants(self, meeting_id, self.config.max_pages).await
    }
}

impl ParticipantSource for ZoomReportClient {
    fn name(&self) -> &str {
        "zoom"
    }

    fn fetch_page<'a>(
        &'a self,
        meeting_id: &'a str,
        cursor: Option<&'a str>,
    ) -> BoxFuture<'a, ProviderResult<ParticipantPage>> {
        Box::pin(async move {
            let url = self.participants_url(meeting_id);
            debug!(cursor = ?cursor, "GET {}", url);

            execute_with_retry(&self.retry, "Zoom participants report", || {
                let mut request = self
                    .http
                    .get(&url)
                    .bearer_auth(&self.token)
                    .query(&[("page_size", ZoomConfig::PAGE_SIZE.to_string())]);
                if let Some(cursor) = cursor {
                    request = request.query(&[("next_page_token", cursor)]);
                }
                request
            })
            .await
            .map_err(|e| e.with_provider("zoom"))
        })
    }
}

/// Encodes a meeting id or UUID as a path segment.
///
/// UUIDs that start with `/` or contain `//` must be encoded twice.
pub fn encode_meeting_id(meeting_id: &str) -> Cow<'_, str> {
    let once = urlencoding::encode(meeting_id);
    if meeting_id.starts_with('/') || meeting_id.contains("//") {
        Cow::Owned(urlencoding::encode(&once).into_owned())
    } else {
        once
    }
}
