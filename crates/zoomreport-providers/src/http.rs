//! Shared HTTP plumbing: client construction, status mapping, JSON decoding
//! and the retry loop.

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ProviderError, ProviderResult};
use crate::retry::RetryPolicy;

/// User agent sent with every request.
pub(crate) fn user_agent() -> String {
    format!("zoom-report/{}", env!("CARGO_PKG_VERSION"))
}

/// Checks that `base_url` is an absolute http(s) URL.
pub(crate) fn validate_base_url(base_url: &str) -> Result<(), String> {
    let url = Url::parse(base_url).map_err(|e| format!("invalid base URL {}: {}", base_url, e))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!(
            "invalid base URL {}: unsupported scheme {}",
            base_url, other
        )),
    }
}

/// Builds an HTTP client with the given request timeout.
pub(crate) fn build_client(timeout: Duration) -> ProviderResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent())
        .build()
        .map_err(|e| ProviderError::internal("failed to create HTTP client").with_source(e))
}

fn map_send_error(what: &str, e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::network(format!("{}: request timeout", what))
    } else if e.is_connect() {
        ProviderError::network(format!("{}: connection failed: {}", what, e))
    } else {
        ProviderError::network(format!("{}: request failed: {}", what, e))
    }
}

/// Turns a non-success response into the matching [`ProviderError`].
async fn check_status(what: &str, response: Response) -> ProviderResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let retry_after = response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();
    let detail = format!("{} returned {}: {}", what, status, body.trim());

    Err(match status {
        StatusCode::TOO_MANY_REQUESTS => match retry_after {
            Some(secs) => ProviderError::rate_limited(format!(
                "{} (retry after {} seconds)",
                detail, secs
            ))
            .with_retry_after(Duration::from_secs(secs)),
            None => ProviderError::rate_limited(detail),
        },
        StatusCode::UNAUTHORIZED => ProviderError::authentication(detail),
        StatusCode::FORBIDDEN => ProviderError::authorization(detail),
        StatusCode::NOT_FOUND => ProviderError::not_found(detail),
        s if s.is_server_error() => ProviderError::server(detail),
        _ => ProviderError::bad_request(detail),
    })
}

async fn read_json<T: DeserializeOwned>(what: &str, response: Response) -> ProviderResult<T> {
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::network(format!("{}: failed to read response: {}", what, e)))?;

    serde_json::from_str(&body).map_err(|e| {
        ProviderError::invalid_response(format!("{}: failed to parse response: {}", what, e))
    })
}

/// Sends a request once and decodes the JSON body.
pub(crate) async fn execute<T: DeserializeOwned>(
    what: &str,
    request: RequestBuilder,
) -> ProviderResult<T> {
    let response = request
        .send()
        .await
        .map_err(|e| map_send_error(what, e))?;
    let response = check_status(what, response).await?;
    read_json(what, response).await
}

/// Sends a request built by `build`, retrying transient failures according
/// to `policy`. Only use this for requests that are safe to repeat.
pub(crate) async fn execute_with_retry<T, F>(
    policy: &RetryPolicy,
    what: &str,
    build: F,
) -> ProviderResult<T>
where
    T: DeserializeOwned,
    F: Fn() -> RequestBuilder,
{
    let mut retries = 0;
    loop {
        match execute(what, build()).await {
            Err(err) if policy.should_retry(&err, retries) => {
                retries += 1;
                let delay = policy.delay_for(&err, retries);
                warn!(
                    "{} failed ({}), retry {}/{} in {:?}",
                    what, err, retries, policy.max_retries, delay
                );
                tokio::time::sleep(delay).await;
            }
            result => {
                if retries > 0 && result.is_ok() {
                    debug!("{} succeeded after {} retries", what, retries);
                }
                return result;
            }
        }
    }
}
