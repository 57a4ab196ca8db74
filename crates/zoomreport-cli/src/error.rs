//! Client error types.

use thiserror::Error;
use zoomreport_core::{ReportError, TracingError};
use zoomreport_providers::ProviderError;

use crate::secret::SecretError;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can end a run.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A secret reference could not be resolved.
    #[error("secret error: {0}")]
    Secret(#[from] SecretError),

    /// A remote call failed.
    #[error("{0}")]
    Provider(#[from] ProviderError),

    /// The report could not be built.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// Output could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be set up.
    #[error(transparent)]
    Tracing(#[from] TracingError),
}
