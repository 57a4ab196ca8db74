//! Remote services of the Zoom report job.
//!
//! This crate talks to the outside world:
//!
//! - [`ParticipantSource`] - Paginated access to a meeting's participants
//! - [`zoom::ZoomReportClient`] - The Zoom reporting API, authenticated with a JWT
//! - [`google::ReportPublisher`] - Drive and Sheets, authenticated as a service account
//! - [`ProviderError`] - Error types shared by every remote call
//! - [`RetryPolicy`] - Bounded backoff for transient failures
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Zoom API       │
//! └────────┬────────┘
//!          │ pages (next_page_token)
//!          ▼
//! ┌─────────────────────┐
//! │ ZoomReportClient    │  ParticipantSource
//! └────────┬────────────┘
//!          │ Vec<ParticipantRecord>
//!          ▼
//! ┌─────────────────────┐
//! │ ParticipantReport   │  (zoomreport-core)
//! └────────┬────────────┘
//!          │ rows
//!          ▼
//! ┌─────────────────────┐     ┌──────────────────┐
//! │ ReportPublisher     │────▶│ Drive / Sheets   │
//! └─────────────────────┘     └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use zoomreport_core::{ParticipantReport, DEFAULT_TIME_ZONE};
//! use zoomreport_providers::zoom::{ZoomConfig, ZoomReportClient};
//! use zoomreport_providers::RetryPolicy;
//!
//! let client = ZoomReportClient::new(ZoomConfig::new(key, secret), RetryPolicy::default())?;
//! let records = client.fetch_participants(meeting_id).await?;
//! let report = ParticipantReport::build(&records, DEFAULT_TIME_ZONE)?;
//! ```

pub mod error;
pub mod google;
mod http;
pub mod retry;
pub mod source;
pub mod zoom;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use retry::RetryPolicy;
pub use source::{BoxFuture, ParticipantPage, ParticipantSource, fetch_all_participants};
