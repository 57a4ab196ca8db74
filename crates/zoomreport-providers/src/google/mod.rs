//! Google Drive and Sheets publishing.
//!
//! Authentication uses a service account key; the report is written to a
//! new spreadsheet created inside an existing Drive folder.
//!
//! # Example
//!
//! ```ignore
//! use zoomreport_providers::google::{GoogleConfig, ReportPublisher, ServiceAccountKey};
//! use zoomreport_providers::RetryPolicy;
//!
//! let key = ServiceAccountKey::from_file(".secrets/reporter.json")?;
//! let publisher = ReportPublisher::connect(GoogleConfig::new(key), RetryPolicy::default()).await?;
//! let published = publisher.publish(&report, "Zoom", &report.file_name("zoom_report")).await?;
//! ```

mod auth;
pub(crate) mod config;
mod drive;
mod publisher;
mod sheets;

pub use auth::{AccessToken, AssertionClaims, JWT_BEARER_GRANT, ServiceAccountAuth};
pub use config::{GoogleConfig, ServiceAccountKey, discover_key_file};
pub use drive::{DriveClient, DriveFile, FOLDER_MIME_TYPE, SPREADSHEET_MIME_TYPE};
pub use publisher::{DEFAULT_FOLDER, PublishedReport, ReportPublisher};
pub use sheets::{APPEND_RANGE, AppendResponse, SheetsClient, UpdateSummary};
