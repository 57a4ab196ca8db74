//! Zoom reporting API.
//!
//! # Example
//!
//! ```ignore
//! use zoomreport_providers::zoom::{ZoomConfig, ZoomReportClient};
//! use zoomreport_providers::RetryPolicy;
//!
//! let config = ZoomConfig::new(api_key, api_secret);
//! let client = ZoomReportClient::new(config, RetryPolicy::default())?;
//! let records = client.fetch_participants("85746065432").await?;
//! ```

mod client;
mod config;
mod token;

pub use client::{ZoomReportClient, encode_meeting_id};
pub use config::ZoomConfig;
pub use token::{TokenIssuer, ZoomClaims};
