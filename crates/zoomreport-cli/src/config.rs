//! Client configuration.
//!
//! All settings live in a single optional `config.toml` file at
//! `~/.config/zoom-report/config.toml` by default. Every value can also be
//! given on the command line or through the environment, which wins.
//!
//! Credential values (`api_key`, `api_secret`, `meeting_id`) support secret
//! references:
//! - `pass::path/in/store`, resolved via `pass show`
//! - `env::VAR_NAME`, resolved from the environment
//! - plain text, used as-is

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a report run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Zoom API settings.
    pub zoom: ZoomSettings,

    /// Google Drive and Sheets settings.
    pub google: GoogleSettings,

    /// Report shape.
    pub report: ReportSettings,

    /// Backoff for transient failures.
    pub retry: RetrySettings,
}

/// `[zoom]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// JWT app API key (supports `pass::` and `env::` prefixes).
    pub api_key: Option<String>,

    /// JWT app API secret (supports `pass::` and `env::` prefixes).
    pub api_secret: Option<String>,

    /// Meeting id or UUID to report on.
    pub meeting_id: Option<String>,

    /// API base URL.
    pub base_url: Option<String>,

    /// Upper bound on report pages.
    pub max_pages: Option<usize>,

    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

/// `[google]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    /// Service account key file.
    pub credentials_file: Option<PathBuf>,

    /// Directory searched for a key when no file is given (default `.secrets`).
    pub secrets_dir: Option<PathBuf>,

    /// Drive folder the report is created in (default `Zoom`).
    pub folder: Option<String>,

    /// OAuth scopes.
    pub scopes: Option<Vec<String>>,

    /// Request timeout in seconds.
    pub timeout: Option<u64>,

    /// Drive API base URL.
    pub drive_base_url: Option<String>,

    /// Sheets API base URL.
    pub sheets_base_url: Option<String>,

    /// Token endpoint; the key file's `token_uri` otherwise.
    pub token_url: Option<String>,
}

/// `[report]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// IANA time zone timestamps are rendered in (default `Australia/Sydney`).
    pub timezone: Option<String>,

    /// Spreadsheet name prefix (default `zoom_report`).
    pub file_prefix: Option<String>,
}

/// `[retry]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrySettings {
    /// Retries after the first attempt.
    pub max_retries: Option<u32>,

    /// Delay before the first retry, in milliseconds.
    pub initial_backoff_ms: Option<u64>,

    /// Cap on any single delay, in milliseconds.
    pub max_backoff_ms: Option<u64>,
}

impl ReportConfig {
    /// Loads configuration from the default path, if the file exists.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
        toml::from_str(&content)
            .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("zoom-report")
    }
}
