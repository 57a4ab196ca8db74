//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zoomreport_core::{TracingConfig, TracingOutputFormat};

use crate::settings::Overrides;

/// zoom-report - Publish a Zoom meeting's attendance to Google Sheets
#[derive(Debug, Parser)]
#[command(name = "zoom-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "ZOOM_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    /// Log format on stderr: compact, pretty or json
    #[arg(long, env = "ZOOM_REPORT_LOG_FORMAT", default_value = "compact")]
    pub log_format: TracingOutputFormat,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Fetch and aggregate, print the report, publish nothing
    #[arg(long)]
    pub dry_run: bool,

    // --- Zoom ---
    /// Meeting id or UUID
    #[arg(long, env = "ZOOM_MEETING_ID")]
    pub meeting_id: Option<String>,

    /// Zoom JWT app API key
    #[arg(long, env = "ZOOM_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Zoom JWT app API secret
    #[arg(long, env = "ZOOM_API_SECRET", hide_env_values = true)]
    pub api_secret: Option<String>,

    // --- Google ---
    /// Service account key file
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials_file: Option<PathBuf>,

    /// Drive folder the spreadsheet is created in
    #[arg(long)]
    pub folder: Option<String>,

    // --- Report ---
    /// IANA time zone for timestamps and the report date
    #[arg(long)]
    pub timezone: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Tracing setup selected by `--debug` and `--log-format`.
    pub fn tracing_config(&self) -> TracingConfig {
        let base = if self.debug {
            TracingConfig::cli_debug()
        } else {
            TracingConfig::default()
        };
        base.with_format(self.log_format)
    }

    /// Values that take precedence over the configuration file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            meeting_id: self.meeting_id.clone(),
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            credentials_file: self.credentials_file.clone(),
            folder: self.folder.clone(),
            timezone: self.timezone.clone(),
        }
    }
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configuration commands
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,

    /// Validate configuration and credentials without calling any API
    Validate,

    /// Show configuration file path
    Path,
}
