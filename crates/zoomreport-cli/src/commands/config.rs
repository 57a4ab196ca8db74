//! Configuration commands.

use std::path::Path;

use crate::config::ReportConfig;
use crate::error::{ClientError, ClientResult};
use crate::settings::{Overrides, RunSettings};

/// Dump the loaded configuration to stdout.
pub fn dump(config: &ReportConfig, path: &Path) -> ClientResult<()> {
    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))?;
    println!("# config.toml ({})", path.display());
    println!("{}", toml_str);

    Ok(())
}

/// Validate the configuration, including the service account key.
///
/// No request is sent.
pub fn validate(config: &ReportConfig, overrides: &Overrides) -> ClientResult<()> {
    println!("{}", validation_report(config, overrides)?);
    Ok(())
}

fn validation_report(config: &ReportConfig, overrides: &Overrides) -> ClientResult<String> {
    let settings = RunSettings::resolve(config, overrides, true)?;
    let mut lines = vec![
        format!("meeting: {}", settings.meeting_id),
        format!("zoom api: {}", settings.zoom.base_url),
        format!("time zone: {}", settings.time_zone.name()),
        format!("folder: {}", settings.folder),
        format!("file prefix: {}", settings.file_prefix),
    ];
    if let Some(ref google) = settings.google {
        lines.push(format!(
            "service account: {}",
            google.credentials.client_email
        ));
    }
    lines.push("Configuration is valid.".to_string());
    Ok(lines.join("\n"))
}

/// Show the configuration file path.
pub fn path(path: &Path) -> ClientResult<()> {
    println!("config: {}", path.display());
    Ok(())
}
