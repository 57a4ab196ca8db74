//! zoom-report CLI entry point.

use std::process::ExitCode;

use clap::Parser;

use zoomreport_cli::cli::{Cli, Command, ConfigAction};
use zoomreport_cli::commands;
use zoomreport_cli::config::ReportConfig;
use zoomreport_cli::error::{ClientError, ClientResult};
use zoomreport_core::init_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.tracing_config()) {
        eprintln!("error: {}", ClientError::from(e));
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    let config_path = cli.config.clone().unwrap_or_else(ReportConfig::default_path);
    let config = if cli.config.is_some() {
        ReportConfig::load_from(&config_path).map_err(ClientError::Config)?
    } else {
        ReportConfig::load().map_err(ClientError::Config)?
    };

    match cli.command {
        Some(Command::Config { ref action }) => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config, &cli.overrides()),
            ConfigAction::Path => commands::config::path(&config_path),
        },
        None => {
            commands::run::execute(&config, &cli.overrides(), cli.dry_run, cli.json).await
        }
    }
}
