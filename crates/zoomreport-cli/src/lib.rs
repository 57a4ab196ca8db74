//! CLI, configuration, secret references and the report pipeline
//!
//! This crate provides the `zoom-report` command-line interface.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod secret;
pub mod settings;

pub use cli::Cli;
pub use error::{ClientError, ClientResult};
pub use pipeline::{RunOutcome, run};
pub use settings::{Overrides, RunSettings};
