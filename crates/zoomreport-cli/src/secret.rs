//! Secret references.
//!
//! Credential values in `config.toml` (and on the command line) may point
//! at a secret stored elsewhere:
//!
//! - `pass::path/in/store` runs `pass show path/in/store` and keeps the first line
//! - `env::VAR_NAME` reads `$VAR_NAME`
//! - anything else is used as-is

use std::process::Command;

use thiserror::Error;

/// Failure to resolve a secret reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SecretError {
    /// `pass` could not be run or exited with an error.
    #[error("`pass show {path}` failed: {message}")]
    Pass { path: String, message: String },

    /// `pass` printed nothing.
    #[error("`pass show {0}` produced no output")]
    EmptyPass(String),

    /// The referenced environment variable is missing.
    #[error("environment variable `{0}` is not set")]
    EnvNotSet(String),
}

/// Resolves a value that may be a secret reference.
pub fn resolve(value: &str) -> Result<String, SecretError> {
    if let Some(path) = value.strip_prefix("pass::") {
        resolve_pass(path)
    } else if let Some(var) = value.strip_prefix("env::") {
        resolve_env(var)
    } else {
        Ok(value.to_string())
    }
}

fn resolve_pass(path: &str) -> Result<String, SecretError> {
    let output = Command::new("pass")
        .arg("show")
        .arg(path)
        .output()
        .map_err(|e| SecretError::Pass {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SecretError::Pass {
            path: path.to_string(),
            message: format!("{}: {}", output.status, stderr.trim()),
        });
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(str::to_string)
        .ok_or_else(|| SecretError::EmptyPass(path.to_string()))
}

fn resolve_env(var: &str) -> Result<String, SecretError> {
    std::env::var(var).map_err(|_| SecretError::EnvNotSet(var.to_string()))
}
