//! Zoom API configuration.

use std::fmt;
use std::time::Duration;

use crate::http::validate_base_url;

/// Settings for talking to the Zoom reporting API.
#[derive(Clone)]
pub struct ZoomConfig {
    /// JWT app API key; becomes the token issuer.
    pub api_key: String,
    /// JWT app API secret; signs the token.
    pub api_secret: String,
    /// API base URL, without trailing slash.
    pub base_url: String,
    /// Upper bound on the number of report pages fetched.
    pub max_pages: usize,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ZoomConfig {
    /// Production API base URL.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.zoom.us/v2";

    /// Records requested per page; the maximum the API allows.
    pub const PAGE_SIZE: u32 = 300;

    /// Default page guard.
    pub const DEFAULT_MAX_PAGES: usize = 1000;

    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a configuration for the given key pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            max_pages: Self::DEFAULT_MAX_PAGES,
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the page guard.
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("Zoom API key is required".to_string());
        }
        if self.api_secret.trim().is_empty() {
            return Err("Zoom API secret is required".to_string());
        }
        validate_base_url(&self.base_url)?;
        if self.max_pages == 0 {
            return Err("max_pages must be at least 1".to_string());
        }
        Ok(())
    }
}

impl fmt::Debug for ZoomConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("max_pages", &self.max_pages)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ZoomConfig::new("key", "secret");
        assert_eq!(config.base_url, "https://api.zoom.us/v2");
        assert_eq!(config.max_pages, 1000);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let config = ZoomConfig::new("key", "secret").with_base_url("http://127.0.0.1:9000/");
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn validation_failures() {
        assert!(ZoomConfig::new("", "secret").validate().is_err());
        assert!(ZoomConfig::new("key", " ").validate().is_err());
        assert!(
            ZoomConfig::new("key", "secret")
                .with_max_pages(0)
                .validate()
                .is_err()
        );
        let err = ZoomConfig::new("key", "secret")
            .with_base_url("ftp://example.com")
            .validate()
            .unwrap_err();
        assert!(err.contains("scheme"));
        assert!(
            ZoomConfig::new("key", "secret")
                .with_base_url("not a url")
                .validate()
                .is_err()
        );
    }

    #[test]
    fn debug_redacts_secret() {
        let config = ZoomConfig::new("key", "hunter2");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
