//! Zoom JWT issuance.
//!
//! A JWT app authenticates by signing a short-lived HS256 token with its
//! API secret. Tokens are issued once per run and never stored.

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, ProviderResult};

/// Claims of a Zoom API token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoomClaims {
    /// Always null; Zoom does not check the audience.
    pub aud: Option<String>,
    /// The API key.
    pub iss: String,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
    /// Issue time, seconds since the epoch.
    pub iat: i64,
}

/// Signs Zoom API tokens.
pub struct TokenIssuer {
    api_key: String,
    api_secret: String,
}

impl TokenIssuer {
    /// Token lifetime in seconds.
    pub const TTL_SECS: i64 = 1800;

    /// Creates an issuer for the given key pair.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Claims for a token issued at `iat`.
    pub fn claims_at(&self, iat: i64) -> ZoomClaims {
        ZoomClaims {
            aud: None,
            iss: self.api_key.clone(),
            exp: iat + Self::TTL_SECS,
            iat,
        }
    }

    /// Issues a token valid from now.
    pub fn issue(&self) -> ProviderResult<String> {
        self.issue_at(Utc::now().timestamp())
    }

    /// Issues a token as if the current time were `iat`.
    pub fn issue_at(&self, iat: i64) -> ProviderResult<String> {
        encode(
            &Header::new(Algorithm::HS256),
            &self.claims_at(iat),
            &EncodingKey::from_secret(self.api_secret.as_bytes()),
        )
        .map_err(|e| {
            ProviderError::authentication("failed to sign Zoom API token")
                .with_provider("zoom")
                .with_source(e)
        })
    }
}
