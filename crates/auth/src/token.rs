//! HS256 bearer tokens

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use recipegen_core::config::AuthConfig;
use recipegen_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account email
    pub sub: String,
    /// Account email
    pub email: String,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

/// Issues and verifies bearer tokens with a shared secret
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager").field("ttl", &self.ttl).finish_non_exhaustive()
    }
}

impl TokenManager {
    /// Create a manager signing with `secret`, tokens valid for `ttl`
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Build from `[auth]` settings; the secret is required
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let secret = config
            .jwt_secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| {
                Error::config("auth.jwt_secret is not set")
                    .with_suggestion("Set JWT_SECRET or auth.jwt_secret in recipegen.toml")
            })?;
        Ok(Self::new(secret, Duration::days(i64::from(config.token_ttl_days))))
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `email`, valid from now
    pub fn issue(&self, email: &str) -> Result<String> {
        self.issue_at(email, Utc::now())
    }

    /// Issue a token as if it were created at `issued_at`
    pub fn issue_at(&self, email: &str, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: email.to_string(),
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| Error::internal(format!("Failed to sign token: {e}")))
    }

    /// Decode and check a token; any failure is "Invalid token"
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "expired",
                    ErrorKind::InvalidSignature => "bad signature",
                    _ => "malformed",
                };
                tracing::debug!(reason, "Rejected bearer token");
                Error::invalid_token().with_context(reason)
            })
    }
}
