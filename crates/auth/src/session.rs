//! Signed-in state and bearer credentials
//!
//! A [`SessionContext`] is created empty, filled by a successful login or
//! OAuth callback, emptied by logout, and only read everywhere else.

use crate::token::TokenManager;
use recipegen_core::{Error, Result};
use serde::{Deserialize, Serialize};

const BEARER_PREFIX: &str = "Bearer ";

/// Who is signed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account email
    pub email: String,
    /// Display name, when the provider gave one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Identity {
    /// Identity known only by email
    pub fn from_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            picture: None,
        }
    }
}

/// A bearer token and the identity it was issued for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token
    pub token: String,
    /// Signed-in user
    #[serde(flatten)]
    pub identity: Identity,
}

impl Session {
    /// `Authorization` header value for this session
    pub fn authorization_header(&self) -> String {
        format!("{BEARER_PREFIX}{}", self.token)
    }
}

/// Explicit signed-in state
///
/// Identities arrive either with a verified bearer token or, for a local
/// profile, without one.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    identity: Option<Identity>,
    token: Option<String>,
}

impl SessionContext {
    /// Signed-out context
    pub fn new() -> Self {
        Self::default()
    }

    /// Signed in from a bearer token, verified before anything is trusted
    pub fn from_token(tokens: &TokenManager, token: &str) -> Result<Self> {
        Self::from_callback(tokens, token, None, None)
    }

    /// Rebuild a session from the query the OAuth callback redirects to.
    ///
    /// The token is verified before anything is trusted.
    pub fn from_callback(tokens: &TokenManager, token: &str, name: Option<&str>, picture: Option<&str>) -> Result<Self> {
        let claims = tokens.verify(token)?;
        let mut context = Self::new();
        context.sign_in(Session {
            token: token.to_string(),
            identity: Identity {
                email: claims.email,
                name: name.filter(|n| !n.is_empty()).map(str::to_string),
                picture: picture.filter(|p| !p.is_empty()).map(str::to_string),
            },
        });
        Ok(context)
    }

    /// Local profile with no bearer credential; a blank email stays signed out
    pub fn local(email: &str) -> Self {
        let mut context = Self::new();
        let email = email.trim();
        if !email.is_empty() {
            tracing::debug!(%email, "Using local profile");
            context.identity = Some(Identity::from_email(email));
        }
        context
    }

    /// Replace any current session
    pub fn sign_in(&mut self, session: Session) {
        tracing::debug!(email = %session.identity.email, "Signed in");
        self.identity = Some(session.identity);
        self.token = Some(session.token);
    }

    /// Forget the current identity and token
    pub fn sign_out(&mut self) {
        self.token = None;
        if let Some(identity) = self.identity.take() {
            tracing::debug!(email = %identity.email, "Signed out");
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }

    /// Bearer token, absent for local profiles
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `Authorization` header value, when a token is held
    pub fn authorization_header(&self) -> Option<String> {
        self.token().map(|token| format!("{BEARER_PREFIX}{token}"))
    }

    /// The signed-in identity, or an unauthorized "Please log in" error
    pub fn require_identity(&self) -> Result<&Identity> {
        self.identity.as_ref().ok_or_else(Error::login_required)
    }
}

/// Pull the token out of an `Authorization` header value
pub fn bearer_token(header: Option<&str>) -> Result<&str> {
    let header = header.map(str::trim).filter(|h| !h.is_empty());
    let Some(header) = header else {
        return Err(Error::unauthorized("Missing token"));
    };

    match header.strip_prefix(BEARER_PREFIX).map(str::trim) {
        Some("") => Err(Error::unauthorized("Missing token")),
        Some(token) => Ok(token),
        None => Err(Error::invalid_token().with_context("expected a Bearer credential")),
    }
}

/// Frontend URL the OAuth callback redirects to
pub fn callback_redirect(site_url: &str, session: &Session) -> String {
    let encode = |value: &Option<String>| urlencoding::encode(value.as_deref().unwrap_or_default()).into_owned();
    format!(
        "{}/?token={}&name={}&picture={}",
        site_url.trim_end_matches('/'),
        urlencoding::encode(&session.token),
        encode(&session.identity.name),
        encode(&session.identity.picture),
    )
}
