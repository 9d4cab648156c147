//! Google OAuth 2.0 sign-in
//!
//! Authorization-code flow: send the browser to the consent page, receive the
//! code on the callback, exchange it for an access token, then read the
//! profile.

use recipegen_core::config::ConfigSchema;
use recipegen_core::{Error, ErrorCode, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

const AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";
const SCOPES: &str =
    "https://www.googleapis.com/auth/userinfo.profile https://www.googleapis.com/auth/userinfo.email";

/// Path the consent page redirects back to
pub const CALLBACK_PATH: &str = "/api/login/google/callback";

/// Profile fields read from the userinfo endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoogleProfile {
    /// Account email
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Google OAuth client
#[derive(Clone)]
pub struct GoogleOAuth {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    http: Client,
    token_url: String,
    userinfo_url: String,
}

impl GoogleOAuth {
    /// Create a client whose callback lives under `site_url`
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>, site_url: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: format!("{}{CALLBACK_PATH}", site_url.trim_end_matches('/')),
            http,
            token_url: TOKEN_URL.to_string(),
            userinfo_url: USERINFO_URL.to_string(),
        })
    }

    /// Build from configuration; `None` when Google credentials are absent
    pub fn from_config(schema: &ConfigSchema) -> Result<Option<Self>> {
        let auth = &schema.auth;
        match (&auth.google_client_id, &auth.google_client_secret) {
            (Some(id), Some(secret)) => Self::new(id, secret, &schema.server.site_url).map(Some),
            _ => Ok(None),
        }
    }

    /// Point the token and userinfo calls somewhere else
    #[must_use]
    pub fn with_endpoints(mut self, token_url: impl Into<String>, userinfo_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self.userinfo_url = userinfo_url.into();
        self
    }

    /// Where the callback must be registered
    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    /// Consent page URL
    pub fn authorize_url(&self) -> String {
        format!(
            "{AUTHORIZE_URL}?response_type=code&client_id={}&redirect_uri={}&scope={}&access_type=offline&prompt=consent",
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(SCOPES),
        )
    }

    /// Trade an authorization code for an access token
    #[tracing::instrument(skip_all)]
    pub async fn exchange_code(&self, code: &str) -> Result<String> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| oauth_failed("Token exchange request failed", e))?;
        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| oauth_failed("Token exchange returned an unreadable body", e))?;

        match body.access_token {
            Some(token) => Ok(token),
            None => Err(Error::new(
                ErrorCode::OAuthFailed,
                format!(
                    "Google rejected the authorization code: {}",
                    body.error.as_deref().unwrap_or("no access token")
                ),
            )),
        }
    }

    /// Read the signed-in user's profile
    #[tracing::instrument(skip_all)]
    pub async fn profile(&self, access_token: &str) -> Result<GoogleProfile> {
        let response = self
            .http
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| oauth_failed("Userinfo request failed", e))?;

        if !response.status().is_success() {
            return Err(Error::new(
                ErrorCode::OAuthFailed,
                format!("Userinfo request returned {}", response.status()),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| oauth_failed("Userinfo returned an unreadable body", e))
    }
}

fn oauth_failed(message: &str, source: reqwest::Error) -> Error {
    Error::new(ErrorCode::OAuthFailed, message).with_source(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oauth() -> GoogleOAuth {
        GoogleOAuth::new("client-123", "shh", "http://localhost:3000/").unwrap()
    }

    #[test]
    fn test_redirect_uri() {
        assert_eq!(oauth().redirect_uri(), "http://localhost:3000/api/login/google/callback");
    }

    #[test]
    fn test_authorize_url() {
        let url = oauth().authorize_url();
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?response_type=code"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fapi%2Flogin%2Fgoogle%2Fcallback"));
        assert!(url.contains("userinfo.email"));
        assert!(url.ends_with("&access_type=offline&prompt=consent"));
    }

    #[test]
    fn test_from_config_needs_both_halves() {
        let mut schema = ConfigSchema::default();
        schema.auth.google_client_id = Some("id".into());
        assert!(GoogleOAuth::from_config(&schema).unwrap().is_none());

        schema.auth.google_client_secret = Some("secret".into());
        assert!(GoogleOAuth::from_config(&schema).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_unreachable_token_endpoint() {
        let oauth = oauth().with_endpoints("http://127.0.0.1:9/token", "http://127.0.0.1:9/userinfo");
        let err = oauth.exchange_code("abc").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::OAuthFailed);
    }

    #[test]
    fn test_profile_optional_fields() {
        let profile: GoogleProfile = serde_json::from_str(r#"{"email":"cook@example.com","id":"1"}"#).unwrap();
        assert_eq!(profile.email, "cook@example.com");
        assert!(profile.name.is_none());
    }
}
