//! Error types for the API client

use recipegen_core::{Error, ErrorCode};
use std::fmt;
use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: impl Into<String>) -> Self {
        Self::ApiResponse {
            status,
            message: message.into(),
        }
    }

    /// Check if the request never got an answer (connect failure or timeout)
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect() || e.is_timeout(),
            Self::ApiResponse { status, .. } => *status == 503 || *status == 504,
            Self::Json(_) | Self::Config(_) => false,
        }
    }
}

impl From<ApiError> for Error {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Config(_) => ErrorCode::ConfigError,
            e if e.is_unavailable() => ErrorCode::UpstreamUnavailable,
            ApiError::Json(_) | ApiError::Request(_) | ApiError::ApiResponse { .. } => {
                ErrorCode::UpstreamBadResponse
            }
        };

        Error::new(code, err.to_string())
            .with_suggestion("Check connectivity to the recipe database and try again")
            .with_source(err)
    }
}

/// Error context for better debugging
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Request ID for correlation
    pub request_id: Option<String>,
    /// Endpoint that was called
    pub endpoint: String,
    /// HTTP method used
    pub method: String,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.endpoint)?;
        if let Some(ref id) = self.request_id {
            write!(f, " (request_id: {id})")?;
        }
        Ok(())
    }
}
