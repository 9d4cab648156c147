//! Error handling with context and recovery suggestions
//!
//! This module provides structured error types with:
//! - Detailed error context
//! - Recovery suggestions
//! - Error codes for programmatic handling (and HTTP status mapping)
//! - Serializable error reports

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ErrorCode {
    // General errors (1xxx)
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    InvalidConfigValue = 3004,

    // Recipe source errors (4xxx)
    UpstreamError = 4000,
    UpstreamUnavailable = 4001,
    UpstreamBadResponse = 4002,
    RecipeNotFound = 4004,

    // Storage errors (5xxx)
    StorageError = 5000,
    DocumentCorrupted = 5001,
    Conflict = 5009,

    // Validation errors (6xxx)
    ValidationError = 6000,
    MissingField = 6002,

    // Authentication errors (7xxx)
    Unauthorized = 7001,
    InvalidToken = 7002,
    InvalidCredentials = 7003,
    OAuthFailed = 7004,
}

impl ErrorCode {
    /// Get the numeric code
    #[must_use]
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            4 => "RecipeSource",
            5 => "Storage",
            6 => "Validation",
            7 => "Authentication",
            _ => "Unknown",
        }
    }

    /// HTTP status code this error maps to when surfaced by the API
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ValidationError | Self::MissingField => 400,
            Self::Unauthorized | Self::InvalidToken | Self::InvalidCredentials => 401,
            Self::RecipeNotFound | Self::FileNotFound => 404,
            Self::Conflict => 409,
            Self::UpstreamError
            | Self::UpstreamUnavailable
            | Self::UpstreamBadResponse
            | Self::OAuthFailed => 502,
            _ => 500,
        }
    }

    /// Whether the message is safe to show to an end user verbatim
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        self.http_status() < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {ctx}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

#[allow(missing_docs)]
impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Convert to a serializable report
    #[must_use]
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code,
            code_str: self.code.to_string(),
            category: self.code.category().to_string(),
            message: self.message.clone(),
            context: self.context.clone(),
            suggestion: self.suggestion.clone(),
            source: self.source.as_ref().map(ToString::to_string),
        }
    }

    // Convenience constructors

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    pub fn config_not_found(path: impl AsRef<std::path::Path>) -> Self {
        Self::new(
            ErrorCode::ConfigNotFound,
            format!("Configuration file not found: {}", path.as_ref().display()),
        )
        .with_suggestion("Create a recipegen.toml file or use --config to specify a path")
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::UpstreamError, message)
    }

    pub fn recipe_not_found(id: &str) -> Self {
        Self::new(ErrorCode::RecipeNotFound, format!("Recipe not found: {id}"))
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorCode::MissingField, format!("Missing or invalid {field}"))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn login_required() -> Self {
        Self::new(ErrorCode::Unauthorized, "Please log in")
            .with_suggestion("Sign in with email and password or with Google")
    }

    pub fn invalid_token() -> Self {
        Self::new(ErrorCode::InvalidToken, "Invalid token")
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid email or password")
    }
}

/// Serializable error report for logging and API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[allow(missing_docs)]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub code_str: String,
    pub category: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes for CLI commands
#[allow(missing_docs)]
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const VALIDATION_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const UPSTREAM_ERROR: i32 = 4;
    pub const STORAGE_ERROR: i32 = 5;
}

impl Error {
    /// Exit code a CLI should terminate with for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self.code.category() {
            "Validation" => exit_codes::VALIDATION_ERROR,
            "Configuration" => exit_codes::CONFIG_ERROR,
            "RecipeSource" => exit_codes::UPSTREAM_ERROR,
            "Storage" => exit_codes::STORAGE_ERROR,
            _ => exit_codes::FAILURE,
        }
    }
}

// Implement From for common error types

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::DocumentCorrupted, format!("JSON parse error: {err}"))
            .with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {err}"))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion to the error, if any
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::RecipeNotFound.to_string(), "E4004");
        assert_eq!(ErrorCode::Unauthorized.to_string(), "E7001");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::UpstreamError.category(), "RecipeSource");
        assert_eq!(ErrorCode::InvalidToken.category(), "Authentication");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::MissingField.http_status(), 400);
        assert_eq!(ErrorCode::InvalidToken.http_status(), 401);
        assert_eq!(ErrorCode::RecipeNotFound.http_status(), 404);
        assert_eq!(ErrorCode::Conflict.http_status(), 409);
        assert_eq!(ErrorCode::UpstreamUnavailable.http_status(), 502);
        assert_eq!(ErrorCode::StorageError.http_status(), 500);
        assert!(ErrorCode::Conflict.is_user_facing());
        assert!(!ErrorCode::Internal.is_user_facing());
    }

    #[test]
    fn test_error_with_context() {
        let err = Error::login_required().with_context("While adding to grocery list");

        assert_eq!(err.code, ErrorCode::Unauthorized);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
    }

    #[test]
    fn test_error_report_serialization() {
        let err = Error::upstream("filter.php returned 503").with_context("searching onion");

        let report = err.to_report();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("E4000"));
        assert!(json.contains("RecipeSource"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::validation("bad").exit_code(), exit_codes::VALIDATION_ERROR);
        assert_eq!(Error::storage("disk").exit_code(), exit_codes::STORAGE_ERROR);
        assert_eq!(Error::internal("boom").exit_code(), exit_codes::FAILURE);
    }
}
