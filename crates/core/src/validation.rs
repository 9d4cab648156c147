//! Input validation
//!
//! Provides validation for:
//! - Request bodies (sign-up, login, grocery updates)
//! - Configuration values
//!
//! # Example
//!
//! ```rust
//! use recipegen_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("email", "cook@example.com")
//!     .email("email", "cook@example.com")
//!     .min_length("password", "hunter22", 8)
//!     .validate();
//!
//! assert!(result.is_valid());
//! ```

use crate::error::{Error, ErrorCode, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result type
    pub fn to_result(self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
            Err(Error::new(
                ErrorCode::ValidationError,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    #[must_use]
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    fn fail(
        &mut self,
        field: &str,
        message: String,
        code: &str,
        expected: Option<String>,
        actual: Option<String>,
    ) {
        self.result.add_error(ValidationError {
            field: field.to_string(),
            message,
            code: code.to_string(),
            expected,
            actual,
        });
    }

    /// Validate that a field is not empty
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.fail(
                field,
                "Field is required".to_string(),
                "REQUIRED",
                Some("non-empty value".to_string()),
                Some("empty".to_string()),
            );
        }
        self
    }

    /// Validate minimum length (in characters)
    #[must_use]
    pub fn min_length(mut self, field: &str, value: &str, min: usize) -> Self {
        let len = value.chars().count();
        if len < min {
            self.fail(
                field,
                format!("Must be at least {min} characters"),
                "MIN_LENGTH",
                Some(format!(">= {min} chars")),
                Some(format!("{len} chars")),
            );
        }
        self
    }

    /// Validate an email address shape
    #[must_use]
    pub fn email(mut self, field: &str, value: &str) -> Self {
        if !EMAIL_RE.is_match(value.trim()) {
            self.fail(
                field,
                "Must be a valid email address".to_string(),
                "EMAIL",
                Some("name@domain.tld".to_string()),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate an absolute http(s) URL
    #[must_use]
    pub fn url(mut self, field: &str, value: &str) -> Self {
        if !value.starts_with("http://") && !value.starts_with("https://") {
            self.fail(
                field,
                "Must start with http:// or https://".to_string(),
                "URL",
                Some("http(s) URL".to_string()),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Validate a numeric range
    #[must_use]
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if value < min || value > max {
            self.fail(
                field,
                format!("Must be between {min} and {max}"),
                "RANGE",
                Some(format!("{min} - {max}")),
                Some(value.to_string()),
            );
        }
        self
    }

    /// Complete validation and return result
    #[must_use]
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}
