//! Configuration for the recipe database client
//!
//! Built from the `[recipe_source]` section of the application config, or
//! from environment variables for standalone use.

use crate::error::{ApiError, ApiResult};
use recipegen_core::config::{RecipeSourceConfig, DEFAULT_RECIPE_SOURCE_URL};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the recipe API (including the API key segment)
    pub base_url: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RECIPE_SOURCE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("recipegen/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl From<&RecipeSourceConfig> for ClientConfig {
    fn from(source: &RecipeSourceConfig) -> Self {
        Self::default()
            .with_base_url(source.base_url.clone())
            .with_timeout(Duration::from_secs(source.timeout_secs))
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `MEALDB_API_URL`: Base URL of the recipe API
    /// - `MEALDB_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let base_url =
            env::var("MEALDB_API_URL").unwrap_or_else(|_| DEFAULT_RECIPE_SOURCE_URL.to_string());

        let timeout = match env::var("MEALDB_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ApiError::config(format!("MEALDB_TIMEOUT_SECS is not a number: {raw}")))?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        let config = Self::default().with_base_url(base_url).with_timeout(timeout);
        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert!(config.base_url.contains("themealdb.com"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("recipegen/"));
    }

    #[test]
    fn test_from_recipe_source_config() {
        let source = RecipeSourceConfig {
            base_url: "http://localhost:9000/api/".to_string(),
            timeout_secs: 5,
        };
        let config = ClientConfig::from(&source);
        assert_eq!(config.base_url, "http://localhost:9000/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(ClientConfig::default().with_base_url("themealdb.com").validate().is_err());
        assert!(ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
