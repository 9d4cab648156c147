//! Configuration schema definitions
//!
//! Every section and field has a serde default so a partial (or absent) file
//! still yields a complete configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Public TheMealDB endpoint using the shared test key
pub const DEFAULT_RECIPE_SOURCE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[allow(missing_docs)]
pub struct ConfigSchema {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub recipe_source: RecipeSourceConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Public base URL of the site, used for OAuth redirects
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            site_url: default_site_url(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_site_url() -> String {
    "http://localhost:3000".to_string()
}

/// Third-party recipe database settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSourceConfig {
    /// Base URL of the recipe API
    #[serde(default = "default_recipe_source_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RecipeSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_recipe_source_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_recipe_source_url() -> String {
    DEFAULT_RECIPE_SOURCE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Limits applied by the matcher and the resolver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum alternate names offered for an unknown ingredient
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Recipes kept by coverage ranking when nothing matches every ingredient
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,

    /// Recipes whose full details are fetched per search
    #[serde(default = "default_detail_limit")]
    pub detail_limit: usize,

    /// Random recipes shown before any ingredient is entered
    #[serde(default = "default_random_count")]
    pub random_count: usize,

    /// Catalog names offered while typing
    #[serde(default = "default_autocomplete_limit")]
    pub autocomplete_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            candidate_limit: default_candidate_limit(),
            detail_limit: default_detail_limit(),
            random_count: default_random_count(),
            autocomplete_limit: default_autocomplete_limit(),
        }
    }
}

fn default_max_suggestions() -> usize {
    5
}

fn default_candidate_limit() -> usize {
    12
}

fn default_detail_limit() -> usize {
    9
}

fn default_random_count() -> usize {
    6
}

fn default_autocomplete_limit() -> usize {
    8
}

/// Authentication settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret for bearer tokens
    #[serde(default)]
    pub jwt_secret: Option<String>,

    /// Token lifetime in days
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: u32,

    /// Google OAuth client id
    #[serde(default)]
    pub google_client_id: Option<String>,

    /// Google OAuth client secret
    #[serde(default)]
    pub google_client_secret: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: default_token_ttl_days(),
            google_client_id: None,
            google_client_secret: None,
        }
    }
}

impl AuthConfig {
    /// Whether both halves of the Google OAuth credentials are present
    #[must_use]
    pub fn google_enabled(&self) -> bool {
        self.google_client_id.is_some() && self.google_client_secret.is_some()
    }
}

fn default_token_ttl_days() -> u32 {
    7
}

/// Which document store backs user data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-local, lost on restart
    Memory,
    /// One JSON document per user on disk
    #[default]
    File,
}

/// Persistence settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store implementation
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory for the file store (`~` is expanded)
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Data directory with `~` and environment variables expanded
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        match shellexpand::full(&self.data_dir) {
            Ok(expanded) => PathBuf::from(expanded.as_ref()),
            Err(_) => PathBuf::from(&self.data_dir),
        }
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("recipegen").display().to_string())
        .unwrap_or_else(|| "~/.local/share/recipegen".to_string())
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of compact text
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
