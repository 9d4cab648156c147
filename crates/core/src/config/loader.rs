//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use crate::validation::Validator;
use std::env;
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings were read from, if any
    pub path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

impl Config {
    /// Load configuration from a file path or use defaults, then apply
    /// environment overrides and validate.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            if !Path::new(p).exists() {
                return Err(Error::config_not_found(p));
            }
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        let mut config = Self {
            schema,
            path: config_path,
        };
        config.apply_env_overrides();
        config.validate()?;

        tracing::debug!(path = ?config.path, "Configuration loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string (no env overrides)
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = Self {
            schema: toml::from_str(content)?,
            path: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply the environment variables the deployment sets
    pub fn apply_env_overrides(&mut self) {
        if let Ok(site) = env::var("SITE") {
            self.schema.server.site_url = site;
        }
        if let Ok(secret) = env::var("JWT_SECRET") {
            self.schema.auth.jwt_secret = Some(secret);
        }
        if let Ok(id) = env::var("GOOGLE_CLIENT_ID") {
            self.schema.auth.google_client_id = Some(id);
        }
        if let Ok(secret) = env::var("GOOGLE_CLIENT_SECRET") {
            self.schema.auth.google_client_secret = Some(secret);
        }
        if let Ok(url) = env::var("MEALDB_API_URL") {
            self.schema.recipe_source.base_url = url;
        }
        if let Ok(dir) = env::var("RECIPEGEN_DATA_DIR") {
            self.schema.storage.data_dir = dir;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let schema = &self.schema;
        let base_url = &schema.recipe_source.base_url;
        let site_url = &schema.server.site_url;

        Validator::new()
            .required("server.bind", &schema.server.bind)
            .url("server.site_url", site_url)
            .url("recipe_source.base_url", base_url)
            .range("recipe_source.timeout_secs", schema.recipe_source.timeout_secs, 1, 300)
            .range("search.max_suggestions", schema.search.max_suggestions, 1, 50)
            .range("search.candidate_limit", schema.search.candidate_limit, 1, 100)
            .range("search.detail_limit", schema.search.detail_limit, 1, 50)
            .range("search.random_count", schema.search.random_count, 0, 50)
            .range("auth.token_ttl_days", schema.auth.token_ttl_days, 1, 365)
            .validate()
            .to_result()
            .map_err(|e| Error::new(ErrorCode::InvalidConfigValue, e.message))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = ["recipegen.toml", ".recipegen.toml", ".config/recipegen.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::config(format!("Failed to read config file {path}: {e}")))?;

    toml::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {path}: {e}"),
        )
    })
}
