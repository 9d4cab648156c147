//! Shared command state: configuration, output mode and who is signed in

use anyhow::{Context, Result};
use recipegen_api_client::{ClientConfig, MealDbClient};
use recipegen_auth::{SessionContext, TokenManager};
use recipegen_core::config::{AuthConfig, Config};
use recipegen_finder::{RecipeResolver, ResolverLimits};
use recipegen_store::FileStore;
use recipegen_telemetry::TelemetryConfig;
use serde::Serialize;
use std::sync::Arc;

/// Credentials given on the command line
#[derive(Debug, Clone, Default)]
pub struct SignIn {
    pub user: Option<String>,
    pub token: Option<String>,
}

impl SignIn {
    /// A token wins over a local profile; neither leaves the session signed out
    pub fn session(&self, auth: &AuthConfig) -> Result<SessionContext> {
        if let Some(token) = self.token.as_deref() {
            let tokens = TokenManager::from_config(auth)?;
            return Ok(SessionContext::from_token(&tokens, token)?);
        }
        Ok(self.user.as_deref().map(SessionContext::local).unwrap_or_default())
    }
}

pub struct AppContext {
    pub config: Config,
    pub json: bool,
    pub session: SessionContext,
}

impl AppContext {
    pub fn load(path: Option<&str>, json: bool, signin: &SignIn, verbose: bool) -> Result<Self> {
        let config = Config::load(path)?;

        let level = if verbose {
            "debug".to_string()
        } else {
            // the CLI stays quiet unless asked
            "warn".to_string()
        };
        recipegen_telemetry::init_with_config(TelemetryConfig::new(level, config.schema.logging.json))?;

        let session = signin.session(&config.schema.auth)?;
        Ok(Self { config, json, session })
    }

    /// Email of the signed-in account, or "Please log in"
    pub fn user_email(&self) -> recipegen_core::Result<&str> {
        Ok(&self.session.require_identity()?.email)
    }

    pub fn resolver(&self) -> Result<RecipeResolver> {
        let client_config = ClientConfig::from(&self.config.schema.recipe_source);
        let client = MealDbClient::with_config(client_config).context("Failed to create recipe source client")?;
        let limits = ResolverLimits::from(&self.config.schema.search);
        Ok(RecipeResolver::with_limits(Arc::new(client), limits))
    }

    pub fn store(&self) -> Result<FileStore> {
        let dir = self.config.schema.storage.resolved_data_dir();
        Ok(FileStore::open(dir)?)
    }

    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}
