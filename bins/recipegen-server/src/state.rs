//! Shared server state

use anyhow::{Context, Result};
use recipegen_api_client::{ClientConfig, MealDbClient};
use recipegen_auth::{Authenticator, GoogleOAuth, TokenManager};
use recipegen_core::config::ConfigSchema;
use recipegen_core::source::RecipeSource;
use recipegen_finder::{RecipeResolver, ResolverLimits};
use recipegen_store::{open_store, UserStore};
use std::sync::Arc;

pub type SharedState = Arc<AppState>;

/// Everything handlers need
pub struct AppState {
    pub config: ConfigSchema,
    pub resolver: RecipeResolver,
    pub store: Arc<dyn UserStore>,
    pub auth: Authenticator,
    pub google: Option<GoogleOAuth>,
}

impl AppState {
    pub fn new(
        config: ConfigSchema,
        source: Arc<dyn RecipeSource>,
        store: Arc<dyn UserStore>,
        tokens: TokenManager,
        google: Option<GoogleOAuth>,
    ) -> Self {
        let resolver = RecipeResolver::with_limits(source, ResolverLimits::from(&config.search));
        let auth = Authenticator::new(Arc::clone(&store), tokens);
        Self {
            config,
            resolver,
            store,
            auth,
            google,
        }
    }

    /// Wire up the real recipe source, store and token signer
    pub fn from_config(config: ConfigSchema) -> Result<Self> {
        let client = MealDbClient::with_config(ClientConfig::from(&config.recipe_source))
            .context("Failed to create recipe source client")?;
        let store = open_store(&config.storage)?;

        let tokens = match TokenManager::from_config(&config.auth) {
            Ok(tokens) => tokens,
            Err(_) => {
                tracing::warn!("No JWT secret configured; tokens will not survive a restart");
                let ttl = chrono::Duration::days(i64::from(config.auth.token_ttl_days));
                TokenManager::new(&ephemeral_secret(), ttl)
            }
        };

        let google = GoogleOAuth::from_config(&config)?;
        if google.is_none() {
            tracing::info!("Google sign-in disabled");
        }

        Ok(Self::new(config, Arc::new(client), store, tokens, google))
    }
}

/// Random per-process signing secret
fn ephemeral_secret() -> String {
    format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
}
