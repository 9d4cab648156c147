//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{IngredientsApi, MealsApi};
use crate::error::{ApiError, ApiResult, ErrorContext};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// TheMealDB client
///
/// Thin wrapper over `reqwest` that adds request correlation IDs, timing
/// logs and status mapping. Requests are never retried; a failure is
/// reported once and the caller decides what "no data" means.
#[derive(Clone)]
pub struct MealDbClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl MealDbClient {
    /// Create a new client with configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, user_agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access meal endpoints (filter, lookup, random)
    #[must_use]
    pub fn meals(&self) -> MealsApi {
        MealsApi::new(self.clone())
    }

    /// Access the ingredient catalog endpoint
    #[must_use]
    pub fn ingredients(&self) -> IngredientsApi {
        IngredientsApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP
    // -------------------------------------------------------------------------

    /// Perform a GET request relative to the base URL
    #[instrument(skip(self), fields(request_id))]
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url_for(path);
        self.get_url(&url).await
    }

    /// Perform a GET request to an absolute URL
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let result = self.execute(&request_id, url).await;
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => debug!(
                request_id = %request_id,
                url = %url,
                elapsed_ms = elapsed.as_millis(),
                "Request succeeded"
            ),
            Err(e) => {
                let context = ErrorContext {
                    request_id: Some(request_id.clone()),
                    endpoint: url.to_string(),
                    method: "GET".to_string(),
                };
                warn!(
                    request = %context,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "Request failed"
                );
            }
        }

        result
    }

    /// Join a relative path onto the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url, path.trim_start_matches('/'))
    }

    async fn execute<T: DeserializeOwned>(&self, request_id: &str, url: &str) -> ApiResult<T> {
        let response = self
            .inner
            .get(url)
            .header(X_REQUEST_ID, request_id)
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}
