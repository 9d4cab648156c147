//! TheMealDB client for recipegen
//!
//! This crate provides a typed HTTP client for the TheMealDB v1 JSON API and
//! implements [`recipegen_core::source::RecipeSource`] on top of it.
//!
//! # Features
//!
//! - **Configuration**: from the `[recipe_source]` config section or environment variables
//! - **Request correlation**: every request carries a unique `X-Request-ID`
//! - **Timing**: each request is logged with its elapsed time
//! - **No retries**: a failed request is reported once
//!
//! # Example
//!
//! ```rust,no_run
//! use recipegen_api_client::{ClientConfig, MealDbClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MealDbClient::with_config(ClientConfig::default())?;
//!
//!     let meals = client.meals().filter_by_ingredient("chicken breast").await?;
//!     println!("{} recipes use chicken breast", meals.len());
//!
//!     let catalog = client.ingredients().names().await?;
//!     println!("{} known ingredients", catalog.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
mod source;

pub use client::MealDbClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::MealDbClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{IngredientsApi, MealsApi};
    pub use crate::error::{ApiError, ApiResult};
}
