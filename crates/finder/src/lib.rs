//! Recipe discovery from a set of ingredients
//!
//! [`RecipeResolver`] turns the ingredients a user typed into a ranked list of
//! detailed recipes. Unknown ingredients come back with alternate names from
//! the source's ingredient catalog, and a search where no recipe uses every
//! ingredient degrades to the recipes covering the most of them.
//!
//! # Example
//!
//! ```rust,no_run
//! use recipegen_api_client::MealDbClient;
//! use recipegen_finder::RecipeResolver;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = RecipeResolver::new(Arc::new(MealDbClient::new()?));
//! let outcome = resolver.search(&["chicken", "onion"]).await;
//! for recipe in &outcome.recipes {
//!     println!("{} ({} matched)", recipe.title, recipe.match_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod ingredients;
pub mod resolver;

pub use catalog::CatalogCache;
pub use ingredients::{dedupe_tokens, IngredientList};
pub use resolver::{select_candidates, Candidate, IngredientHits, RecipeResolver, ResolverLimits};

/// Searches run
pub const SEARCHES: &str = "finder.searches";
/// Ingredients the source had no recipes for (or failed on)
pub const INVALID_INGREDIENTS: &str = "finder.invalid_ingredients";
/// Per-ingredient queries that errored
pub const INGREDIENT_QUERIES_FAILED: &str = "finder.ingredient_queries_failed";
/// Candidates dropped because their details could not be fetched
pub const DETAILS_DROPPED: &str = "finder.details_dropped";
/// Entries in the ingredient catalog
pub const CATALOG_SIZE: &str = "finder.catalog_size";
/// Search latency histogram, milliseconds
pub const RESOLVE_MS: &str = "finder.resolve_ms";
