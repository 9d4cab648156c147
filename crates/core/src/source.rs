//! Recipe database collaborator
//!
//! The resolver only ever talks to a [`RecipeSource`]. The HTTP client
//! implements it against TheMealDB and tests implement it in memory.

use crate::error::Result;
use crate::recipe::{Recipe, RecipeStub};
use async_trait::async_trait;

/// Read-only access to a recipe database
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// All recipes containing `ingredient`. An unknown ingredient yields an
    /// empty list, not an error.
    async fn recipes_with_ingredient(&self, ingredient: &str) -> Result<Vec<RecipeStub>>;

    /// Full details of one recipe, `None` when the id is unknown
    async fn recipe_details(&self, id: &str) -> Result<Option<Recipe>>;

    /// Every ingredient name the database knows, lower-cased
    async fn ingredient_catalog(&self) -> Result<Vec<String>>;

    /// One random recipe with full details
    async fn random_recipe(&self) -> Result<Option<Recipe>>;
}
