//! [`RecipeSource`] implementation backed by TheMealDB

use crate::client::MealDbClient;
use async_trait::async_trait;
use recipegen_core::recipe::{Recipe, RecipeStub};
use recipegen_core::source::RecipeSource;
use recipegen_core::Result;

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn recipes_with_ingredient(&self, ingredient: &str) -> Result<Vec<RecipeStub>> {
        let meals = self.meals().filter_by_ingredient(ingredient).await?;
        Ok(meals.into_iter().map(RecipeStub::from).collect())
    }

    async fn recipe_details(&self, id: &str) -> Result<Option<Recipe>> {
        let meal = self.meals().lookup(id).await?;
        Ok(meal.map(|meal| meal.into_recipe()))
    }

    async fn ingredient_catalog(&self) -> Result<Vec<String>> {
        Ok(self.ingredients().names().await?)
    }

    async fn random_recipe(&self) -> Result<Option<Recipe>> {
        let meal = self.meals().random().await?;
        Ok(meal.map(|meal| meal.into_recipe()))
    }
}
