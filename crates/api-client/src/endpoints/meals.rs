//! Meal endpoints
//!
//! - `filter.php?i=<ingredient>`: recipes containing an ingredient
//! - `lookup.php?i=<id>`: one recipe with full details
//! - `random.php`: one random recipe with full details
//!
//! Every endpoint answers `{"meals": [...]}`, with `"meals": null` when
//! nothing matched.

use crate::client::MealDbClient;
use crate::error::ApiResult;
use recipegen_core::recipe::{IngredientLine, Recipe, RecipeStub};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// TheMealDB numbers ingredient and measure columns 1 through 20
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Meals API interface
#[derive(Clone)]
pub struct MealsApi {
    client: MealDbClient,
}

impl MealsApi {
    /// Create a new meals API interface
    pub(crate) fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    /// Recipes containing `ingredient`, empty when the ingredient is unknown
    ///
    /// GET /filter.php?i=<ingredient>
    pub async fn filter_by_ingredient(&self, ingredient: &str) -> ApiResult<Vec<MealSummary>> {
        let path = format!("filter.php?i={}", urlencoding::encode(ingredient));
        let response: MealsResponse<MealSummary> = self.client.get(&path).await?;
        Ok(response.into_vec())
    }

    /// Full details of one recipe
    ///
    /// GET /lookup.php?i=<id>
    pub async fn lookup(&self, id: &str) -> ApiResult<Option<MealRecord>> {
        let path = format!("lookup.php?i={}", urlencoding::encode(id));
        let response: MealsResponse<MealRecord> = self.client.get(&path).await?;
        Ok(response.into_first())
    }

    /// One random recipe
    ///
    /// GET /random.php
    pub async fn random(&self) -> ApiResult<Option<MealRecord>> {
        let response: MealsResponse<MealRecord> = self.client.get("random.php").await?;
        Ok(response.into_first())
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Envelope shared by every meal endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealsResponse<T> {
    /// Matching meals, `None` when nothing matched
    pub meals: Option<Vec<T>>,
}

impl<T> MealsResponse<T> {
    /// Meals as a list, empty when the API returned `null`
    pub fn into_vec(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }

    /// First meal, if any
    pub fn into_first(self) -> Option<T> {
        self.meals.and_then(|meals| meals.into_iter().next())
    }
}

/// Meal as returned by `filter.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealSummary {
    /// Meal ID
    pub id_meal: String,
    /// Meal title
    pub str_meal: String,
    /// Thumbnail URL
    #[serde(default)]
    pub str_meal_thumb: Option<String>,
}

impl From<MealSummary> for RecipeStub {
    fn from(meal: MealSummary) -> Self {
        Self {
            id: meal.id_meal,
            title: meal.str_meal,
            image: meal.str_meal_thumb.unwrap_or_default(),
        }
    }
}

/// Meal as returned by `lookup.php` and `random.php`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    /// Meal ID
    pub id_meal: String,
    /// Meal title
    pub str_meal: String,
    /// Thumbnail URL
    #[serde(default)]
    pub str_meal_thumb: Option<String>,
    /// Category (e.g. "Seafood")
    #[serde(default)]
    pub str_category: Option<String>,
    /// Cuisine (e.g. "Italian")
    #[serde(default)]
    pub str_area: Option<String>,
    /// Cooking instructions
    #[serde(default)]
    pub str_instructions: Option<String>,
    /// Original recipe page
    #[serde(default)]
    pub str_source: Option<String>,
    /// Numbered `strIngredientN` / `strMeasureN` columns and anything else
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl MealRecord {
    fn column(&self, name: &str) -> Option<&str> {
        self.extra
            .get(name)
            .and_then(serde_json::Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// Ingredient lines in column order, skipping blank ingredient slots
    pub fn ingredient_lines(&self) -> Vec<IngredientLine> {
        (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|slot| {
                let ingredient = self.column(&format!("strIngredient{slot}"))?;
                let measure = self.column(&format!("strMeasure{slot}")).unwrap_or_default();
                Some(IngredientLine {
                    ingredient: ingredient.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    /// Convert into the domain recipe; `matched_ingredients` starts empty
    pub fn into_recipe(self) -> Recipe {
        let ingredient_lines = self.ingredient_lines();
        let ingredients = ingredient_lines
            .iter()
            .map(|line| line.ingredient.to_lowercase())
            .collect();
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        Recipe {
            id: self.id_meal,
            title: self.str_meal,
            image: self.str_meal_thumb.unwrap_or_default(),
            ingredients,
            ingredient_lines,
            instructions: self.str_instructions.unwrap_or_default(),
            category: non_blank(self.str_category),
            area: non_blank(self.str_area),
            source_url: non_blank(self.str_source),
            matched_ingredients: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOOKUP: &str = r#"{"meals":[{
        "idMeal":"52772",
        "strMeal":"Teriyaki Chicken Casserole",
        "strCategory":"Chicken",
        "strArea":"Japanese",
        "strInstructions":"Preheat oven to 350° F.\r\nCombine soy sauce.",
        "strMealThumb":"https://www.themealdb.com/images/media/meals/wvpsxx1468256321.jpg",
        "strTags":"Meat,Casserole",
        "strIngredient1":"soy sauce",
        "strIngredient2":"water",
        "strIngredient3":" Brown Sugar ",
        "strIngredient4":"",
        "strIngredient5":null,
        "strMeasure1":"3/4 cup",
        "strMeasure2":"1/2 cup",
        "strMeasure3":" ",
        "strMeasure4":"",
        "strMeasure5":null,
        "strSource":"",
        "dateModified":null
    }]}"#;

    #[test]
    fn test_filter_response_null_meals() {
        let response: MealsResponse<MealSummary> = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(response.into_vec().is_empty());
    }

    #[test]
    fn test_filter_response_into_stub() {
        let json = r#"{"meals":[{"strMeal":"Brown Stew Chicken","strMealThumb":"https://x/y.jpg","idMeal":"52940"}]}"#;
        let response: MealsResponse<MealSummary> = serde_json::from_str(json).unwrap();
        let stubs: Vec<RecipeStub> = response.into_vec().into_iter().map(Into::into).collect();
        assert_eq!(stubs[0].id, "52940");
        assert_eq!(stubs[0].title, "Brown Stew Chicken");
        assert_eq!(stubs[0].image, "https://x/y.jpg");
    }

    #[test]
    fn test_lookup_into_recipe() {
        let response: MealsResponse<MealRecord> = serde_json::from_str(LOOKUP).unwrap();
        let recipe = response.into_first().unwrap().into_recipe();

        assert_eq!(recipe.id, "52772");
        assert_eq!(recipe.ingredients, vec!["soy sauce", "water", "brown sugar"]);
        assert_eq!(recipe.ingredient_lines[2].ingredient, "Brown Sugar");
        assert_eq!(recipe.ingredient_lines[2].display_measure(), "To taste");
        assert_eq!(recipe.ingredient_lines[0].measure, "3/4 cup");
        assert_eq!(recipe.category.as_deref(), Some("Chicken"));
        assert!(recipe.source_url.is_none());
        assert!(recipe.matched_ingredients.is_empty());
    }

    #[test]
    fn test_lookup_unknown_id() {
        let response: MealsResponse<MealRecord> = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(response.into_first().is_none());
    }
}
