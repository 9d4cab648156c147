//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for a set of TheMealDB endpoints.
//!
//! | Module | Endpoints | Description |
//! |--------|-----------|-------------|
//! | `meals` | `filter.php`, `lookup.php`, `random.php` | Recipes by ingredient, by id, at random |
//! | `ingredients` | `list.php?i=list` | Ingredient catalog |

pub mod ingredients;
pub mod meals;

pub use ingredients::{IngredientRecord, IngredientsApi};
pub use meals::{MealRecord, MealSummary, MealsApi, MealsResponse};
