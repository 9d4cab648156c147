//! Recipe domain model
//!
//! Field names serialize in camelCase so the JSON matches what browser
//! clients already consume (`matchedIngredients`, `ingredientLines`, ...).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters of instructions kept in a recipe card description
const DESCRIPTION_CHARS: usize = 120;

/// Shown when a recipe lists an ingredient without a measure
pub const DEFAULT_MEASURE: &str = "To taste";

/// A normalized (trimmed, lower-cased) ingredient token
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IngredientName(String);

impl IngredientName {
    /// Normalize raw user input into a token, rejecting blank input
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(Error::validation("Ingredient name cannot be empty"));
        }
        Ok(Self(normalized))
    }

    /// The normalized token
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for IngredientName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IngredientName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for IngredientName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<IngredientName> for String {
    fn from(value: IngredientName) -> Self {
        value.0
    }
}

/// Trim and lower-case a raw ingredient or catalog name
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// What lookup-by-ingredient returns for each recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeStub {
    /// Recipe identifier in the source database
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Thumbnail URL
    pub image: String,
}

/// One ingredient of a recipe with its measure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// Ingredient as printed by the source (trimmed)
    pub ingredient: String,
    /// Measure, empty when the source gives none
    #[serde(default)]
    pub measure: String,
}

impl IngredientLine {
    /// Measure for display, falling back to "To taste"
    #[must_use]
    pub fn display_measure(&self) -> &str {
        if self.measure.is_empty() {
            DEFAULT_MEASURE
        } else {
            &self.measure
        }
    }
}

/// A fully detailed recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Recipe identifier in the source database
    pub id: String,
    /// Recipe title
    pub title: String,
    /// Thumbnail URL
    pub image: String,
    /// Lower-cased ingredient tokens
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Ingredients with their measures, in recipe order
    #[serde(default)]
    pub ingredient_lines: Vec<IngredientLine>,
    /// Free-text cooking instructions
    #[serde(default)]
    pub instructions: String,
    /// Category tag (e.g. "Seafood")
    #[serde(default)]
    pub category: Option<String>,
    /// Cuisine tag (e.g. "Italian")
    #[serde(default)]
    pub area: Option<String>,
    /// Link to the original recipe page
    #[serde(default)]
    pub source_url: Option<String>,
    /// Search ingredients this recipe contains
    #[serde(default)]
    pub matched_ingredients: Vec<String>,
}

impl Recipe {
    /// Short card description: the first 120 characters of the instructions
    #[must_use]
    pub fn description(&self) -> String {
        let mut description: String = self.instructions.chars().take(DESCRIPTION_CHARS).collect();
        description.push_str("...");
        description
    }

    /// Instructions split into numbered steps.
    ///
    /// Paragraphs (blank-line separated) are preferred; when the text has at
    /// most one paragraph it is split on single line breaks instead.
    #[must_use]
    pub fn instruction_steps(&self) -> Vec<String> {
        let text = self.instructions.replace("\r\n", "\n").replace('\r', "\n");

        let paragraphs: Vec<String> = text
            .split("\n\n")
            .map(|step| step.split('\n').map(str::trim).collect::<Vec<_>>().join(" "))
            .map(|step| step.trim().to_string())
            .filter(|step| !step.is_empty())
            .collect();

        if paragraphs.len() > 1 {
            return paragraphs;
        }

        text.lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(String::from)
            .collect()
    }

    /// Number of search ingredients this recipe matched
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matched_ingredients.len()
    }
}

/// Alternate catalog names for an ingredient the source did not recognise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The term as the user entered it (normalized)
    pub original: String,
    /// Ranked candidate names, best first
    pub suggestions: Vec<String>,
}

/// How the recipes of a search were selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// No ingredient was recognised
    #[default]
    None,
    /// Exactly one ingredient was recognised
    Single,
    /// Every recipe contains every recognised ingredient
    AllIngredients,
    /// No recipe had them all; ranked by how many each covers
    BestEffort,
}

/// Everything a multi-ingredient search produces
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Detailed recipes, most matched ingredients first
    pub recipes: Vec<Recipe>,
    /// Ingredients the source returned nothing for
    pub invalid_ingredients: Vec<String>,
    /// Alternate names for invalid ingredients
    pub suggestions: Vec<Suggestion>,
    /// Which selection rule produced `recipes`
    pub strategy: MatchStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_with_instructions(instructions: &str) -> Recipe {
        Recipe {
            id: "52772".to_string(),
            title: "Teriyaki Chicken Casserole".to_string(),
            image: String::new(),
            ingredients: vec![],
            ingredient_lines: vec![],
            instructions: instructions.to_string(),
            category: None,
            area: None,
            source_url: None,
            matched_ingredients: vec![],
        }
    }

    #[test]
    fn test_ingredient_name_normalizes() {
        let name = IngredientName::parse("  Olive OIL ").unwrap();
        assert_eq!(name.as_str(), "olive oil");
        assert!(IngredientName::parse("   ").is_err());
    }

    #[test]
    fn test_ingredient_name_serde() {
        let name: IngredientName = serde_json::from_str("\" Garlic\"").unwrap();
        assert_eq!(name.as_str(), "garlic");
        assert!(serde_json::from_str::<IngredientName>("\"\"").is_err());
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"garlic\"");
    }

    #[test]
    fn test_description_truncates_on_chars() {
        let recipe = recipe_with_instructions(&"é".repeat(200));
        let description = recipe.description();
        assert_eq!(description.chars().count(), 123);
        assert!(description.ends_with("..."));
    }

    #[test]
    fn test_instruction_steps_paragraphs() {
        let recipe = recipe_with_instructions("Preheat oven.\r\nGrease dish.\r\n\r\nBake 30 min.\r\n\r\n");
        assert_eq!(
            recipe.instruction_steps(),
            vec!["Preheat oven. Grease dish.", "Bake 30 min."]
        );
    }

    #[test]
    fn test_instruction_steps_single_lines() {
        let recipe = recipe_with_instructions("Chop onion.\nFry onion.\n  \nServe.");
        assert_eq!(
            recipe.instruction_steps(),
            vec!["Chop onion.", "Fry onion.", "Serve."]
        );
    }

    #[test]
    fn test_display_measure_fallback() {
        let line = IngredientLine {
            ingredient: "Salt".to_string(),
            measure: String::new(),
        };
        assert_eq!(line.display_measure(), "To taste");
    }

    #[test]
    fn test_recipe_json_is_camel_case() {
        let mut recipe = recipe_with_instructions("Cook.");
        recipe.matched_ingredients = vec!["chicken".to_string()];
        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["matchedIngredients"][0], "chicken");
        assert!(json.get("ingredientLines").is_some());
    }
}
