//! Text rendering of recipes, search outcomes and grocery lists
//!
//! Everything returns a `String` so callers decide where it goes.

use crate::output::format_count;
use owo_colors::OwoColorize;
use recipegen_core::recipe::{MatchStrategy, Recipe, SearchOutcome};
use recipegen_grocery::{progress, GroceryListRecipe};

/// Widest a card description is allowed to get
const CARD_WIDTH: usize = 88;

/// One recipe as a short card
pub fn recipe_card(recipe: &Recipe) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", recipe.title.bold(), format!("#{}", recipe.id).dimmed()));

    let tags: Vec<&str> = [recipe.category.as_deref(), recipe.area.as_deref()]
        .into_iter()
        .flatten()
        .collect();
    if !tags.is_empty() {
        out.push_str(&format!("  {}\n", tags.join(" · ").cyan()));
    }

    if !recipe.instructions.is_empty() {
        let description = recipe.description().split_whitespace().collect::<Vec<_>>().join(" ");
        out.push_str(&format!("  {}\n", console::truncate_str(&description, CARD_WIDTH, "...")));
    }

    if !recipe.matched_ingredients.is_empty() {
        out.push_str(&format!("  {} {}\n", "uses".green(), recipe.matched_ingredients.join(", ")));
    }
    out
}

/// Full recipe: ingredients with measures and numbered steps
pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut out = recipe_card(recipe);

    if !recipe.ingredient_lines.is_empty() {
        out.push_str(&format!("\n{}\n", "Ingredients".bold()));
        for line in &recipe.ingredient_lines {
            out.push_str(&format!("  • {} {}\n", line.ingredient, format!("({})", line.display_measure()).dimmed()));
        }
    }

    let steps = recipe.instruction_steps();
    if !steps.is_empty() {
        out.push_str(&format!("\n{}\n", "Instructions".bold()));
        for (number, step) in steps.iter().enumerate() {
            out.push_str(&format!("  {}. {step}\n", number + 1));
        }
    }

    if let Some(url) = &recipe.source_url {
        out.push_str(&format!("\n{} {url}\n", "Source:".dimmed()));
    }
    out
}

/// Search results, then any unknown ingredients with their alternates
pub fn search_outcome(outcome: &SearchOutcome) -> String {
    let mut out = String::new();

    let heading = match outcome.strategy {
        MatchStrategy::None => "No recipes found".to_string(),
        MatchStrategy::Single | MatchStrategy::AllIngredients => {
            format!("Found {}", format_count(outcome.recipes.len(), "recipe", "recipes"))
        }
        MatchStrategy::BestEffort => format!(
            "No recipe uses every ingredient; {} using some of them",
            format_count(outcome.recipes.len(), "recipe", "recipes")
        ),
    };
    out.push_str(&format!("{}\n\n", heading.bold()));

    for recipe in &outcome.recipes {
        out.push_str(&recipe_card(recipe));
        out.push('\n');
    }

    for invalid in &outcome.invalid_ingredients {
        let alternates = outcome
            .suggestions
            .iter()
            .find(|suggestion| &suggestion.original == invalid)
            .map(|suggestion| suggestion.suggestions.join(", "));
        match alternates {
            Some(alternates) => {
                out.push_str(&format!("{} {invalid}: did you mean {alternates}?\n", "?".yellow()));
            }
            None => {
                out.push_str(&format!("{} {invalid}: no recipes found\n", "?".yellow()));
            }
        }
    }
    out
}

/// Grocery list grouped by recipe, with a completion summary
pub fn grocery_list(list: &[GroceryListRecipe]) -> String {
    if list.is_empty() {
        return "Your grocery list is empty\n".to_string();
    }

    let mut out = String::new();
    for group in list {
        out.push_str(&format!("{} {}\n", group.name.bold(), format!("[{}]", group.id).dimmed()));
        for item in &group.ingredients {
            if item.checked {
                out.push_str(&format!("  {} {}\n", "[x]".green(), item.item.strikethrough().dimmed()));
            } else {
                out.push_str(&format!("  [ ] {}\n", item.item));
            }
        }
    }

    let progress = progress(list);
    out.push_str(&format!("\n{} of {} items completed\n", progress.checked, progress.total));
    out
}
