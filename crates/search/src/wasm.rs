//! WASM bindings for ingredient matching.

use wasm_bindgen::prelude::*;

fn parse_names(json: &str) -> Vec<String> {
    serde_json::from_str(json).unwrap_or_default()
}

/// Calculate Levenshtein edit distance between two strings.
#[wasm_bindgen]
pub fn edit_distance(a: &str, b: &str) -> usize {
    crate::levenshtein_distance(a, b)
}

/// Relevance score of a catalog name for a term (0 when it does not match).
#[wasm_bindgen]
pub fn relevance_score(term: &str, candidate: &str) -> u32 {
    crate::calculate_relevance(&candidate.to_lowercase(), &term.trim().to_lowercase())
}

/// Suggest alternate catalog names for an unknown ingredient.
///
/// # Arguments
/// * `term` - Ingredient the user entered
/// * `catalog_json` - JSON array of catalog names
/// * `max_results` - Maximum names to return (0 for the default of 5)
///
/// # Returns
/// JSON array of names, best first
#[wasm_bindgen]
pub fn suggest_ingredients(term: &str, catalog_json: &str, max_results: usize) -> String {
    let catalog = parse_names(catalog_json);
    let limit = if max_results == 0 {
        crate::DEFAULT_MAX_SUGGESTIONS
    } else {
        max_results
    };

    let names = crate::suggest(term, &catalog, limit);
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}

/// Autocomplete a partially typed ingredient.
///
/// `chosen_json` lists the ingredients already in the search.
#[wasm_bindgen]
pub fn autocomplete_ingredients(term: &str, catalog_json: &str, chosen_json: &str) -> String {
    let catalog = parse_names(catalog_json);
    let chosen = parse_names(chosen_json);

    let names = crate::autocomplete(term, &catalog, &chosen, crate::DEFAULT_AUTOCOMPLETE_LIMIT);
    serde_json::to_string(&names).unwrap_or_else(|_| "[]".to_string())
}
