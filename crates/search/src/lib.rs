//! Ingredient matching for recipegen.
//!
//! This crate provides:
//! - Levenshtein edit distance
//! - Tiered relevance scoring (exact, prefix, substring, near miss)
//! - Alternate-name suggestions for unknown ingredients
//! - Catalog autocomplete and popular starter ingredients

mod relevance;
mod fuzzy;
mod matcher;

#[cfg(feature = "wasm")]
mod wasm;

pub use relevance::{calculate_relevance, MatchTier, MAX_EDIT_DISTANCE, MIN_FUZZY_LEN};
pub use fuzzy::levenshtein_distance;
pub use matcher::{
    autocomplete, popular_ingredients, rank, suggest, ScoredName, DEFAULT_AUTOCOMPLETE_LIMIT,
    DEFAULT_MAX_SUGGESTIONS, POPULAR_INGREDIENTS, POPULAR_LIMIT,
};
