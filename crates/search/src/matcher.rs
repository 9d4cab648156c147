//! Ingredient matching against the known catalog.
//!
//! - [`suggest`]: alternate names for a term the recipe source did not know
//! - [`autocomplete`]: catalog names offered while the user types
//! - [`popular_ingredients`]: a starter list for an empty search

use crate::relevance::calculate_relevance;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of alternate names returned by [`suggest`]
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Default number of names returned by [`autocomplete`]
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 8;

/// Most popular ingredients shown at once
pub const POPULAR_LIMIT: usize = 12;

/// Starter ingredients offered before anything is typed
pub const POPULAR_INGREDIENTS: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "eggs",
    "onion", "garlic", "tomato", "potato", "carrot", "bell pepper",
    "rice", "pasta", "bread", "flour", "milk", "cheese",
    "olive oil", "salt", "pepper", "basil", "oregano", "thyme",
];

/// Catalog name with its relevance score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredName {
    /// Catalog name as given
    pub name: String,
    /// Relevance score (higher is better)
    pub score: u32,
}

/// Score every catalog name against `term`, dropping non-matches.
///
/// The result is sorted by score descending; ties keep catalog order.
pub fn rank<S: AsRef<str>>(term: &str, catalog: &[S]) -> Vec<ScoredName> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<ScoredName> = catalog
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let score = calculate_relevance(&name.to_lowercase(), &term);
            (score > 0).then(|| ScoredName {
                name: name.to_string(),
                score,
            })
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Up to `limit` catalog names resembling `term`, best first.
///
/// An empty catalog or a blank term yields an empty list.
pub fn suggest<S: AsRef<str>>(term: &str, catalog: &[S], limit: usize) -> Vec<String> {
    rank(term, catalog)
        .into_iter()
        .take(limit)
        .map(|scored| scored.name)
        .collect()
}

/// Catalog names containing `term` that are not already `chosen`.
///
/// Exact match first, then names starting with the term, then the rest;
/// each band alphabetical.
pub fn autocomplete<S: AsRef<str>>(
    term: &str,
    catalog: &[S],
    chosen: &[String],
    limit: usize,
) -> Vec<String> {
    let query = term.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(String, String)> = catalog
        .iter()
        .map(AsRef::as_ref)
        .map(|name| (name.to_lowercase(), name.to_string()))
        .filter(|(lower, _)| lower.contains(&query) && !chosen.iter().any(|c| c == lower))
        .collect();

    let band = |lower: &str| {
        if lower == query {
            0
        } else if lower.starts_with(&query) {
            1
        } else {
            2
        }
    };

    matches.sort_by(|(a, _), (b, _)| match band(a).cmp(&band(b)) {
        Ordering::Equal => a.cmp(b),
        other => other,
    });

    matches.into_iter().take(limit).map(|(_, name)| name).collect()
}

/// Popular starter ingredients not yet chosen, at most [`POPULAR_LIMIT`]
pub fn popular_ingredients(chosen: &[String]) -> Vec<&'static str> {
    POPULAR_INGREDIENTS
        .iter()
        .copied()
        .filter(|name| !chosen.iter().any(|c| c == name))
        .take(POPULAR_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> Vec<String> {
        ["tomato", "tomatillo", "potato", "sweet potato", "tomato puree", "garlic"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_suggest_prefix_tier_in_catalog_order() {
        let names = suggest("tomat", &["tomato", "tomatillo", "potato"], 5);
        assert_eq!(&names[..2], &["tomato", "tomatillo"]);
    }

    #[test]
    fn test_suggest_normalizes_term() {
        assert_eq!(suggest("  GARLIC ", &catalog(), 5), vec!["garlic"]);
    }

    #[test]
    fn test_suggest_exact_beats_prefix() {
        let names = suggest("tomato", &catalog(), 5);
        assert_eq!(names[0], "tomato");
        assert_eq!(names[1], "tomato puree");
    }

    #[test]
    fn test_suggest_near_miss() {
        assert_eq!(suggest("garlik", &catalog(), 5), vec!["garlic"]);
    }

    #[test]
    fn test_suggest_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        assert!(suggest("tomato", &empty, 5).is_empty());
        assert!(suggest("   ", &catalog(), 5).is_empty());
        assert!(suggest("zzzzzz", &catalog(), 5).is_empty());
    }

    #[test]
    fn test_rank_scores() {
        let ranked = rank("potato", &catalog());
        assert_eq!(ranked[0], ScoredName { name: "potato".into(), score: 100 });
        assert_eq!(ranked[1].name, "sweet potato");
        assert_eq!(ranked[1].score, 80);
    }

    #[test]
    fn test_autocomplete_ordering() {
        let names = autocomplete("tomato", &catalog(), &[], 8);
        assert_eq!(names, vec!["tomato", "tomato puree"]);

        let names = autocomplete("ato", &catalog(), &[], 8);
        assert_eq!(names, vec!["potato", "sweet potato", "tomato", "tomato puree"]);
    }

    #[test]
    fn test_autocomplete_excludes_chosen() {
        let chosen = vec!["tomato".to_string()];
        let names = autocomplete("tom", &catalog(), &chosen, 8);
        assert_eq!(names, vec!["tomatillo", "tomato puree"]);
    }

    #[test]
    fn test_autocomplete_limit_and_blank() {
        assert_eq!(autocomplete("o", &catalog(), &[], 2).len(), 2);
        assert!(autocomplete(" ", &catalog(), &[], 8).is_empty());
    }

    #[test]
    fn test_popular_ingredients() {
        let all = popular_ingredients(&[]);
        assert_eq!(all.len(), POPULAR_LIMIT);
        assert_eq!(all[0], "chicken");

        let chosen = vec!["chicken".to_string(), "beef".to_string()];
        let rest = popular_ingredients(&chosen);
        assert_eq!(rest[0], "pork");
        assert_eq!(rest.len(), POPULAR_LIMIT);
    }

    proptest! {
        #[test]
        fn prop_suggest_bounded_and_positive(
            term in "[a-z]{1,8}",
            names in proptest::collection::vec("[a-z]{1,10}", 0..30),
        ) {
            let result = suggest(&term, &names, DEFAULT_MAX_SUGGESTIONS);
            prop_assert!(result.len() <= DEFAULT_MAX_SUGGESTIONS);
            for name in &result {
                prop_assert!(calculate_relevance(name, &term) > 0);
            }
        }

        #[test]
        fn prop_rank_is_sorted(
            term in "[a-z]{1,6}",
            names in proptest::collection::vec("[a-z]{1,10}", 0..30),
        ) {
            let ranked = rank(&term, &names);
            prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }
}
