//! Multi-ingredient recipe resolution
//!
//! 1. Query the source once per ingredient, concurrently.
//! 2. Ingredients with no recipes (or a failed query) are invalid; those with
//!    no recipes get alternate-name suggestions from the catalog.
//! 3. Select candidates: one valid ingredient keeps its whole list, several
//!    keep their strict intersection, and an empty intersection falls back to
//!    ranking the union by how many ingredients each recipe covers.
//! 4. Fetch details for the leading candidates, concurrently, dropping any
//!    that fail, and order by matched-ingredient count.
//!
//! All selection and ordering happens after every response is in, so the
//! outcome never depends on which request finished first.

use crate::catalog::CatalogCache;
use crate::ingredients::dedupe_tokens;
use crate::{DETAILS_DROPPED, INGREDIENT_QUERIES_FAILED, INVALID_INGREDIENTS, SEARCHES};
use futures_util::future::join_all;
use recipegen_core::config::SearchConfig;
use recipegen_core::recipe::{MatchStrategy, Recipe, RecipeStub, SearchOutcome, Suggestion};
use recipegen_core::source::RecipeSource;
use recipegen_core::Result;
use recipegen_telemetry::{metrics, Timer};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Result caps applied by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverLimits {
    /// Alternate names per invalid ingredient
    pub max_suggestions: usize,
    /// Recipes kept by coverage ranking
    pub candidate_limit: usize,
    /// Recipes whose details are fetched
    pub detail_limit: usize,
    /// Random recipes returned by default
    pub random_count: usize,
    /// Names returned by autocomplete
    pub autocomplete_limit: usize,
}

impl Default for ResolverLimits {
    fn default() -> Self {
        Self::from(&SearchConfig::default())
    }
}

impl From<&SearchConfig> for ResolverLimits {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_suggestions: config.max_suggestions,
            candidate_limit: config.candidate_limit,
            detail_limit: config.detail_limit,
            random_count: config.random_count,
            autocomplete_limit: config.autocomplete_limit,
        }
    }
}

/// Recipes one ingredient query returned
#[derive(Debug, Clone)]
pub struct IngredientHits {
    /// Normalized ingredient
    pub ingredient: String,
    /// Recipes containing it, in source order
    pub recipes: Vec<RecipeStub>,
}

/// A recipe chosen for detail lookup, with the ingredients it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Recipe as returned by the ingredient query
    pub stub: RecipeStub,
    /// Valid ingredients (in search order) whose results contain this recipe
    pub matched: Vec<String>,
}

/// Choose candidate recipes from the per-ingredient results.
///
/// `valid` holds only ingredients with at least one recipe, in search order.
pub fn select_candidates(valid: &[IngredientHits], candidate_limit: usize) -> (Vec<Candidate>, MatchStrategy) {
    let Some(first) = valid.first() else {
        return (Vec::new(), MatchStrategy::None);
    };

    let id_sets: Vec<HashSet<&str>> = valid
        .iter()
        .map(|hits| hits.recipes.iter().map(|stub| stub.id.as_str()).collect())
        .collect();

    let matched_for = |id: &str| -> Vec<String> {
        valid
            .iter()
            .zip(&id_sets)
            .filter(|(_, ids)| ids.contains(id))
            .map(|(hits, _)| hits.ingredient.clone())
            .collect()
    };

    if valid.len() == 1 {
        let candidates = first
            .recipes
            .iter()
            .map(|stub| Candidate {
                stub: stub.clone(),
                matched: vec![first.ingredient.clone()],
            })
            .collect();
        return (candidates, MatchStrategy::Single);
    }

    let common: Vec<Candidate> = first
        .recipes
        .iter()
        .filter(|stub| id_sets[1..].iter().all(|ids| ids.contains(stub.id.as_str())))
        .map(|stub| Candidate {
            stub: stub.clone(),
            matched: matched_for(&stub.id),
        })
        .collect();

    if !common.is_empty() {
        return (common, MatchStrategy::AllIngredients);
    }

    let mut seen = HashSet::new();
    let mut ranked: Vec<Candidate> = valid
        .iter()
        .flat_map(|hits| &hits.recipes)
        .filter(|stub| seen.insert(stub.id.as_str()))
        .map(|stub| Candidate {
            stub: stub.clone(),
            matched: matched_for(&stub.id),
        })
        .collect();

    // stable: equal coverage keeps union order
    ranked.sort_by(|a, b| b.matched.len().cmp(&a.matched.len()));
    ranked.truncate(candidate_limit);
    (ranked, MatchStrategy::BestEffort)
}

/// Finds recipes for a set of ingredients
pub struct RecipeResolver {
    source: Arc<dyn RecipeSource>,
    catalog: CatalogCache,
    limits: ResolverLimits,
}

enum QueryResult {
    Found(Vec<RecipeStub>),
    Empty,
    Failed,
}

impl RecipeResolver {
    /// Create a resolver with default limits
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self::with_limits(source, ResolverLimits::default())
    }

    /// Create a resolver with explicit limits
    pub fn with_limits(source: Arc<dyn RecipeSource>, limits: ResolverLimits) -> Self {
        Self {
            catalog: CatalogCache::new(Arc::clone(&source)),
            source,
            limits,
        }
    }

    /// Limits in effect
    pub fn limits(&self) -> ResolverLimits {
        self.limits
    }

    /// The lazily loaded ingredient catalog
    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    /// Search recipes for raw user input.
    ///
    /// Inputs are normalized; blanks and repeats are dropped (first wins).
    /// Never fails: unreachable data shows up as invalid ingredients or
    /// missing recipes.
    #[instrument(skip(self, ingredients), fields(count = ingredients.len()))]
    pub async fn search<S: AsRef<str>>(&self, ingredients: &[S]) -> SearchOutcome {
        let _timer = Timer::start(crate::RESOLVE_MS);
        metrics().increment(SEARCHES);

        let tokens = dedupe_tokens(ingredients);
        if tokens.is_empty() {
            return SearchOutcome::default();
        }

        let results = join_all(tokens.iter().map(|ingredient| self.query_ingredient(ingredient))).await;

        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        let mut unknown = Vec::new();
        for (ingredient, result) in tokens.into_iter().zip(results) {
            match result {
                QueryResult::Found(recipes) => valid.push(IngredientHits { ingredient, recipes }),
                QueryResult::Empty => {
                    unknown.push(ingredient.clone());
                    invalid.push(ingredient);
                }
                QueryResult::Failed => invalid.push(ingredient),
            }
        }
        metrics().increment_by(INVALID_INGREDIENTS, invalid.len() as u64);

        let suggestions = self.suggestions_for(&unknown).await;
        let (candidates, strategy) = select_candidates(&valid, self.limits.candidate_limit);
        debug!(
            valid = valid.len(),
            invalid = invalid.len(),
            candidates = candidates.len(),
            strategy = ?strategy,
            "Candidates selected"
        );

        let recipes = self.fetch_details(candidates).await;

        SearchOutcome {
            recipes,
            invalid_ingredients: invalid,
            suggestions,
            strategy,
        }
    }

    async fn query_ingredient(&self, ingredient: &str) -> QueryResult {
        match self.source.recipes_with_ingredient(ingredient).await {
            Ok(recipes) if recipes.is_empty() => QueryResult::Empty,
            Ok(recipes) => QueryResult::Found(recipes),
            Err(e) => {
                warn!(ingredient = %ingredient, error = %e, "Ingredient query failed");
                metrics().increment(INGREDIENT_QUERIES_FAILED);
                QueryResult::Failed
            }
        }
    }

    async fn suggestions_for(&self, unknown: &[String]) -> Vec<Suggestion> {
        if unknown.is_empty() {
            return Vec::new();
        }

        let catalog = self.catalog.names().await;
        if catalog.is_empty() {
            return Vec::new();
        }

        unknown
            .iter()
            .filter_map(|original| {
                let suggestions = recipegen_search::suggest(original, catalog.as_slice(), self.limits.max_suggestions);
                (!suggestions.is_empty()).then(|| Suggestion {
                    original: original.clone(),
                    suggestions,
                })
            })
            .collect()
    }

    async fn fetch_details(&self, candidates: Vec<Candidate>) -> Vec<Recipe> {
        let lookups = candidates
            .into_iter()
            .take(self.limits.detail_limit)
            .map(|candidate| async move {
                match self.source.recipe_details(&candidate.stub.id).await {
                    Ok(Some(mut recipe)) => {
                        recipe.matched_ingredients = candidate.matched;
                        Some(recipe)
                    }
                    Ok(None) => {
                        warn!(id = %candidate.stub.id, "Recipe details missing");
                        metrics().increment(DETAILS_DROPPED);
                        None
                    }
                    Err(e) => {
                        warn!(id = %candidate.stub.id, error = %e, "Recipe details failed");
                        metrics().increment(DETAILS_DROPPED);
                        None
                    }
                }
            });

        let mut recipes: Vec<Recipe> = join_all(lookups).await.into_iter().flatten().collect();
        recipes.sort_by(|a, b| b.match_count().cmp(&a.match_count()));
        recipes
    }

    /// Up to `count` random recipes (default from limits), failures dropped
    #[instrument(skip(self))]
    pub async fn random_recipes(&self, count: Option<usize>) -> Vec<Recipe> {
        let count = count.unwrap_or(self.limits.random_count);
        let draws = (0..count).map(|_| self.source.random_recipe());

        join_all(draws)
            .await
            .into_iter()
            .filter_map(|result| match result {
                Ok(recipe) => recipe,
                Err(e) => {
                    warn!(error = %e, "Random recipe failed");
                    None
                }
            })
            .collect()
    }

    /// Full details of one recipe
    pub async fn recipe(&self, id: &str) -> Result<Option<Recipe>> {
        self.source.recipe_details(id).await
    }

    /// Alternate catalog names for a term
    pub async fn suggest(&self, term: &str) -> Vec<String> {
        let catalog = self.catalog.names().await;
        recipegen_search::suggest(term, catalog.as_slice(), self.limits.max_suggestions)
    }

    /// Catalog names for a partially typed ingredient, skipping `chosen`
    pub async fn autocomplete(&self, term: &str, chosen: &[String]) -> Vec<String> {
        let catalog = self.catalog.names().await;
        recipegen_search::autocomplete(term, catalog.as_slice(), chosen, self.limits.autocomplete_limit)
    }

    /// The whole catalog, optionally narrowed to names containing `filter`
    pub async fn catalog_names(&self, filter: Option<&str>) -> Vec<String> {
        let catalog = self.catalog.names().await;
        let filter = filter.map(|f| f.trim().to_lowercase()).filter(|f| !f.is_empty());
        match filter {
            Some(filter) => catalog.iter().filter(|name| name.contains(&filter)).cloned().collect(),
            None => catalog.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{stub, FakeSource};
    use proptest::prelude::*;

    fn hits(ingredient: &str, ids: &[&str]) -> IngredientHits {
        IngredientHits {
            ingredient: ingredient.to_string(),
            recipes: ids.iter().map(|id| stub(id)).collect(),
        }
    }

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.stub.id.as_str()).collect()
    }

    fn resolver(source: FakeSource) -> (Arc<FakeSource>, RecipeResolver) {
        let source = Arc::new(source);
        let resolver = RecipeResolver::new(source.clone());
        (source, resolver)
    }

    #[test]
    fn test_select_nothing_valid() {
        let (candidates, strategy) = select_candidates(&[], 12);
        assert!(candidates.is_empty());
        assert_eq!(strategy, MatchStrategy::None);
    }

    #[test]
    fn test_select_single_keeps_everything() {
        let valid = [hits("chicken", &["1", "2", "3"])];
        let (candidates, strategy) = select_candidates(&valid, 1);
        assert_eq!(ids(&candidates), vec!["1", "2", "3"]);
        assert_eq!(strategy, MatchStrategy::Single);
        assert_eq!(candidates[0].matched, vec!["chicken"]);
    }

    #[test]
    fn test_select_intersection_in_first_list_order() {
        let valid = [
            hits("chicken", &["3", "1", "2"]),
            hits("onion", &["2", "3", "9"]),
        ];
        let (candidates, strategy) = select_candidates(&valid, 12);
        assert_eq!(ids(&candidates), vec!["3", "2"]);
        assert_eq!(strategy, MatchStrategy::AllIngredients);
        assert_eq!(candidates[0].matched, vec!["chicken", "onion"]);
    }

    #[test]
    fn test_select_falls_back_to_coverage() {
        let valid = [
            hits("chicken", &["1", "2"]),
            hits("onion", &["3", "2"]),
            hits("garlic", &["4"]),
        ];
        let (candidates, strategy) = select_candidates(&valid, 12);
        assert_eq!(strategy, MatchStrategy::BestEffort);
        assert_eq!(ids(&candidates), vec!["2", "1", "3", "4"]);
        assert_eq!(candidates[0].matched, vec!["chicken", "onion"]);
    }

    #[test]
    fn test_select_coverage_is_capped() {
        let many: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let many: Vec<&str> = many.iter().map(String::as_str).collect();
        let valid = [hits("chicken", &many), hits("onion", &["x"])];
        let (candidates, _) = select_candidates(&valid, 12);
        assert_eq!(candidates.len(), 12);
    }

    #[tokio::test]
    async fn test_disjoint_ingredients_rank_by_coverage() {
        let (_, resolver) = resolver(
            FakeSource::new()
                .with_recipes("chicken", &["1", "2"])
                .with_recipes("onion", &["3"]),
        );

        let outcome = resolver.search(&["Chicken", "onion"]).await;
        assert_eq!(outcome.strategy, MatchStrategy::BestEffort);
        assert_eq!(outcome.recipes.len(), 3);
        assert!(outcome.recipes.iter().all(|r| r.match_count() >= 1));
        assert!(outcome.invalid_ingredients.is_empty());
    }

    #[tokio::test]
    async fn test_single_ingredient_details_capped() {
        let many: Vec<String> = (0..15).map(|i| i.to_string()).collect();
        let many: Vec<&str> = many.iter().map(String::as_str).collect();
        let (source, resolver) = resolver(FakeSource::new().with_recipes("beef", &many));

        let outcome = resolver.search(&["beef"]).await;
        assert_eq!(outcome.strategy, MatchStrategy::Single);
        assert_eq!(outcome.recipes.len(), 9);
        assert_eq!(source.detail_calls(), 9);
        assert_eq!(outcome.recipes[0].id, "0");
        assert_eq!(outcome.recipes[0].matched_ingredients, vec!["beef"]);
    }

    #[tokio::test]
    async fn test_intersection_ranks_all_matches() {
        let (_, resolver) = resolver(
            FakeSource::new()
                .with_recipes("chicken", &["1", "2", "3"])
                .with_recipes("rice", &["3", "1"]),
        );

        let outcome = resolver.search(&["chicken", "rice"]).await;
        assert_eq!(outcome.strategy, MatchStrategy::AllIngredients);
        let ids: Vec<_> = outcome.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_unknown_ingredient_gets_suggestions() {
        let (_, resolver) = resolver(
            FakeSource::new()
                .with_recipes("chicken", &["1"])
                .with_catalog(&["tomato", "tomatillo", "potato", "chicken"]),
        );

        let outcome = resolver.search(&["chicken", "tomat"]).await;
        assert_eq!(outcome.strategy, MatchStrategy::Single);
        assert_eq!(outcome.invalid_ingredients, vec!["tomat"]);
        assert_eq!(outcome.suggestions.len(), 1);
        assert_eq!(outcome.suggestions[0].original, "tomat");
        assert_eq!(outcome.suggestions[0].suggestions[..2], ["tomato", "tomatillo"]);
        assert_eq!(outcome.recipes.len(), 1);
    }

    #[tokio::test]
    async fn test_failed_query_is_invalid_without_suggestion() {
        let (source, resolver) = resolver(
            FakeSource::new()
                .with_failing_ingredient("saffron")
                .with_catalog(&["saffron"]),
        );

        let outcome = resolver.search(&["saffron"]).await;
        assert_eq!(outcome.invalid_ingredients, vec!["saffron"]);
        assert!(outcome.suggestions.is_empty());
        assert!(outcome.recipes.is_empty());
        assert_eq!(outcome.strategy, MatchStrategy::None);
        assert_eq!(source.catalog_calls(), 0);
    }

    #[tokio::test]
    async fn test_failed_details_drop_only_that_recipe() {
        let (_, resolver) = resolver(
            FakeSource::new()
                .with_recipes("egg", &["1", "2", "3"])
                .with_failing_details("2"),
        );

        let outcome = resolver.search(&["egg"]).await;
        let ids: Vec<_> = outcome.recipes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_duplicates_and_blanks_ignored() {
        let (source, resolver) = resolver(FakeSource::new().with_recipes("egg", &["1"]));

        let outcome = resolver.search(&["egg", " EGG ", "  "]).await;
        assert_eq!(outcome.recipes.len(), 1);
        assert_eq!(source.ingredient_calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_input() {
        let (source, resolver) = resolver(FakeSource::new());
        let outcome = resolver.search::<&str>(&[]).await;
        assert!(outcome.recipes.is_empty());
        assert_eq!(source.ingredient_calls(), 0);
    }

    #[tokio::test]
    async fn test_random_recipes_default_count() {
        let (_, resolver) = resolver(FakeSource::new().with_recipes("egg", &["1"]));
        let recipes = resolver.random_recipes(None).await;
        assert_eq!(recipes.len(), 6);
        assert!(recipes.iter().all(|r| r.matched_ingredients.is_empty()));
        assert_eq!(resolver.random_recipes(Some(2)).await.len(), 2);
    }

    #[tokio::test]
    async fn test_recipe_lookup() {
        let (_, resolver) = resolver(FakeSource::new().with_recipes("egg", &["7"]));
        assert_eq!(resolver.recipe("7").await.unwrap().unwrap().id, "7");
        assert!(resolver.recipe("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_autocomplete_and_catalog_filter() {
        let (_, resolver) = resolver(FakeSource::new().with_catalog(&["garlic", "garlic powder", "onion"]));

        let names = resolver.autocomplete("garl", &["garlic".to_string()]).await;
        assert_eq!(names, vec!["garlic powder"]);
        assert_eq!(resolver.catalog_names(Some(" ONI ")).await, vec!["onion"]);
        assert_eq!(resolver.catalog_names(None).await.len(), 3);
    }

    proptest! {
        #[test]
        fn prop_coverage_candidates_all_match(
            first in prop::collection::vec(0u8..30, 1..10),
            second in prop::collection::vec(30u8..60, 1..10),
        ) {
            let first: Vec<String> = first.iter().map(u8::to_string).collect();
            let second: Vec<String> = second.iter().map(u8::to_string).collect();
            let valid = [
                hits("chicken", &first.iter().map(String::as_str).collect::<Vec<_>>()),
                hits("onion", &second.iter().map(String::as_str).collect::<Vec<_>>()),
            ];

            let (candidates, strategy) = select_candidates(&valid, 12);
            prop_assert_eq!(strategy, MatchStrategy::BestEffort);
            prop_assert!(candidates.len() <= 12);
            prop_assert!(candidates.iter().all(|c| !c.matched.is_empty()));
            let unique: HashSet<_> = candidates.iter().map(|c| &c.stub.id).collect();
            prop_assert_eq!(unique.len(), candidates.len());
        }
    }
}
