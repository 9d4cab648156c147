//! Recipe search, lookup and ingredient helpers (no sign-in needed)

use crate::error::AppResult;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::Json;
use recipegen_core::recipe::{Recipe, SearchOutcome};
use recipegen_core::Error;
use recipegen_finder::IngredientList;
use serde::Deserialize;

/// Most random recipes one request may ask for
const MAX_RANDOM: usize = 24;

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| raw.split(',').map(str::to_string).collect())
        .unwrap_or_default()
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    ingredients: Option<String>,
}

pub async fn search(State(state): State<SharedState>, Query(query): Query<SearchQuery>) -> AppResult<Json<SearchOutcome>> {
    let list = IngredientList::from_raw(&split_list(query.ingredients.as_deref()));
    if list.is_empty() {
        return Err(Error::missing_field("ingredients").into());
    }
    Ok(Json(state.resolver.search(&list.tokens()).await))
}

#[derive(Debug, Deserialize)]
pub struct RandomQuery {
    count: Option<usize>,
}

pub async fn random(State(state): State<SharedState>, Query(query): Query<RandomQuery>) -> Json<Vec<Recipe>> {
    let count = query.count.map(|count| count.min(MAX_RANDOM));
    Json(state.resolver.random_recipes(count).await)
}

pub async fn detail(State(state): State<SharedState>, Path(id): Path<String>) -> AppResult<Json<Recipe>> {
    let recipe = state.resolver.recipe(&id).await?;
    recipe.map(Json).ok_or_else(|| Error::recipe_not_found(&id).into())
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteQuery {
    q: Option<String>,
    exclude: Option<String>,
}

pub async fn autocomplete(
    State(state): State<SharedState>,
    Query(query): Query<AutocompleteQuery>,
) -> Json<Vec<String>> {
    let chosen = IngredientList::from_raw(&split_list(query.exclude.as_deref())).tokens();
    let term = query.q.unwrap_or_default();
    Json(state.resolver.autocomplete(&term, &chosen).await)
}

#[derive(Debug, Deserialize)]
pub struct SuggestQuery {
    term: Option<String>,
}

pub async fn suggest(State(state): State<SharedState>, Query(query): Query<SuggestQuery>) -> AppResult<Json<Vec<String>>> {
    let term = query
        .term
        .filter(|term| !term.trim().is_empty())
        .ok_or_else(|| Error::missing_field("term"))?;
    Ok(Json(state.resolver.suggest(&term).await))
}
