//! Saved recipes

use crate::error::AppResult;
use crate::extract::{AuthUser, JsonBody};
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::Json;
use recipegen_core::recipe::Recipe;
use recipegen_core::Error;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipesResponse {
    saved_recipes: Vec<Recipe>,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    recipe: Option<Recipe>,
}

pub async fn list(State(state): State<SharedState>, AuthUser(user): AuthUser) -> AppResult<Json<SavedRecipesResponse>> {
    let saved_recipes = state.store.saved_recipes(&user.email).await?;
    Ok(Json(SavedRecipesResponse { saved_recipes }))
}

pub async fn save(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<SaveRequest>,
) -> AppResult<Json<Value>> {
    let recipe = body.recipe.ok_or_else(|| Error::validation("Missing data"))?;
    let added = state.store.save_recipe(&user.email, recipe).await?;
    let message = if added { "Recipe saved" } else { "Recipe already saved" };
    Ok(Json(json!({ "message": message, "added": added })))
}

pub async fn remove(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let removed = state.store.remove_saved_recipe(&user.email, &id).await?;
    Ok(Json(json!({ "removed": removed })))
}
