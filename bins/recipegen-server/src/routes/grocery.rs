//! Grocery list routes; every change is read-modify-write, last write wins

use crate::error::AppResult;
use crate::extract::{AuthUser, JsonBody};
use crate::state::SharedState;
use axum::extract::State;
use axum::Json;
use recipegen_core::Error;
use recipegen_grocery::{
    add_items, clear_completed, normalize, remove_item, toggle_item, GroceryListRecipe, RecipeContext,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListResponse {
    grocery_list: Vec<GroceryListRecipe>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRequest {
    recipe_ingredients: Option<Vec<String>>,
    recipe_name: Option<String>,
    recipe_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceRequest {
    grocery_list: Option<Vec<GroceryListRecipe>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    group_id: Option<String>,
    item: Option<String>,
}

impl ItemRequest {
    fn into_parts(self) -> Result<(String, String), Error> {
        let group_id = self.group_id.ok_or_else(|| Error::missing_field("groupId"))?;
        let item = self.item.ok_or_else(|| Error::missing_field("item"))?;
        Ok((group_id, item))
    }
}

async fn apply<F>(state: &SharedState, email: &str, op: F) -> AppResult<Json<GroceryListResponse>>
where
    F: FnOnce(&[GroceryListRecipe]) -> Vec<GroceryListRecipe>,
{
    let current = state.store.grocery_list(email).await?;
    let grocery_list = op(&current);
    if grocery_list != current {
        state.store.replace_grocery_list(email, grocery_list.clone()).await?;
    }
    Ok(Json(GroceryListResponse { grocery_list }))
}

pub async fn get(State(state): State<SharedState>, AuthUser(user): AuthUser) -> AppResult<Json<GroceryListResponse>> {
    let grocery_list = state.store.grocery_list(&user.email).await?;
    Ok(Json(GroceryListResponse { grocery_list }))
}

pub async fn add(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<AddRequest>,
) -> AppResult<Json<GroceryListResponse>> {
    let items = body
        .recipe_ingredients
        .ok_or_else(|| Error::missing_field("ingredients"))?;
    let recipe = RecipeContext::from_parts(body.recipe_id.as_deref(), body.recipe_name.as_deref());
    apply(&state, &user.email, |list| add_items(list, &items, recipe.as_ref())).await
}

pub async fn replace(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<ReplaceRequest>,
) -> AppResult<Json<GroceryListResponse>> {
    let list = body
        .grocery_list
        .ok_or_else(|| Error::validation("Invalid grocery list data"))?;
    let grocery_list = normalize(list);
    state
        .store
        .replace_grocery_list(&user.email, grocery_list.clone())
        .await?;
    Ok(Json(GroceryListResponse { grocery_list }))
}

pub async fn toggle(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<ItemRequest>,
) -> AppResult<Json<GroceryListResponse>> {
    let (group_id, item) = body.into_parts()?;
    apply(&state, &user.email, |list| toggle_item(list, &group_id, &item)).await
}

pub async fn remove(
    State(state): State<SharedState>,
    AuthUser(user): AuthUser,
    JsonBody(body): JsonBody<ItemRequest>,
) -> AppResult<Json<GroceryListResponse>> {
    let (group_id, item) = body.into_parts()?;
    apply(&state, &user.email, |list| remove_item(list, &group_id, &item)).await
}

pub async fn clear(State(state): State<SharedState>, AuthUser(user): AuthUser) -> AppResult<Json<GroceryListResponse>> {
    apply(&state, &user.email, clear_completed).await
}
