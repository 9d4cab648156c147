//! WASM bindings for optimistic grocery list updates in the browser.
//!
//! Every function takes the current list as JSON and returns the new list as
//! JSON. Input that does not parse is rejected with an error.

use crate::json;
use wasm_bindgen::prelude::*;

fn to_js(err: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("JSON error: {err}"))
}

/// Add items (JSON array of strings) for a recipe, or to the miscellaneous
/// group when `recipe_id` or `recipe_name` is empty.
#[wasm_bindgen]
pub fn grocery_add(list_json: &str, items_json: &str, recipe_id: &str, recipe_name: &str) -> Result<String, JsValue> {
    json::add_json(list_json, items_json, recipe_id, recipe_name).map_err(to_js)
}

/// Remove one item from a group.
#[wasm_bindgen]
pub fn grocery_remove(list_json: &str, group_id: &str, item: &str) -> Result<String, JsValue> {
    json::remove_json(list_json, group_id, item).map_err(to_js)
}

/// Flip one item's checked flag.
#[wasm_bindgen]
pub fn grocery_toggle(list_json: &str, group_id: &str, item: &str) -> Result<String, JsValue> {
    json::toggle_json(list_json, group_id, item).map_err(to_js)
}

/// Remove all checked items.
#[wasm_bindgen]
pub fn grocery_clear_completed(list_json: &str) -> Result<String, JsValue> {
    json::clear_completed_json(list_json).map_err(to_js)
}
