//! JSON-in/JSON-out forms of the list operations, for the browser bindings.
//!
//! A list or item array that does not parse is an error; it is never read
//! as an empty list, since the result replaces the stored list.

use crate::{add_items, clear_completed, remove_item, toggle_item, GroceryListRecipe, RecipeContext};

fn apply<F>(list_json: &str, op: F) -> serde_json::Result<String>
where
    F: FnOnce(&[GroceryListRecipe]) -> Vec<GroceryListRecipe>,
{
    let list: Vec<GroceryListRecipe> = serde_json::from_str(list_json)?;
    serde_json::to_string(&op(&list))
}

/// [`add_items`] over JSON; an empty `recipe_id` or `recipe_name` means the
/// miscellaneous group.
pub fn add_json(list_json: &str, items_json: &str, recipe_id: &str, recipe_name: &str) -> serde_json::Result<String> {
    let items: Vec<String> = serde_json::from_str(items_json)?;
    let context = RecipeContext::from_parts(Some(recipe_id), Some(recipe_name));
    apply(list_json, |list| add_items(list, &items, context.as_ref()))
}

/// [`remove_item`] over JSON
pub fn remove_json(list_json: &str, group_id: &str, item: &str) -> serde_json::Result<String> {
    apply(list_json, |list| remove_item(list, group_id, item))
}

/// [`toggle_item`] over JSON
pub fn toggle_json(list_json: &str, group_id: &str, item: &str) -> serde_json::Result<String> {
    apply(list_json, |list| toggle_item(list, group_id, item))
}

/// [`clear_completed`] over JSON
pub fn clear_completed_json(list_json: &str) -> serde_json::Result<String> {
    apply(list_json, clear_completed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = r#"[{"id":"52772","name":"Teriyaki Chicken","ingredients":[{"item":"rice","checked":true}]}]"#;

    #[test]
    fn test_add_keeps_existing_groups() {
        let out = add_json(LIST, r#"["salt"]"#, "", "").unwrap();
        assert!(out.contains("rice"));
        assert!(out.contains("miscellaneous-items"));
    }

    #[test]
    fn test_truncated_list_is_an_error() {
        let truncated = &LIST[..LIST.len() - 1];
        assert!(add_json(truncated, r#"["salt"]"#, "", "").is_err());
        assert!(remove_json(truncated, "52772", "rice").is_err());
        assert!(toggle_json(truncated, "52772", "rice").is_err());
        assert!(clear_completed_json(truncated).is_err());
    }

    #[test]
    fn test_malformed_items_are_an_error() {
        assert!(add_json(LIST, "salt", "", "").is_err());
    }

    #[test]
    fn test_clear_completed_over_json() {
        assert_eq!(clear_completed_json(LIST).unwrap(), "[]");
        assert_eq!(clear_completed_json("[]").unwrap(), "[]");
    }
}
