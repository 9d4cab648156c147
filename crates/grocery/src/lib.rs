//! Grocery list aggregation for recipegen.
//!
//! A grocery list is a sequence of groups, one per recipe plus a reserved
//! "Miscellaneous Items" group for anything added without a recipe. Every
//! operation takes the prior list by reference and returns a new one; the
//! caller's list is never mutated.
//!
//! Invariants kept by every operation:
//! - item names are unique within a group, compared case-insensitively
//! - each item keeps its own checked flag
//! - no group is ever empty
//!
//! # Example
//!
//! ```
//! use recipegen_grocery::{add_items, clear_completed, toggle_item, MISC_GROUP_ID};
//!
//! let list = add_items(&[], &["Flour", "flour", "Eggs"], None);
//! assert_eq!(list[0].id, MISC_GROUP_ID);
//! assert_eq!(list[0].ingredients.len(), 2);
//!
//! let list = toggle_item(&list, MISC_GROUP_ID, "eggs");
//! let list = clear_completed(&list);
//! assert_eq!(list[0].ingredients[0].item, "Flour");
//! ```

pub mod json;
mod ops;

#[cfg(feature = "wasm")]
mod wasm;

pub use ops::{add_items, clear_completed, normalize, progress, remove_item, toggle_item, Progress};

use serde::{Deserialize, Serialize};

/// Group id for items added without a recipe.
pub const MISC_GROUP_ID: &str = "miscellaneous-items";

/// Display name of the miscellaneous group.
pub const MISC_GROUP_NAME: &str = "Miscellaneous Items";

/// One line on the grocery list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Item name as the user (or recipe) wrote it
    pub item: String,
    /// Whether the item has been picked up
    #[serde(default)]
    pub checked: bool,
}

impl GroceryItem {
    /// Creates an unchecked item.
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            checked: false,
        }
    }

    /// True when `name` refers to this item, ignoring case.
    pub fn is_named(&self, name: &str) -> bool {
        same_name(&self.item, name)
    }
}

/// Items grouped under the recipe they were added for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryListRecipe {
    /// Recipe id, or [`MISC_GROUP_ID`]
    pub id: String,
    /// Recipe title, or [`MISC_GROUP_NAME`]
    pub name: String,
    /// Items in insertion order
    #[serde(default)]
    pub ingredients: Vec<GroceryItem>,
}

impl GroceryListRecipe {
    /// True when the group holds `name`, ignoring case.
    pub fn contains(&self, name: &str) -> bool {
        self.ingredients.iter().any(|existing| existing.is_named(name))
    }

    /// True for the reserved miscellaneous group.
    pub fn is_misc(&self) -> bool {
        self.id == MISC_GROUP_ID
    }
}

/// The recipe a batch of items is being added for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeContext {
    /// Recipe id
    pub id: String,
    /// Recipe title
    pub name: String,
}

impl RecipeContext {
    /// Creates a context for a recipe.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// A context only when both id and name are present and non-blank;
    /// anything less files the items under the miscellaneous group.
    pub fn from_parts(id: Option<&str>, name: Option<&str>) -> Option<Self> {
        match (id.map(str::trim), name.map(str::trim)) {
            (Some(id), Some(name)) if !id.is_empty() && !name.is_empty() => Some(Self::new(id, name)),
            _ => None,
        }
    }
}

/// Case-insensitive item name comparison.
pub(crate) fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
