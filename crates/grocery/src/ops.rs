//! Grocery list operations.

use crate::{same_name, GroceryItem, GroceryListRecipe, RecipeContext, MISC_GROUP_ID, MISC_GROUP_NAME};
use serde::{Deserialize, Serialize};

/// Checked and total item counts across a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Items already picked up
    pub checked: usize,
    /// All items
    pub total: usize,
}

impl Progress {
    /// True when every item is checked (and there is at least one).
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// Add items to a recipe's group, or to the miscellaneous group when no
/// recipe is given.
///
/// Items are trimmed and blanks skipped. An item already in the target group
/// (ignoring case) is skipped, as is a repeat within the same batch; the
/// first spelling wins. Existing items keep their checked state. A new group
/// is appended at the end, and only if at least one item survives.
pub fn add_items<S: AsRef<str>>(
    list: &[GroceryListRecipe],
    items: &[S],
    recipe: Option<&RecipeContext>,
) -> Vec<GroceryListRecipe> {
    let (group_id, group_name) = match recipe {
        Some(recipe) => (recipe.id.as_str(), recipe.name.as_str()),
        None => (MISC_GROUP_ID, MISC_GROUP_NAME),
    };

    let mut updated = list.to_vec();
    let index = match updated.iter().position(|group| group.id == group_id) {
        Some(index) => index,
        None => {
            updated.push(GroceryListRecipe {
                id: group_id.to_string(),
                name: group_name.to_string(),
                ingredients: Vec::new(),
            });
            updated.len() - 1
        }
    };

    let group = &mut updated[index];
    for item in items.iter().map(|item| item.as_ref().trim()) {
        if !item.is_empty() && !group.contains(item) {
            group.ingredients.push(GroceryItem::new(item));
        }
    }

    if updated[index].ingredients.is_empty() {
        updated.remove(index);
    }
    updated
}

/// Remove one item from a group, dropping the group if it empties.
///
/// Unknown groups or items leave the list unchanged.
pub fn remove_item(list: &[GroceryListRecipe], group_id: &str, item: &str) -> Vec<GroceryListRecipe> {
    let item = item.trim();
    list.iter()
        .filter_map(|group| {
            if group.id != group_id {
                return Some(group.clone());
            }
            let ingredients: Vec<GroceryItem> = group
                .ingredients
                .iter()
                .filter(|existing| !existing.is_named(item))
                .cloned()
                .collect();
            (!ingredients.is_empty()).then(|| GroceryListRecipe {
                ingredients,
                ..group.clone()
            })
        })
        .collect()
}

/// Flip the checked flag of one item; nothing else changes.
pub fn toggle_item(list: &[GroceryListRecipe], group_id: &str, item: &str) -> Vec<GroceryListRecipe> {
    let item = item.trim();
    let mut updated = list.to_vec();
    if let Some(group) = updated.iter_mut().find(|group| group.id == group_id) {
        if let Some(existing) = group.ingredients.iter_mut().find(|existing| existing.is_named(item)) {
            existing.checked = !existing.checked;
        }
    }
    updated
}

/// Remove every checked item and any group left empty. Idempotent.
pub fn clear_completed(list: &[GroceryListRecipe]) -> Vec<GroceryListRecipe> {
    list.iter()
        .filter_map(|group| {
            let ingredients: Vec<GroceryItem> = group
                .ingredients
                .iter()
                .filter(|item| !item.checked)
                .cloned()
                .collect();
            (!ingredients.is_empty()).then(|| GroceryListRecipe {
                ingredients,
                ..group.clone()
            })
        })
        .collect()
}

/// Restore the list invariants on a wholesale replacement.
///
/// Groups sharing an id are merged into the first one. Items are trimmed,
/// blanks dropped, and case-insensitive repeats collapsed into the first
/// spelling, checked if any repeat was checked. Empty groups are dropped.
pub fn normalize(list: Vec<GroceryListRecipe>) -> Vec<GroceryListRecipe> {
    let mut merged: Vec<GroceryListRecipe> = Vec::with_capacity(list.len());

    for group in list {
        let index = match merged.iter().position(|existing| existing.id == group.id) {
            Some(index) => index,
            None => {
                merged.push(GroceryListRecipe {
                    ingredients: Vec::new(),
                    ..group.clone()
                });
                merged.len() - 1
            }
        };

        let target = &mut merged[index].ingredients;
        for item in group.ingredients {
            let name = item.item.trim();
            if name.is_empty() {
                continue;
            }
            match target.iter_mut().find(|existing| same_name(&existing.item, name)) {
                Some(existing) => existing.checked |= item.checked,
                None => target.push(GroceryItem {
                    item: name.to_string(),
                    checked: item.checked,
                }),
            }
        }
    }

    merged.retain(|group| !group.ingredients.is_empty());
    merged
}

/// Count checked and total items.
pub fn progress(list: &[GroceryListRecipe]) -> Progress {
    list.iter()
        .flat_map(|group| &group.ingredients)
        .fold(Progress::default(), |mut acc, item| {
            acc.total += 1;
            if item.checked {
                acc.checked += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn teriyaki() -> RecipeContext {
        RecipeContext::new("52772", "Teriyaki Chicken Casserole")
    }

    fn names(group: &GroceryListRecipe) -> Vec<&str> {
        group.ingredients.iter().map(|i| i.item.as_str()).collect()
    }

    #[test]
    fn test_add_to_empty_misc_twice() {
        let list = add_items(&[], &["flour", "Flour"], None);
        let list = add_items(&list, &["flour", "Flour"], None);

        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, MISC_GROUP_ID);
        assert_eq!(list[0].name, MISC_GROUP_NAME);
        assert_eq!(names(&list[0]), vec!["flour"]);
    }

    #[test]
    fn test_add_creates_recipe_group() {
        let list = add_items(&[], &["soy sauce", " ", "chicken thighs"], Some(&teriyaki()));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "52772");
        assert_eq!(names(&list[0]), vec!["soy sauce", "chicken thighs"]);
        assert!(list[0].ingredients.iter().all(|i| !i.checked));
    }

    #[test]
    fn test_add_preserves_checked_state() {
        let list = add_items(&[], &["rice"], Some(&teriyaki()));
        let list = toggle_item(&list, "52772", "rice");
        let list = add_items(&list, &["RICE", "water"], Some(&teriyaki()));

        assert_eq!(names(&list[0]), vec!["rice", "water"]);
        assert!(list[0].ingredients[0].checked);
        assert!(!list[0].ingredients[1].checked);
    }

    #[test]
    fn test_add_nothing_creates_no_group() {
        let list = add_items(&[], &["  ", ""], Some(&teriyaki()));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let before = add_items(&[], &["salt"], None);
        let snapshot = before.clone();
        let _ = add_items(&before, &["pepper"], None);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_groups_are_independent() {
        let list = add_items(&[], &["salt"], None);
        let list = add_items(&list, &["salt"], Some(&teriyaki()));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].id, "52772");
    }

    #[test]
    fn test_remove_last_item_drops_group() {
        let list = add_items(&[], &["salt"], None);
        let list = add_items(&list, &["garlic"], Some(&teriyaki()));
        let list = remove_item(&list, "52772", "Garlic");

        assert_eq!(list.len(), 1);
        assert!(list[0].is_misc());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let list = add_items(&[], &["salt"], None);
        assert_eq!(remove_item(&list, MISC_GROUP_ID, "sugar"), list);
        assert_eq!(remove_item(&list, "404", "salt"), list);
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let list = add_items(&[], &["salt", "pepper"], None);
        let list = toggle_item(&list, MISC_GROUP_ID, "PEPPER");
        assert!(!list[0].ingredients[0].checked);
        assert!(list[0].ingredients[1].checked);

        let list = toggle_item(&list, MISC_GROUP_ID, "pepper");
        assert!(!list[0].ingredients[1].checked);
    }

    #[test]
    fn test_clear_completed() {
        let list = add_items(&[], &["salt", "pepper"], None);
        let list = add_items(&list, &["rice"], Some(&teriyaki()));
        let list = toggle_item(&list, MISC_GROUP_ID, "salt");
        let list = toggle_item(&list, "52772", "rice");

        let cleared = clear_completed(&list);
        assert_eq!(cleared.len(), 1);
        assert_eq!(names(&cleared[0]), vec!["pepper"]);
        assert_eq!(clear_completed(&cleared), cleared);
    }

    #[test]
    fn test_normalize_merges_and_dedupes() {
        let list = vec![
            GroceryListRecipe {
                id: "1".into(),
                name: "Soup".into(),
                ingredients: vec![GroceryItem::new("Leek"), GroceryItem::new("  ")],
            },
            GroceryListRecipe {
                id: "2".into(),
                name: "Empty".into(),
                ingredients: vec![],
            },
            GroceryListRecipe {
                id: "1".into(),
                name: "Soup again".into(),
                ingredients: vec![
                    GroceryItem { item: "leek".into(), checked: true },
                    GroceryItem::new(" stock "),
                ],
            },
        ];

        let normalized = normalize(list);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized[0].name, "Soup");
        assert_eq!(names(&normalized[0]), vec!["Leek", "stock"]);
        assert!(normalized[0].ingredients[0].checked);
    }

    #[test]
    fn test_progress() {
        let list = add_items(&[], &["salt", "pepper", "rice"], None);
        let list = toggle_item(&list, MISC_GROUP_ID, "rice");
        let progress = progress(&list);
        assert_eq!(progress, Progress { checked: 1, total: 3 });
        assert!(!progress.is_complete());
    }

    fn arb_list() -> impl Strategy<Value = Vec<GroceryListRecipe>> {
        let ops = proptest::collection::vec(
            (
                proptest::collection::vec("[a-cA-C]{1,3}", 0..4),
                proptest::option::of(0u8..3),
                any::<bool>(),
            ),
            0..8,
        );
        ops.prop_map(|ops| {
            ops.into_iter().fold(Vec::new(), |list, (items, recipe, toggle)| {
                let context = recipe.map(|n| RecipeContext::new(n.to_string(), format!("Recipe {n}")));
                let list = add_items(&list, &items, context.as_ref());
                match (toggle, items.first(), context) {
                    (true, Some(first), Some(ctx)) => toggle_item(&list, &ctx.id, first),
                    (true, Some(first), None) => toggle_item(&list, MISC_GROUP_ID, first),
                    _ => list,
                }
            })
        })
    }

    fn invariants_hold(list: &[GroceryListRecipe]) -> bool {
        list.iter().all(|group| {
            !group.ingredients.is_empty()
                && group.ingredients.iter().enumerate().all(|(i, a)| {
                    group.ingredients[i + 1..].iter().all(|b| !same_name(&a.item, &b.item))
                })
        })
    }

    proptest! {
        #[test]
        fn prop_invariants_after_add_and_toggle(list in arb_list()) {
            prop_assert!(invariants_hold(&list));
        }

        #[test]
        fn prop_clear_completed_idempotent(list in arb_list()) {
            let once = clear_completed(&list);
            prop_assert!(invariants_hold(&once));
            prop_assert_eq!(clear_completed(&once), once.clone());
            prop_assert_eq!(progress(&once).checked, 0);
        }

        #[test]
        fn prop_normalize_keeps_valid_lists(list in arb_list()) {
            prop_assert_eq!(normalize(list.clone()), list);
        }
    }
}
