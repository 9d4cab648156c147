//! Grocery list commands against the local file store

use crate::context::AppContext;
use anyhow::Result;
use recipegen_cli::output::Status;
use recipegen_cli::progress::spinner_unless;
use recipegen_cli::render;
use recipegen_core::Error;
use recipegen_grocery::{add_items, clear_completed, remove_item, toggle_item, GroceryListRecipe, RecipeContext};
use recipegen_store::UserStore;

pub async fn show(ctx: &AppContext) -> Result<()> {
    let user = ctx.user_email()?;
    let list = ctx.store()?.grocery_list(user).await?;
    print_list(ctx, &list)
}

pub async fn add(ctx: &AppContext, items: &[String], recipe_id: Option<&str>, recipe_name: Option<&str>) -> Result<()> {
    let recipe = RecipeContext::from_parts(recipe_id, recipe_name);
    update(ctx, |list| add_items(list, items, recipe.as_ref())).await
}

/// Add a recipe's ingredients under its own group; `items` narrows the set
pub async fn add_from_recipe(ctx: &AppContext, id: &str, items: &[String]) -> Result<()> {
    ctx.user_email()?;
    let resolver = ctx.resolver()?;
    let pb = spinner_unless(ctx.json, "Fetching recipe...");
    let recipe = resolver.recipe(id).await;
    pb.finish_and_clear();
    let recipe = recipe?.ok_or_else(|| Error::recipe_not_found(id))?;

    let ingredients: Vec<String> = if items.is_empty() {
        recipe.ingredient_lines.iter().map(|line| line.ingredient.clone()).collect()
    } else {
        items.to_vec()
    };
    let context = RecipeContext::new(recipe.id, recipe.title);
    update(ctx, |list| add_items(list, &ingredients, Some(&context))).await
}

pub async fn remove(ctx: &AppContext, group: &str, item: &str) -> Result<()> {
    update(ctx, |list| remove_item(list, group, item)).await
}

pub async fn toggle(ctx: &AppContext, group: &str, item: &str) -> Result<()> {
    update(ctx, |list| toggle_item(list, group, item)).await
}

pub async fn clear(ctx: &AppContext) -> Result<()> {
    update(ctx, clear_completed).await
}

/// Read, apply one aggregator operation, write back, print
async fn update<F>(ctx: &AppContext, op: F) -> Result<()>
where
    F: FnOnce(&[GroceryListRecipe]) -> Vec<GroceryListRecipe>,
{
    let user = ctx.user_email()?;
    let store = ctx.store()?;
    let before = store.grocery_list(user).await?;
    let after = op(&before);

    if after == before {
        tracing::debug!("Grocery list unchanged");
    } else {
        store.replace_grocery_list(user, after.clone()).await?;
    }
    print_list(ctx, &after)
}

fn print_list(ctx: &AppContext, list: &[GroceryListRecipe]) -> Result<()> {
    if ctx.json {
        return ctx.print_json(&list);
    }
    print!("{}", render::grocery_list(list));
    if recipegen_grocery::progress(list).is_complete() && !list.is_empty() {
        Status::success("Everything is checked off");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipegen_auth::SessionContext;
    use recipegen_core::config::Config;
    use recipegen_grocery::MISC_GROUP_ID;
    use tempfile::TempDir;

    fn context_as(dir: &TempDir, session: SessionContext) -> AppContext {
        let mut config = Config::default();
        config.schema.storage.data_dir = dir.path().display().to_string();
        AppContext {
            config,
            json: true,
            session,
        }
    }

    fn context(dir: &TempDir) -> AppContext {
        context_as(dir, SessionContext::local("cook@example.com"))
    }

    #[tokio::test]
    async fn test_grocery_commands_persist() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        add(&ctx, &["rice".to_string(), "Rice".to_string(), "nori".to_string()], None, None)
            .await
            .unwrap();
        toggle(&ctx, MISC_GROUP_ID, "rice").await.unwrap();

        let list = ctx.store().unwrap().grocery_list("cook@example.com").await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].ingredients.len(), 2);
        assert!(list[0].ingredients[0].checked);

        clear(&ctx).await.unwrap();
        let list = ctx.store().unwrap().grocery_list("cook@example.com").await.unwrap();
        assert_eq!(list[0].ingredients.len(), 1);
        assert_eq!(list[0].ingredients[0].item, "nori");
    }

    #[tokio::test]
    async fn test_grocery_groups_by_recipe() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);

        let items = vec!["rice".to_string()];
        add(&ctx, &items, Some("53065"), Some("Sushi")).await.unwrap();
        remove(&ctx, "53065", "RICE").await.unwrap();

        let list = ctx.store().unwrap().grocery_list("cook@example.com").await.unwrap();
        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn test_grocery_requires_sign_in() {
        let dir = TempDir::new().unwrap();
        let ctx = context_as(&dir, SessionContext::new());

        let err = show(&ctx).await.unwrap_err();
        let err = err.downcast_ref::<Error>().unwrap();
        assert_eq!(err.message, "Please log in");

        let items = vec!["rice".to_string()];
        assert!(add(&ctx, &items, None, None).await.is_err());
        assert!(add_from_recipe(&ctx, "52772", &[]).await.is_err());
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }
}
