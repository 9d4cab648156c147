//! Random recipe picks

use crate::context::AppContext;
use anyhow::Result;
use recipegen_cli::output::format_count;
use recipegen_cli::progress::{finish_error, finish_success, spinner_unless};
use recipegen_cli::render;

pub async fn run(ctx: &AppContext, count: Option<usize>) -> Result<()> {
    let resolver = ctx.resolver()?;
    let pb = spinner_unless(ctx.json, "Picking random recipes...");
    let recipes = resolver.random_recipes(count).await;

    if recipes.is_empty() {
        finish_error(&pb, "No recipes could be fetched");
    } else {
        finish_success(&pb, &format!("Picked {}", format_count(recipes.len(), "recipe", "recipes")));
    }

    if ctx.json {
        return ctx.print_json(&recipes);
    }

    for recipe in &recipes {
        println!("\n{}", render::recipe_card(recipe));
    }
    Ok(())
}
