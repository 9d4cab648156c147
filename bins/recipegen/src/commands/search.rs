//! Ingredient search and spelling suggestions

use crate::context::AppContext;
use anyhow::{bail, Result};
use recipegen_cli::output::{format_duration, Status};
use recipegen_cli::progress::spinner_unless;
use recipegen_cli::render;
use recipegen_finder::IngredientList;
use std::time::Instant;

/// Search recipes using every given ingredient
pub async fn run(ctx: &AppContext, ingredients: &[String]) -> Result<()> {
    let list = IngredientList::from_raw(ingredients);
    if list.is_empty() {
        bail!("Enter at least one ingredient");
    }
    let tokens = list.tokens();

    let resolver = ctx.resolver()?;
    let pb = spinner_unless(ctx.json, &format!("Searching recipes with {}...", tokens.join(", ")));
    let start = Instant::now();
    let outcome = resolver.search(&tokens).await;
    pb.finish_and_clear();

    if ctx.json {
        return ctx.print_json(&outcome);
    }

    print!("{}", render::search_outcome(&outcome));
    Status::info(&format!("Searched in {}", format_duration(start.elapsed())));
    Ok(())
}

/// Catalog names close to `term`
pub async fn suggest(ctx: &AppContext, term: &str) -> Result<()> {
    let resolver = ctx.resolver()?;
    let pb = spinner_unless(ctx.json, "Loading ingredient catalog...");
    let suggestions = resolver.suggest(term).await;
    pb.finish_and_clear();

    if ctx.json {
        return ctx.print_json(&suggestions);
    }

    if suggestions.is_empty() {
        Status::warning(&format!("No ingredient looks like '{}'", term.trim()));
    } else {
        Status::header(&format!("Did you mean one of these instead of '{}'?", term.trim()));
        for name in &suggestions {
            println!("  {name}");
        }
    }
    Ok(())
}
