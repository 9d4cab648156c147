//! Ingredient catalog listing and completion

use crate::context::AppContext;
use anyhow::Result;
use recipegen_cli::output::{format_count, Status};
use recipegen_cli::progress::spinner_unless;

/// Every catalog name, optionally filtered
pub async fn list(ctx: &AppContext, filter: Option<&str>) -> Result<()> {
    let resolver = ctx.resolver()?;
    let pb = spinner_unless(ctx.json, "Loading ingredient catalog...");
    let names = resolver.catalog_names(filter).await;
    let loaded = resolver.catalog().is_loaded();
    pb.finish_and_clear();

    if ctx.json {
        return ctx.print_json(&names);
    }

    if !loaded {
        Status::warning("Ingredient catalog unavailable; check your connection");
        return Ok(());
    }
    for name in &names {
        println!("{name}");
    }
    Status::info(&format_count(names.len(), "ingredient", "ingredients"));
    Ok(())
}

/// Catalog names completing a partial term
pub async fn complete(ctx: &AppContext, term: &str) -> Result<()> {
    let resolver = ctx.resolver()?;
    let names = resolver.autocomplete(term, &[]).await;

    if ctx.json {
        return ctx.print_json(&names);
    }
    for name in &names {
        println!("{name}");
    }
    Ok(())
}

/// The starter list shown before anything is typed
pub fn popular(ctx: &AppContext) -> Result<()> {
    let names = recipegen_search::popular_ingredients(&[]);
    if ctx.json {
        return ctx.print_json(&names);
    }
    Status::header("Popular ingredients");
    println!("  {}", names.join(", "));
    Ok(())
}
