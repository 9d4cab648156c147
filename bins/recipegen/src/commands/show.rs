//! Single recipe detail

use crate::context::AppContext;
use anyhow::Result;
use recipegen_cli::progress::spinner_unless;
use recipegen_cli::render;
use recipegen_core::Error;

pub async fn run(ctx: &AppContext, id: &str) -> Result<()> {
    let resolver = ctx.resolver()?;
    let pb = spinner_unless(ctx.json, "Fetching recipe...");
    let recipe = resolver.recipe(id).await;
    pb.finish_and_clear();

    let recipe = recipe?.ok_or_else(|| Error::recipe_not_found(id))?;
    if ctx.json {
        return ctx.print_json(&recipe);
    }
    print!("{}", render::recipe_detail(&recipe));
    Ok(())
}
