//! recipegen - find recipes from the ingredients you have
//!
//! Searches TheMealDB by ingredient, suggests corrections for unknown
//! ingredients, and keeps a per-user grocery list on disk.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use recipegen_cli::output::Status;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{catalog, grocery, random, search, show};
use context::{AppContext, SignIn};

/// Find recipes from the ingredients you have
#[derive(Parser)]
#[command(name = "recipegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Configuration file (defaults to ./recipegen.toml when present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Local profile whose grocery list is used
    #[arg(short, long, global = true, env = "RECIPEGEN_USER")]
    user: Option<String>,

    /// Bearer token issued by recipegen-server; takes precedence over --user
    #[arg(long, global = true, env = "RECIPEGEN_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find recipes that use the given ingredients
    Search {
        /// Ingredients, e.g. `chicken onion "soy sauce"`
        #[arg(required = true)]
        ingredients: Vec<String>,
    },

    /// Suggest catalog names close to a misspelled ingredient
    Suggest {
        /// The ingredient as typed
        term: String,
    },

    /// List known ingredient names
    Ingredients {
        /// Only names containing this text
        #[arg(short, long)]
        filter: Option<String>,

        /// Complete a partially typed name instead of listing
        #[arg(long, conflicts_with = "filter")]
        complete: Option<String>,

        /// Show the starter list of popular ingredients
        #[arg(long, conflicts_with_all = ["filter", "complete"])]
        popular: bool,
    },

    /// Show a few random recipes
    Random {
        /// How many recipes (defaults to search.random_count)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Show one recipe in full
    Show {
        /// Recipe id, e.g. 52772
        id: String,
    },

    /// Manage the grocery list
    Grocery {
        #[command(subcommand)]
        action: GroceryAction,
    },
}

#[derive(Subcommand)]
enum GroceryAction {
    /// Print the grocery list
    Show,

    /// Add items, grouped under a recipe or under Miscellaneous Items
    Add {
        /// Items to add (all of the recipe's ingredients with --from-recipe)
        #[arg(required_unless_present = "from_recipe")]
        items: Vec<String>,

        /// Recipe the items belong to
        #[arg(long, requires = "recipe_name")]
        recipe_id: Option<String>,

        /// Recipe name shown as the group heading
        #[arg(long, requires = "recipe_id")]
        recipe_name: Option<String>,

        /// Take id, name and ingredients from a recipe instead
        #[arg(long, conflicts_with_all = ["recipe_id", "recipe_name"])]
        from_recipe: Option<String>,
    },

    /// Remove one item from a group
    Remove {
        /// Group id (recipe id or miscellaneous-items)
        group: String,
        /// Item name
        item: String,
    },

    /// Check or uncheck one item
    Toggle {
        /// Group id (recipe id or miscellaneous-items)
        group: String,
        /// Item name
        item: String,
    },

    /// Remove every checked item
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let signin = SignIn {
        user: cli.user,
        token: cli.token,
    };
    let ctx = match AppContext::load(cli.config.as_deref(), cli.json, &signin, cli.verbose) {
        Ok(ctx) => ctx,
        Err(e) => return report(&e, cli.json),
    };

    let result = match cli.command {
        Commands::Search { ingredients } => search::run(&ctx, &ingredients).await,
        Commands::Suggest { term } => search::suggest(&ctx, &term).await,
        Commands::Ingredients {
            filter,
            complete,
            popular,
        } => {
            if popular {
                catalog::popular(&ctx)
            } else if let Some(term) = complete {
                catalog::complete(&ctx, &term).await
            } else {
                catalog::list(&ctx, filter.as_deref()).await
            }
        }
        Commands::Random { count } => random::run(&ctx, count).await,
        Commands::Show { id } => show::run(&ctx, &id).await,
        Commands::Grocery { action } => match action {
            GroceryAction::Show => grocery::show(&ctx).await,
            GroceryAction::Add {
                items,
                recipe_id,
                recipe_name,
                from_recipe,
            } => match from_recipe {
                Some(id) => grocery::add_from_recipe(&ctx, &id, &items).await,
                None => grocery::add(&ctx, &items, recipe_id.as_deref(), recipe_name.as_deref()).await,
            },
            GroceryAction::Remove { group, item } => grocery::remove(&ctx, &group, &item).await,
            GroceryAction::Toggle { group, item } => grocery::toggle(&ctx, &group, &item).await,
            GroceryAction::Clear => grocery::clear(&ctx).await,
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => report(&e, ctx.json),
    }
}

fn report(error: &anyhow::Error, json: bool) -> ExitCode {
    match error.downcast_ref::<recipegen_core::Error>() {
        Some(e) => {
            if json {
                match serde_json::to_string_pretty(&e.to_report()) {
                    Ok(report) => eprintln!("{report}"),
                    Err(_) => Status::report(e),
                }
            } else {
                Status::report(e);
            }
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
        None => {
            eprintln!("{} {error:#}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
