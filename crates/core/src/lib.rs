//! Core types for recipegen
//!
//! This crate provides shared functionality used across the recipegen workspace:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with environment overrides
//! - **Validation**: Fluent validation of user input
//! - **Recipe model**: Ingredient tokens, recipes, stubs, and suggestions
//! - **Recipe source**: The trait every recipe database client implements
//!
//! # Example
//!
//! ```rust,no_run
//! use recipegen_core::{config::Config, recipe::IngredientName};
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("Serving on {}", config.schema.server.bind);
//!
//! let token = IngredientName::parse("  Chicken Breast ").expect("blank ingredient");
//! assert_eq!(token.as_str(), "chicken breast");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod recipe;
pub mod source;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
    pub use crate::recipe::{IngredientName, Recipe, RecipeStub, SearchOutcome, Suggestion};
    pub use crate::source::RecipeSource;
    pub use crate::validation::{ValidationResult, Validator};
}
