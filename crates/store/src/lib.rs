//! Per-user document persistence for recipegen
//!
//! Each user owns one document holding their account, grocery list and saved
//! recipes, keyed by (normalized) email. Two backends:
//!
//! - [`MemoryStore`]: process-local, for tests and throwaway servers
//! - [`FileStore`]: one JSON file per user under a data directory
//!
//! Writes are "last write wins"; there is no optimistic concurrency.
//!
//! # Example
//!
//! ```rust
//! use recipegen_grocery::add_items;
//! use recipegen_store::{MemoryStore, UserStore};
//!
//! #[tokio::main]
//! async fn main() -> recipegen_core::Result<()> {
//!     let store = MemoryStore::new();
//!     let list = add_items(&store.grocery_list("cook@example.com").await?, &["flour"], None);
//!     store.replace_grocery_list("cook@example.com", list).await?;
//!     assert_eq!(store.grocery_list("Cook@Example.com").await?.len(), 1);
//!     Ok(())
//! }
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recipegen_core::config::{StorageBackend, StorageConfig};
use recipegen_core::recipe::Recipe;
use recipegen_core::Result;
use recipegen_grocery::GroceryListRecipe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How an account signs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// Email and bcrypt-hashed password
    #[default]
    Password,
    /// Google OAuth
    Google,
}

/// A user account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Normalized email, the account key
    pub email: String,
    /// bcrypt hash, absent for OAuth-only accounts
    #[serde(default)]
    pub password_hash: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Avatar URL
    #[serde(default)]
    pub picture: Option<String>,
    /// Sign-in method the account was created with
    #[serde(default)]
    pub provider: AuthProvider,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Account that signs in with a password
    pub fn with_password(email: &str, password_hash: impl Into<String>) -> Self {
        Self {
            email: normalize_email(email),
            password_hash: Some(password_hash.into()),
            name: None,
            picture: None,
            provider: AuthProvider::Password,
            created_at: Utc::now(),
        }
    }

    /// Account created by Google sign-in
    pub fn from_google(email: &str, name: Option<String>, picture: Option<String>) -> Self {
        Self {
            email: normalize_email(email),
            password_hash: None,
            name,
            picture,
            provider: AuthProvider::Google,
            created_at: Utc::now(),
        }
    }
}

/// Everything stored for one email
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    /// Account, absent until sign-up (grocery data may exist without one)
    #[serde(default)]
    pub user: Option<UserRecord>,
    /// Grocery list groups
    #[serde(default)]
    pub grocery_list: Vec<GroceryListRecipe>,
    /// Saved recipes, unique by id
    #[serde(default)]
    pub saved_recipes: Vec<Recipe>,
}

impl UserDocument {
    /// Add a recipe unless one with the same id is saved; true if added
    pub fn save_recipe(&mut self, recipe: Recipe) -> bool {
        if self.saved_recipes.iter().any(|saved| saved.id == recipe.id) {
            return false;
        }
        self.saved_recipes.push(recipe);
        true
    }

    /// Remove a saved recipe by id; true if one was removed
    pub fn remove_saved_recipe(&mut self, id: &str) -> bool {
        let before = self.saved_recipes.len();
        self.saved_recipes.retain(|saved| saved.id != id);
        self.saved_recipes.len() != before
    }
}

/// Persistence for user documents
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Account for `email`, if one exists
    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Create an account; fails with a conflict if the email is taken
    async fn insert_user(&self, user: UserRecord) -> Result<()>;

    /// Grocery list for `email`, empty when nothing is stored
    async fn grocery_list(&self, email: &str) -> Result<Vec<GroceryListRecipe>>;

    /// Replace the whole grocery list (upsert)
    async fn replace_grocery_list(&self, email: &str, list: Vec<GroceryListRecipe>) -> Result<()>;

    /// Saved recipes for `email`, in save order
    async fn saved_recipes(&self, email: &str) -> Result<Vec<Recipe>>;

    /// Save a recipe unless already saved; true if newly added
    async fn save_recipe(&self, email: &str, recipe: Recipe) -> Result<bool>;

    /// Remove a saved recipe; true if it was saved
    async fn remove_saved_recipe(&self, email: &str, recipe_id: &str) -> Result<bool>;
}

/// Lower-case and trim an email so lookups ignore case
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Open the backend selected by the storage configuration
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn UserStore>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("Using in-memory user store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File => {
            let dir = config.resolved_data_dir();
            tracing::info!(dir = %dir.display(), "Using file user store");
            Ok(Arc::new(FileStore::open(dir)?))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn recipe(id: &str, title: &str) -> Recipe {
        Recipe {
            id: id.to_string(),
            title: title.to_string(),
            image: String::new(),
            ingredients: vec![],
            ingredient_lines: vec![],
            instructions: String::new(),
            category: None,
            area: None,
            source_url: None,
            matched_ingredients: vec![],
        }
    }

    /// Behaviour every backend must share
    pub async fn exercise_store(store: &dyn UserStore) {
        let email = "Cook@Example.com";

        assert!(store.find_user(email).await.unwrap().is_none());
        store
            .insert_user(UserRecord::with_password(email, "$2b$hash"))
            .await
            .unwrap();
        let user = store.find_user("cook@example.com").await.unwrap().unwrap();
        assert_eq!(user.email, "cook@example.com");
        assert_eq!(user.provider, AuthProvider::Password);

        let err = store
            .insert_user(UserRecord::with_password(email, "$2b$other"))
            .await
            .unwrap_err();
        assert_eq!(err.code, recipegen_core::ErrorCode::Conflict);

        assert!(store.grocery_list(email).await.unwrap().is_empty());
        let list = recipegen_grocery::add_items(&[], &["flour"], None);
        store.replace_grocery_list(email, list.clone()).await.unwrap();
        assert_eq!(store.grocery_list(email).await.unwrap(), list);

        assert!(store.save_recipe(email, recipe("52772", "Teriyaki")).await.unwrap());
        assert!(!store.save_recipe(email, recipe("52772", "Teriyaki")).await.unwrap());
        assert!(store.save_recipe(email, recipe("52940", "Stew")).await.unwrap());
        let saved = store.saved_recipes(email).await.unwrap();
        assert_eq!(saved.len(), 2);
        assert_eq!(saved[0].id, "52772");

        assert!(store.remove_saved_recipe(email, "52772").await.unwrap());
        assert!(!store.remove_saved_recipe(email, "52772").await.unwrap());
        assert_eq!(store.saved_recipes(email).await.unwrap().len(), 1);

        // the account survives grocery and saved-recipe writes
        assert!(store.find_user(email).await.unwrap().is_some());
    }
}
