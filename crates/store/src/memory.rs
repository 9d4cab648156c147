//! In-memory user store

use crate::{normalize_email, UserDocument, UserRecord, UserStore};
use async_trait::async_trait;
use recipegen_core::recipe::Recipe;
use recipegen_core::{Error, Result};
use recipegen_grocery::GroceryListRecipe;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store; everything is lost on restart
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, UserDocument>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    async fn read<T>(&self, email: &str, f: impl FnOnce(&UserDocument) -> T) -> T {
        let documents = self.documents.read().await;
        match documents.get(&normalize_email(email)) {
            Some(doc) => f(doc),
            None => f(&UserDocument::default()),
        }
    }

    async fn update<T>(&self, email: &str, f: impl FnOnce(&mut UserDocument) -> T) -> T {
        let mut documents = self.documents.write().await;
        f(documents.entry(normalize_email(email)).or_default())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(self.read(email, |doc| doc.user.clone()).await)
    }

    async fn insert_user(&self, user: UserRecord) -> Result<()> {
        let email = user.email.clone();
        self.update(&email, |doc| {
            if doc.user.is_some() {
                return Err(Error::conflict("User already exists"));
            }
            doc.user = Some(user);
            Ok(())
        })
        .await
    }

    async fn grocery_list(&self, email: &str) -> Result<Vec<GroceryListRecipe>> {
        Ok(self.read(email, |doc| doc.grocery_list.clone()).await)
    }

    async fn replace_grocery_list(&self, email: &str, list: Vec<GroceryListRecipe>) -> Result<()> {
        self.update(email, |doc| doc.grocery_list = list).await;
        Ok(())
    }

    async fn saved_recipes(&self, email: &str) -> Result<Vec<Recipe>> {
        Ok(self.read(email, |doc| doc.saved_recipes.clone()).await)
    }

    async fn save_recipe(&self, email: &str, recipe: Recipe) -> Result<bool> {
        Ok(self.update(email, |doc| doc.save_recipe(recipe)).await)
    }

    async fn remove_saved_recipe(&self, email: &str, recipe_id: &str) -> Result<bool> {
        Ok(self.update(email, |doc| doc.remove_saved_recipe(recipe_id)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::exercise_store;

    #[tokio::test]
    async fn test_memory_store_behaviour() {
        exercise_store(&MemoryStore::new()).await;
    }

    #[tokio::test]
    async fn test_reads_do_not_create_documents() {
        let store = MemoryStore::new();
        let _ = store.grocery_list("ghost@example.com").await.unwrap();
        assert!(store.documents.read().await.is_empty());
    }
}
