//! JSON-file user store
//!
//! One document per user at `<data_dir>/<sha256(email)>.json`. Hashing keeps
//! emails out of file names. Writes go to a temp file that is renamed over
//! the document, and every read-modify-write holds one async mutex, so
//! concurrent requests in this process never interleave.

use crate::{normalize_email, UserDocument, UserRecord, UserStore};
use async_trait::async_trait;
use recipegen_core::recipe::Recipe;
use recipegen_core::{Error, ErrorCode, Result, ResultExt};
use recipegen_grocery::GroceryListRecipe;
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

/// File-backed store
pub struct FileStore {
    dir: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .map_err(|e| Error::storage(format!("Cannot create data directory {}: {e}", dir.display())))?;

        Ok(Self {
            dir,
            lock: Mutex::new(()),
        })
    }

    /// Directory holding the documents
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn document_path(&self, email: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(normalize_email(email).as_bytes());
        self.dir.join(format!("{}.json", hex::encode(hasher.finalize())))
    }

    async fn load(&self, path: &Path) -> Result<UserDocument> {
        match fs::read(path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(Error::from)
                .context(format!("Reading {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(UserDocument::default()),
            Err(e) => Err(Error::new(ErrorCode::StorageError, format!("Cannot read {}: {e}", path.display()))),
        }
    }

    async fn store(&self, path: &Path, doc: &UserDocument) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(doc)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, &bytes)
            .await
            .map_err(|e| Error::storage(format!("Cannot write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, path)
            .await
            .map_err(|e| Error::storage(format!("Cannot replace {}: {e}", path.display())))?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "User document written");
        Ok(())
    }

    async fn read<T>(&self, email: &str, f: impl FnOnce(UserDocument) -> T) -> Result<T> {
        let _guard = self.lock.lock().await;
        let doc = self.load(&self.document_path(email)).await?;
        Ok(f(doc))
    }

    async fn update<T>(&self, email: &str, f: impl FnOnce(&mut UserDocument) -> Result<T>) -> Result<T> {
        let _guard = self.lock.lock().await;
        let path = self.document_path(email);
        let mut doc = self.load(&path).await?;
        let value = f(&mut doc)?;
        self.store(&path, &doc).await?;
        Ok(value)
    }
}

#[async_trait]
impl UserStore for FileStore {
    async fn find_user(&self, email: &str) -> Result<Option<UserRecord>> {
        self.read(email, |doc| doc.user).await
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
        self.read(email, |doc| doc.grocery_list).await
    }

    async fn replace_grocery_list(&self, email: &str, list: Vec<GroceryListRecipe>) -> Result<()> {
        self.update(email, |doc| {
            doc.grocery_list = list;
            Ok(())
        })
        .await
    }

    async fn saved_recipes(&self, email: &str) -> Result<Vec<Recipe>> {
        self.read(email, |doc| doc.saved_recipes).await
    }

    async fn save_recipe(&self, email: &str, recipe: Recipe) -> Result<bool> {
        self.update(email, |doc| Ok(doc.save_recipe(recipe))).await
    }

    async fn remove_saved_recipe(&self, email: &str, recipe_id: &str) -> Result<bool> {
        self.update(email, |doc| Ok(doc.remove_saved_recipe(recipe_id))).await
    }
}
