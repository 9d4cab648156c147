//! Lazily fetched ingredient catalog

use recipegen_core::source::RecipeSource;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Ingredient catalog, fetched on first use and reused afterwards.
///
/// A failed fetch is logged and reported as an empty catalog; nothing is
/// cached, so the next call tries again.
pub struct CatalogCache {
    source: Arc<dyn RecipeSource>,
    names: OnceCell<Arc<Vec<String>>>,
}

impl CatalogCache {
    /// Create an empty cache over `source`
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self {
            source,
            names: OnceCell::new(),
        }
    }

    /// Catalog names, lower-cased, in source order
    pub async fn names(&self) -> Arc<Vec<String>> {
        let fetched = self
            .names
            .get_or_try_init(|| async {
                let names = self.source.ingredient_catalog().await?;
                tracing::debug!(count = names.len(), "Ingredient catalog loaded");
                recipegen_telemetry::metrics().gauge(crate::CATALOG_SIZE, names.len() as u64);
                recipegen_core::Result::Ok(Arc::new(names))
            })
            .await;

        match fetched {
            Ok(names) => Arc::clone(names),
            Err(e) => {
                tracing::warn!(error = %e, "Ingredient catalog unavailable");
                Arc::new(Vec::new())
            }
        }
    }

    /// True once a fetch has succeeded
    pub fn is_loaded(&self) -> bool {
        self.names.initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeSource;

    #[tokio::test]
    async fn test_catalog_fetched_once() {
        let source = Arc::new(FakeSource::new().with_catalog(&["salt", "pepper"]));
        let cache = CatalogCache::new(source.clone());

        assert_eq!(*cache.names().await, vec!["salt", "pepper"]);
        assert_eq!(*cache.names().await, vec!["salt", "pepper"]);
        assert_eq!(source.catalog_calls(), 1);
        assert!(cache.is_loaded());
    }

    #[tokio::test]
    async fn test_failed_fetch_is_retried() {
        let source = Arc::new(FakeSource::new().with_failing_catalog());
        let cache = CatalogCache::new(source.clone());

        assert!(cache.names().await.is_empty());
        assert!(cache.names().await.is_empty());
        assert_eq!(source.catalog_calls(), 2);
        assert!(!cache.is_loaded());
    }
}
