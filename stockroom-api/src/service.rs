//! Catalog Service Facade
//!
//! Exposes the full catalog API and decides, operation by operation,
//! whether the cache-aside layer is engaged. Only get-by-id, update,
//! delete, and clear-cache involve the cache; every list and search
//! operation reads the record store directly so those views are always
//! store-fresh.

use std::sync::Arc;

use stockroom_core::{CatalogResult, Product, ProductDraft, ProductId};
use stockroom_store::{CacheAside, CacheConfig, CacheStats, ProductCache, RecordStore};

/// Display name used when deleting a record that is already absent.
const UNKNOWN_PRODUCT: &str = "unknown";

/// Facade over the record store and the cache-aside layer.
pub struct CatalogService<S, C>
where
    S: RecordStore,
    C: ProductCache,
{
    store: Arc<S>,
    cache: CacheAside<S, C>,
}

impl<S, C> CatalogService<S, C>
where
    S: RecordStore,
    C: ProductCache,
{
    /// Create a new catalog service over the given store and cache backend.
    pub fn new(store: Arc<S>, cache_backend: Arc<C>, config: CacheConfig) -> Self {
        let cache = CacheAside::new(Arc::clone(&store), cache_backend, config);
        Self { store, cache }
    }

    /// Get all products. Not cached, so list views always show fresh data.
    pub async fn get_all(&self) -> CatalogResult<Vec<Product>> {
        tracing::info!("fetching all products from the record store");
        self.store.find_all().await
    }

    /// Get a product by id through the cache-aside layer.
    ///
    /// The first call for an id fetches from the store (slow) and
    /// caches the result; subsequent calls are served from the cache.
    pub async fn get_by_id(&self, id: ProductId) -> CatalogResult<Product> {
        self.cache.lookup(id).await
    }

    /// Create a new product directly in the store.
    ///
    /// The cache is not pre-populated; the first subsequent get-by-id
    /// for the new record will be a miss.
    pub async fn create(&self, draft: ProductDraft) -> CatalogResult<Product> {
        tracing::info!(name = %draft.name, "creating new product");
        self.store.insert(draft).await
    }

    /// Update a product: overwrite all mutable fields with the supplied
    /// values, persist, then synchronize the cache entry with the
    /// persisted value. The identifier is never mutated.
    pub async fn update(&self, id: ProductId, draft: ProductDraft) -> CatalogResult<Product> {
        tracing::info!(id, "updating product, store and cache will be synchronized");
        self.cache.write(id, Product::from_draft(id, draft)).await
    }

    /// Delete a product from the store, then invalidate its cache entry.
    ///
    /// The display name is resolved before the deletion for reporting;
    /// a missing record gets a placeholder name and deleting an absent
    /// id is a no-op. The cache entry is invalidated regardless of
    /// whether the store delete removed anything.
    pub async fn delete(&self, id: ProductId) -> CatalogResult<()> {
        let name = self
            .store
            .find_by_id(id)
            .await?
            .map(|p| p.name)
            .unwrap_or_else(|| UNKNOWN_PRODUCT.to_string());

        let removed = self.store.delete_by_id(id).await?;
        self.cache.invalidate(id).await?;

        tracing::info!(id, %name, removed, "product deleted and cache entry evicted");
        Ok(())
    }

    /// Remove every cache entry. The record store is untouched.
    pub async fn clear_cache(&self) -> CatalogResult<()> {
        tracing::info!("clearing all product cache entries");
        self.cache.clear().await
    }

    /// Get products in a category. Not cached.
    pub async fn by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        tracing::info!(category, "fetching products by category");
        self.store.find_by_category(category).await
    }

    /// Search products by name, case-insensitive substring. Not cached.
    pub async fn search(&self, name: &str) -> CatalogResult<Vec<Product>> {
        tracing::info!(name, "searching products by name");
        self.store.find_by_name_containing(name).await
    }

    /// Cache usage statistics.
    pub async fn cache_stats(&self) -> CatalogResult<CacheStats> {
        self.cache.stats().await
    }

    /// Number of records in the store, used by health checks and seeding.
    pub async fn record_count(&self) -> CatalogResult<u64> {
        self.store.count().await
    }
}
