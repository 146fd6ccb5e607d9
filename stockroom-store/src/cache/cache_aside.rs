//! Cache-aside policy over a record store and a cache backend.

use std::sync::Arc;
use std::time::{Duration, Instant};

use stockroom_core::{CatalogError, CatalogResult, Product, ProductId};

use super::traits::{CacheStats, ProductCache};
use crate::RecordStore;

/// Configuration for the cache-aside layer.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Artificial delay added to the store fetch on a cache miss, so
    /// hit and miss latencies are observably different. Tests shrink
    /// this; production-like runs keep the multi-second default.
    pub miss_delay: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            miss_delay: Duration::from_secs(2),
        }
    }
}

impl CacheConfig {
    /// Create a new cache config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated miss delay.
    pub fn with_miss_delay(mut self, delay: Duration) -> Self {
        self.miss_delay = delay;
        self
    }
}

/// Cache-aside layer mediating single-record lookups, updates, and
/// deletes between callers and the record store.
///
/// # Type Parameters
///
/// - `S`: The record store fetched from on cache miss
/// - `C`: The cache backend holding `id -> Product` entries
///
/// Consistency: per id, the last cache write before an observation
/// determines what same-id lookups see. Two concurrent lookups for the
/// same uncached id may both miss and both fetch; the last writer's
/// value wins on the entry. That race is accepted - absent a concurrent
/// update both fetches return the same value.
pub struct CacheAside<S, C>
where
    S: RecordStore,
    C: ProductCache,
{
    store: Arc<S>,
    cache: Arc<C>,
    config: CacheConfig,
}

impl<S, C> CacheAside<S, C>
where
    S: RecordStore,
    C: ProductCache,
{
    /// Create a new cache-aside layer.
    pub fn new(store: Arc<S>, cache: Arc<C>, config: CacheConfig) -> Self {
        Self {
            store,
            cache,
            config,
        }
    }

    /// Create a new cache-aside layer with default configuration.
    pub fn with_defaults(store: Arc<S>, cache: Arc<C>) -> Self {
        Self::new(store, cache, CacheConfig::default())
    }

    /// Get the cache configuration.
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Get a reference to the cache backend.
    pub fn backend(&self) -> &C {
        &self.cache
    }

    /// Look up a record by id, cache first.
    ///
    /// On a hit the cached value is returned without any store
    /// involvement. On a miss the store fetch incurs the configured
    /// delay; a found record populates the cache entry before being
    /// returned, a missing record reports `NotFound` without
    /// populating, and a store failure propagates without touching
    /// the cache.
    pub async fn lookup(&self, id: ProductId) -> CatalogResult<Product> {
        if let Some(product) = self.cache.get(id).await? {
            tracing::debug!(id, "cache hit, serving from cache");
            return Ok(product);
        }

        tracing::info!(id, "cache miss, fetching from record store");
        let start = Instant::now();
        tokio::time::sleep(self.config.miss_delay).await;

        let product = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(id))?;

        self.cache.set(&product).await?;
        tracing::info!(
            id,
            name = %product.name,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "fetched from store, cache entry populated"
        );
        Ok(product)
    }

    /// Persist `product` under `id`, then replace the cache entry with
    /// the persisted value.
    ///
    /// Fails with `NotFound` if the store has no record for `id`. The
    /// cache receives the value the store returned, not the raw input,
    /// so store-side normalization is reflected. A failed store write
    /// leaves the cache entry untouched.
    pub async fn write(&self, id: ProductId, product: Product) -> CatalogResult<Product> {
        if self.store.find_by_id(id).await?.is_none() {
            return Err(CatalogError::not_found(id));
        }

        let persisted = self.store.save(product).await?;
        self.cache.set(&persisted).await?;
        tracing::info!(id, name = %persisted.name, "store updated, cache entry replaced");
        Ok(persisted)
    }

    /// Remove the cache entry for `id`; a no-op if absent. Called after
    /// a delete has completed against the store.
    pub async fn invalidate(&self, id: ProductId) -> CatalogResult<()> {
        self.cache.delete(id).await?;
        tracing::info!(id, "cache entry invalidated");
        Ok(())
    }

    /// Remove all cache entries. Does not touch the record store.
    pub async fn clear(&self) -> CatalogResult<()> {
        self.cache.clear().await?;
        tracing::info!("cache cleared");
        Ok(())
    }

    /// Get cache usage statistics from the backend.
    pub async fn stats(&self) -> CatalogResult<CacheStats> {
        self.cache.stats().await
    }
}

impl<S, C> Clone for CacheAside<S, C>
where
    S: RecordStore,
    C: ProductCache,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::InMemoryProductCache;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::RwLock;
    use stockroom_core::{Price, ProductDraft};

    // Mock record store that counts fetches and can be made to fail
    #[derive(Default)]
    struct MockRecordStore {
        products: RwLock<HashMap<ProductId, Product>>,
        fetch_count: AtomicUsize,
        fail: AtomicBool,
    }

    impl MockRecordStore {
        fn new() -> Self {
            Self::default()
        }

        fn put(&self, product: Product) {
            self.products
                .write()
                .unwrap()
                .insert(product.id, product);
        }

        fn remove(&self, id: ProductId) {
            self.products.write().unwrap().remove(&id);
        }

        fn fetches(&self) -> usize {
            self.fetch_count.load(Ordering::SeqCst)
        }

        fn set_failing(&self, failing: bool) {
            self.fail.store(failing, Ordering::SeqCst);
        }

        fn check_available(&self) -> CatalogResult<()> {
            if self.fail.load(Ordering::SeqCst) {
                Err(CatalogError::store_unavailable("injected failure"))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl RecordStore for MockRecordStore {
        async fn find_all(&self) -> CatalogResult<Vec<Product>> {
            self.check_available()?;
            Ok(self.products.read().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            self.check_available()?;
            Ok(self.products.read().unwrap().get(&id).cloned())
        }

        async fn insert(&self, draft: ProductDraft) -> CatalogResult<Product> {
            self.check_available()?;
            let id = self.products.read().unwrap().len() as i64 + 1;
            let product = Product::from_draft(id, draft);
            self.put(product.clone());
            Ok(product)
        }

        async fn save(&self, product: Product) -> CatalogResult<Product> {
            self.check_available()?;
            self.put(product.clone());
            Ok(product)
        }

        async fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool> {
            self.check_available()?;
            Ok(self.products.write().unwrap().remove(&id).is_some())
        }

        async fn find_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
            self.check_available()?;
            Ok(self
                .products
                .read()
                .unwrap()
                .values()
                .filter(|p| p.category == category)
                .cloned()
                .collect())
        }

        async fn find_by_name_containing(&self, fragment: &str) -> CatalogResult<Vec<Product>> {
            self.check_available()?;
            let needle = fragment.to_lowercase();
            Ok(self
                .products
                .read()
                .unwrap()
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn count(&self) -> CatalogResult<u64> {
            self.check_available()?;
            Ok(self.products.read().unwrap().len() as u64)
        }
    }

    fn make_product(id: ProductId, name: &str, cents: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            description: None,
            price: Price::from_cents(cents).unwrap(),
            category: "Electronics".to_string(),
            stock_quantity: 5,
        }
    }

    fn make_layer(
        store: Arc<MockRecordStore>,
        miss_delay: Duration,
    ) -> CacheAside<MockRecordStore, InMemoryProductCache> {
        CacheAside::new(
            store,
            Arc::new(InMemoryProductCache::new()),
            CacheConfig::new().with_miss_delay(miss_delay),
        )
    }

    #[tokio::test]
    async fn test_miss_populates_then_hit_skips_store() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        let first = layer.lookup(1).await.unwrap();
        assert_eq!(first.name, "Widget");
        assert_eq!(store.fetches(), 1);

        // Second lookup is served from the cache without a store fetch
        let second = layer.lookup(1).await.unwrap();
        assert_eq!(second, first);
        assert_eq!(store.fetches(), 1);
    }

    #[tokio::test]
    async fn test_not_found_does_not_populate() {
        let store = Arc::new(MockRecordStore::new());
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        let err = layer.lookup(1).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(layer.stats().await.unwrap().entry_count, 0);

        // Once the store has the record, the next lookup is a fresh miss
        store.put(make_product(1, "Widget", 999));
        assert!(layer.lookup(1).await.is_ok());
        assert_eq!(store.fetches(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_does_not_populate() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        store.set_failing(true);
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        let err = layer.lookup(1).await.unwrap_err();
        assert!(matches!(err, CatalogError::StoreUnavailable { .. }));
        assert_eq!(layer.stats().await.unwrap().entry_count, 0);

        // Recovery: a later lookup fetches and populates normally
        store.set_failing(false);
        assert!(layer.lookup(1).await.is_ok());
        assert_eq!(layer.stats().await.unwrap().entry_count, 1);
    }

    #[tokio::test]
    async fn test_cold_and_warm_lookup_timing() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::from_millis(100));

        let start = Instant::now();
        layer.lookup(1).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));

        let start = Instant::now();
        layer.lookup(1).await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_write_replaces_cache_entry() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::from_millis(100));

        layer.lookup(1).await.unwrap();

        let updated = layer
            .write(1, make_product(1, "Widget v2", 1249))
            .await
            .unwrap();
        assert_eq!(updated.name, "Widget v2");

        // Subsequent lookup sees the new value as a warm hit
        let fetches_before = store.fetches();
        let start = Instant::now();
        let cached = layer.lookup(1).await.unwrap();
        assert_eq!(cached.name, "Widget v2");
        assert_eq!(cached.price, Price::from_cents(1249).unwrap());
        assert_eq!(store.fetches(), fetches_before);
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_write_missing_target_is_not_found() {
        let store = Arc::new(MockRecordStore::new());
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        let err = layer
            .write(7, make_product(7, "Ghost", 100))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(layer.stats().await.unwrap().entry_count, 0);
    }

    #[tokio::test]
    async fn test_write_failure_leaves_entry_untouched() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        layer.lookup(1).await.unwrap();
        store.set_failing(true);

        let err = layer
            .write(1, make_product(1, "Widget v2", 1249))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::StoreUnavailable { .. }));

        store.set_failing(false);
        let cached = layer.lookup(1).await.unwrap();
        assert_eq!(cached.name, "Widget");
    }

    #[tokio::test]
    async fn test_invalidate_then_lookup_is_fresh_miss() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        layer.lookup(1).await.unwrap();
        store.remove(1);
        layer.invalidate(1).await.unwrap();

        // Fresh miss against a store that no longer has the record
        let err = layer.lookup(1).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_clear_forces_fresh_misses_without_touching_store() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        store.put(make_product(2, "Gadget", 1500));
        let layer = make_layer(Arc::clone(&store), Duration::ZERO);

        layer.lookup(1).await.unwrap();
        layer.lookup(2).await.unwrap();
        assert_eq!(store.fetches(), 2);

        layer.clear().await.unwrap();
        assert_eq!(layer.stats().await.unwrap().entry_count, 0);
        // The store still holds both records
        assert_eq!(store.count().await.unwrap(), 2);

        layer.lookup(1).await.unwrap();
        layer.lookup(2).await.unwrap();
        assert_eq!(store.fetches(), 4);
    }

    #[tokio::test]
    async fn test_concurrent_misses_last_write_wins() {
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::from_millis(10));

        let (a, b) = tokio::join!(layer.lookup(1), layer.lookup(1));
        let a = a.unwrap();
        let b = b.unwrap();
        assert_eq!(a, b);

        // Both fetches may have run, but exactly one entry remains
        let stats = layer.stats().await.unwrap();
        assert_eq!(stats.entry_count, 1);
    }

    #[tokio::test]
    async fn test_example_scenario() {
        // store has id=1 -> Widget @ 9.99, stock 5
        let store = Arc::new(MockRecordStore::new());
        store.put(make_product(1, "Widget", 999));
        let layer = make_layer(Arc::clone(&store), Duration::from_millis(100));

        // cold lookup: slow, populates
        let start = Instant::now();
        let widget = layer.lookup(1).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(100));
        assert_eq!(widget.name, "Widget");

        // warm lookup: fast, identical
        let start = Instant::now();
        assert_eq!(layer.lookup(1).await.unwrap(), widget);
        assert!(start.elapsed() < Duration::from_millis(50));

        // update: store and cache both move to v2
        layer
            .write(1, make_product(1, "Widget v2", 1249))
            .await
            .unwrap();
        let start = Instant::now();
        let v2 = layer.lookup(1).await.unwrap();
        assert_eq!(v2.name, "Widget v2");
        assert_eq!(v2.price, Price::from_cents(1249).unwrap());
        assert!(start.elapsed() < Duration::from_millis(50));

        // delete: store emptied, entry invalidated, lookup is NotFound
        store.remove(1);
        layer.invalidate(1).await.unwrap();
        assert!(layer.lookup(1).await.unwrap_err().is_not_found());
    }
}
