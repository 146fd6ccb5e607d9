//! In-memory cache backend over a concurrent map.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use stockroom_core::{CatalogResult, Product, ProductId};

use super::traits::{CacheStats, ProductCache};

/// A cached record together with the time it entered the cache.
#[derive(Debug, Clone)]
struct CachedEntry {
    product: Product,
    cached_at: DateTime<Utc>,
}

/// [`ProductCache`] backed by a `DashMap`.
///
/// Entry operations are atomic per key; `clear` is atomic per shard.
/// Hit and miss counters are maintained for the stats endpoint.
#[derive(Default)]
pub struct InMemoryProductCache {
    entries: DashMap<ProductId, CachedEntry>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl InMemoryProductCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently cached.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl ProductCache for InMemoryProductCache {
    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        match self.entries.get(&id) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                let age = Utc::now().signed_duration_since(entry.cached_at);
                tracing::trace!(id, age_ms = age.num_milliseconds(), "cache hit");
                Ok(Some(entry.product.clone()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set(&self, product: &Product) -> CatalogResult<()> {
        self.entries.insert(
            product.id,
            CachedEntry {
                product: product.clone(),
                cached_at: Utc::now(),
            },
        );
        Ok(())
    }

    async fn delete(&self, id: ProductId) -> CatalogResult<()> {
        self.entries.remove(&id);
        Ok(())
    }

    async fn clear(&self) -> CatalogResult<()> {
        self.entries.clear();
        Ok(())
    }

    async fn stats(&self) -> CatalogResult<CacheStats> {
        Ok(CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entry_count: self.entries.len() as u64,
        })
    }
}
