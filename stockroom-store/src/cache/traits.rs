//! Cache backend trait and usage statistics.
//!
//! The backend abstracts the associative container holding cached
//! records, so any concurrency-safe map or external cache service can
//! back the policy logic in [`super::cache_aside`] without changing it.

use async_trait::async_trait;
use stockroom_core::{CatalogResult, Product, ProductId};

/// Pluggable key-value cache over product ids.
///
/// Implementations must support safe concurrent get/set/delete/clear
/// from multiple callers. Each operation is atomic with respect to the
/// cache map only; no lock spans a store call and a cache call.
#[async_trait]
pub trait ProductCache: Send + Sync {
    /// Get the cached record for `id`, or None on a miss.
    async fn get(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Set the entry for `product.id`, replacing any existing entry.
    async fn set(&self, product: &Product) -> CatalogResult<()>;

    /// Remove the entry for `id` if present; a no-op when absent.
    async fn delete(&self, id: ProductId) -> CatalogResult<()>;

    /// Remove all entries unconditionally.
    async fn clear(&self) -> CatalogResult<()>;

    /// Get cache usage statistics.
    async fn stats(&self) -> CatalogResult<CacheStats>;
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of entries currently in cache.
    pub entry_count: u64,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
