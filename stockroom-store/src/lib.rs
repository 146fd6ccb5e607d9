//! Stockroom Store - Record Store Trait and In-Memory Implementation
//!
//! Defines the record store abstraction the catalog service persists
//! through, an in-memory reference implementation, and the cache-aside
//! layer that fronts single-record lookups.

pub mod cache;

// Re-export cache types for API integration
pub use cache::{
    CacheAside, CacheConfig, CacheStats, InMemoryProductCache, ProductCache,
};

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use stockroom_core::{CatalogError, CatalogResult, Product, ProductDraft, ProductId};

// ============================================================================
// RECORD STORE TRAIT
// ============================================================================

/// Authoritative storage for catalog records, keyed by numeric id.
///
/// The store is the source of truth; the cache-aside layer in [`cache`]
/// is a performance optimization layered on top of `find_by_id` and
/// `save`. Implementations must be safe for concurrent callers.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch every record.
    async fn find_all(&self) -> CatalogResult<Vec<Product>>;

    /// Fetch a single record by id.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Insert a new record, assigning its id. Returns the persisted record.
    async fn insert(&self, draft: ProductDraft) -> CatalogResult<Product>;

    /// Overwrite the record stored under `product.id` (insert if absent).
    /// Returns the persisted value.
    async fn save(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a record by id. Returns whether a record was removed;
    /// deleting an absent id is a no-op, not an error.
    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool>;

    /// Fetch all records in the given category (exact match).
    async fn find_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Fetch all records whose name contains `fragment`, case-insensitive.
    async fn find_by_name_containing(&self, fragment: &str) -> CatalogResult<Vec<Product>>;

    /// Number of records currently stored.
    async fn count(&self) -> CatalogResult<u64>;
}

// ============================================================================
// IN-MEMORY RECORD STORE
// ============================================================================

/// In-memory [`RecordStore`] backed by a guarded hash map.
///
/// Ids are assigned from an atomic sequence starting at 1. Results of
/// list operations are returned in id order so output is deterministic.
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<ProductId, Product>>,
    next_id: AtomicI64,
}

impl InMemoryRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn sorted(mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by_key(|p| p.id);
        products
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find_all(&self) -> CatalogResult<Vec<Product>> {
        let records = self.records.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(Self::sorted(records.values().cloned().collect()))
    }

    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        let records = self.records.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(records.get(&id).cloned())
    }

    async fn insert(&self, draft: ProductDraft) -> CatalogResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::from_draft(id, draft);
        let mut records = self.records.write().map_err(|_| CatalogError::LockPoisoned)?;
        records.insert(id, product.clone());
        Ok(product)
    }

    async fn save(&self, product: Product) -> CatalogResult<Product> {
        let mut records = self.records.write().map_err(|_| CatalogError::LockPoisoned)?;
        records.insert(product.id, product.clone());
        Ok(product)
    }

    async fn delete_by_id(&self, id: ProductId) -> CatalogResult<bool> {
        let mut records = self.records.write().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(records.remove(&id).is_some())
    }

    async fn find_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let records = self.records.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(Self::sorted(
            records
                .values()
                .filter(|p| p.category == category)
                .cloned()
                .collect(),
        ))
    }

    async fn find_by_name_containing(&self, fragment: &str) -> CatalogResult<Vec<Product>> {
        let needle = fragment.to_lowercase();
        let records = self.records.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(Self::sorted(
            records
                .values()
                .filter(|p| p.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        ))
    }

    async fn count(&self) -> CatalogResult<u64> {
        let records = self.records.read().map_err(|_| CatalogError::LockPoisoned)?;
        Ok(records.len() as u64)
    }
}
