//! Cache-aside layer for single-record lookups.
//!
//! This module implements the caching policy that fronts the record
//! store: what gets cached, under what key, and when entries are
//! populated, replaced, or removed.
//!
//! # Policy
//!
//! Only get-by-id lookups are cached, keyed by the record id alone.
//! List and search operations bypass the cache entirely, so invalidation
//! stays trivially precise: every mutation of a given id has exactly one
//! cache key to update or remove.
//!
//! The cache is never a source of truth. An entry is either absent or
//! holds the last store state observed by a synchronizing operation
//! (populate on miss, replace on update, remove on delete or clear).
//! A cache hit is trusted without re-validating against the store.
//!
//! # Example
//!
//! ```ignore
//! let cache_aside = CacheAside::new(store, cache, CacheConfig::default());
//!
//! // Cold lookup: fetches from the store (slow), populates the cache
//! let product = cache_aside.lookup(1).await?;
//!
//! // Warm lookup: served from the cache, no store involvement
//! let product = cache_aside.lookup(1).await?;
//! ```

pub mod cache_aside;
pub mod memory;
pub mod traits;

pub use cache_aside::{CacheAside, CacheConfig};
pub use memory::InMemoryProductCache;
pub use traits::{CacheStats, ProductCache};
