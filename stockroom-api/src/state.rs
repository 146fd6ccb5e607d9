//! Shared application state for Axum routers.

use std::sync::Arc;
use std::time::Instant;

use stockroom_store::{InMemoryProductCache, InMemoryRecordStore};

use crate::service::CatalogService;

/// Type alias for the record store implementation used in the API.
/// A real deployment could substitute a durable store behind the same
/// trait without changing the caching policy.
pub type CatalogStore = InMemoryRecordStore;

/// Type alias for the cache backend used in the API. The cache is
/// conceptually in-process; an external cache service could back the
/// same trait as a deployment choice.
pub type CatalogCache = InMemoryProductCache;

/// Type alias for the concrete catalog service wired into routes.
pub type CatalogSvc = CatalogService<CatalogStore, CatalogCache>;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Catalog service facade; owns the cache-aside routing decisions.
    pub service: Arc<CatalogSvc>,
    /// Server start time, reported by health checks.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(service: Arc<CatalogSvc>) -> Self {
        Self {
            service,
            start_time: Instant::now(),
        }
    }
}

// Use macro to reduce boilerplate for FromRef implementations
crate::impl_from_ref!(Arc<CatalogSvc>, service);
crate::impl_from_ref!(Instant, start_time);
