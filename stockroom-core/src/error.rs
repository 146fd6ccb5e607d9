//! Error types for catalog operations

use crate::ProductId;
use thiserror::Error;

/// Errors raised by the record store and the cache-aside layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product not found with id: {id}")]
    NotFound { id: ProductId },

    #[error("Record store unavailable: {reason}")]
    StoreUnavailable { reason: String },

    #[error("Store lock poisoned")]
    LockPoisoned,
}

impl CatalogError {
    /// Create a NotFound error for the given id.
    pub fn not_found(id: ProductId) -> Self {
        CatalogError::NotFound { id }
    }

    /// Create a StoreUnavailable error.
    pub fn store_unavailable(reason: impl Into<String>) -> Self {
        CatalogError::StoreUnavailable {
            reason: reason.into(),
        }
    }

    /// Whether this error is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// TESTS
// =============================================================================
