//! Request and response types for the product API.

use serde::{Deserialize, Serialize};
use stockroom_core::{Price, ProductDraft};
use stockroom_store::CacheStats;

// ============================================================================
// REQUEST TYPES
// ============================================================================

/// Body for POST /api/products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = f64, minimum = 0.0)]
    pub price: Price,
    pub category: String,
    pub stock_quantity: u32,
}

/// Body for PUT /api/products/{id}. All mutable fields are supplied and
/// overwrite the stored record; the identifier is never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: Option<String>,
    #[schema(value_type = f64, minimum = 0.0)]
    pub price: Price,
    pub category: String,
    pub stock_quantity: u32,
}

impl From<CreateProductRequest> for ProductDraft {
    fn from(req: CreateProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            stock_quantity: req.stock_quantity,
        }
    }
}

impl From<UpdateProductRequest> for ProductDraft {
    fn from(req: UpdateProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            description: req.description,
            price: req.price,
            category: req.category,
            stock_quantity: req.stock_quantity,
        }
    }
}

/// Query parameters for GET /api/products/search.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct SearchParams {
    /// Case-insensitive name fragment to search for.
    pub name: String,
}

// ============================================================================
// RESPONSE TYPES
// ============================================================================

/// Simple message response for operations without a payload.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Cache usage statistics response.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CacheStatsResponse {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Number of entries currently in cache.
    pub entry_count: u64,
    /// Hit rate between 0.0 and 1.0.
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            entry_count: stats.entry_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserializes_price() {
        let json = r#"{
            "name": "Widget",
            "description": null,
            "price": 9.99,
            "category": "Electronics",
            "stock_quantity": 5
        }"#;

        let req: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.price, Price::from_cents(999).unwrap());

        let draft: ProductDraft = req.into();
        assert_eq!(draft.name, "Widget");
    }

    #[test]
    fn test_create_request_rejects_negative_price() {
        let json = r#"{
            "name": "Widget",
            "description": null,
            "price": -1.0,
            "category": "Electronics",
            "stock_quantity": 5
        }"#;

        let result: Result<CreateProductRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_cache_stats_response_from_stats() {
        let response: CacheStatsResponse = CacheStats {
            hits: 3,
            misses: 1,
            entry_count: 2,
        }
        .into();

        assert_eq!(response.hits, 3);
        assert_eq!(response.misses, 1);
        assert_eq!(response.entry_count, 2);
        assert!((response.hit_rate - 0.75).abs() < 0.001);
    }
}
