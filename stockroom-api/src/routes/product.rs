//! Product REST API Routes
//!
//! Axum route handlers for catalog operations. Each handler delegates
//! to the catalog service facade, which owns the decision of whether
//! the cache-aside layer is engaged.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;

use stockroom_core::{Product, ProductId};

use crate::{
    error::{ApiError, ApiResult},
    state::{AppState, CatalogSvc},
    types::{
        CacheStatsResponse, CreateProductRequest, MessageResponse, SearchParams,
        UpdateProductRequest,
    },
};

/// Reject blank product names before touching the store.
fn validate_name(name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::missing_field("name"));
    }
    Ok(())
}

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/products - List all products (never cached)
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products, store-fresh", body = Vec<Product>),
    )
)]
pub async fn get_all_products(
    State(service): State<Arc<CatalogSvc>>,
) -> ApiResult<impl IntoResponse> {
    let products = service.get_all().await?;
    Ok(Json(products))
}

/// GET /api/products/{id} - Get product by id (cached)
///
/// The first request for an id fetches from the record store (slow) and
/// populates the cache; subsequent requests are served from the cache.
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = ApiError),
    )
)]
pub async fn get_product(
    State(service): State<Arc<CatalogSvc>>,
    Path(id): Path<ProductId>,
) -> ApiResult<impl IntoResponse> {
    let start = Instant::now();
    let product = service.get_by_id(id).await?;
    tracing::info!(
        id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "get-by-id served"
    );
    Ok(Json(product))
}

/// POST /api/products - Create a new product
#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid request", body = ApiError),
    )
)]
pub async fn create_product(
    State(service): State<Arc<CatalogSvc>>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_name(&req.name)?;

    let product = service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id} - Update a product (updates cache)
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid request", body = ApiError),
        (status = 404, description = "Product not found", body = ApiError),
    )
)]
pub async fn update_product(
    State(service): State<Arc<CatalogSvc>>,
    Path(id): Path<ProductId>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_name(&req.name)?;

    let product = service.update(id, req.into()).await?;
    Ok(Json(product))
}

/// DELETE /api/products/{id} - Delete a product (evicts cache entry)
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
    )
)]
pub async fn delete_product(
    State(service): State<Arc<CatalogSvc>>,
    Path(id): Path<ProductId>,
) -> ApiResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/products/cache/clear - Clear all cache entries
#[utoipa::path(
    post,
    path = "/api/products/cache/clear",
    tag = "Cache",
    responses(
        (status = 200, description = "Cache cleared", body = MessageResponse),
    )
)]
pub async fn clear_cache(
    State(service): State<Arc<CatalogSvc>>,
) -> ApiResult<impl IntoResponse> {
    service.clear_cache().await?;
    Ok(Json(MessageResponse::new("Cache cleared successfully")))
}

/// GET /api/products/cache/stats - Cache usage statistics
#[utoipa::path(
    get,
    path = "/api/products/cache/stats",
    tag = "Cache",
    responses(
        (status = 200, description = "Cache statistics", body = CacheStatsResponse),
    )
)]
pub async fn cache_stats(
    State(service): State<Arc<CatalogSvc>>,
) -> ApiResult<impl IntoResponse> {
    let stats = service.cache_stats().await?;
    Ok(Json(CacheStatsResponse::from(stats)))
}

/// GET /api/products/category/{category} - Products in a category (never cached)
#[utoipa::path(
    get,
    path = "/api/products/category/{category}",
    tag = "Products",
    params(
        ("category" = String, Path, description = "Product category")
    ),
    responses(
        (status = 200, description = "Products in the category", body = Vec<Product>),
    )
)]
pub async fn get_products_by_category(
    State(service): State<Arc<CatalogSvc>>,
    Path(category): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let products = service.by_category(&category).await?;
    Ok(Json(products))
}

/// GET /api/products/search?name= - Search by name (never cached)
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = "Products",
    params(
        ("name" = String, Query, description = "Case-insensitive name fragment")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
    )
)]
pub async fn search_products(
    State(service): State<Arc<CatalogSvc>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<impl IntoResponse> {
    let products = service.search(&params.name).await?;
    Ok(Json(products))
}

// ============================================================================
// ROUTER
// ============================================================================

/// Create the product router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/products", get(get_all_products).post(create_product))
        .route("/api/products/search", get(search_products))
        .route("/api/products/cache/clear", post(clear_cache))
        .route("/api/products/cache/stats", get(cache_stats))
        .route(
            "/api/products/category/:category",
            get(get_products_by_category),
        )
        .route(
            "/api/products/:id",
            get(get_product)
                .put(update_product)
                .delete(delete_product),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_rejects_blank() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("Widget").is_ok());
    }
}
