//! OpenAPI Specification for the Stockroom API
//!
//! Defines the OpenAPI document generated by utoipa from Rust types
//! and route annotations.

use utoipa::OpenApi;

use crate::error::{ApiError, ErrorCode};
use crate::routes::{health, product};
use crate::types::{
    CacheStatsResponse, CreateProductRequest, MessageResponse, UpdateProductRequest,
};

use stockroom_core::Product;

/// OpenAPI document for the Stockroom API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stockroom API",
        version = "0.1.0",
        description = "Product catalog with a cache-aside read layer. \
                       Get-by-id is cached; list and search views always read the store.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local Development")
    ),
    tags(
        (name = "Products", description = "Product catalog CRUD and search"),
        (name = "Cache", description = "Cache management and statistics"),
        (name = "Health", description = "Liveness and readiness probes")
    ),
    paths(
        // === Product Routes ===
        product::get_all_products,
        product::get_product,
        product::create_product,
        product::update_product,
        product::delete_product,
        product::get_products_by_category,
        product::search_products,

        // === Cache Routes ===
        product::clear_cache,
        product::cache_stats,

        // === Health Routes ===
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(
        schemas(
            Product,
            CreateProductRequest,
            UpdateProductRequest,
            MessageResponse,
            CacheStatsResponse,
            ApiError,
            ErrorCode,
            health::HealthResponse,
            health::HealthStatus,
            health::HealthDetails,
            health::ComponentHealth,
        )
    )
)]
pub struct ApiDoc;
