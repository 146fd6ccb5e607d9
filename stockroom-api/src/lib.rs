//! Stockroom API - REST Layer for the Catalog Caching Demo
//!
//! This crate exposes the catalog service over HTTP with Axum. Routing
//! is thin: every handler delegates to the [`service::CatalogService`]
//! facade, which decides per operation whether the cache-aside layer is
//! engaged or the record store is hit directly.

pub mod config;
pub mod error;
pub mod macros;
pub mod openapi;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ErrorCode};
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use service::CatalogService;
pub use state::{AppState, CatalogSvc};
pub use types::*;
