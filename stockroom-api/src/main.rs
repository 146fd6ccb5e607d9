//! Stockroom API Server Entry Point
//!
//! Bootstraps configuration, seeds sample data into an empty store, and
//! starts the Axum HTTP server.

use std::sync::Arc;

use axum::Router;
use stockroom_api::telemetry::init_tracing;
use stockroom_api::{create_api_router, seed, ApiConfig, ApiError, ApiResult, AppState, CatalogService};
use stockroom_store::{CacheConfig, InMemoryProductCache, InMemoryRecordStore};

#[tokio::main]
async fn main() -> ApiResult<()> {
    init_tracing();

    let config = ApiConfig::from_env();

    let store = Arc::new(InMemoryRecordStore::new());
    let cache = Arc::new(InMemoryProductCache::new());

    if config.seed_enabled {
        let seeded = seed::seed_store(store.as_ref(), config.seed_count).await?;
        if seeded > 0 {
            tracing::info!(seeded, "sample catalog ready");
        }
    }

    let cache_config = CacheConfig::new().with_miss_delay(config.miss_delay);
    let service = CatalogService::new(store, cache, cache_config);
    let state = AppState::new(Arc::new(service));

    let app: Router = create_api_router(state, &config);

    let addr = config.bind_addr()?;
    tracing::info!(%addr, miss_delay_ms = config.miss_delay.as_millis() as u64, "Starting Stockroom API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
