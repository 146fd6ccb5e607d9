//! API Configuration Module
//!
//! Configuration is loaded from environment variables with sensible
//! defaults for development.

use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{ApiError, ApiResult};

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// Server, cache, and seeding configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind the HTTP listener to.
    pub bind_host: String,

    /// Port to bind the HTTP listener to.
    pub port: u16,

    /// Simulated store latency on a cache miss.
    pub miss_delay: Duration,

    /// Whether to seed sample data into an empty store at startup.
    pub seed_enabled: bool,

    /// Number of sample products to seed.
    pub seed_count: usize,

    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".to_string(),
            port: 8080,
            miss_delay: Duration::from_secs(2),
            seed_enabled: true,
            seed_count: 500,
            cors_origins: Vec::new(), // Empty = allow all
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `STOCKROOM_BIND`: Bind host (default: 0.0.0.0)
    /// - `PORT` / `STOCKROOM_PORT`: Listen port (default: 8080)
    /// - `STOCKROOM_MISS_DELAY_MS`: Simulated miss latency in ms (default: 2000)
    /// - `STOCKROOM_SEED`: "true" or "false" (default: true)
    /// - `STOCKROOM_SEED_COUNT`: Number of sample products (default: 500)
    /// - `STOCKROOM_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_host =
            std::env::var("STOCKROOM_BIND").unwrap_or(defaults.bind_host);

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("STOCKROOM_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);

        let miss_delay = std::env::var("STOCKROOM_MISS_DELAY_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.miss_delay);

        let seed_enabled = std::env::var("STOCKROOM_SEED")
            .ok()
            .map(|s| s.to_lowercase() != "false")
            .unwrap_or(defaults.seed_enabled);

        let seed_count = std::env::var("STOCKROOM_SEED_COUNT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed_count);

        let cors_origins = std::env::var("STOCKROOM_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_host,
            port,
            miss_delay,
            seed_enabled,
            seed_count,
            cors_origins,
        }
    }

    /// Resolve the socket address to bind.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>().map_err(|e| {
            ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e))
        })
    }
}
