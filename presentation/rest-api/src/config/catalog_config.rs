use std::env;
use std::time::Duration;

use persistence::catalog::cache::DEFAULT_CACHE_TTL;

/// Read cache settings for the catalog listing
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub cache_ttl: Duration,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_CACHE_TTL_SECS: Freshness window of the cached listing (default: 300)
    pub fn from_env() -> Self {
        let cache_ttl = env::var("CATALOG_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_CACHE_TTL);

        Self { cache_ttl }
    }
}
