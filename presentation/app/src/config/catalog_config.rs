use std::env;

use catalog::client::DEFAULT_BASE_URL;

/// Remote catalog endpoint configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - CATALOG_BASE_URL: Base URL of the store API (default: fakestoreapi.com)
    pub fn from_env() -> Self {
        let base_url =
            env::var("CATALOG_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self { base_url }
    }
}
