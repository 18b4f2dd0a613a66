use std::env;

use business::domain::shared::fault_policy::StoreFaultPolicy;

use super::catalog_config::CatalogConfig;

pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub store_fault_policy: StoreFaultPolicy,
}

impl AppConfig {
    /// Load application configuration from environment variables
    ///
    /// Environment variables:
    /// - STORE_FAULT_POLICY: "absorb" (default) or "surface"
    pub fn from_env() -> Self {
        let store_fault_policy = env::var("STORE_FAULT_POLICY")
            .ok()
            .and_then(|raw| match raw.parse() {
                Ok(policy) => Some(policy),
                Err(err) => {
                    tracing::warn!("{err}, falling back to absorb");
                    None
                }
            })
            .unwrap_or_default();

        Self {
            catalog: CatalogConfig::from_env(),
            store_fault_policy,
        }
    }
}
