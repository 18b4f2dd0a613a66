use async_trait::async_trait;

use super::errors::CatalogError;
use super::model::Product;

/// Read-only port to the remote catalog. Every call is a fresh round-trip:
/// no retry, no caching, no pagination.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// `Ok(None)` means the server answered with no body for this id, which
    /// is distinct from a transport or decode failure.
    async fn get_single_product(&self, product_id: i64) -> Result<Option<Product>, CatalogError>;

    async fn get_all_categories(&self) -> Result<Vec<String>, CatalogError>;

    async fn get_products_by_category(
        &self,
        category_name: &str,
    ) -> Result<Vec<Product>, CatalogError>;
}
