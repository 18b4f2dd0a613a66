use async_trait::async_trait;

use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;

/// `Ok(None)` is "the catalog has no such product", not a failure.
#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, product_id: i64) -> Result<Option<Product>, CatalogError>;
}
