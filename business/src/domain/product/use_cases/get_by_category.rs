use async_trait::async_trait;

use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;

#[async_trait]
pub trait GetProductsByCategoryUseCase: Send + Sync {
    async fn execute(&self, category_name: &str) -> Result<Vec<Product>, CatalogError>;
}
