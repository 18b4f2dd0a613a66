use async_trait::async_trait;

use crate::domain::product::errors::CatalogError;

#[async_trait]
pub trait GetAllCategoriesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<String>, CatalogError>;
}
