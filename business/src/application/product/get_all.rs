use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug("Fetching the full catalog");

        let products = self.repository.get_all_products().await.inspect_err(|err| {
            self.logger.warn(&format!("Catalog fetch failed: {err}"));
        })?;

        self.logger
            .debug(&format!("Catalog returned {} products", products.len()));
        Ok(products)
    }
}
