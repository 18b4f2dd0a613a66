use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_by_category::GetProductsByCategoryUseCase;

pub struct GetProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsByCategoryUseCase for GetProductsByCategoryUseCaseImpl {
    async fn execute(&self, category_name: &str) -> Result<Vec<Product>, CatalogError> {
        self.logger
            .debug(&format!("Fetching products in category {category_name:?}"));

        self.repository
            .get_products_by_category(category_name)
            .await
            .inspect_err(|err| {
                self.logger.warn(&format!(
                    "Category {category_name:?} fetch failed: {err}"
                ));
            })
    }
}
