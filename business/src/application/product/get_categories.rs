use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_categories::GetAllCategoriesUseCase;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<String>, CatalogError> {
        self.logger.debug("Fetching catalog categories");

        self.repository
            .get_all_categories()
            .await
            .inspect_err(|err| {
                self.logger.warn(&format!("Categories fetch failed: {err}"));
            })
    }
}
