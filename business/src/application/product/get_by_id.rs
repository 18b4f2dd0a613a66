use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::CatalogError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::CatalogRepository;
use crate::domain::product::use_cases::get_by_id::GetProductByIdUseCase;

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, product_id: i64) -> Result<Option<Product>, CatalogError> {
        self.logger.debug(&format!("Fetching product {product_id}"));

        let product = self
            .repository
            .get_single_product(product_id)
            .await
            .inspect_err(|err| {
                self.logger
                    .warn(&format!("Product {product_id} fetch failed: {err}"));
            })?;

        if product.is_none() {
            self.logger
                .info(&format!("Product {product_id} is not in the catalog"));
        }
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl CatalogRepository for Catalog {
            async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError>;
            async fn get_single_product(&self, product_id: i64) -> Result<Option<Product>, CatalogError>;
            async fn get_all_categories(&self) -> Result<Vec<String>, CatalogError>;
            async fn get_products_by_category(&self, category_name: &str) -> Result<Vec<Product>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn absent_product_is_success_none_not_failure() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_get_single_product()
            .returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(999).await;

        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn network_failure_stays_distinguishable_from_absent() {
        let mut mock_catalog = MockCatalog::new();
        mock_catalog
            .expect_get_single_product()
            .returning(|_| Err(CatalogError::Network("connection refused".to_string())));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(1).await;

        assert!(matches!(result, Err(CatalogError::Network(_))));
    }
}
