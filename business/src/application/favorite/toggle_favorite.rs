use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct ToggleFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl ToggleFavoriteUseCase for ToggleFavoriteUseCaseImpl {
    async fn execute(&self, item: &FavoriteItem) -> Result<(), FavoriteError> {
        match self.repository.toggle(item).await {
            Ok(is_favorite) => {
                self.logger.debug(&format!(
                    "Product {} is now {}",
                    item.id,
                    if is_favorite { "favorite" } else { "not favorite" }
                ));
                Ok(())
            }
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger.error(&format!(
                        "Favorite toggle dropped for product {}: {err}",
                        item.id
                    ));
                    Ok(())
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use tokio::sync::watch;

    mock! {
        pub FavoriteRepo {}

        #[async_trait]
        impl FavoriteRepository for FavoriteRepo {
            async fn toggle(&self, item: &FavoriteItem) -> Result<bool, RepositoryError>;
            async fn is_favorite(&self, product_id: i64) -> Result<bool, RepositoryError>;
            async fn get_all(&self) -> Result<Vec<FavoriteItem>, RepositoryError>;
            async fn clear_all(&self) -> Result<(), RepositoryError>;
            async fn watch_all(&self) -> Result<watch::Receiver<Vec<FavoriteItem>>, RepositoryError>;
            async fn watch_is_favorite(&self, product_id: i64) -> Result<watch::Receiver<bool>, RepositoryError>;
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

    fn item() -> FavoriteItem {
        FavoriteItem::from_repository(
            4,
            "https://example.com/f.png".to_string(),
            15.99,
            "Sling Bag".to_string(),
            "women's clothing".to_string(),
            130,
            4.1,
        )
    }

    #[tokio::test]
    async fn should_toggle_membership() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo.expect_toggle().times(1).returning(|_| Ok(true));

        let use_case = ToggleFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            fault_policy: StoreFaultPolicy::Absorb,
        };

        assert!(use_case.execute(&item()).await.is_ok());
    }

    #[tokio::test]
    async fn should_drop_toggle_silently_when_absorbing() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_toggle()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ToggleFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            fault_policy: StoreFaultPolicy::Absorb,
        };

        assert!(use_case.execute(&item()).await.is_ok());
    }

    #[tokio::test]
    async fn should_surface_toggle_fault_when_configured() {
        let mut mock_repo = MockFavoriteRepo::new();
        mock_repo
            .expect_toggle()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = ToggleFavoriteUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
            fault_policy: StoreFaultPolicy::Surface,
        };

        let result = use_case.execute(&item()).await;

        assert!(matches!(
            result,
            Err(FavoriteError::Repository(RepositoryError::DatabaseError))
        ));
    }
}
