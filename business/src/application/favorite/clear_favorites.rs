use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::clear_favorites::ClearFavoritesUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct ClearFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl ClearFavoritesUseCase for ClearFavoritesUseCaseImpl {
    async fn execute(&self) -> Result<(), FavoriteError> {
        self.logger.info("Clearing all favorites");

        match self.repository.clear_all().await {
            Ok(()) => Ok(()),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger
                        .error(&format!("Favorites clear dropped: {err}"));
                    Ok(())
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
