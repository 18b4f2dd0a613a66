use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::watch_is_favorite::WatchIsFavoriteUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct WatchIsFavoriteUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl WatchIsFavoriteUseCase for WatchIsFavoriteUseCaseImpl {
    async fn execute(&self, product_id: i64) -> Result<watch::Receiver<bool>, FavoriteError> {
        match self.repository.watch_is_favorite(product_id).await {
            Ok(view) => Ok(view),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger.error(&format!(
                        "Favorite flag for product {product_id} degraded to false: {err}"
                    ));
                    let (_, rx) = watch::channel(false);
                    Ok(rx)
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
