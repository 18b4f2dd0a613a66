use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;
use crate::domain::favorite::repository::FavoriteRepository;
use crate::domain::favorite::use_cases::watch_favorites::WatchFavoritesUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct WatchFavoritesUseCaseImpl {
    pub repository: Arc<dyn FavoriteRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl WatchFavoritesUseCase for WatchFavoritesUseCaseImpl {
    async fn execute(&self) -> Result<watch::Receiver<Vec<FavoriteItem>>, FavoriteError> {
        match self.repository.watch_all().await {
            Ok(view) => Ok(view),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger
                        .error(&format!("Favorites view degraded to empty: {err}"));
                    let (_, rx) = watch::channel(Vec::new());
                    Ok(rx)
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
