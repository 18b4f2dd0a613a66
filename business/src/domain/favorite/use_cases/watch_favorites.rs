use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;

#[async_trait]
pub trait WatchFavoritesUseCase: Send + Sync {
    async fn execute(&self) -> Result<watch::Receiver<Vec<FavoriteItem>>, FavoriteError>;
}
