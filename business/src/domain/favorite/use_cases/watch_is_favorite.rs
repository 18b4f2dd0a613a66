use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::favorite::errors::FavoriteError;

/// Live membership flag for one product id.
#[async_trait]
pub trait WatchIsFavoriteUseCase: Send + Sync {
    async fn execute(&self, product_id: i64) -> Result<watch::Receiver<bool>, FavoriteError>;
}
