use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;

/// Live view of every cart row, re-emitted after each committed write.
#[async_trait]
pub trait WatchCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<watch::Receiver<Vec<CartItem>>, CartError>;
}
