use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::cart::errors::CartError;

/// Live view of one row's quantity; `None` while the row is absent.
#[async_trait]
pub trait WatchQuantityUseCase: Send + Sync {
    async fn execute(&self, product_id: i64) -> Result<watch::Receiver<Option<i64>>, CartError>;
}
