use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::errors::RepositoryError;

use super::model::FavoriteItem;

/// Port to the local favorite table. Toggling runs read-then-write inside
/// one transaction in the implementation.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Flip membership for `item.id`; returns the new membership state.
    async fn toggle(&self, item: &FavoriteItem) -> Result<bool, RepositoryError>;

    async fn is_favorite(&self, product_id: i64) -> Result<bool, RepositoryError>;

    async fn get_all(&self) -> Result<Vec<FavoriteItem>, RepositoryError>;

    async fn clear_all(&self) -> Result<(), RepositoryError>;

    async fn watch_all(&self) -> Result<watch::Receiver<Vec<FavoriteItem>>, RepositoryError>;

    async fn watch_is_favorite(
        &self,
        product_id: i64,
    ) -> Result<watch::Receiver<bool>, RepositoryError>;
}
