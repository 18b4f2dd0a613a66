use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;
use crate::domain::favorite::model::FavoriteItem;

/// Presence-based flip. Two toggles in sequence with no interleaving
/// restore the original membership; observers see the change through the
/// live views, not through a return value.
#[async_trait]
pub trait ToggleFavoriteUseCase: Send + Sync {
    async fn execute(&self, item: &FavoriteItem) -> Result<(), FavoriteError>;
}
