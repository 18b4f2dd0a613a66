use async_trait::async_trait;

use crate::domain::favorite::errors::FavoriteError;

#[async_trait]
pub trait ClearFavoritesUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), FavoriteError>;
}
