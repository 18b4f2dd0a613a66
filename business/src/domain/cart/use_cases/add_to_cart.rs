use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;

/// Add-or-increment: repeated calls keep incrementing the same row.
#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, item: &CartItem) -> Result<(), CartError>;
}
