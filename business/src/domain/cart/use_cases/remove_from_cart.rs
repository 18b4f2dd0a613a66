use async_trait::async_trait;

use crate::domain::cart::errors::CartError;

#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, product_id: i64) -> Result<(), CartError>;
}
