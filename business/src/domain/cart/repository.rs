use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::errors::RepositoryError;

use super::model::CartItem;

/// Port to the local cart table. The store is the sole owner of cart rows;
/// all policy statements (upsert-increment, conditional delete) run as one
/// atomic unit inside the implementation so a quantity of zero is never
/// observable.
///
/// The `watch_*` methods return live views: a snapshot now, then a fresh
/// full snapshot after every committed cart write.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Insert at quantity 1 when the row is absent, otherwise increment by 1.
    async fn add_or_increment(&self, item: &CartItem) -> Result<(), RepositoryError>;

    /// Absent row: no-op. Quantity 1: delete the row. Otherwise decrement by 1.
    async fn remove_or_decrement(&self, product_id: i64) -> Result<(), RepositoryError>;

    /// Unconditional delete regardless of quantity.
    async fn remove(&self, product_id: i64) -> Result<(), RepositoryError>;

    async fn remove_all(&self) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, product_id: i64) -> Result<Option<CartItem>, RepositoryError>;

    async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError>;

    async fn quantity_of(&self, product_id: i64) -> Result<Option<i64>, RepositoryError>;

    async fn watch_all(&self) -> Result<watch::Receiver<Vec<CartItem>>, RepositoryError>;

    async fn watch_quantity(
        &self,
        product_id: i64,
    ) -> Result<watch::Receiver<Option<i64>>, RepositoryError>;
}
