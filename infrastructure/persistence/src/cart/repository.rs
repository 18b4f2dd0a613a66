use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::CartItemEntity;
use crate::notifier::StoreNotifier;

pub struct CartRepositorySqlite {
    pool: SqlitePool,
    notifier: StoreNotifier,
}

impl CartRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            notifier: StoreNotifier::new(),
        }
    }
}

async fn fetch_all(pool: &SqlitePool) -> Result<Vec<CartItem>, RepositoryError> {
    let entities = sqlx::query_as::<_, CartItemEntity>(
        "SELECT id, image, price, title, category, quantity FROM cart_table",
    )
    .fetch_all(pool)
    .await
    .map_err(|_| RepositoryError::DatabaseError)?;

    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}

async fn fetch_quantity(pool: &SqlitePool, product_id: i64) -> Result<Option<i64>, RepositoryError> {
    sqlx::query_scalar::<_, i64>("SELECT quantity FROM cart_table WHERE id = ?")
        .bind(product_id)
        .fetch_optional(pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
}

#[async_trait]
impl CartRepository for CartRepositorySqlite {
    async fn add_or_increment(&self, item: &CartItem) -> Result<(), RepositoryError> {
        // One conditional statement: no window where a concurrent call can
        // observe the row between the existence check and the write.
        sqlx::query(
            r#"INSERT INTO cart_table (id, image, price, title, category, quantity)
            VALUES (?, ?, ?, ?, ?, 1)
            ON CONFLICT(id) DO UPDATE SET quantity = quantity + 1"#,
        )
        .bind(item.id)
        .bind(&item.image)
        .bind(item.price)
        .bind(&item.title)
        .bind(&item.category)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.notifier.notify();
        Ok(())
    }

    async fn remove_or_decrement(&self, product_id: i64) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        // Quantity 1 deletes the row; otherwise decrement. An absent id
        // matches neither statement and the call is a no-op.
        let deleted = sqlx::query("DELETE FROM cart_table WHERE id = ? AND quantity <= 1")
            .bind(product_id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .rows_affected();

        let mut changed = deleted > 0;
        if !changed {
            changed = sqlx::query("UPDATE cart_table SET quantity = quantity - 1 WHERE id = ?")
                .bind(product_id)
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?
                .rows_affected()
                > 0;
        }

        tx.commit().await.map_err(|_| RepositoryError::DatabaseError)?;

        if changed {
            self.notifier.notify();
        }
        Ok(())
    }

    async fn remove(&self, product_id: i64) -> Result<(), RepositoryError> {
        let removed = sqlx::query("DELETE FROM cart_table WHERE id = ?")
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .rows_affected();

        if removed > 0 {
            self.notifier.notify();
        }
        Ok(())
    }

    async fn remove_all(&self) -> Result<(), RepositoryError> {
        let removed = sqlx::query("DELETE FROM cart_table")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .rows_affected();

        if removed > 0 {
            self.notifier.notify();
        }
        Ok(())
    }

    async fn get_by_id(&self, product_id: i64) -> Result<Option<CartItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(
            "SELECT id, image, price, title, category, quantity FROM cart_table WHERE id = ?",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn get_all(&self) -> Result<Vec<CartItem>, RepositoryError> {
        fetch_all(&self.pool).await
    }

    async fn quantity_of(&self, product_id: i64) -> Result<Option<i64>, RepositoryError> {
        fetch_quantity(&self.pool, product_id).await
    }

    async fn watch_all(&self) -> Result<watch::Receiver<Vec<CartItem>>, RepositoryError> {
        let initial = fetch_all(&self.pool).await?;
        let (tx, rx) = watch::channel(initial);

        let pool = self.pool.clone();
        let mut version = self.notifier.subscribe();
        tokio::spawn(async move {
            while version.changed().await.is_ok() {
                match fetch_all(&pool).await {
                    Ok(items) => {
                        if tx.send(items).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!("cart view refresh failed, keeping last snapshot: {err}");
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn watch_quantity(
        &self,
        product_id: i64,
    ) -> Result<watch::Receiver<Option<i64>>, RepositoryError> {
        let initial = fetch_quantity(&self.pool, product_id).await?;
        let (tx, rx) = watch::channel(initial);

        let pool = self.pool.clone();
        let mut version = self.notifier.subscribe();
        tokio::spawn(async move {
            while version.changed().await.is_ok() {
                match fetch_quantity(&pool, product_id).await {
                    Ok(quantity) => {
                        if tx.send(quantity).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(
                            "quantity view refresh failed for product {product_id}: {err}"
                        );
                    }
                }
            }
        });

        Ok(rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
    use tempfile::TempDir;

    struct TestContext {
        repo: CartRepositorySqlite,
        _temp_dir: TempDir, // Keep alive for duration of test
    }

    async fn setup_repo() -> TestContext {
        let temp_dir = TempDir::new().unwrap();
        let config = DatabaseConfig::new(temp_dir.path().join("test.db"));
        let pool = create_sqlite_pool(&config).await.unwrap();
        run_migrations(&pool).await.unwrap();
        TestContext {
            repo: CartRepositorySqlite::new(pool),
            _temp_dir: temp_dir,
        }
    }

    fn item(id: i64) -> CartItem {
        CartItem::from_repository(
            id,
            format!("https://example.com/{id}.png"),
            10.0,
            format!("Product {id}"),
            "electronics".to_string(),
            1,
        )
    }

    #[tokio::test]
    async fn first_add_inserts_at_quantity_one() {
        let ctx = setup_repo().await;

        ctx.repo.add_or_increment(&item(1)).await.unwrap();

        assert_eq!(ctx.repo.quantity_of(1).await.unwrap(), Some(1));
    }

    #[tokio::test]
    async fn second_add_increments_existing_row() {
        let ctx = setup_repo().await;

        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        ctx.repo.add_or_increment(&item(1)).await.unwrap();

        assert_eq!(ctx.repo.quantity_of(1).await.unwrap(), Some(2));
        assert_eq!(ctx.repo.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn decrement_at_quantity_one_deletes_the_row() {
        let ctx = setup_repo().await;
        ctx.repo.add_or_increment(&item(1)).await.unwrap();

        ctx.repo.remove_or_decrement(1).await.unwrap();

        assert_eq!(ctx.repo.quantity_of(1).await.unwrap(), None);
        assert!(ctx.repo.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn decrement_above_one_keeps_the_row() {
        let ctx = setup_repo().await;
        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        ctx.repo.add_or_increment(&item(1)).await.unwrap();

        ctx.repo.remove_or_decrement(1).await.unwrap();

        assert_eq!(ctx.repo.quantity_of(1).await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn decrement_of_absent_row_is_a_no_op() {
        let ctx = setup_repo().await;

        ctx.repo.remove_or_decrement(42).await.unwrap();

        assert!(ctx.repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_regardless_of_quantity() {
        let ctx = setup_repo().await;
        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        ctx.repo.add_or_increment(&item(1)).await.unwrap();

        ctx.repo.remove(1).await.unwrap();

        assert_eq!(ctx.repo.quantity_of(1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_all_empties_the_cart() {
        let ctx = setup_repo().await;
        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        ctx.repo.add_or_increment(&item(2)).await.unwrap();
        ctx.repo.add_or_increment(&item(3)).await.unwrap();

        ctx.repo.remove_all().await.unwrap();

        assert!(ctx.repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn live_view_reemits_after_each_committed_write() {
        let ctx = setup_repo().await;
        let mut view = ctx.repo.watch_all().await.unwrap();
        assert!(view.borrow().is_empty());

        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        view.changed().await.unwrap();
        assert_eq!(view.borrow_and_update().len(), 1);

        ctx.repo.remove_all().await.unwrap();
        view.changed().await.unwrap();
        assert!(view.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn quantity_view_follows_the_row_lifecycle() {
        let ctx = setup_repo().await;
        let mut view = ctx.repo.watch_quantity(1).await.unwrap();
        assert_eq!(*view.borrow(), None);

        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        view.changed().await.unwrap();
        assert_eq!(*view.borrow_and_update(), Some(1));

        ctx.repo.add_or_increment(&item(1)).await.unwrap();
        view.changed().await.unwrap();
        assert_eq!(*view.borrow_and_update(), Some(2));

        ctx.repo.remove(1).await.unwrap();
        view.changed().await.unwrap();
        assert_eq!(*view.borrow_and_update(), None);
    }

    #[tokio::test]
    async fn snapshot_preserves_the_added_fields() {
        let ctx = setup_repo().await;
        ctx.repo.add_or_increment(&item(5)).await.unwrap();

        let stored = ctx.repo.get_by_id(5).await.unwrap().unwrap();

        assert_eq!(stored.title, "Product 5");
        assert_eq!(stored.category, "electronics");
        assert_eq!(stored.price, 10.0);
    }
}
