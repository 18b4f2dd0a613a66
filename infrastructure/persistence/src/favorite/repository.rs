use async_trait::async_trait;
use sqlx::SqlitePool;
use tokio::sync::watch;

use business::domain::errors::RepositoryError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::repository::FavoriteRepository;

use super::entity::FavoriteItemEntity;
use crate::notifier::StoreNotifier;

pub struct FavoriteRepositorySqlite {
    pool: SqlitePool,
    notifier: StoreNotifier,
}

impl FavoriteRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            notifier: StoreNotifier::new(),
        }
    }
}

async fn fetch_all(pool: &SqlitePool) -> Result<Vec<FavoriteItem>, RepositoryError> {
    let entities = sqlx::query_as::<_, FavoriteItemEntity>(
        "SELECT id, image, price, title, category, rating_count, rating_rate FROM favorite_table",
    )
    .fetch_all(pool)
    .await
    .map_err(|_| RepositoryError::DatabaseError)?;

    Ok(entities.into_iter().map(|e| e.into_domain()).collect())
}

async fn fetch_is_favorite(pool: &SqlitePool, product_id: i64) -> Result<bool, RepositoryError> {
    sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM favorite_table WHERE id = ?)")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositorySqlite {
    async fn toggle(&self, item: &FavoriteItem) -> Result<bool, RepositoryError> {
        // Existence check and flip commit together; row presence is the flag.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM favorite_table WHERE id = ?)",
        )
        .bind(item.id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        if exists {
            sqlx::query("DELETE FROM favorite_table WHERE id = ?")
                .bind(item.id)
                .execute(&mut *tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
        } else {
            sqlx::query(
                r#"INSERT INTO favorite_table (id, image, price, title, rating_count, rating_rate, category)
                VALUES (?, ?, ?, ?, ?, ?, ?)"#,
            )
            .bind(item.id)
            .bind(&item.image)
            .bind(item.price)
            .bind(&item.title)
            .bind(item.rating_count)
            .bind(item.rating_rate)
            .bind(&item.category)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        tx.commit().await.map_err(|_| RepositoryError::DatabaseError)?;

        self.notifier.notify();
        Ok(!exists)
    }

    async fn is_favorite(&self, product_id: i64) -> Result<bool, RepositoryError> {
        fetch_is_favorite(&self.pool, product_id).await
    }

    async fn get_all(&self) -> Result<Vec<FavoriteItem>, RepositoryError> {
        fetch_all(&self.pool).await
    }

    async fn clear_all(&self) -> Result<(), RepositoryError> {
        let removed = sqlx::query("DELETE FROM favorite_table")
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?
            .rows_affected();

        if removed > 0 {
            self.notifier.notify();
        }
        Ok(())
    }

    async fn watch_all(&self) -> Result<watch::Receiver<Vec<FavoriteItem>>, RepositoryError> {
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
                        tracing::warn!(
                            "favorites view refresh failed, keeping last snapshot: {err}"
                        );
                    }
                }
            }
        });

        Ok(rx)
    }

    async fn watch_is_favorite(
        &self,
        product_id: i64,
    ) -> Result<watch::Receiver<bool>, RepositoryError> {
        let initial = fetch_is_favorite(&self.pool, product_id).await?;
        let (tx, rx) = watch::channel(initial);

        let pool = self.pool.clone();
        let mut version = self.notifier.subscribe();
        tokio::spawn(async move {
            while version.changed().await.is_ok() {
                match fetch_is_favorite(&pool, product_id).await {
                    Ok(flag) => {
                        if tx.send(flag).is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        tracing::warn!(
                            "favorite flag refresh failed for product {product_id}: {err}"
                        );
                    }
                }
            }
        });

        Ok(rx)
    }
}
