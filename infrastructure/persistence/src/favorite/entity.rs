use sqlx::FromRow;

use business::domain::favorite::model::FavoriteItem;

#[derive(Debug, FromRow)]
pub struct FavoriteItemEntity {
    pub id: i64,
    pub image: String,
    pub price: f64,
    pub title: String,
    pub category: String,
    pub rating_count: i64,
    pub rating_rate: f64,
}

impl FavoriteItemEntity {
    pub fn into_domain(self) -> FavoriteItem {
        FavoriteItem::from_repository(
            self.id,
            self.image,
            self.price,
            self.title,
            self.category,
            self.rating_count,
            self.rating_rate,
        )
    }
}
