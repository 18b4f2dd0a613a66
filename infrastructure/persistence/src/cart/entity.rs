use sqlx::FromRow;

use business::domain::cart::model::CartItem;

#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: i64,
    pub image: String,
    pub price: f64,
    pub title: String,
    pub category: String,
    pub quantity: i64,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            self.image,
            self.price,
            self.title,
            self.category,
            self.quantity,
        )
    }
}
