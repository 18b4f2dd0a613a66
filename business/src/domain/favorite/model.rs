use serde::{Deserialize, Serialize};

use crate::domain::product::model::Product;

/// One favorite row. Row existence IS the favorite flag; there is no
/// boolean column and no partial state. The rating fields are a snapshot
/// taken when the product was favorited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteItem {
    pub id: i64,
    pub image: String,
    pub price: f64,
    pub title: String,
    pub category: String,
    pub rating_count: i64,
    pub rating_rate: f64,
}

impl FavoriteItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            price: product.price,
            title: product.title.clone(),
            category: product.category.clone(),
            rating_count: product.rating.count,
            rating_rate: product.rating.rate,
        }
    }

    /// Constructor for data already persisted in the repository.
    pub fn from_repository(
        id: i64,
        image: String,
        price: f64,
        title: String,
        category: String,
        rating_count: i64,
        rating_rate: f64,
    ) -> Self {
        Self {
            id,
            image,
            price,
            title,
            category,
            rating_count,
            rating_rate,
        }
    }
}
