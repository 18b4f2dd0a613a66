use serde::Deserialize;

use business::domain::product::model::{Product, Rating};

/// Wire shape of one catalog product, as served by the remote API.
#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub category: String,
    pub rating: RatingDto,
}

#[derive(Debug, Deserialize)]
pub struct RatingDto {
    pub count: i64,
    pub rate: f64,
}

impl ProductDto {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            price: self.price,
            category: self.category,
            rating: Rating {
                count: self.rating.count,
                rate: self.rating.rate,
            },
        }
    }
}
