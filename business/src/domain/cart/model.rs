use serde::{Deserialize, Serialize};

use super::errors::CartError;
use crate::domain::product::model::Product;

/// One cart row. The id doubles as the product id, and the remaining
/// fields are a snapshot taken when the product was first added.
///
/// Invariant: `quantity >= 1`. A decrement that would reach zero deletes
/// the row instead, so zero and negative quantities are never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub image: String,
    pub price: f64,
    pub title: String,
    pub category: String,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(
        id: i64,
        image: String,
        price: f64,
        title: String,
        category: String,
        quantity: i64,
    ) -> Result<Self, CartError> {
        if quantity < 1 {
            return Err(CartError::InvalidQuantity(quantity));
        }

        Ok(Self {
            id,
            image,
            price,
            title,
            category,
            quantity,
        })
    }

    /// Snapshot of a catalog product at quantity 1, ready for the first add.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            image: product.image.clone(),
            price: product.price,
            title: product.title.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        image: String,
        price: f64,
        title: String,
        category: String,
        quantity: i64,
    ) -> Self {
        Self {
            id,
            image,
            price,
            title,
            category,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::domain::product::model::Rating;

    fn product() -> Product {
        Product {
            id: 3,
            title: "Mens Cotton Jacket".to_string(),
            description: "Great outerwear jacket".to_string(),
            image: "https://fakestoreapi.com/img/jacket.jpg".to_string(),
            price: 55.99,
            category: "men's clothing".to_string(),
            rating: Rating {
                count: 500,
                rate: 4.7,
            },
        }
    }

    #[test]
    fn should_snapshot_product_at_quantity_one() {
        let item = CartItem::from_product(&product());

        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Mens Cotton Jacket");
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn should_reject_zero_quantity() {
        let result = CartItem::new(1, String::new(), 1.0, String::new(), String::new(), 0);

        assert!(matches!(result, Err(CartError::InvalidQuantity(0))));
    }

    proptest! {
        #[test]
        fn quantity_must_be_at_least_one(quantity in -1000i64..1000) {
            let result = CartItem::new(
                1,
                String::new(),
                1.0,
                String::new(),
                String::new(),
                quantity,
            );

            prop_assert_eq!(result.is_ok(), quantity >= 1);
        }
    }
}
