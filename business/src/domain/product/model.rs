use serde::{Deserialize, Serialize};

/// A catalog product as served by the remote store API.
///
/// Products are read-only: they are never persisted locally and live only
/// for the duration of one fetch response. Cart and favorite rows take a
/// snapshot of the fields they need instead of referencing a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: f64,
    pub category: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub count: i64,
    pub rate: f64,
}
