#[derive(Debug, Clone, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity: {0}")]
    InvalidQuantity(i64),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
