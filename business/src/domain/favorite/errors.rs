#[derive(Debug, Clone, thiserror::Error)]
pub enum FavoriteError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
