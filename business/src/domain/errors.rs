/// Local-store errors shared by every store-backed repository port.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError,
}
