/// Remote catalog errors. Unlike local-store faults these are always
/// surfaced to the caller so the screen can offer a retry.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.network: {0}")]
    Network(String),
    #[error("catalog.http_status: {0}")]
    Status(u16),
    #[error("catalog.decode: {0}")]
    Decode(String),
}
