use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuRepositoryError {
    #[error("menu cache already populated")]
    AlreadyPopulated,

    #[error("storage error: {0}")]
    Storage(String),
}

#[derive(Debug, Error)]
pub enum RemoteMenuError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("malformed menu document: {0}")]
    Malformed(String),
}
