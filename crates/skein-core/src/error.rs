use skein_chain::DecodeError;
use thiserror::Error;

/// Failures raised by repository implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Failures surfaced to callers of the [`Shortener`](crate::Shortener) seam.
#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid chain: {0}")]
    InvalidChain(DecodeError),
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<StorageError> for ShortenerError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value.to_string())
    }
}
