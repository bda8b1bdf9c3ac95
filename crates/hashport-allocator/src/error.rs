use hashport_core::{CoreError, StoreError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AllocError>;

#[derive(Debug, Clone, Error)]
pub enum AllocError {
    #[error("long url must not be empty")]
    EmptyUrl,
    #[error("invalid short key: {0}")]
    InvalidShortKey(String),
    #[error("store error: {0}")]
    Store(String),
    #[error("every prefix of digest {0} is bound to another url")]
    KeySpaceExhausted(String),
}

impl From<CoreError> for AllocError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortKey(message) => Self::InvalidShortKey(message),
        }
    }
}

impl From<StoreError> for AllocError {
    fn from(value: StoreError) -> Self {
        Self::Store(value.to_string())
    }
}
