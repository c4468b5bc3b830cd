use std::fmt;

use crate::copy::CopyError;

/// Error type for laptop store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A laptop with this id is already stored.
    AlreadyExists(String),
    /// An isolation copy could not be produced.
    CopyFailed(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::AlreadyExists(id) => write!(f, "record already exists: {}", id),
            StoreError::CopyFailed(message) => write!(f, "{}", message),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<CopyError> for StoreError {
    fn from(err: CopyError) -> Self {
        StoreError::CopyFailed(err.to_string())
    }
}
