//! Isolation copies.
//!
//! Values crossing the store boundary are round-tripped through bitcode, so
//! the copy handed out owns every byte of its data.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// The duplication of a value could not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyError(pub String);

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot copy laptop data: {}", self.0)
    }
}

impl std::error::Error for CopyError {}

impl From<bitcode::Error> for CopyError {
    fn from(err: bitcode::Error) -> Self {
        CopyError(err.to_string())
    }
}

/// Produce a structurally independent duplicate of `value`.
pub fn deep_copy<T: Serialize + DeserializeOwned>(value: &T) -> Result<T, CopyError> {
    let bytes = bitcode::serialize(value)?;
    Ok(bitcode::deserialize(&bytes)?)
}
