//! JSON conversion for laptops.
//!
//! Output keeps the snake_case field names, writes every field even when it
//! holds a default, and spells enums by name.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::laptop::Laptop;

#[derive(Debug)]
pub enum SerializeError {
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::Json(e) => write!(f, "json error: {}", e),
            SerializeError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for SerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SerializeError::Json(e) => Some(e),
            SerializeError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for SerializeError {
    fn from(err: serde_json::Error) -> Self {
        SerializeError::Json(err)
    }
}

impl From<std::io::Error> for SerializeError {
    fn from(err: std::io::Error) -> Self {
        SerializeError::Io(err)
    }
}

/// Convert a laptop to pretty-printed JSON.
pub fn laptop_to_json(laptop: &Laptop) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(laptop)?)
}

/// Parse a laptop from JSON produced by [`laptop_to_json`].
pub fn json_to_laptop(data: &str) -> Result<Laptop, SerializeError> {
    Ok(serde_json::from_str(data)?)
}

pub fn write_json_file(laptop: &Laptop, path: impl AsRef<Path>) -> Result<(), SerializeError> {
    let data = laptop_to_json(laptop)?;
    fs::write(path, data)?;
    Ok(())
}

pub fn read_json_file(path: impl AsRef<Path>) -> Result<Laptop, SerializeError> {
    let data = fs::read_to_string(path)?;
    json_to_laptop(&data)
}
