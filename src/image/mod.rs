//! ImageStore - laptop images kept as files in one folder.

mod disk;

use std::fmt;
use std::path::PathBuf;

pub use disk::DiskImageStore;

/// Largest image accepted for upload, in bytes.
pub const MAX_IMAGE_SIZE: usize = 1 << 20;

/// Where a stored image lives and which laptop it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInfo {
    pub laptop_id: String,
    pub image_type: String,
    pub path: PathBuf,
}

#[derive(Debug)]
pub enum ImageError {
    Io(std::io::Error),
    LockPoisoned(&'static str),
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::Io(e) => write!(f, "cannot write image file: {}", e),
            ImageError::LockPoisoned(operation) => {
                write!(f, "image store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImageError::Io(e) => Some(e),
            ImageError::LockPoisoned(_) => None,
        }
    }
}

impl From<std::io::Error> for ImageError {
    fn from(err: std::io::Error) -> Self {
        ImageError::Io(err)
    }
}

pub trait ImageStore: Send + Sync {
    /// Store `data` as an image of `laptop_id` and return the new image id.
    ///
    /// `image_type` is the file extension including its dot, e.g. `.jpg`.
    fn save(&self, laptop_id: &str, image_type: &str, data: &[u8]) -> Result<String, ImageError>;

    fn find(&self, image_id: &str) -> Result<Option<ImageInfo>, ImageError>;
}
