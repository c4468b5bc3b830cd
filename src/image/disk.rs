use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use super::{ImageError, ImageInfo, ImageStore};

/// Writes each image to `<folder>/<image id><image type>` and remembers
/// where it put it.
#[derive(Clone)]
pub struct DiskImageStore {
    folder: PathBuf,
    images: Arc<RwLock<HashMap<String, ImageInfo>>>,
}

impl DiskImageStore {
    /// The folder is created on the first save.
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            images: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn folder(&self) -> &Path {
        &self.folder
    }
}

impl ImageStore for DiskImageStore {
    fn save(&self, laptop_id: &str, image_type: &str, data: &[u8]) -> Result<String, ImageError> {
        let image_id = Uuid::new_v4().to_string();
        let path = self.folder.join(format!("{}{}", image_id, image_type));

        fs::create_dir_all(&self.folder)?;
        fs::write(&path, data)?;

        let mut images = self
            .images
            .write()
            .map_err(|_| ImageError::LockPoisoned("save"))?;
        images.insert(
            image_id.clone(),
            ImageInfo {
                laptop_id: laptop_id.to_string(),
                image_type: image_type.to_string(),
                path,
            },
        );

        Ok(image_id)
    }

    fn find(&self, image_id: &str) -> Result<Option<ImageInfo>, ImageError> {
        let images = self
            .images
            .read()
            .map_err(|_| ImageError::LockPoisoned("find"))?;
        Ok(images.get(image_id).cloned())
    }
}
