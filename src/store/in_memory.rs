//! InMemoryLaptopStore - HashMap-backed laptop store.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{LaptopStore, StoreError};
use crate::context::Context;
use crate::copy::deep_copy;
use crate::filter::Filter;
use crate::laptop::Laptop;

/// In-memory laptop store keyed by laptop id.
///
/// Clone-friendly via Arc: clones share the same storage. `search` holds the
/// read lock for the whole scan, so saves wait until it returns.
#[derive(Clone)]
pub struct InMemoryLaptopStore {
    storage: Arc<RwLock<HashMap<String, Laptop>>>,
}

impl Default for InMemoryLaptopStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLaptopStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored laptops.
    pub fn len(&self) -> Result<usize, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl LaptopStore for InMemoryLaptopStore {
    fn save(&self, laptop: &Laptop) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("save"))?;

        if storage.contains_key(laptop.id()) {
            return Err(StoreError::AlreadyExists(laptop.id().to_string()));
        }

        let other = deep_copy(laptop)?;
        storage.insert(other.id.clone(), other);

        Ok(())
    }

    fn find(&self, id: &str) -> Result<Option<Laptop>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("find"))?;

        match storage.get(id) {
            Some(laptop) => Ok(Some(deep_copy(laptop)?)),
            None => Ok(None),
        }
    }

    fn search<E, F>(&self, ctx: &Context, filter: &Filter, mut found: F) -> Result<(), E>
    where
        E: From<StoreError>,
        F: FnMut(Laptop) -> Result<(), E>,
    {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("search"))?;

        for laptop in storage.values() {
            // A done context ends the scan early but is not an error.
            if let Some(reason) = ctx.err() {
                tracing::info!(%reason, "laptop search stopped early");
                return Ok(());
            }

            if filter.qualifies(laptop) {
                let other = deep_copy(laptop).map_err(StoreError::from)?;
                found(other)?;
            }
        }

        Ok(())
    }
}
