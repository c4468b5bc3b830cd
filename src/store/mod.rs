//! LaptopStore - storage capability for laptops.
//!
//! ## Example
//!
//! ```ignore
//! use laptop_catalog::{Context, Filter, InMemoryLaptopStore, LaptopStore, StoreError};
//!
//! let store = InMemoryLaptopStore::new();
//! store.save(&laptop)?;
//! let found = store.find(&laptop.id)?;
//!
//! store.search(&Context::background(), &Filter::any(), |laptop| {
//!     println!("{}", laptop.id);
//!     Ok::<(), StoreError>(())
//! })?;
//! ```

mod error;
mod in_memory;

use crate::context::Context;
use crate::filter::Filter;
use crate::laptop::Laptop;

pub use error::StoreError;
pub use in_memory::InMemoryLaptopStore;

/// Storage for laptops. Every laptop handed in or out is an isolated copy.
pub trait LaptopStore: Send + Sync {
    /// Store a copy of `laptop`. Fails with `AlreadyExists` if its id is taken.
    fn save(&self, laptop: &Laptop) -> Result<(), StoreError>;

    /// Get a copy of the laptop with this id. `None` if it is not stored.
    fn find(&self, id: &str) -> Result<Option<Laptop>, StoreError>;

    /// Pass a copy of every laptop matching `filter` to `found`, in no
    /// particular order.
    ///
    /// Stops early without error once `ctx` is done. Stops early and returns
    /// the error unchanged if `found` fails.
    fn search<E, F>(&self, ctx: &Context, filter: &Filter, found: F) -> Result<(), E>
    where
        E: From<StoreError>,
        F: FnMut(Laptop) -> Result<(), E>;
}
