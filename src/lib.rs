mod context;
mod copy;
mod filter;
mod laptop;
mod store;

pub mod image;
pub mod rating;
pub mod sample;
pub mod serializer;

// gRPC transport (requires "grpc" feature)
#[cfg(feature = "grpc")]
pub mod grpc;

pub use context::{Context, ContextError};
pub use copy::{deep_copy, CopyError};
pub use filter::Filter;
pub use image::{DiskImageStore, ImageError, ImageInfo, ImageStore, MAX_IMAGE_SIZE};
pub use laptop::{
    to_bits, Cpu, Gpu, Keyboard, KeyboardLayout, Laptop, Memory, MemoryUnit, Panel, Resolution,
    Screen, Storage, StorageDriver, Weight,
};
pub use rating::{InMemoryRatingStore, Rating, RatingError, RatingStore};
pub use serializer::{json_to_laptop, laptop_to_json, SerializeError};
pub use store::{InMemoryLaptopStore, LaptopStore, StoreError};
