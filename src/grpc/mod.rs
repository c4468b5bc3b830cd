//! gRPC transport for the laptop catalog.
//!
//! Requires the `grpc` feature. Uses tonic for the gRPC server and prost
//! for message serialization (standard protobuf wire format, no `.proto` file).
//!
//! ## RPCs
//!
//! - `CreateLaptop`: store a laptop, assigning a UUID when the id is empty.
//! - `FindLaptop`: fetch one laptop by id.
//! - `SearchLaptop`: stream every laptop matching a filter.
//! - `UploadImage`: stream an image of an existing laptop in chunks (1 MiB max).
//! - `RateLaptop`: stream scores and receive the running average after each.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use laptop_catalog::{grpc, DiskImageStore, InMemoryLaptopStore, InMemoryRatingStore};
//!
//! let laptops = Arc::new(InMemoryLaptopStore::new());
//! let images = Arc::new(DiskImageStore::new("img"));
//! let ratings = Arc::new(InMemoryRatingStore::new());
//!
//! // Get the server to compose with other tonic routes
//! let svc = grpc::laptop_server(laptops.clone(), images.clone(), ratings.clone());
//!
//! // Or serve directly
//! grpc::serve_grpc(laptops, images, ratings, "0.0.0.0:8080".parse()?).await?;
//! ```

mod convert;
mod messages;
mod server;

pub use messages::*;
pub use server::{laptop_server, serve_grpc, LaptopServer};

// ---------------------------------------------------------------------------
// Generated service trait + server/client
// ---------------------------------------------------------------------------

include!(concat!(env!("OUT_DIR"), "/catalog.LaptopService.rs"));

pub use laptop_service_client::LaptopServiceClient;
pub use laptop_service_server::{LaptopService, LaptopServiceServer};
