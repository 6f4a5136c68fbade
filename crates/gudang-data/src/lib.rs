//! Catalog data access for the Gudang storefront.
//!
//! This crate provides:
//! - `CatalogStore` - Read-only catalog queries (Firestore or in-memory)
//! - `FetchClient` - Outbound JSON fetches tagged by dependency
//! - `DependencyTag` - Which collection a fetch belongs to
//! - `HttpTransport` - The network seam (`SpinTransport` with the `spin` feature)

mod client;
mod dependency;
pub mod firestore;
mod store;
mod transport;

pub use client::*;
pub use dependency::*;
pub use store::*;
pub use transport::*;
