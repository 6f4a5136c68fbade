//! Core abstractions for the Gudang streaming storefront.
//!
//! This crate provides the fundamental types:
//! - `WorkloadManifest` - Routes served by a workload
//! - `RequestContext` - Typed request parameters
//! - `SiteConfig` - Store, database and logging settings
//! - `LifecyclePhase` / `LivenessToken` - Request lifecycle tracking

mod config;
mod context;
mod lifecycle;
mod workload;

pub use config::*;
pub use context::*;
pub use lifecycle::*;
pub use workload::*;

pub use http::{Method, StatusCode};
