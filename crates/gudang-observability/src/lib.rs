//! Structured logging and request metrics for the Gudang storefront.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `MetricsCollector` - Per-request timing for shell, sections and fetches

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export RequestId and TimingContext from gudang-core for convenience
pub use gudang_core::{RequestId, TimingContext};
