//! Public SDK for the Gudang streaming storefront.
//!
//! This crate re-exports the platform crates a workload needs:
//!
//! ```ignore
//! use gudang_sdk::prelude::*;
//!
//! let logger = StructuredLogger::new(ctx.request_id.clone()).with_config(&config.log);
//! let mut sink = StreamingSink::new(body, ctx.timing.clone()).with_liveness(ctx.liveness.clone());
//!
//! sink.send_shell(&shell.render_opening()).await?;
//! sink.send_raw(brands.placeholder().into_bytes()).await?;
//!
//! match store.list_active_brands().await {
//!     Ok(brands) => sink.send_section("brands", &section.fill(&render(&brands))).await?,
//!     Err(e) => logger.warn_builder("Brands fetch failed").field_error(&e).emit(),
//! }
//! ```

pub use gudang_core;
pub use gudang_data;
pub use gudang_observability;
pub use gudang_streaming;

/// Prelude for convenient imports.
pub mod prelude {
    pub use gudang_core::*;
    pub use gudang_data::*;
    pub use gudang_observability::*;
    pub use gudang_streaming::*;
}
