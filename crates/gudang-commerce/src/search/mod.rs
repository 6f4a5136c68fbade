//! Catalog filtering and sorting.

mod collate;
mod query;

pub use collate::*;
pub use query::*;
