//! Catalog records: products, banners, brands and their display pricing.

mod banner;
mod pricing;
mod product;

pub use banner::*;
pub use pricing::*;
pub use product::*;
