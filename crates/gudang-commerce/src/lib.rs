//! Catalog domain types and storefront logic for Gudang Pakaian Dalam.
//!
//! - **Catalog**: products, variant groups, banners, brands, display pricing
//! - **Search**: term filtering and the four catalog sort orders
//! - **Detail**: image/variant selection and the contact call-to-action
//! - **Contact**: WhatsApp order links
//!
//! # Example
//!
//! ```rust,ignore
//! use gudang_commerce::prelude::*;
//!
//! let query = CatalogQuery::from_params(Some("boxer"), Some("price-asc"));
//! for product in filter_and_sort(&products, &query) {
//!     let price = PriceDisplay::for_product(product, Currency::IDR);
//!     println!("{} {}", product.name, price.current);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod contact;
pub mod detail;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Banner, Brand, PriceDisplay, Product, VariantGroup, VariantValue, SIZE_VARIANT_TYPE,
    };

    // Search
    pub use crate::search::{compare_names, filter_and_sort, CatalogQuery, SortOption};

    // Detail
    pub use crate::detail::{
        variant_label, ContactAction, DetailSelection, SelectionError, VariantChoice,
    };

    pub use crate::contact::ContactChannel;
}
