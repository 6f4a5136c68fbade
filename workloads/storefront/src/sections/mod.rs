//! HTML renderers for every page section.
//!
//! Data-bound sections come with a skeleton and a fallback next to the
//! success renderer.

mod banners;
mod brands;
mod detail;
mod home;
mod layout;
mod products;
mod search;

pub use banners::*;
pub use brands::*;
pub use detail::*;
pub use home::*;
pub use layout::*;
pub use products::*;
pub use search::*;
