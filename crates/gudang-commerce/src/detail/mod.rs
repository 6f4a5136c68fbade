//! Product detail page state.

mod selection;

pub use selection::*;
