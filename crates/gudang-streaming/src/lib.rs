//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Ordered writes, shell before sections
//! - `Shell` - Page opening and closing HTML
//! - `Section` - Named slots streamed as a skeleton, filled later
//! - `escape_html` - Text and attribute escaping for renderers

mod html;
mod section;
mod shell;
mod sink;

pub use html::*;
pub use section::*;
pub use shell::*;
pub use sink::*;
