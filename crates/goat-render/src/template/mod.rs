//! Template execution.
//!
//! Templates are compiled and run by a [`TemplateEngine`]. Each engine is
//! bound to one [`RenderMode`](crate::RenderMode), so choosing the mode means
//! choosing the engine:
//!
//! ```text
//! Template: <td>{{ name }}</td>      data: {"name": "Tom & Jerry"}
//! text:     <td>Tom & Jerry</td>
//! html:     <td>Tom &amp; Jerry</td>
//! ```
//!
//! A template valid in one mode is not guaranteed valid in the other; the
//! two engines may be configured with different filters.
//!
//! ## Key Types
//!
//! - [`TemplateEngine`]: compile-and-run seam
//! - [`MiniJinjaEngine`]: the Jinja2-syntax implementation
//! - [`register_filters`]: goat's extra filters

mod engine;
pub mod filters;

pub use engine::{MiniJinjaEngine, TemplateEngine, DOCUMENT_VAR};
pub use filters::register_filters;
