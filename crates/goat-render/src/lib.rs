//! # goat-render - template execution over generic data
//!
//! `goat-render` runs a template body against a generic data value
//! (`serde_json::Value`) under one of two escaping disciplines.
//!
//! ## Core Concepts
//!
//! - [`RenderMode`]: `text` (verbatim) or `html` (entity-escaped)
//! - [`TemplateEngine`]: compile-and-run seam, one engine per mode
//! - [`MiniJinjaEngine`]: Jinja2-syntax engine backed by minijinja
//! - [`RenderError`]: syntax vs execution failures
//!
//! ## Quick Start
//!
//! ```rust
//! use goat_render::{MiniJinjaEngine, RenderMode, TemplateEngine};
//! use serde_json::json;
//!
//! let data = json!({"title": "Fish & Chips", "items": ["cod", "haddock"]});
//! let template = "{{ title }}:{% for i in items %} {{ i }}{% endfor %}";
//!
//! let text = MiniJinjaEngine::new(RenderMode::Text)
//!     .render_template(template, &data)
//!     .unwrap();
//! assert_eq!(text, "Fish & Chips: cod haddock");
//!
//! let html = MiniJinjaEngine::new(RenderMode::Html)
//!     .render_template(template, &data)
//!     .unwrap();
//! assert_eq!(html, "Fish &amp; Chips: cod haddock");
//! ```
//!
//! ## Template Context
//!
//! When the data is a mapping, each key is a top-level variable. The whole
//! value is also bound as `document` ([`DOCUMENT_VAR`]), which is how
//! sequence documents (a CSV table, say) are reached:
//!
//! ```jinja
//! {% for row in document %}{{ row.name }}{% endfor %}
//! ```

mod error;
mod mode;
pub mod template;

pub use error::RenderError;
pub use mode::RenderMode;
pub use template::{register_filters, MiniJinjaEngine, TemplateEngine, DOCUMENT_VAR};
