//! # goat - render structured data through templates
//!
//! `goat` reads a document in one of several structured formats (CSV, TSV,
//! JSON, XML, YAML), parses it into a generic value and runs it through a
//! template, producing plain text or HTML.
//!
//! ## Core Concepts
//!
//! - [`resolve_format`]: picks the input format from an explicit override
//!   or the input's file extension
//! - [`Pipeline`]: parse, then render in `text` or `html` mode
//! - [`PipelineError`]: every way a run can fail, tagged by [`ErrorKind`]
//! - [`cli`]: the `goat` command line built on top of the above
//!
//! ## Quick Start
//!
//! ```rust
//! use goat::{resolve_format, Pipeline};
//!
//! let format = resolve_format(None, Some("inventory.csv")).unwrap();
//! let output = Pipeline::new()
//!     .render(
//!         &format,
//!         "item,qty\nbolts,40\nnuts,12\n",
//!         "{% for row in document %}{{ row.item }}: {{ row.qty }}\n{% endfor %}",
//!         "text",
//!     )
//!     .unwrap();
//! assert_eq!(output, "bolts: 40\nnuts: 12\n");
//! ```
//!
//! The core never logs and never exits the process; failures come back as
//! [`PipelineError`] values.

pub mod cli;
mod error;
mod pipeline;
mod resolve;

pub use error::{ErrorKind, PipelineError};
pub use goat_parse::{Parser, ParserRegistry, Value};
pub use goat_render::{RenderMode, TemplateEngine};
pub use pipeline::Pipeline;
pub use resolve::resolve_format;
