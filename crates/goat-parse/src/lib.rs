//! Structured input parsing for goat.
//!
//! `goat-parse` turns raw input text into a generic, template-addressable
//! [`Value`]: a tree of scalars, ordered sequences and string-keyed mappings.
//! Which parser runs is decided by a format identifier looked up in a
//! [`ParserRegistry`].
//!
//! # Built-in Formats
//!
//! | Identifier | Parser | Document shape |
//! |------------|--------|----------------|
//! | `json` | [`JsonParser`] | as written |
//! | `yaml`, `yml` | [`YamlParser`] | as written, keys stringified |
//! | `xml` | [`XmlParser`] | `{root: element}`, attributes under `@name`, text under `#text` |
//! | `csv` | [`DelimitedParser::csv`] | sequence of `{header: cell}` rows |
//! | `tsv` | [`DelimitedParser::tsv`] | sequence of `{header: cell}` rows |
//!
//! # Example
//!
//! ```rust
//! use goat_parse::ParserRegistry;
//!
//! let registry = ParserRegistry::default();
//! let data = registry.parse("csv", "name,age\nAlice,30\n").unwrap();
//! assert_eq!(data[0]["name"], "Alice");
//! ```
//!
//! # Custom Formats
//!
//! Any type implementing [`Parser`] can be registered, and so can a plain
//! closure:
//!
//! ```rust
//! use goat_parse::{from_fn, ParserRegistry, Value};
//!
//! let mut registry = ParserRegistry::new();
//! registry.register("lines", from_fn(|raw| {
//!     Ok(Value::Array(raw.lines().map(Value::from).collect()))
//! }));
//! let data = registry.parse("LINES", "a\nb").unwrap();
//! assert_eq!(data[1], "b");
//! ```

mod error;
pub mod formats;
mod registry;

pub use error::ParseError;
pub use formats::{DelimitedParser, JsonParser, XmlParser, YamlParser};
pub use registry::{from_fn, FnParser, Parser, ParserRegistry};

/// The generic data value every parser produces.
pub use serde_json::Value;
