//! Built-in parsers.
//!
//! Each parser maps its format's native structure onto [`Value`](crate::Value)
//! and reports invalid input as [`ParseError::Malformed`](crate::ParseError)
//! carrying the underlying library's diagnostic.

mod delimited;
mod json;
mod xml;
mod yaml;

pub use delimited::DelimitedParser;
pub use json::JsonParser;
pub use xml::XmlParser;
pub use yaml::YamlParser;
