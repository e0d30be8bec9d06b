use crate::{ParseError, Parser, Value};

/// Parses JSON documents with `serde_json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl Parser for JsonParser {
    fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        serde_json::from_str(raw).map_err(|e| ParseError::malformed("json", e))
    }
}
