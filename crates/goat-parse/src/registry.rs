//! Parser abstraction and the format registry.
//!
//! A [`Parser`] turns raw text into a [`Value`]. The [`ParserRegistry`] maps
//! lowercase format identifiers to parsers; the registry is the only place
//! that knows which formats exist.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::formats::{DelimitedParser, JsonParser, XmlParser, YamlParser};
use crate::{ParseError, Value};

/// A parser for one input format.
///
/// Parsers must be safe to share between threads; the registry hands out
/// shared references and several renders may run at once.
pub trait Parser: Send + Sync {
    /// Parses a whole document.
    fn parse(&self, raw: &str) -> Result<Value, ParseError>;
}

/// A parser backed by a closure. Created with [`from_fn`].
pub struct FnParser<F>(F);

impl<F> Parser for FnParser<F>
where
    F: Fn(&str) -> Result<Value, ParseError> + Send + Sync,
{
    fn parse(&self, raw: &str) -> Result<Value, ParseError> {
        (self.0)(raw)
    }
}

/// Creates a parser from a closure.
///
/// This is the quickest way to plug an ad-hoc format into a registry.
pub fn from_fn<F>(f: F) -> FnParser<F>
where
    F: Fn(&str) -> Result<Value, ParseError> + Send + Sync,
{
    FnParser(f)
}

/// Maps format identifiers to parsers.
///
/// Identifiers are stored lowercase and looked up lowercase. No other
/// canonicalization happens: `yml` and `yaml` are two entries that happen to
/// share a parser.
#[derive(Clone)]
pub struct ParserRegistry {
    parsers: HashMap<String, Arc<dyn Parser>>,
}

impl ParserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            parsers: HashMap::new(),
        }
    }

    /// Creates a registry with every built-in format registered.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        let yaml = Arc::new(YamlParser);
        registry.register_shared("json", Arc::new(JsonParser));
        registry.register_shared("yaml", yaml.clone());
        registry.register_shared("yml", yaml);
        registry.register_shared("xml", Arc::new(XmlParser));
        registry.register_shared("csv", Arc::new(DelimitedParser::csv()));
        registry.register_shared("tsv", Arc::new(DelimitedParser::tsv()));
        registry
    }

    /// Registers a parser, replacing any existing parser for the format.
    pub fn register<P>(&mut self, format: &str, parser: P) -> &mut Self
    where
        P: Parser + 'static,
    {
        self.register_shared(format, Arc::new(parser))
    }

    /// Registers an already shared parser.
    pub fn register_shared(&mut self, format: &str, parser: Arc<dyn Parser>) -> &mut Self {
        self.parsers.insert(format.to_lowercase(), parser);
        self
    }

    /// Returns the parser registered for a format, if any.
    pub fn get(&self, format: &str) -> Option<&Arc<dyn Parser>> {
        self.parsers.get(&format.to_lowercase())
    }

    /// Whether a parser is registered for the format.
    pub fn contains(&self, format: &str) -> bool {
        self.get(format).is_some()
    }

    /// Registered format identifiers, sorted.
    pub fn formats(&self) -> Vec<&str> {
        let mut formats: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
        formats.sort_unstable();
        formats
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Parses `raw` with the parser registered for `format`.
    ///
    /// # Errors
    ///
    /// [`ParseError::UnknownFormat`] when nothing is registered for `format`
    /// (including the empty identifier), otherwise whatever the parser
    /// reports.
    pub fn parse(&self, format: &str, raw: &str) -> Result<Value, ParseError> {
        let parser = self
            .get(format)
            .ok_or_else(|| ParseError::UnknownFormat(format.to_string()))?;
        parser.parse(raw)
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_builtin()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("formats", &self.formats())
            .finish()
    }
}
