//! Render mode control.
//!
//! [`RenderMode`] selects the escaping discipline applied while a template
//! runs. This is the value behind the `--outformat` CLI flag.

use std::fmt;
use std::str::FromStr;

use crate::RenderError;

/// Controls how substituted values are written into the output.
///
/// # Variants
///
/// - `Text` - Values are inserted verbatim
/// - `Html` - Values are HTML-escaped unless marked `safe`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    /// Plain text, no escaping
    #[default]
    Text,
    /// HTML-safe output, values are entity-escaped
    Html,
}

impl RenderMode {
    /// All modes, in flag-help order.
    pub const ALL: [RenderMode; 2] = [RenderMode::Text, RenderMode::Html];

    /// The flag value naming this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Text => "text",
            RenderMode::Html => "html",
        }
    }

    /// Returns true if substitutions are escaped in this mode.
    pub fn escapes(&self) -> bool {
        matches!(self, RenderMode::Html)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = RenderError;

    /// Parses `text` or `html`. Matching is exact.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(RenderMode::Text),
            "html" => Ok(RenderMode::Html),
            other => Err(RenderError::InvalidMode(other.to_string())),
        }
    }
}
