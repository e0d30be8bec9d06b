//! Error types for input parsing.

use thiserror::Error;

/// Errors that can occur while turning raw input into a [`Value`](crate::Value).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No parser is registered for the requested format.
    #[error("unknown input format {0:?}")]
    UnknownFormat(String),

    /// The input is not valid for the claimed format.
    ///
    /// `message` is the underlying parser's diagnostic, unchanged.
    #[error("malformed {format} input: {message}")]
    Malformed { format: String, message: String },
}

impl ParseError {
    /// Create a malformed-input error from any parser diagnostic.
    pub fn malformed(format: impl Into<String>, message: impl ToString) -> Self {
        Self::Malformed {
            format: format.into(),
            message: message.to_string(),
        }
    }

    /// The format identifier this error is about.
    pub fn format(&self) -> &str {
        match self {
            ParseError::UnknownFormat(format) => format,
            ParseError::Malformed { format, .. } => format,
        }
    }
}
