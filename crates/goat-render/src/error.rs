//! Error types for template rendering.
//!
//! This module provides [`RenderError`], the error type for all rendering
//! operations. It hides the underlying template engine's errors behind the
//! two failure classes callers care about: the template does not compile,
//! or it compiled but failed against the data.

use thiserror::Error;

/// Error type for template rendering operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The template does not compile under the chosen discipline.
    #[error("template syntax error: {0}")]
    Syntax(String),

    /// The template compiled but failed while running against the data:
    /// an undefined field or index, or a type mismatch.
    #[error("template execution error: {0}")]
    Execution(String),

    /// A render mode other than `text` or `html` was requested.
    #[error("invalid render mode {0:?}, must be 'text' or 'html'")]
    InvalidMode(String),
}

impl RenderError {
    /// Wraps an engine error raised while compiling.
    pub fn syntax(err: impl std::fmt::Display) -> Self {
        RenderError::Syntax(err.to_string())
    }

    /// Wraps an engine error raised while executing.
    pub fn execution(err: impl std::fmt::Display) -> Self {
        RenderError::Execution(err.to_string())
    }
}
