//! The pipeline error taxonomy.
//!
//! Every failure of [`resolve_format`](crate::resolve_format) or
//! [`Pipeline::render`](crate::Pipeline::render) is a [`PipelineError`].
//! Errors are never recovered, retried or logged inside the pipeline; they go
//! back to the caller carrying their [`ErrorKind`] tag.

use goat_parse::ParseError;
use goat_render::RenderError;
use thiserror::Error;

/// Errors that abort a pipeline invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// Input comes from an unnamed stream and no format override was given.
    #[error("an input format is required when reading from an unnamed stream (use --informat)")]
    FormatRequiredForUnnamedInput,

    /// No parser is registered for the format.
    #[error("unknown input format {0:?}")]
    UnknownFormat(String),

    /// The input is not valid for its format. `message` is the parser's
    /// diagnostic, unchanged.
    #[error("malformed {format} input: {message}")]
    MalformedInput { format: String, message: String },

    /// The render mode is neither `text` nor `html`.
    #[error("invalid output format {0:?}, must be 'text' or 'html'")]
    InvalidRenderMode(String),

    /// The template does not compile.
    #[error("template syntax error: {0}")]
    TemplateSyntax(String),

    /// The template failed while running against the data.
    #[error("template execution error: {0}")]
    TemplateExecution(String),
}

/// The kind tag of a [`PipelineError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    FormatRequiredForUnnamedInput,
    UnknownFormat,
    MalformedInput,
    InvalidRenderMode,
    TemplateSyntax,
    TemplateExecution,
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::FormatRequiredForUnnamedInput => ErrorKind::FormatRequiredForUnnamedInput,
            PipelineError::UnknownFormat(_) => ErrorKind::UnknownFormat,
            PipelineError::MalformedInput { .. } => ErrorKind::MalformedInput,
            PipelineError::InvalidRenderMode(_) => ErrorKind::InvalidRenderMode,
            PipelineError::TemplateSyntax(_) => ErrorKind::TemplateSyntax,
            PipelineError::TemplateExecution(_) => ErrorKind::TemplateExecution,
        }
    }
}

impl From<ParseError> for PipelineError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::UnknownFormat(format) => PipelineError::UnknownFormat(format),
            ParseError::Malformed { format, message } => {
                PipelineError::MalformedInput { format, message }
            }
        }
    }
}

impl From<RenderError> for PipelineError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Syntax(msg) => PipelineError::TemplateSyntax(msg),
            RenderError::Execution(msg) => PipelineError::TemplateExecution(msg),
            RenderError::InvalidMode(mode) => PipelineError::InvalidRenderMode(mode),
        }
    }
}
