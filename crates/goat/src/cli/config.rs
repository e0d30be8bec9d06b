//! Per-invocation configuration.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::args::Args;
use super::input::InputSource;
use super::output::OutputDestination;

/// Everything one `goat` run needs to know, fixed before any work starts.
///
/// Built once from the command line (see [`Config::from_args`]) and passed
/// by reference; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Template file.
    pub template: PathBuf,
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
    /// Input format override.
    pub input_format: Option<String>,
    /// Output file; `None` writes stdout.
    pub output: Option<PathBuf>,
    /// Render mode name, validated by the pipeline.
    pub output_format: String,
}

impl Config {
    /// A config reading stdin and writing plain text to stdout.
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            input: None,
            input_format: None,
            output: None,
            output_format: "text".to_string(),
        }
    }

    /// Builds the config from parsed flags.
    ///
    /// Returns `None` when no template was given (only valid together with
    /// `--list-formats`, which clap enforces).
    pub fn from_args(args: &Args) -> Option<Self> {
        let template = args.template.clone()?;
        Some(Self {
            template,
            input: args.input.clone(),
            input_format: args.input_format.clone(),
            output: args.output.clone(),
            output_format: args.output_format.clone(),
        })
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input = Some(path.into());
        self
    }

    pub fn with_input_format(mut self, format: impl Into<String>) -> Self {
        self.input_format = Some(format.into());
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    pub fn with_output_format(mut self, mode: impl Into<String>) -> Self {
        self.output_format = mode.into();
        self
    }

    /// The input's name for format detection, `None` for stdin.
    pub fn source_name(&self) -> Option<Cow<'_, str>> {
        self.input.as_deref().map(Path::to_string_lossy)
    }

    pub fn input_source(&self) -> InputSource {
        match &self.input {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        }
    }

    pub fn destination(&self) -> OutputDestination {
        match &self.output {
            Some(path) => OutputDestination::File(path.clone()),
            None => OutputDestination::Stdout,
        }
    }

    /// Directory that `{% include %}` names are resolved against.
    pub fn template_dir(&self) -> &Path {
        match self.template.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}
