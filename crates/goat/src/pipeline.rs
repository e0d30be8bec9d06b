//! The render pipeline: parse, pick the engine, render.
//!
//! ```text
//! mode check → parse(format, raw) → engine(mode) → compile + run → output
//! ```
//!
//! Each stage either hands its result to the next or fails the whole
//! invocation. Output is returned only when every stage succeeded.

use std::path::Path;

use goat_parse::ParserRegistry;
use goat_render::{MiniJinjaEngine, RenderMode, TemplateEngine};

use crate::PipelineError;

/// A configured render pipeline.
///
/// Holds the parser registry and one template engine per [`RenderMode`].
/// A pipeline has no per-invocation state, so one instance can serve any
/// number of renders, including concurrent ones.
///
/// # Example
///
/// ```rust
/// use goat::Pipeline;
///
/// let pipeline = Pipeline::new();
/// let output = pipeline
///     .render("json", r#"{"x": "<b>hi</b>"}"#, "{{ x }}", "html")
///     .unwrap();
/// assert!(output.starts_with("&lt;b&gt;hi"));
/// ```
pub struct Pipeline {
    parsers: ParserRegistry,
    text: Box<dyn TemplateEngine>,
    html: Box<dyn TemplateEngine>,
}

impl Pipeline {
    /// Creates a pipeline with the built-in parsers and MiniJinja engines.
    pub fn new() -> Self {
        Self::with_parsers(ParserRegistry::default())
    }

    /// Creates a pipeline with a custom parser registry.
    pub fn with_parsers(parsers: ParserRegistry) -> Self {
        Self {
            parsers,
            text: Box::new(MiniJinjaEngine::text()),
            html: Box::new(MiniJinjaEngine::html()),
        }
    }

    /// Installs `engine` in the slot for its own [`mode`](TemplateEngine::mode),
    /// replacing the engine previously serving that mode.
    pub fn with_engine(mut self, engine: Box<dyn TemplateEngine>) -> Self {
        match engine.mode() {
            RenderMode::Text => self.text = engine,
            RenderMode::Html => self.html = engine,
        }
        self
    }

    /// Installs several engines, each in the slot for its own mode.
    pub fn with_engines<I>(self, engines: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TemplateEngine>>,
    {
        engines.into_iter().fold(self, Self::with_engine)
    }

    /// Uses MiniJinja engines that resolve includes relative to `dir`.
    pub fn with_template_dir(self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.with_engines(
            RenderMode::ALL.map(|mode| -> Box<dyn TemplateEngine> {
                Box::new(MiniJinjaEngine::new(mode).with_template_dir(dir))
            }),
        )
    }

    /// The parser registry used by the parse stage.
    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    /// The engine that executes templates for `mode`.
    pub fn engine(&self, mode: RenderMode) -> &dyn TemplateEngine {
        match mode {
            RenderMode::Text => self.text.as_ref(),
            RenderMode::Html => self.html.as_ref(),
        }
    }

    /// Renders `raw_input`, parsed as `format`, through `template_body`.
    ///
    /// `mode` is validated before anything else: a value other than `text`
    /// or `html` fails with [`PipelineError::InvalidRenderMode`] without
    /// parsing the input or compiling the template.
    ///
    /// # Errors
    ///
    /// - [`PipelineError::InvalidRenderMode`]
    /// - [`PipelineError::UnknownFormat`] / [`PipelineError::MalformedInput`]
    ///   from the parse stage
    /// - [`PipelineError::TemplateSyntax`] / [`PipelineError::TemplateExecution`]
    ///   from the render stage
    pub fn render(
        &self,
        format: &str,
        raw_input: &str,
        template_body: &str,
        mode: &str,
    ) -> Result<String, PipelineError> {
        let mode: RenderMode = mode.parse()?;
        self.render_with_mode(format, raw_input, template_body, mode)
    }

    /// Like [`render`](Self::render) with an already validated mode.
    pub fn render_with_mode(
        &self,
        format: &str,
        raw_input: &str,
        template_body: &str,
        mode: RenderMode,
    ) -> Result<String, PipelineError> {
        let data = self.parsers.parse(format, raw_input)?;
        let output = self.engine(mode).render_template(template_body, &data)?;
        Ok(output)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
