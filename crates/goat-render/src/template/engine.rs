//! Template engine abstraction.
//!
//! This module defines the [`TemplateEngine`] trait, the seam between the
//! render pipeline and whatever actually executes templates. The default
//! implementation is [`MiniJinjaEngine`].

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use super::filters::register_filters;
use crate::error::RenderError;
use crate::mode::RenderMode;

/// Name under which the whole parsed document is visible to templates.
///
/// Mapping documents additionally expose each of their keys as a top-level
/// variable. A key with this name shadows the binding.
pub const DOCUMENT_VAR: &str = "document";

/// A template engine bound to one escaping discipline.
///
/// Engines compile and run a template body against generic data in one
/// call; nothing is cached between calls, so a shared engine can serve
/// concurrent renders.
pub trait TemplateEngine: Send + Sync {
    /// The escaping discipline this engine applies.
    fn mode(&self) -> RenderMode;

    /// Checks that a template compiles, without running it.
    fn compile(&self, template: &str) -> Result<(), RenderError>;

    /// Compiles `template` and runs it against `data`.
    ///
    /// The output is built in memory and returned whole; on failure no
    /// partial output escapes.
    ///
    /// # Errors
    ///
    /// [`RenderError::Syntax`] if the template does not compile,
    /// [`RenderError::Execution`] if it fails against the data.
    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError>;
}

/// MiniJinja-based template engine.
///
/// Templates use Jinja2 syntax: `{{ field }}`, `{% for row in document %}`,
/// filters, macros. Undefined values are strict: printing, iterating or
/// testing a field absent from the data is an execution error (use
/// `is defined` to probe optional fields). A trailing newline in the
/// template is kept.
///
/// In [`RenderMode::Html`] every substitution is HTML-escaped; `{{ x | safe }}`
/// marks a value as already escaped.
///
/// # Example
///
/// ```rust
/// use goat_render::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let engine = MiniJinjaEngine::html();
/// let output = engine
///     .render_template("<p>{{ x }}</p>", &json!({"x": "a < b"}))
///     .unwrap();
/// assert_eq!(output, "<p>a &lt; b</p>");
/// ```
pub struct MiniJinjaEngine {
    env: Environment<'static>,
    mode: RenderMode,
}

impl MiniJinjaEngine {
    /// Creates an engine for the given mode with goat's filters registered.
    pub fn new(mode: RenderMode) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        match mode {
            RenderMode::Text => env.set_auto_escape_callback(|_name| AutoEscape::None),
            RenderMode::Html => env.set_auto_escape_callback(|_name| AutoEscape::Html),
        }
        register_filters(&mut env);
        Self { env, mode }
    }

    /// Plain-text engine, no escaping.
    pub fn text() -> Self {
        Self::new(RenderMode::Text)
    }

    /// HTML engine, substitutions are entity-escaped.
    pub fn html() -> Self {
        Self::new(RenderMode::Html)
    }

    /// Resolves `{% include %}`, `{% import %}` and `{% extends %}` names
    /// relative to `dir`.
    pub fn with_template_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.env.set_loader(minijinja::path_loader(dir.as_ref().to_path_buf()));
        self
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// This allows registering custom filters or functions.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::text()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn mode(&self) -> RenderMode {
        self.mode
    }

    fn compile(&self, template: &str) -> Result<(), RenderError> {
        self.env
            .template_from_str(template)
            .map(|_| ())
            .map_err(RenderError::syntax)
    }

    fn render_template(
        &self,
        template: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let tmpl = self
            .env
            .template_from_str(template)
            .map_err(RenderError::syntax)?;
        tmpl.render(build_context(data))
            .map_err(RenderError::execution)
    }
}

/// Builds the template context: the document's own keys (for mappings)
/// merged over the [`DOCUMENT_VAR`] binding. Data takes precedence.
fn build_context(data: &serde_json::Value) -> BTreeMap<String, Value> {
    let mut combined = BTreeMap::new();
    combined.insert(DOCUMENT_VAR.to_string(), Value::from_serialize(data));

    if let serde_json::Value::Object(map) = data {
        for (key, value) in map {
            combined.insert(key.clone(), Value::from_serialize(value));
        }
    }
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        count: usize,
    }

    #[test]
    fn test_minijinja_engine_simple() {
        let engine = MiniJinjaEngine::text();
        let data = TestData {
            name: "World".into(),
            count: 42,
        };
        let data_value = serde_json::to_value(&data).unwrap();
        let output = engine
            .render_template("Hello, {{ name }}! ({{ count }})", &data_value)
            .unwrap();
        assert_eq!(output, "Hello, World! (42)");
    }

    #[test]
    fn test_minijinja_engine_with_loop() {
        let engine = MiniJinjaEngine::text();

        #[derive(Serialize)]
        struct ListData {
            items: Vec<String>,
        }

        let data = ListData {
            items: vec!["a".into(), "b".into(), "c".into()],
        };
        let data_value = serde_json::to_value(&data).unwrap();
        let output = engine
            .render_template("{% for item in items %}{{ item }},{% endfor %}", &data_value)
            .unwrap();
        assert_eq!(output, "a,b,c,");
    }

    #[test]
    fn test_document_binding_for_sequences() {
        let engine = MiniJinjaEngine::text();
        let data = json!([{"name": "Alice"}, {"name": "Bob"}]);
        let output = engine
            .render_template(
                "{% for row in document %}{{ row.name }};{% endfor %}",
                &data,
            )
            .unwrap();
        assert_eq!(output, "Alice;Bob;");
    }

    #[test]
    fn test_document_binding_for_scalars() {
        let engine = MiniJinjaEngine::text();
        let output = engine.render_template("[{{ document }}]", &json!(7)).unwrap();
        assert_eq!(output, "[7]");
    }

    #[test]
    fn test_data_key_shadows_document_binding() {
        let engine = MiniJinjaEngine::text();
        let output = engine
            .render_template("{{ document }}", &json!({"document": "mine"}))
            .unwrap();
        assert_eq!(output, "mine");
    }

    #[test]
    fn test_text_mode_is_verbatim() {
        let engine = MiniJinjaEngine::text();
        let output = engine
            .render_template("{{ x }}", &json!({"x": "<b>hi</b> & \"you\""}))
            .unwrap();
        assert_eq!(output, "<b>hi</b> & \"you\"");
    }

    #[test]
    fn test_html_mode_escapes() {
        let engine = MiniJinjaEngine::html();
        let output = engine
            .render_template("{{ x }}", &json!({"x": "<b>hi</b> & \"you\""}))
            .unwrap();
        assert!(!output.contains('<'));
        assert!(!output.contains('>'));
        assert!(!output.contains('"'));
        assert!(output.starts_with("&lt;b&gt;hi&lt;"));
        assert!(output.contains("&amp;"));
        assert!(output.contains("&quot;you&quot;"));
    }

    #[test]
    fn test_html_mode_safe_filter() {
        let engine = MiniJinjaEngine::html();
        let output = engine
            .render_template("{{ x | safe }}", &json!({"x": "<b>hi</b>"}))
            .unwrap();
        assert_eq!(output, "<b>hi</b>");
    }

    #[test]
    fn test_html_mode_safe_value_through_nl() {
        let engine = MiniJinjaEngine::html();
        let output = engine
            .render_template("{{ x | safe | nl }}", &json!({"x": "<b>hi</b>"}))
            .unwrap();
        assert_eq!(output, "<b>hi</b>\n");
    }

    #[test]
    fn test_html_mode_leaves_template_text_alone() {
        let engine = MiniJinjaEngine::html();
        let output = engine
            .render_template(
                "<ul>{% for i in items %}<li>{{ i }}</li>{% endfor %}</ul>",
                &json!({"items": ["a&b"]}),
            )
            .unwrap();
        assert_eq!(output, "<ul><li>a&amp;b</li></ul>");
    }

    #[test]
    fn test_trailing_newline_is_kept() {
        let engine = MiniJinjaEngine::text();
        let output = engine.render_template("{{ a }}\n", &json!({"a": 1})).unwrap();
        assert_eq!(output, "1\n");
    }

    #[test]
    fn test_syntax_error() {
        let engine = MiniJinjaEngine::text();
        let result = engine.render_template("{{ unclosed", &serde_json::Value::Null);
        assert!(matches!(result, Err(RenderError::Syntax(_))));
    }

    #[test]
    fn test_compile_does_not_need_data() {
        let engine = MiniJinjaEngine::html();
        assert!(engine.compile("{{ anything.at.all }}").is_ok());
        assert!(matches!(
            engine.compile("{% for x in %}"),
            Err(RenderError::Syntax(_))
        ));
    }

    #[test]
    fn test_missing_field_is_execution_error() {
        let engine = MiniJinjaEngine::text();
        let result = engine.render_template("{{ missing }}", &json!({"present": 1}));
        assert!(matches!(result, Err(RenderError::Execution(_))));
    }

    #[test]
    fn test_missing_index_is_execution_error() {
        let engine = MiniJinjaEngine::text();
        let result = engine.render_template("{{ items[5] }}", &json!({"items": [1, 2]}));
        assert!(matches!(result, Err(RenderError::Execution(_))));
    }

    #[test]
    fn test_iterating_scalar_is_execution_error() {
        let engine = MiniJinjaEngine::text();
        let result = engine.render_template(
            "{% for c in count %}{{ c }}{% endfor %}",
            &json!({"count": 3}),
        );
        assert!(matches!(result, Err(RenderError::Execution(_))));
    }

    #[test]
    fn test_is_defined_probe() {
        let engine = MiniJinjaEngine::text();
        let output = engine
            .render_template(
                "{% if nick is defined %}{{ nick }}{% else %}anon{% endif %}",
                &json!({}),
            )
            .unwrap();
        assert_eq!(output, "anon");
    }

    #[test]
    fn test_template_dir_include() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("row.txt"), "<{{ row }}>").unwrap();

        let engine = MiniJinjaEngine::text().with_template_dir(dir.path());
        let output = engine
            .render_template(
                "{% for row in rows %}{% include 'row.txt' %}{% endfor %}",
                &json!({"rows": ["a", "b"]}),
            )
            .unwrap();
        assert_eq!(output, "<a><b>");
    }

    #[test]
    fn test_missing_include_is_execution_error() {
        let engine = MiniJinjaEngine::text();
        let result = engine.render_template("{% include 'nope.txt' %}", &json!({}));
        assert!(matches!(result, Err(RenderError::Execution(_))));
    }

    #[test]
    fn test_environment_mut_registers_filter() {
        let mut engine = MiniJinjaEngine::text();
        engine
            .environment_mut()
            .add_filter("shout", |v: String| v.to_uppercase());
        let output = engine
            .render_template("{{ x | shout }}", &json!({"x": "hey"}))
            .unwrap();
        assert_eq!(output, "HEY");
        assert!(engine.environment().get_template("missing").is_err());
    }

    #[test]
    fn test_engine_mode() {
        assert_eq!(MiniJinjaEngine::text().mode(), RenderMode::Text);
        assert_eq!(MiniJinjaEngine::html().mode(), RenderMode::Html);
        assert_eq!(MiniJinjaEngine::default().mode(), RenderMode::Text);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn text_substitution_is_verbatim(value in "[ -~]{0,24}") {
                let output = MiniJinjaEngine::text()
                    .render_template("{{ v }}", &json!({"v": value.clone()}))
                    .unwrap();
                prop_assert_eq!(output, value);
            }

            #[test]
            fn html_substitution_has_no_markup(value in "[ -~]{0,24}") {
                let output = MiniJinjaEngine::html()
                    .render_template("{{ v }}", &json!({"v": value}))
                    .unwrap();
                prop_assert!(!output.contains('<'));
                prop_assert!(!output.contains('>'));
                prop_assert!(!output.contains('"'));
                prop_assert!(!output.contains('\''));
            }
        }
    }
}
