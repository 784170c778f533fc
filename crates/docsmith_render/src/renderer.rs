//! Template rendering.
//!
//! Thin wrapper around the minijinja engine. The renderer compiles a
//! template source once per call and renders it with the canonical data
//! tree as the root variable-resolution context. Undefined variables
//! render as empty strings (lenient mode), so a build with an empty data
//! context still produces output; syntax errors and bad filter
//! invocations do not, and are fatal.

use std::fs;
use std::path::Path;

use minijinja::Environment;
use serde_json::Value;
use tracing::debug;

use crate::error::RenderResult;
use crate::filters;

/// Renderer with docsmith's text filters registered.
pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a renderer with the standard filter set.
    pub fn new() -> Self {
        let mut env = Environment::new();
        filters::register(&mut env);
        Self { env }
    }

    /// Compile a template source and render it against the canonical data.
    pub fn render(&self, source: &str, data: &Value) -> RenderResult<String> {
        let rendered = self.env.render_str(source, data)?;
        Ok(rendered)
    }

    /// Read a template file and render it.
    pub fn render_file(&self, path: &Path, data: &Value) -> RenderResult<String> {
        debug!("Executing render operation for {:?}", path);
        let source = fs::read_to_string(path)?;
        self.render(&source, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use serde_json::json;

    #[test]
    fn test_variable_substitution_round_trip() {
        let renderer = TemplateRenderer::new();
        let data = json!({"name": "Ada"});
        let rendered = renderer.render("Hello {{ name }}", &data).unwrap();
        assert_eq!(rendered, "Hello Ada");
    }

    #[test]
    fn test_nested_lookup_and_loop() {
        let renderer = TemplateRenderer::new();
        let data = json!({"data": [{"id": "1"}, {"id": "2"}]});
        let rendered = renderer
            .render("{% for row in data %}{{ row.id }};{% endfor %}", &data)
            .unwrap();
        assert_eq!(rendered, "1;2;");
    }

    #[test]
    fn test_empty_context_renders_undefined_as_blank() {
        let renderer = TemplateRenderer::new();
        let data = Value::Object(serde_json::Map::new());
        let rendered = renderer.render("Hello {{ name }}!", &data).unwrap();
        assert_eq!(rendered, "Hello !");
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let renderer = TemplateRenderer::new();
        let err = renderer
            .render("{% endfor %}", &json!({}))
            .unwrap_err();
        assert!(matches!(err, RenderError::Syntax(_)));
    }

    #[test]
    fn test_unknown_filter_is_render_error() {
        let renderer = TemplateRenderer::new();
        let err = renderer
            .render("{{ name | nosuchfilter }}", &json!({"name": "x"}))
            .unwrap_err();
        assert!(matches!(err, RenderError::Render(_)));
    }

    #[test]
    fn test_custom_filters_are_registered() {
        let renderer = TemplateRenderer::new();
        let rendered = renderer
            .render("{{ title | slugify }}", &json!({"title": "My Doc!"}))
            .unwrap();
        assert_eq!(rendered, "My_Doc");
    }
}
