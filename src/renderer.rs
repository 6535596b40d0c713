//! Template engines used to render generator templates.
//! The engine is chosen per generator by the template's `type` discriminator.

use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::Environment;
use std::fmt;
use std::str::FromStr;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Source data the template is rendered against
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Template engines that can be named in a template reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Mustache,
    Jinja,
}

impl FromStr for TemplateKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mustache" => Ok(TemplateKind::Mustache),
            "jinja" => Ok(TemplateKind::Jinja),
            other => Err(Error::UnsupportedTemplateType(other.to_string())),
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateKind::Mustache => write!(f, "mustache"),
            TemplateKind::Jinja => write!(f, "jinja"),
        }
    }
}

impl TemplateKind {
    /// Creates the renderer for this engine.
    pub fn renderer(self) -> Box<dyn TemplateRenderer> {
        match self {
            TemplateKind::Mustache => Box::new(MustacheRenderer::new()),
            TemplateKind::Jinja => Box::new(MiniJinjaRenderer::new()),
        }
    }
}

/// Mustache rendering: variables, triple-stash raw output, sections,
/// inverted sections, the implicit iterator `{{.}}` and delimiter changes.
#[derive(Default)]
pub struct MustacheRenderer;

impl MustacheRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MustacheRenderer {
    /// Missing variables render as empty strings. `{{var}}` escapes HTML
    /// special characters (`&`, `<`, `>`, `"`); `/`, `` ` `` and `=` are written as is.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let to_error = |e: mustache::Error| Error::Render {
            template: TemplateKind::Mustache.to_string(),
            message: e.to_string(),
        };

        let tmpl = mustache::compile_str(template).map_err(to_error)?;
        tmpl.render_to_string(context).map_err(to_error)
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the case conversion filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Trailing newlines delimit the last output file's content.
        env.set_keep_trailing_newline(true);
        env.add_filter("snake_case", snake_case);
        env.add_filter("camel_case", camel_case);
        env.add_filter("pascal_case", pascal_case);
        env.add_filter("kebab_case", kebab_case);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let to_error = |e: minijinja::Error| Error::Render {
            template: TemplateKind::Jinja.to_string(),
            message: e.to_string(),
        };

        let mut env = self.env.clone();
        env.add_template("temp", template).map_err(to_error)?;
        let tmpl = env.get_template("temp").map_err(to_error)?;
        tmpl.render(context).map_err(to_error)
    }
}

fn snake_case(value: String) -> String {
    value.to_snake_case()
}

fn camel_case(value: String) -> String {
    value.to_camel_case()
}

fn pascal_case(value: String) -> String {
    value.to_pascal_case()
}

fn kebab_case(value: String) -> String {
    value.to_kebab_case()
}
