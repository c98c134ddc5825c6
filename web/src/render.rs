use handlebars::Handlebars;
use serde_json::{json, Value};
use std::path::Path;
use thiserror::Error;
use unbored_core::Activity;

/// Registry name of the single page template.
const INDEX_TEMPLATE: &str = "index";

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to load template '{name}': {source}")]
    Template {
        name: &'static str,
        #[source]
        source: handlebars::TemplateError,
    },

    #[error("failed to render page: {0}")]
    Eval(#[from] handlebars::RenderError),
}

/// What a finished request renders: the suggestion it found, or the
/// message explaining why there is none.
#[derive(Debug, Clone)]
pub enum Page {
    Activity(Activity),
    Error(String),
}

impl Page {
    /// Template context for this page. Exactly one of the two keys is
    /// present; the template never sees both.
    pub fn context(&self) -> Value {
        match self {
            Page::Activity(activity) => json!({ "activity": activity }),
            Page::Error(message) => json!({ "error_Message": message }),
        }
    }
}

/// Renders pages from templates loaded once at startup.
///
/// A missing or broken template file is a construction error, not a
/// per-request condition.
#[derive(Debug)]
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    /// Load the page template from `templates_dir`.
    pub fn from_dir(templates_dir: &Path) -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_file(INDEX_TEMPLATE, templates_dir.join("index.hbs"))
            .map_err(|source| RenderError::Template {
                name: INDEX_TEMPLATE,
                source,
            })?;

        Ok(Self { registry })
    }

    /// Render the page to an HTML string.
    pub fn render(&self, page: &Page) -> Result<String, RenderError> {
        Ok(self.registry.render(INDEX_TEMPLATE, &page.context())?)
    }
}
