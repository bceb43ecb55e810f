//! Server-rendered practice pages.
//!
//! Templates are embedded at compile time and registered once at startup.
//! Handlebars HTML-escapes every `{{...}}` expression, so practice text is
//! always escaped. Only the stylesheet URL, built from the build id, is
//! emitted raw.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde_json::json;

use crate::build_info::{BUILD_ID, asset_url};
use crate::practice::PracticeConfig;

const HEAD_PARTIAL: &str = include_str!("../templates/head.hbs");
const HOME_TEMPLATE: &str = include_str!("../templates/home.hbs");
const SERVICES_TEMPLATE: &str = include_str!("../templates/services.hbs");

/// Stylesheet served at [`STYLESHEET_PATH`].
pub const STYLESHEET: &str = include_str!("../static/site.css");
pub const STYLESHEET_PATH: &str = "/static/site.css";

pub struct PageRenderer {
    templates: Handlebars<'static>,
}

impl std::fmt::Debug for PageRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageRenderer")
            .field("templates", &self.templates.get_templates().len())
            .finish()
    }
}

impl PageRenderer {
    pub fn new() -> Result<Self, TemplateError> {
        let mut templates = Handlebars::new();
        templates.register_partial("head", HEAD_PARTIAL)?;
        templates.register_template_string("home", HOME_TEMPLATE)?;
        templates.register_template_string("services", SERVICES_TEMPLATE)?;
        Ok(Self { templates })
    }

    /// Landing page.
    pub fn render_home(&self, practice: &PracticeConfig) -> Result<String, RenderError> {
        self.render("home", practice.name, practice)
    }

    /// Service menu with durations.
    pub fn render_services(&self, practice: &PracticeConfig) -> Result<String, RenderError> {
        self.render("services", "Services", practice)
    }

    fn render(
        &self,
        template: &str,
        title: &str,
        practice: &PracticeConfig,
    ) -> Result<String, RenderError> {
        let data = json!({
            "title": title,
            "practice": practice,
            "buildId": BUILD_ID,
            "stylesheet": asset_url(STYLESHEET_PATH),
        });
        self.templates.render(template, &data)
    }
}
