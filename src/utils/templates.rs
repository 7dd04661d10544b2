use handlebars::Handlebars;
use serde::Serialize;

use crate::types::error::AppError;
use crate::types::user::Principal;

const PAGE: &str = "page";

#[derive(Serialize)]
pub struct Link {
    pub href: String,
    pub title: &'static str,
}

#[derive(Serialize)]
pub struct Field {
    pub name: &'static str,
    pub kind: &'static str,
}

#[derive(Serialize)]
pub struct Form {
    pub endpoint: &'static str,
    pub fields: &'static [Field],
    pub submit: &'static str,
}

/// Everything the page shell interpolates. Handlebars escapes each value.
#[derive(Serialize)]
pub struct PageView<'a> {
    pub app_name: &'a str,
    pub title: &'a str,
    pub blurb: &'a str,
    pub user: Option<Principal>,
    pub links: Vec<Link>,
    pub greet: bool,
    pub form: Option<&'a Form>,
}

/// Page templates, compiled once at startup.
pub struct PageRenderer {
    registry: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);
        registry
            .register_template_string(PAGE, include_str!("../../templates/page.hbs"))
            .map_err(|e| AppError::Internal(format!("page template: {e}")))?;
        Ok(Self { registry })
    }

    pub fn render(&self, view: &PageView<'_>) -> Result<String, AppError> {
        self.registry
            .render(PAGE, view)
            .map_err(|e| AppError::Internal(format!("render failed: {e}")))
    }
}
