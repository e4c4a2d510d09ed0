//! Handlebars rendering of the view-model.
//!
//! Custom helpers:
//! - join: join a string array with a separator
//! - default: fall back when a value is missing or empty
//! - number: print whole numbers without a trailing `.0`
//! - tel: `tel:` URI from a display phone number
//! - slug: element id from free text

use handlebars::{
    html_escape, Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext,
};
use serde_json::Value;
use tracing::debug;

use crate::slug::element_id;
use crate::templates::TemplatesFile;
use crate::view_model::TemplateViewModel;
use crate::RenderError;

/// Compiled template set with registered helpers
pub struct SiteRenderer {
    handlebars: Handlebars<'static>,
    templates: TemplatesFile,
}

impl SiteRenderer {
    pub fn new(templates: TemplatesFile) -> Result<Self, RenderError> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);

        handlebars.register_helper("join", Box::new(JoinHelper));
        handlebars.register_helper("default", Box::new(DefaultHelper));
        handlebars.register_helper("number", Box::new(NumberHelper));
        handlebars.register_helper("tel", Box::new(TelHelper));
        handlebars.register_helper("slug", Box::new(SlugHelper));

        for (name, template) in &templates.templates {
            handlebars
                .register_template_string(name, &template.template)
                .map_err(|e| RenderError::Template(format!("{}: {}", name, e)))?;
        }
        debug!(set = %templates.name, count = templates.templates.len(), "registered templates");

        Ok(Self { handlebars, templates })
    }

    pub fn springleaf() -> Result<Self, RenderError> {
        Self::new(TemplatesFile::springleaf()?)
    }

    pub fn load(path: &str) -> Result<Self, RenderError> {
        Self::new(TemplatesFile::load(path)?)
    }

    pub fn template_set(&self) -> &str {
        &self.templates.name
    }

    /// Render the set's entry template into a full HTML page
    pub fn render_page(&self, view_model: &TemplateViewModel) -> Result<String, RenderError> {
        let data = serde_json::to_value(view_model).map_err(|e| RenderError::Render(e.to_string()))?;
        self.render(&self.templates.entry, &data)
    }

    /// Render a named template with data
    pub fn render(&self, template_name: &str, data: &Value) -> Result<String, RenderError> {
        self.handlebars
            .render(template_name, data)
            .map_err(|e| RenderError::Render(format!("{}: {}", template_name, e)))
    }

    pub fn list_templates(&self) -> Vec<&str> {
        self.templates.list_templates()
    }
}

fn param_str<'a>(h: &'a Helper, index: usize) -> Option<&'a str> {
    h.param(index).and_then(|v| v.value().as_str())
}

/// Join an array with a separator
struct JoinHelper;

impl HelperDef for JoinHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let separator = param_str(h, 1).unwrap_or(", ");

        if let Some(items) = h.param(0).and_then(|v| v.value().as_array()) {
            let strings: Vec<String> = items
                .iter()
                .map(|v| v.as_str().map(String::from).unwrap_or_else(|| v.to_string()))
                .collect();
            out.write(&html_escape(&strings.join(separator)))?;
        }
        Ok(())
    }
}

/// Default value helper
struct DefaultHelper;

impl HelperDef for DefaultHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let fallback = param_str(h, 1).unwrap_or("");

        let text = match h.param(0).map(|v| v.value()) {
            Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
            Some(Value::Null) | Some(Value::String(_)) | None => fallback.to_string(),
            Some(other) => other.to_string(),
        };
        out.write(&html_escape(&text))?;
        Ok(())
    }
}

/// Whole numbers print without a fraction (2.0 -> "2")
struct NumberHelper;

impl HelperDef for NumberHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let value = h.param(0).and_then(|v| v.value().as_f64()).unwrap_or(0.0);
        out.write(&format_number(value))?;
        Ok(())
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// `tel:` link target keeping only digits and a leading plus
struct TelHelper;

impl HelperDef for TelHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        out.write(&tel_uri(param_str(h, 0).unwrap_or("")))?;
        Ok(())
    }
}

fn tel_uri(phone: &str) -> String {
    let trimmed = phone.trim();
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if trimmed.starts_with('+') {
        format!("tel:+{}", digits)
    } else {
        format!("tel:{}", digits)
    }
}

/// Element id from free text
struct SlugHelper;

impl HelperDef for SlugHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _r: &'reg Handlebars<'reg>,
        _ctx: &'rc Context,
        _rc: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        out.write(&element_id(param_str(h, 0).unwrap_or("")))?;
        Ok(())
    }
}
