//! Template set loading.
//!
//! A template set is a YAML file of named handlebars templates. Every
//! template is also registered as a partial, and `entry` names the one that
//! renders a full page.

use crate::RenderError;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

const SPRINGLEAF_YAML: &str = include_str!("../templates/springleaf.yaml");

static SPRINGLEAF: Lazy<Result<TemplatesFile, String>> =
    Lazy::new(|| {
        TemplatesFile::from_yaml(SPRINGLEAF_YAML).map_err(|e| match e {
            RenderError::Template(msg) | RenderError::Render(msg) => msg,
        })
    });

/// Top-level templates file structure
#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesFile {
    pub version: String,
    pub name: String,
    #[serde(default = "default_entry")]
    pub entry: String,
    pub templates: HashMap<String, Template>,
}

/// A single template definition
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    pub description: String,
    pub template: String,
}

fn default_entry() -> String {
    "page".to_string()
}

impl TemplatesFile {
    /// Load templates from a YAML file
    pub fn load(path: &str) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RenderError::Template(format!("failed to read {}: {}", path, e)))?;
        Self::from_yaml(&content)
    }

    /// Parse templates from YAML content
    pub fn from_yaml(yaml: &str) -> Result<Self, RenderError> {
        let file: TemplatesFile = serde_yaml::from_str(yaml)
            .map_err(|e| RenderError::Template(format!("invalid templates YAML: {}", e)))?;
        if !file.templates.contains_key(&file.entry) {
            return Err(RenderError::Template(format!(
                "entry template '{}' is not defined in set '{}'",
                file.entry, file.name
            )));
        }
        Ok(file)
    }

    /// The built-in `springleaf` set, parsed once per process
    pub fn springleaf() -> Result<Self, RenderError> {
        SPRINGLEAF.clone().map_err(RenderError::Template)
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name)
    }

    /// Template names, sorted
    pub fn list_templates(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}
