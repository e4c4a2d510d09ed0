//! Landkit-OUT: internal schema to view-model and static page
//!
//! [`map_to_view_model`] resolves every optional schema field to a concrete
//! value the templates can print. [`SiteRenderer`] turns the view-model into a
//! single HTML page with handlebars, and [`generate_site`] bundles that page
//! with a README.
//!
//! # Example
//!
//! ```ignore
//! use landkit_out::{generate_site, map_to_view_model, SiteRenderer};
//!
//! let view_model = map_to_view_model(&schema);
//! let renderer = SiteRenderer::springleaf()?;
//! let html = renderer.render_page(&view_model)?;
//!
//! let site = generate_site(&schema, &renderer)?;
//! for (name, contents) in &site.files {
//!     std::fs::write(name, contents)?;
//! }
//! ```

pub mod links;
pub mod mapper;
pub mod renderer;
pub mod site;
pub mod slug;
pub mod templates;
pub mod view_model;

pub use mapper::map_to_view_model;
pub use renderer::SiteRenderer;
pub use site::{generate_site, GeneratedSite, SiteMetadata};
pub use templates::TemplatesFile;
pub use view_model::TemplateViewModel;

use thiserror::Error;

/// Errors that can occur while loading templates or rendering
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("RENDER/template load failed: {0}")]
    Template(String),
    #[error("RENDER/render failed: {0}")]
    Render(String),
}

impl From<RenderError> for landkit_core::LandkitError {
    fn from(err: RenderError) -> Self {
        landkit_core::LandkitError::Render(err.to_string())
    }
}
