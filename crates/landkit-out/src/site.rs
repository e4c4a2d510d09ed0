//! Generated site bundle: the rendered page plus a README, keyed by filename.

use chrono::{DateTime, Utc};
use landkit_core::InternalSchema;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use crate::mapper::map_to_view_model;
use crate::renderer::SiteRenderer;
use crate::slug::{slugify, title_case};
use crate::RenderError;

/// Slug used when the business name has no word characters
pub const DEFAULT_SITE_SLUG: &str = "business-website";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub business_name: String,
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSite {
    pub slug: String,
    pub generated_at: DateTime<Utc>,
    pub files: BTreeMap<String, String>,
    pub metadata: SiteMetadata,
}

impl GeneratedSite {
    pub fn file(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|s| s.as_str())
    }
}

/// Render `schema` with `renderer` into an `index.html` + `README.md` bundle.
pub fn generate_site(
    schema: &InternalSchema,
    renderer: &SiteRenderer,
) -> Result<GeneratedSite, RenderError> {
    generate_site_at(schema, renderer, Utc::now())
}

pub(crate) fn generate_site_at(
    schema: &InternalSchema,
    renderer: &SiteRenderer,
    generated_at: DateTime<Utc>,
) -> Result<GeneratedSite, RenderError> {
    let view_model = map_to_view_model(schema);
    let html = renderer.render_page(&view_model)?;

    let slug = match slugify(&schema.business.name) {
        s if s.is_empty() => DEFAULT_SITE_SLUG.to_string(),
        s => s,
    };

    let metadata = SiteMetadata {
        business_name: schema.business.name.clone(),
        template: renderer.template_set().to_string(),
        campaign_name: schema.metadata.as_ref().and_then(|m| m.campaign_name.clone()),
    };

    let mut files = BTreeMap::new();
    files.insert("index.html".to_string(), html);
    files.insert("README.md".to_string(), readme(&metadata, &slug, generated_at));

    info!(slug = %slug, template = %metadata.template, "generated site");

    Ok(GeneratedSite { slug, generated_at, files, metadata })
}

fn readme(metadata: &SiteMetadata, slug: &str, generated_at: DateTime<Utc>) -> String {
    let mut out = format!("# {}\n\n", metadata.business_name);
    out.push_str(&format!(
        "Static landing page built with the {} template.\n\n",
        title_case(&metadata.template)
    ));
    if let Some(campaign) = &metadata.campaign_name {
        out.push_str(&format!("- Campaign: {}\n", campaign));
    }
    out.push_str(&format!("- Site: {}\n", slug));
    out.push_str(&format!("- Generated: {}\n\n", generated_at.to_rfc3339()));
    out.push_str("## Files\n\n- `index.html`: the complete page, styles inlined\n");
    out.push_str("\nOpen `index.html` in a browser or upload it to any static host.\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use landkit_core::internal::{Business, Hero, Metadata};

    fn schema(name: &str) -> InternalSchema {
        InternalSchema {
            business: Business { name: name.to_string(), ..Default::default() },
            hero: Hero {
                title: "Live Where The Park Begins".to_string(),
                subtitle: Some("Garden homes".to_string()),
                ..Default::default()
            },
            metadata: Some(Metadata {
                campaign_name: Some("Spring launch".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_bundle_files_and_slug() {
        let renderer = SiteRenderer::springleaf().unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let site = generate_site_at(&schema("Springleaf Residence"), &renderer, at).unwrap();

        assert_eq!(site.slug, "springleaf-residence");
        assert_eq!(site.files.keys().collect::<Vec<_>>(), vec!["README.md", "index.html"]);
        assert!(site.file("index.html").unwrap().contains("Live Where The Park Begins"));

        let readme = site.file("README.md").unwrap();
        assert!(readme.starts_with("# Springleaf Residence"));
        assert!(readme.contains("Springleaf template"));
        assert!(readme.contains("- Campaign: Spring launch"));
        assert!(readme.contains("2026-03-01T09:30:00+00:00"));
    }

    #[test]
    fn test_slug_falls_back() {
        let renderer = SiteRenderer::springleaf().unwrap();
        let site = generate_site(&schema("!!!"), &renderer).unwrap();
        assert_eq!(site.slug, DEFAULT_SITE_SLUG);
    }
}
