//! Integration tests for landkit-out: mapping, rendering and site bundles.

use landkit_core::{validate_internal, InternalSchema};
use landkit_out::{generate_site, map_to_view_model, SiteRenderer};
use serde_json::json;

fn springleaf_schema() -> InternalSchema {
    validate_internal(&json!({
        "business": {
            "name": "Springleaf <Residence>",
            "description": "Luxury condominiums by the park",
            "logo": "https://cdn.example.com/logo.png"
        },
        "contact": { "mobile": "+65 9123 4567", "email": "hello@springleaf.example.com" },
        "hero": {
            "title": "Live Above The Park",
            "subtitle": "Garden homes & sky terraces",
            "trustIndicators": ["Freehold", "TOP 2026"]
        },
        "valueProps": {
            "usps": [{ "title": "Park views", "description": "Every unit faces green" }],
            "stats": [{ "number": "120", "label": "Units" }]
        },
        "gallery": {
            "images": [{ "src": "https://cdn.example.com/b1.jpg", "alt": "Pool deck", "category": "Facilities" }]
        },
        "floorPlans": {
            "plans": [{ "name": "Type A", "type": "2BR", "size": "800 sqft", "bedrooms": 2, "bathrooms": 2 }]
        },
        "location": { "address": "1 Park Lane" },
        "navigation": [
            { "label": "Gallery", "href": "#gallery" },
            { "label": "Broken" }
        ]
    }))
    .unwrap()
}

#[test]
fn test_mapping_is_idempotent() {
    let schema = springleaf_schema();
    assert_eq!(map_to_view_model(&schema), map_to_view_model(&schema));
}

#[test]
fn test_navigation_filter_keeps_one_entry() {
    let vm = map_to_view_model(&springleaf_schema());
    assert_eq!(vm.header.navigation.len(), 1);
    assert_eq!(vm.header.navigation[0].href, "#gallery");
}

#[test]
fn test_footer_contact_falls_back() {
    let vm = map_to_view_model(&springleaf_schema());
    assert_eq!(vm.footer.contact.phone, "+65 9123 4567");
    assert_eq!(vm.footer.contact.address, "1 Park Lane");
    assert_eq!(vm.register_interest.contact_info.email, "hello@springleaf.example.com");
}

#[test]
fn test_rendered_page_contains_sections_and_escapes() {
    let renderer = SiteRenderer::springleaf().unwrap();
    let html = renderer.render_page(&map_to_view_model(&springleaf_schema())).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Springleaf &lt;Residence&gt;"));
    assert!(!html.contains("Springleaf <Residence>"));
    assert!(html.contains("Garden homes &amp; sky terraces"));
    assert!(html.contains("Freehold · TOP 2026"));
    assert!(html.contains("id=\"gallery\""));
    assert!(html.contains("data-category=\"facilities\""));
    assert!(html.contains("2 bed · 2 bath"));
    assert!(html.contains("href=\"tel:+6591234567\""));
    assert!(html.contains("<strong>120</strong>"));
    // hero falls back to a single Learn More button
    assert!(html.contains("href=\"#about\">Learn More</a>"));
}

#[test]
fn test_omitted_sections_are_not_rendered() {
    let schema = validate_internal(&json!({
        "business": { "name": "Minimal Co" },
        "contact": {},
        "hero": { "title": "Hello There Friend" }
    }))
    .unwrap();
    let renderer = SiteRenderer::springleaf().unwrap();
    let html = renderer.render_page(&map_to_view_model(&schema)).unwrap();

    assert!(!html.contains("id=\"floor-plans\""));
    assert!(!html.contains("id=\"location\""));
    assert!(html.contains("id=\"register-interest\""));
    // default anchor navigation
    assert!(html.contains("href=\"#floor-plans\""));
}

#[test]
fn test_untrusted_urls_never_reach_the_page() {
    let schema = validate_internal(&json!({
        "business": { "name": "Hostile Co" },
        "contact": {},
        "hero": {
            "title": "Nothing To See Here",
            "backgroundImage": "x'); background:url('https://evil.example/p.gif"
        },
        "navigation": [{ "label": "Home", "href": "javascript:alert(1)" }],
        "cta": { "title": "Act", "ctaText": "Go", "ctaLink": "javascript:alert(document.cookie)" },
        "footer": { "legalLinks": [{ "label": "Privacy", "href": "javascript:steal()" }] }
    }))
    .unwrap();
    let renderer = SiteRenderer::springleaf().unwrap();
    let html = renderer.render_page(&map_to_view_model(&schema)).unwrap();

    assert!(!html.to_lowercase().contains("javascript:"));
    assert!(!html.contains("evil.example"));
    assert!(html.contains("href=\"#\">Home</a>"));
    assert!(html.contains("href=\"#\">Go</a>"));
}

#[test]
fn test_generate_site_bundle() {
    let renderer = SiteRenderer::springleaf().unwrap();
    let site = generate_site(&springleaf_schema(), &renderer).unwrap();

    assert_eq!(site.slug, "springleaf-residence");
    assert_eq!(site.metadata.template, "springleaf");
    assert!(site.file("index.html").is_some());
    assert!(site.file("README.md").unwrap().contains("Springleaf template"));
}
