//! Internal schema: the canonical shape every page template consumes.
//!
//! Unlike campaign input, `null` is never accepted as "absent" here. A field
//! is either omitted or holds a value of the declared type.

use crate::checker::{Checker, Object};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalSchema {
    pub business: Business,
    pub contact: Contact,
    pub hero: Hero,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_props: Option<ValueProps>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CallToAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Gallery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_detail: Option<ProjectDetail>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_plans: Option<FloorPlans>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_interest: Option<RegisterInterest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal: Option<Legal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Vec<NavItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Contact details. `country_code` keeps its snake_case key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_buttons: Option<Vec<CtaButton>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_indicators: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaVariant {
    #[default]
    Primary,
    Secondary,
}

impl CtaVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    #[serde(default)]
    pub variant: CtaVariant,
}

impl CtaButton {
    pub fn new(text: impl Into<String>, href: impl Into<String>, variant: CtaVariant) -> Self {
        Self { text: text.into(), href: href.into(), variant }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usps: Option<Vec<Usp>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<Stat>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Usp {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub cta_text: String,
    pub cta_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_badges: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub images: Vec<GalleryImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_out: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transportation: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearby_amenities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<Overview>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<Vec<Specification>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<AmenityGroup>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    pub category: String,
    pub items: Vec<SpecItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecItem {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AmenityGroup {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlans {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub plans: Vec<FloorPlan>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FloorPlan {
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInterest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Legal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy_policy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<Vec<SocialLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_links: Option<Vec<Link>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_links: Option<Vec<Link>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Label/href pair. Both halves are optional so that incomplete entries
/// survive validation and get filtered by the mapper.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: Some(label.into()), href: Some(href.into()) }
    }

    /// Both label and href hold non-whitespace text.
    pub fn is_complete(&self) -> bool {
        let filled = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.trim().is_empty());
        filled(&self.label) && filled(&self.href)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

impl NavItem {
    pub fn anchor(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: Some(label.into()), href: Some(href.into()), external: None }
    }

    pub fn link(&self) -> Link {
        Link { label: self.label.clone(), href: self.href.clone() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Anchor navigation used whenever a schema carries no usable entries.
pub const DEFAULT_NAVIGATION: [(&str, &str); 7] = [
    ("Home", "#home"),
    ("About", "#about"),
    ("Project Details", "#project-detail"),
    ("Gallery", "#gallery"),
    ("Floor Plans", "#floor-plans"),
    ("Location", "#location"),
    ("Register Interest", "#register-interest"),
];

pub fn default_navigation() -> Vec<NavItem> {
    DEFAULT_NAVIGATION
        .iter()
        .map(|(label, href)| NavItem::anchor(*label, *href))
        .collect()
}

const CTA_VARIANTS: [(&str, CtaVariant); 2] =
    [("primary", CtaVariant::Primary), ("secondary", CtaVariant::Secondary)];

/// Validate a JSON value against the internal schema.
pub fn validate_internal(raw: &Value) -> Result<InternalSchema, ValidationError> {
    let mut checker = Checker::strict();
    let schema = match checker.root(raw) {
        Some(root) => read_schema(&mut checker, root),
        None => InternalSchema::default(),
    };
    checker.finish(schema)
}

/// Parse schema JSON text (the user-edit round trip), then validate it.
pub fn parse_internal(text: &str) -> Result<InternalSchema, ValidationError> {
    let raw: Value = serde_json::from_str(text).map_err(|e| ValidationError::malformed_json(&e))?;
    validate_internal(&raw)
}

fn read_schema(c: &mut Checker, o: &Object) -> InternalSchema {
    InternalSchema {
        business: c.req_object(o, "business", |c, o| Business {
            name: c.req_text(o, "name"),
            description: c.opt_str(o, "description"),
            logo: c.opt_str(o, "logo"),
            category: c.opt_str(o, "category"),
        }),
        contact: c.req_object(o, "contact", |c, o| Contact {
            phone: c.opt_str(o, "phone"),
            email: c.opt_str(o, "email"),
            address: c.opt_str(o, "address"),
            mobile: c.opt_str(o, "mobile"),
            country_code: c.opt_str(o, "country_code"),
        }),
        hero: c.req_object(o, "hero", read_hero),
        value_props: c.opt_object(o, "valueProps", |c, o| ValueProps {
            title: c.opt_str(o, "title"),
            subtitle: c.opt_str(o, "subtitle"),
            usps: c.opt_list(o, "usps", |c, o| Usp {
                title: c.req_str(o, "title"),
                description: c.req_str(o, "description"),
                icon: c.opt_str(o, "icon"),
            }),
            stats: c.opt_list(o, "stats", |c, o| Stat {
                number: c.req_str(o, "number"),
                label: c.req_str(o, "label"),
            }),
        }),
        cta: c.opt_object(o, "cta", |c, o| CallToAction {
            title: c.req_str(o, "title"),
            subtitle: c.opt_str(o, "subtitle"),
            cta_text: c.req_str(o, "ctaText"),
            cta_link: c.req_str(o, "ctaLink"),
            background_image: c.opt_str(o, "backgroundImage"),
            trust_badges: c.opt_str_list(o, "trustBadges"),
        }),
        gallery: c.opt_object(o, "gallery", read_gallery),
        location: c.opt_object(o, "location", |c, o| Location {
            title: c.opt_str(o, "title"),
            subtitle: c.opt_str(o, "subtitle"),
            address: c.opt_str(o, "address"),
            transportation: c.opt_str_list(o, "transportation"),
            nearby_amenities: c.opt_str_list(o, "nearbyAmenities"),
            map_image: c.opt_str(o, "mapImage"),
        }),
        project_detail: c.opt_object(o, "projectDetail", read_project_detail),
        floor_plans: c.opt_object(o, "floorPlans", |c, o| FloorPlans {
            title: c.opt_str(o, "title"),
            subtitle: c.opt_str(o, "subtitle"),
            plans: c.req_list(o, "plans", read_floor_plan),
        }),
        register_interest: c.opt_object(o, "registerInterest", |c, o| RegisterInterest {
            title: c.opt_str(o, "title"),
            subtitle: c.opt_str(o, "subtitle"),
            business_name: c.opt_str(o, "businessName"),
            contact_info: c.opt_object(o, "contactInfo", |c, o| ContactInfo {
                email: c.opt_str(o, "email"),
                phone: c.opt_str(o, "phone"),
            }),
        }),
        legal: c.opt_object(o, "legal", |c, o| Legal {
            privacy_policy: c.opt_str(o, "privacyPolicy"),
            terms_of_service: c.opt_str(o, "termsOfService"),
            disclaimers: c.opt_str_list(o, "disclaimers"),
        }),
        footer: c.opt_object(o, "footer", read_footer),
        navigation: c.opt_list(o, "navigation", |c, o| NavItem {
            label: c.opt_str(o, "label"),
            href: c.opt_str(o, "href"),
            external: c.opt_bool(o, "external"),
        }),
        metadata: c.opt_object(o, "metadata", |c, o| Metadata {
            campaign_id: c.opt_str(o, "campaignId"),
            campaign_name: c.opt_str(o, "campaignName"),
            platform: c.opt_str(o, "platform"),
            template: c.opt_str(o, "template"),
            theme: c.opt_str(o, "theme"),
        }),
    }
}

fn read_hero(c: &mut Checker, o: &Object) -> Hero {
    Hero {
        title: c.req_text(o, "title"),
        subtitle: c.opt_str(o, "subtitle"),
        description: c.opt_str(o, "description"),
        background_image: c.opt_str(o, "backgroundImage"),
        cta_buttons: c.opt_list(o, "ctaButtons", |c, o| CtaButton {
            text: c.req_str(o, "text"),
            href: c.req_str(o, "href"),
            variant: c.opt_choice(o, "variant", &CTA_VARIANTS).unwrap_or_default(),
        }),
        trust_indicators: c.opt_str_list(o, "trustIndicators"),
    }
}

fn read_gallery(c: &mut Checker, o: &Object) -> Gallery {
    Gallery {
        title: c.opt_str(o, "title"),
        subtitle: c.opt_str(o, "subtitle"),
        images: c.req_list(o, "images", |c, o| GalleryImage {
            src: c.req_str(o, "src"),
            alt: c.req_str(o, "alt"),
            category: c.opt_str(o, "category"),
            title: c.opt_str(o, "title"),
            call_out: c.opt_str(o, "callOut"),
            call_to_action: c.opt_str(o, "callToAction"),
        }),
        categories: c.opt_str_list(o, "categories"),
    }
}

fn read_project_detail(c: &mut Checker, o: &Object) -> ProjectDetail {
    ProjectDetail {
        title: c.opt_str(o, "title"),
        subtitle: c.opt_str(o, "subtitle"),
        overview: c.opt_object(o, "overview", |c, o| Overview {
            title: c.req_str(o, "title"),
            description: c.req_str(o, "description"),
            features: c.req_str_list(o, "features"),
        }),
        specifications: c.opt_list(o, "specifications", |c, o| Specification {
            category: c.req_str(o, "category"),
            items: c.req_list(o, "items", |c, o| SpecItem {
                label: c.req_str(o, "label"),
                value: c.req_str(o, "value"),
            }),
        }),
        amenities: c.opt_list(o, "amenities", |c, o| AmenityGroup {
            category: c.req_str(o, "category"),
            items: c.req_str_list(o, "items"),
        }),
    }
}

fn read_floor_plan(c: &mut Checker, o: &Object) -> FloorPlan {
    FloorPlan {
        name: c.req_str(o, "name"),
        plan_type: c.req_str(o, "type"),
        size: c.req_str(o, "size"),
        bedrooms: c.opt_number(o, "bedrooms"),
        bathrooms: c.opt_number(o, "bathrooms"),
        price: c.opt_str(o, "price"),
        image: c.opt_str(o, "image"),
        features: c.opt_str_list(o, "features"),
    }
}

fn read_footer(c: &mut Checker, o: &Object) -> Footer {
    let link = |c: &mut Checker, o: &Object| Link {
        label: c.opt_str(o, "label"),
        href: c.opt_str(o, "href"),
    };
    Footer {
        description: c.opt_str(o, "description"),
        social_links: c.opt_list(o, "socialLinks", |c, o| SocialLink {
            platform: c.opt_str(o, "platform"),
            url: c.opt_str(o, "url"),
        }),
        navigation_links: c.opt_list(o, "navigationLinks", link),
        legal_links: c.opt_list(o, "legalLinks", link),
    }
}
