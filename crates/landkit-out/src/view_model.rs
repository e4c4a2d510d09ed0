//! Page-section props derived from the internal schema.
//!
//! Every field here is concrete: the mapper has already resolved optional
//! schema fields to their defaults. Whole sections stay `None` when the schema
//! omits them, except the header, hero, footer and register-interest form.

use landkit_core::internal::CtaVariant;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateViewModel {
    pub project_name: String,
    pub header: HeaderView,
    pub hero: HeroView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_proposition: Option<ValuePropositionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta: Option<CtaView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<GalleryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<LocationView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_detail: Option<ProjectDetailView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_plans: Option<FloorPlansView>,
    pub footer: FooterView,
    pub register_interest: RegisterInterestView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub project_name: String,
    pub logo: String,
    pub navigation: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    pub external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub background_image: String,
    pub cta_buttons: Vec<ButtonView>,
    pub trust_indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonView {
    pub text: String,
    pub href: String,
    pub variant: CtaVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuePropositionView {
    pub title: String,
    pub subtitle: String,
    pub usps: Vec<UspView>,
    pub stats: Vec<StatView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UspView {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub number: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaView {
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub cta_link: String,
    pub background_image: String,
    pub trust_badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryView {
    pub title: String,
    pub subtitle: String,
    pub images: Vec<ImageView>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageView {
    pub src: String,
    pub alt: String,
    pub category: String,
    pub title: String,
    pub call_out: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationView {
    pub title: String,
    pub subtitle: String,
    pub address: String,
    pub transportation: Vec<String>,
    pub nearby_amenities: Vec<String>,
    pub map_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetailView {
    pub title: String,
    pub subtitle: String,
    pub overview: OverviewView,
    pub specifications: Vec<SpecificationView>,
    pub amenities: Vec<AmenityView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverviewView {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecificationView {
    pub category: String,
    pub items: Vec<SpecItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpecItemView {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmenityView {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorPlansView {
    pub title: String,
    pub subtitle: String,
    pub plans: Vec<FloorPlanView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorPlanView {
    pub name: String,
    #[serde(rename = "type")]
    pub plan_type: String,
    pub size: String,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub price: String,
    pub image: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterView {
    pub project_name: String,
    pub description: String,
    pub contact: FooterContact,
    pub social_links: Vec<SocialLinkView>,
    pub navigation_links: Vec<LinkView>,
    pub legal_links: Vec<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterContact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkView {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterInterestView {
    pub title: String,
    pub subtitle: String,
    pub business_name: String,
    pub contact_info: ContactInfoView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactInfoView {
    pub email: String,
    pub phone: String,
}
