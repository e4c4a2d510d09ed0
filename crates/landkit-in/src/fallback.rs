//! Rule-based schema synthesis used whenever generation fails.
//!
//! A pure function of the campaign. Contact details and legal links are only
//! ever copied from the input, never invented.

use landkit_core::campaign::CampaignInput;
use landkit_core::internal::{
    default_navigation, Business, CallToAction, Contact, ContactInfo, CtaButton, CtaVariant,
    Footer, Gallery, GalleryImage, Hero, InternalSchema, Metadata, NavItem, RegisterInterest, Usp,
    ValueProps,
};
use landkit_core::validate_internal;

const MAX_USPS: usize = 6;
pub const FALLBACK_TEMPLATE: &str = "springleaf";

/// Non-blank text from an optional source field.
fn text(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

fn or(value: Option<&str>, default: &str) -> String {
    text(value).unwrap_or(default).to_string()
}

/// Build the fallback schema without validating it.
pub fn fallback_schema(campaign: &CampaignInput) -> InternalSchema {
    let business = campaign.business();
    let ad_copy = campaign.first_ad_copy();
    let name = or(business.business_name.as_deref(), "Business Name");

    let mobile = or(business.mobile.as_deref(), "");
    let email = or(business.email.as_deref(), "");

    let hero_title = text(ad_copy.map(|c| c.headline.as_str()))
        .or_else(|| text(campaign.name.as_deref()))
        .unwrap_or("Welcome to Our Business")
        .to_string();

    let usps = campaign
        .usps()
        .iter()
        .take(MAX_USPS)
        .enumerate()
        .map(|(index, usp)| Usp {
            title: format!("Feature {}", index + 1),
            description: usp.clone(),
            icon: None,
        })
        .collect();

    let images = campaign
        .banners()
        .iter()
        .map(|banner| {
            let data = &banner.banner_data;
            GalleryImage {
                src: data.creative_image_url.clone(),
                alt: or(Some(data.creative_title.as_str()), "Gallery image"),
                category: None,
                title: text(Some(data.creative_title.as_str())).map(str::to_string),
                call_out: text(Some(data.call_out.as_str())).map(str::to_string),
                call_to_action: text(Some(data.call_to_action.as_str())).map(str::to_string),
            }
        })
        .collect();

    let navigation = default_navigation();

    InternalSchema {
        business: Business {
            name: name.clone(),
            description: Some(or(
                business.product_or_service_description.as_deref(),
                "Business description",
            )),
            logo: business.logo_url().map(str::to_string),
            category: Some(or(business.business_category.as_deref(), "General")),
        },
        contact: Contact {
            phone: Some(mobile.clone()),
            email: Some(email.clone()),
            address: Some(String::new()),
            mobile: Some(mobile.clone()),
            country_code: text(business.country_code.as_deref()).map(str::to_string),
        },
        hero: Hero {
            title: hero_title,
            subtitle: Some(or(
                ad_copy.map(|c| c.primary_text.as_str()),
                "Discover what makes us special",
            )),
            description: Some(or(
                ad_copy.and_then(|c| c.description.as_deref()),
                "Learn more about our services and offerings",
            )),
            background_image: campaign
                .banners()
                .first()
                .and_then(|b| text(Some(b.banner_data.creative_image_url.as_str())))
                .map(str::to_string),
            cta_buttons: Some(vec![
                CtaButton::new("Register Interest", "#register-interest", CtaVariant::Primary),
                CtaButton::new("View Gallery", "#gallery", CtaVariant::Secondary),
            ]),
            trust_indicators: None,
        },
        value_props: Some(ValueProps {
            title: Some("Why Choose Us".to_string()),
            subtitle: None,
            usps: Some(usps),
            stats: None,
        }),
        cta: Some(CallToAction {
            title: "Ready to Get Started?".to_string(),
            subtitle: None,
            cta_text: "Register Interest".to_string(),
            cta_link: "#register-interest".to_string(),
            background_image: None,
            trust_badges: None,
        }),
        gallery: Some(Gallery {
            title: Some("Gallery".to_string()),
            subtitle: None,
            images,
            categories: None,
        }),
        location: None,
        project_detail: None,
        floor_plans: None,
        register_interest: Some(RegisterInterest {
            title: Some("Register Your Interest".to_string()),
            subtitle: Some("Get in touch with us to learn more about this opportunity".to_string()),
            business_name: Some(name.clone()),
            contact_info: Some(ContactInfo { email: Some(email), phone: Some(mobile) }),
        }),
        legal: None,
        footer: Some(Footer {
            description: Some(format!("{} - Your trusted partner", name)),
            social_links: None,
            navigation_links: Some(navigation.iter().map(NavItem::link).collect()),
            legal_links: Some(Vec::new()),
        }),
        navigation: Some(navigation),
        metadata: Some(Metadata {
            campaign_id: campaign.id.clone(),
            campaign_name: campaign.name.clone(),
            platform: Some(or(campaign.platform.as_deref(), "web")),
            template: Some(FALLBACK_TEMPLATE.to_string()),
            theme: None,
        }),
    }
}

/// Build the fallback schema and pass it through the internal validator.
///
/// # Panics
///
/// If the synthesized schema does not validate. That can only happen through
/// a defect in [`fallback_schema`], never through campaign content.
pub fn synthesize(campaign: &CampaignInput) -> InternalSchema {
    let schema = fallback_schema(campaign);
    let value = match serde_json::to_value(&schema) {
        Ok(value) => value,
        Err(e) => panic!("fallback schema failed to serialize: {}", e),
    };
    match validate_internal(&value) {
        Ok(validated) => validated,
        Err(e) => panic!("fallback schema failed validation: {}", e),
    }
}
