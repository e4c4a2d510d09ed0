//! Internal schema to view-model mapping. Pure and total.

use crate::links::{safe_href, safe_src};
use crate::view_model::*;
use landkit_core::internal::{
    default_navigation, CtaVariant, InternalSchema, Link, NavItem,
};

/// Non-blank text, treating whitespace-only as absent.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

fn or(value: &Option<String>, default: &str) -> String {
    filled(value).unwrap_or(default).to_string()
}

fn list(value: &Option<Vec<String>>) -> Vec<String> {
    value.clone().unwrap_or_default()
}

/// Keep complete entries; if none survive, use the default anchor list.
fn nav_links(items: Option<&[NavItem]>) -> Vec<NavLink> {
    let to_link = |item: &NavItem| NavLink {
        label: item.label.clone().unwrap_or_default(),
        href: safe_href(item.href.as_deref().unwrap_or_default()),
        external: item.external.unwrap_or(false),
    };

    let kept: Vec<NavLink> = items
        .unwrap_or(&[])
        .iter()
        .filter(|item| item.link().is_complete())
        .map(to_link)
        .collect();

    if kept.is_empty() {
        default_navigation().iter().map(to_link).collect()
    } else {
        kept
    }
}

fn default_link_views() -> Vec<LinkView> {
    default_navigation()
        .into_iter()
        .map(|nav| LinkView {
            label: nav.label.unwrap_or_default(),
            href: nav.href.unwrap_or_default(),
        })
        .collect()
}

fn link_views<'a>(links: impl Iterator<Item = &'a Link>) -> Vec<LinkView> {
    links
        .filter(|link| link.is_complete())
        .map(|link| LinkView {
            label: link.label.clone().unwrap_or_default(),
            href: safe_href(link.href.as_deref().unwrap_or_default()),
        })
        .collect()
}

/// Image source, empty when absent or rejected.
fn image(value: &Option<String>) -> String {
    filled(value).map(safe_src).unwrap_or_default()
}

pub fn map_to_view_model(schema: &InternalSchema) -> TemplateViewModel {
    let name = schema.business.name.clone();

    TemplateViewModel {
        project_name: name.clone(),
        header: HeaderView {
            project_name: name.clone(),
            logo: image(&schema.business.logo),
            navigation: nav_links(schema.navigation.as_deref()),
        },
        hero: map_hero(schema),
        value_proposition: schema.value_props.as_ref().map(|vp| ValuePropositionView {
            title: or(&vp.title, "Why Choose Us"),
            subtitle: or(&vp.subtitle, "Discover what makes us special"),
            usps: vp
                .usps
                .iter()
                .flatten()
                .map(|usp| UspView {
                    title: usp.title.clone(),
                    description: usp.description.clone(),
                    icon: or(&usp.icon, "check-circle"),
                })
                .collect(),
            stats: vp
                .stats
                .iter()
                .flatten()
                .map(|stat| StatView { number: stat.number.clone(), label: stat.label.clone() })
                .collect(),
        }),
        cta: schema.cta.as_ref().map(|cta| CtaView {
            title: cta.title.clone(),
            subtitle: or(&cta.subtitle, "Take the next step"),
            cta_text: cta.cta_text.clone(),
            cta_link: safe_href(&cta.cta_link),
            background_image: image(&cta.background_image),
            trust_badges: list(&cta.trust_badges),
        }),
        gallery: schema.gallery.as_ref().map(|gallery| GalleryView {
            title: or(&gallery.title, "Gallery"),
            subtitle: or(&gallery.subtitle, "Explore our collection"),
            images: gallery
                .images
                .iter()
                .map(|img| ImageView {
                    src: safe_src(&img.src),
                    alt: img.alt.clone(),
                    category: or(&img.category, ""),
                    title: or(&img.title, ""),
                    call_out: or(&img.call_out, ""),
                    call_to_action: or(&img.call_to_action, ""),
                })
                .collect(),
            categories: list(&gallery.categories),
        }),
        location: schema.location.as_ref().map(|location| LocationView {
            title: or(&location.title, "Location"),
            subtitle: or(&location.subtitle, "Find us here"),
            address: or(&location.address, ""),
            transportation: list(&location.transportation),
            nearby_amenities: list(&location.nearby_amenities),
            map_image: image(&location.map_image),
        }),
        project_detail: map_project_detail(schema),
        floor_plans: schema.floor_plans.as_ref().map(|fp| FloorPlansView {
            title: or(&fp.title, "Floor Plans"),
            subtitle: or(&fp.subtitle, "Choose your perfect space"),
            plans: fp
                .plans
                .iter()
                .map(|plan| FloorPlanView {
                    name: plan.name.clone(),
                    plan_type: plan.plan_type.clone(),
                    size: plan.size.clone(),
                    bedrooms: plan.bedrooms.unwrap_or(0.0),
                    bathrooms: plan.bathrooms.unwrap_or(0.0),
                    price: or(&plan.price, ""),
                    image: image(&plan.image),
                    features: list(&plan.features),
                })
                .collect(),
        }),
        footer: map_footer(schema),
        register_interest: map_register_interest(schema),
    }
}

fn map_hero(schema: &InternalSchema) -> HeroView {
    let hero = &schema.hero;
    // An explicit empty list renders no buttons; only an absent one is defaulted.
    let cta_buttons = match &hero.cta_buttons {
        Some(buttons) => buttons
            .iter()
            .map(|btn| ButtonView { text: btn.text.clone(), href: safe_href(&btn.href), variant: btn.variant })
            .collect(),
        None => vec![ButtonView {
            text: "Learn More".to_string(),
            href: "#about".to_string(),
            variant: CtaVariant::Primary,
        }],
    };

    HeroView {
        title: hero.title.clone(),
        subtitle: or(&hero.subtitle, "Discover excellence in every detail"),
        description: or(&hero.description, ""),
        background_image: image(&hero.background_image),
        cta_buttons,
        trust_indicators: list(&hero.trust_indicators),
    }
}

fn map_project_detail(schema: &InternalSchema) -> Option<ProjectDetailView> {
    let detail = schema.project_detail.as_ref()?;
    let overview = detail.overview.as_ref();

    let overview_description = overview
        .map(|o| o.description.as_str())
        .filter(|s| !s.trim().is_empty())
        .or_else(|| filled(&schema.business.description))
        .unwrap_or("Premium project details")
        .to_string();

    Some(ProjectDetailView {
        title: or(&detail.title, "Project Details"),
        subtitle: or(&detail.subtitle, "Learn more about this project"),
        overview: OverviewView {
            title: overview
                .map(|o| o.title.as_str())
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(schema.business.name.as_str())
                .to_string(),
            description: overview_description,
            features: overview.map(|o| o.features.clone()).unwrap_or_default(),
        },
        specifications: detail
            .specifications
            .iter()
            .flatten()
            .map(|spec| SpecificationView {
                category: spec.category.clone(),
                items: spec
                    .items
                    .iter()
                    .map(|item| SpecItemView { label: item.label.clone(), value: item.value.clone() })
                    .collect(),
            })
            .collect(),
        amenities: detail
            .amenities
            .iter()
            .flatten()
            .map(|group| AmenityView { category: group.category.clone(), items: group.items.clone() })
            .collect(),
    })
}

fn map_footer(schema: &InternalSchema) -> FooterView {
    let footer = schema.footer.as_ref();
    let contact = &schema.contact;
    let location_address = schema.location.as_ref().and_then(|l| filled(&l.address));

    let description = footer
        .and_then(|f| filled(&f.description))
        .or_else(|| filled(&schema.business.description))
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} - Your trusted partner", schema.business.name));

    let navigation_links = footer
        .and_then(|f| f.navigation_links.as_ref())
        .map(|links| link_views(links.iter()))
        .filter(|kept| !kept.is_empty())
        .unwrap_or_else(default_link_views);

    FooterView {
        project_name: schema.business.name.clone(),
        description,
        contact: FooterContact {
            phone: filled(&contact.phone)
                .or_else(|| filled(&contact.mobile))
                .unwrap_or("")
                .to_string(),
            email: or(&contact.email, ""),
            address: filled(&contact.address)
                .or(location_address)
                .unwrap_or("")
                .to_string(),
        },
        social_links: footer
            .and_then(|f| f.social_links.as_ref())
            .into_iter()
            .flatten()
            .filter_map(|link| {
                Some(SocialLinkView {
                    platform: filled(&link.platform)?.to_string(),
                    url: safe_href(filled(&link.url)?),
                })
            })
            .collect(),
        navigation_links,
        legal_links: footer
            .and_then(|f| f.legal_links.as_ref())
            .map(|links| link_views(links.iter()))
            .unwrap_or_default(),
    }
}

fn map_register_interest(schema: &InternalSchema) -> RegisterInterestView {
    let name = &schema.business.name;
    let contact = &schema.contact;
    let section = schema.register_interest.as_ref();
    let info = section.and_then(|ri| ri.contact_info.as_ref());

    let main_phone = filled(&contact.phone).or_else(|| filled(&contact.mobile));

    RegisterInterestView {
        title: section
            .and_then(|ri| filled(&ri.title))
            .unwrap_or("Register Your Interest")
            .to_string(),
        subtitle: section
            .and_then(|ri| filled(&ri.subtitle))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Get in touch with us to learn more about {}", name)),
        business_name: section
            .and_then(|ri| filled(&ri.business_name))
            .unwrap_or(name.as_str())
            .to_string(),
        contact_info: ContactInfoView {
            email: info
                .and_then(|i| filled(&i.email))
                .or_else(|| filled(&contact.email))
                .unwrap_or("")
                .to_string(),
            phone: info
                .and_then(|i| filled(&i.phone))
                .or(main_phone)
                .unwrap_or("")
                .to_string(),
        },
    }
}
