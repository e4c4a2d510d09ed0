//! The individual audit checks, in reporting order.
//!
//! A field counts as missing when it is absent or blank after trimming. A
//! mismatch fires only when both sides are non-blank and differ after
//! trimming.

use crate::finding::Finding;
use landkit_core::InternalSchema;

pub type Check = fn(&InternalSchema) -> Option<Finding>;

/// Every check, evaluated in this order
pub const CHECKS: [Check; 11] = [
    missing_email,
    missing_phone,
    missing_address,
    email_mismatch,
    phone_mismatch,
    address_mismatch,
    missing_logo,
    missing_hero_image,
    missing_gallery,
    missing_privacy_policy,
    missing_terms,
];

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

fn blank(value: Option<&String>) -> bool {
    present(value).is_none()
}

/// Both sides present and different after trimming; yields the untrimmed values
fn differs<'a>(left: Option<&'a String>, right: Option<&'a String>) -> Option<(&'a str, &'a str)> {
    let (l, r) = (present(left)?, present(right)?);
    (l != r).then(|| (left.map_or("", String::as_str), right.map_or("", String::as_str)))
}

fn missing_email(schema: &InternalSchema) -> Option<Finding> {
    blank(schema.contact.email.as_ref()).then(|| {
        Finding::missing(
            "contact.email",
            "Email Address",
            "Business email address for customer inquiries and communication",
        )
    })
}

fn missing_phone(schema: &InternalSchema) -> Option<Finding> {
    let contact = &schema.contact;
    (blank(contact.phone.as_ref()) && blank(contact.mobile.as_ref())).then(|| {
        Finding::missing(
            "contact.phone",
            "Phone Number",
            "Contact phone number for direct customer communication",
        )
    })
}

fn missing_address(schema: &InternalSchema) -> Option<Finding> {
    blank(schema.contact.address.as_ref()).then(|| {
        Finding::missing(
            "contact.address",
            "Business Address",
            "Physical business address for location and contact purposes",
        )
    })
}

fn email_mismatch(schema: &InternalSchema) -> Option<Finding> {
    let form = schema.register_interest.as_ref()?.contact_info.as_ref()?;
    let (main, other) = differs(schema.contact.email.as_ref(), form.email.as_ref())?;
    Some(Finding::mismatch(
        "contact.email",
        "registerInterest.contactInfo.email",
        "Email Mismatch",
        format!(
            "Email differs between main contact ({}) and register interest form ({}). They should match for consistency.",
            main, other
        ),
    ))
}

fn phone_mismatch(schema: &InternalSchema) -> Option<Finding> {
    let form = schema.register_interest.as_ref()?.contact_info.as_ref()?;
    let contact = &schema.contact;
    let main_phone = if blank(contact.phone.as_ref()) { contact.mobile.as_ref() } else { contact.phone.as_ref() };
    let (main, other) = differs(main_phone, form.phone.as_ref())?;
    Some(Finding::mismatch(
        "contact.phone",
        "registerInterest.contactInfo.phone",
        "Phone Mismatch",
        format!(
            "Phone differs between main contact ({}) and register interest form ({}). They should match for consistency.",
            main, other
        ),
    ))
}

fn address_mismatch(schema: &InternalSchema) -> Option<Finding> {
    let location = schema.location.as_ref()?;
    let (main, other) = differs(schema.contact.address.as_ref(), location.address.as_ref())?;
    Some(Finding::mismatch(
        "contact.address",
        "location.address",
        "Address Mismatch",
        format!(
            "Address differs between main contact ({}) and location section ({}). They should match for consistency.",
            main, other
        ),
    ))
}

fn missing_logo(schema: &InternalSchema) -> Option<Finding> {
    blank(schema.business.logo.as_ref()).then(|| {
        Finding::missing(
            "business.logo",
            "Business Logo",
            "Company logo to enhance brand recognition and professionalism",
        )
    })
}

fn missing_hero_image(schema: &InternalSchema) -> Option<Finding> {
    blank(schema.hero.background_image.as_ref()).then(|| {
        Finding::missing(
            "hero.backgroundImage",
            "Hero Background Image",
            "Main background image for the hero section to create visual impact",
        )
    })
}

fn missing_gallery(schema: &InternalSchema) -> Option<Finding> {
    let empty = schema.gallery.as_ref().map_or(true, |g| g.images.is_empty());
    empty.then(|| {
        Finding::missing(
            "gallery.images",
            "Gallery Images",
            "Product or service images to showcase your offerings",
        )
    })
}

fn missing_privacy_policy(schema: &InternalSchema) -> Option<Finding> {
    let legal = schema.legal.as_ref();
    blank(legal.and_then(|l| l.privacy_policy.as_ref())).then(|| {
        Finding::missing(
            "legal.privacyPolicy",
            "Privacy Policy URL",
            "Link to your privacy policy document for legal compliance",
        )
    })
}

fn missing_terms(schema: &InternalSchema) -> Option<Finding> {
    let legal = schema.legal.as_ref();
    blank(legal.and_then(|l| l.terms_of_service.as_ref())).then(|| {
        Finding::missing(
            "legal.termsOfService",
            "Terms of Service URL",
            "Link to your terms of service document for legal compliance",
        )
    })
}
