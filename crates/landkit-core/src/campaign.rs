//! Campaign input: the loosely-typed ad-platform document.
//!
//! Three historical shapes are accepted and normalized into one
//! [`CampaignInput`] before anything downstream sees them:
//!
//! - **extended**: `campaign.details` carries `config`, `targeting`,
//!   `leadgen_form` or `budget_and_scheduling` beside `business_details`
//! - **legacy**: `campaign.details` carries only business details and creatives
//! - **flat**: no `details` wrapper, `business_details` sits on the campaign
//!
//! The outer `{"campaign": ...}` wrapper is optional.

use crate::checker::{Checker, Object};
use crate::error::{IssueCode, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys whose presence under `details` marks the extended shape.
const EXTENDED_KEYS: [&str; 4] = ["config", "targeting", "leadgen_form", "budget_and_scheduling"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignVariant {
    #[default]
    Extended,
    Legacy,
    Flat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignInput {
    /// Shape the document arrived in
    pub variant: CampaignVariant,
    pub id: Option<String>,
    pub name: Option<String>,
    pub platform: Option<String>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub uid: Option<String>,
    pub special_ad_categories: Option<Vec<String>>,
    pub details: CampaignDetails,
    pub tiktok_ads_data: Option<TikTokAdsData>,
}

/// Platform timestamp, normalized from `{_seconds, _nanoseconds}`,
/// `{seconds, nanoseconds}` or a bare epoch-seconds value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanoseconds: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetails {
    pub config: Option<CampaignConfig>,
    pub business_details: BusinessDetails,
    pub targeting: Option<Targeting>,
    pub leadgen_form: Option<LeadgenForm>,
    pub budget_and_scheduling: Option<BudgetAndScheduling>,
    pub ai_assisted_product_usps: Option<Vec<String>>,
    pub ad_copies: Option<Vec<AdCopy>>,
    pub ad_banners: Option<Vec<AdBanner>>,
    pub ad_videos: Option<Vec<AdVideo>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub ad_account_id: Option<String>,
    pub fb_page_id: Option<String>,
    pub google_ad_account_id: Option<String>,
    pub advantage_campaign_budget: Option<bool>,
    pub google_custom_conversion_action_doc_id: Option<String>,
    pub meta_sales_purchase_event_name: Option<String>,
    pub partner: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub business_name: Option<String>,
    pub business_category: Option<String>,
    pub product_or_service_description: Option<String>,
    pub product_or_service_offers_or_usp: Option<String>,
    pub website: Option<String>,
    pub mobile: Option<String>,
    pub mobile_without_country_code: Option<String>,
    pub country_code: Option<String>,
    pub email: Option<String>,
    pub business_logo: Option<BusinessLogo>,
    pub ideal_customers: Option<String>,
    pub consumer_type: Option<String>,
}

impl BusinessDetails {
    /// Square logo URL when one was supplied and is not blank.
    pub fn logo_url(&self) -> Option<&str> {
        self.business_logo
            .as_ref()
            .and_then(|logo| logo.square.as_ref())
            .and_then(|square| square.url.as_deref())
            .filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessLogo {
    pub square: Option<LogoImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoImage {
    pub url: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Targeting {
    pub age_min: Option<i64>,
    pub age_max: Option<i64>,
    pub genders: Option<Vec<i64>>,
    pub geo_locations: Option<GeoLocations>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocations {
    pub location_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadgenForm {
    pub is_optimized_for_quality: Option<bool>,
    pub question_page_custom_headline: Option<String>,
    pub follow_up_action_url: Option<String>,
    pub privacy_policy: Option<PrivacyPolicyLink>,
    pub name: Option<String>,
    pub questions: Option<Vec<LeadgenQuestion>>,
    pub block_display_for_non_targeted_viewer: Option<bool>,
    pub context_card: Option<ContextCard>,
    pub follow_up_action_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrivacyPolicyLink {
    pub link_text: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeadgenQuestion {
    #[serde(rename = "type")]
    pub question_type: String,
    pub key: String,
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextCard {
    pub style: Option<String>,
    pub title: Option<String>,
    pub content: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetAndScheduling {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub currency: Option<String>,
    pub idr: Option<BudgetAmounts>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetAmounts {
    pub lifetime_budget: Option<f64>,
    pub daily_budget: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdCopy {
    pub format_type: Option<String>,
    pub headline: String,
    pub primary_text: String,
    pub description: Option<String>,
    pub call_to_action_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdBanner {
    pub image: Option<BannerImage>,
    pub banner_data: BannerData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerImage {
    pub hash: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub s3_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerData {
    pub creative_title: String,
    pub call_out: String,
    pub call_to_action: String,
    pub creative_image_url: String,
    pub size: Option<String>,
    pub template_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdVideo {
    pub video_url: Option<String>,
    pub tiktok: Option<TikTokVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TikTokVideo {
    pub video_id: Option<String>,
    pub thumbnail: Option<VideoThumbnail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoThumbnail {
    pub image_id: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TikTokAdsData {
    pub geo_locations: Option<Vec<TikTokGeoLocation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TikTokGeoLocation {
    pub geo: Option<GeoDetail>,
    pub isp: Option<String>,
    pub name: Option<String>,
    pub status_info: Option<StatusInfo>,
    pub targeting_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoDetail {
    pub description: Option<String>,
    pub geo_id: Option<String>,
    pub geo_type: Option<String>,
    pub parent_id: Option<String>,
    pub region_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusInfo {
    pub reason: Option<String>,
    pub status: Option<String>,
}

impl CampaignInput {
    pub fn business(&self) -> &BusinessDetails {
        &self.details.business_details
    }

    pub fn first_ad_copy(&self) -> Option<&AdCopy> {
        self.details.ad_copies.as_ref().and_then(|copies| copies.first())
    }

    pub fn banners(&self) -> &[AdBanner] {
        self.details.ad_banners.as_deref().unwrap_or(&[])
    }

    pub fn usps(&self) -> &[String] {
        self.details.ai_assisted_product_usps.as_deref().unwrap_or(&[])
    }
}

/// Validate raw campaign JSON and normalize it into a [`CampaignInput`].
pub fn validate_campaign(raw: &Value) -> Result<CampaignInput, ValidationError> {
    let mut checker = Checker::lenient();
    let Some(root) = checker.root(raw) else {
        return checker.finish(CampaignInput::default());
    };

    let campaign = if root.get("campaign").is_some_and(|v| !v.is_null()) {
        checker.req_object(root, "campaign", read_campaign)
    } else {
        read_campaign(&mut checker, root)
    };

    checker.finish(campaign)
}

/// Parse campaign JSON text, then validate it.
pub fn parse_campaign(text: &str) -> Result<CampaignInput, ValidationError> {
    let raw: Value = serde_json::from_str(text).map_err(|e| ValidationError::malformed_json(&e))?;
    validate_campaign(&raw)
}

/// Decide which historical shape a campaign object uses.
pub fn detect_variant(campaign: &Object) -> CampaignVariant {
    match campaign.get("details").and_then(Value::as_object) {
        Some(details)
            if EXTENDED_KEYS
                .iter()
                .any(|key| details.get(*key).is_some_and(|v| !v.is_null())) =>
        {
            CampaignVariant::Extended
        }
        Some(_) => CampaignVariant::Legacy,
        None if campaign.get("business_details").is_some_and(|v| !v.is_null()) => {
            CampaignVariant::Flat
        }
        None => CampaignVariant::Legacy,
    }
}

fn read_campaign(c: &mut Checker, obj: &Object) -> CampaignInput {
    let variant = detect_variant(obj);
    CampaignInput {
        variant,
        id: c.opt_str(obj, "id"),
        name: c.opt_str(obj, "name"),
        platform: c.opt_str(obj, "platform"),
        campaign_type: c.opt_str(obj, "type"),
        status: c.opt_str(obj, "status"),
        created_at: read_timestamp(c, obj, "created_at"),
        updated_at: read_timestamp(c, obj, "updated_at"),
        uid: c.opt_str(obj, "uid"),
        special_ad_categories: c.opt_str_list(obj, "special_ad_categories"),
        details: match variant {
            CampaignVariant::Flat => read_details(c, obj),
            _ => c.req_object(obj, "details", read_details),
        },
        tiktok_ads_data: c.opt_object(obj, "tiktok_ads_data", |c, o| TikTokAdsData {
            geo_locations: c.opt_list(o, "geo_locations", read_geo_location),
        }),
    }
}

/// Whole part of a numeric timestamp component; fractions are truncated.
fn timestamp_part(c: &mut Checker, obj: &Object, key: &str) -> Option<i64> {
    c.opt_number(obj, key).map(|n| n.trunc() as i64)
}

fn read_timestamp(c: &mut Checker, obj: &Object, key: &str) -> Option<Timestamp> {
    match obj.get(key) {
        Some(Value::Number(_)) | Some(Value::String(_)) => {
            timestamp_part(c, obj, key).map(|seconds| Timestamp { seconds, nanoseconds: 0 })
        }
        _ => c.opt_object(obj, key, |c, ts| {
            let seconds = timestamp_part(c, ts, "_seconds").or_else(|| timestamp_part(c, ts, "seconds"));
            let nanoseconds =
                timestamp_part(c, ts, "_nanoseconds").or_else(|| timestamp_part(c, ts, "nanoseconds"));
            if seconds.is_none() && !ts.contains_key("_seconds") && !ts.contains_key("seconds") {
                c.report("_seconds", IssueCode::InvalidType, "Required");
            }
            Timestamp {
                seconds: seconds.unwrap_or_default(),
                nanoseconds: nanoseconds.unwrap_or_default(),
            }
        }),
    }
}

fn read_details(c: &mut Checker, obj: &Object) -> CampaignDetails {
    CampaignDetails {
        config: c.opt_object(obj, "config", read_config),
        business_details: c.req_object(obj, "business_details", read_business),
        targeting: c.opt_object(obj, "targeting", read_targeting),
        leadgen_form: c.opt_object(obj, "leadgen_form", read_leadgen_form),
        budget_and_scheduling: c.opt_object(obj, "budget_and_scheduling", |c, o| {
            BudgetAndScheduling {
                start_time: c.opt_str(o, "start_time"),
                end_time: c.opt_str(o, "end_time"),
                currency: c.opt_str(o, "currency"),
                idr: c.opt_object(o, "idr", |c, o| BudgetAmounts {
                    lifetime_budget: c.opt_number(o, "lifetime_budget"),
                    daily_budget: c.opt_number(o, "daily_budget"),
                }),
            }
        }),
        ai_assisted_product_usps: c.opt_str_list(obj, "ai_assisted_product_usps"),
        ad_copies: c.opt_list(obj, "ad_copies", |c, o| AdCopy {
            format_type: c.opt_str(o, "format_type"),
            headline: c.req_str(o, "headline"),
            primary_text: c.req_str(o, "primary_text"),
            description: c.opt_str(o, "description"),
            call_to_action_type: c.opt_str(o, "call_to_action_type"),
        }),
        ad_banners: c.opt_list(obj, "ad_banners", read_banner),
        ad_videos: c.opt_list(obj, "ad_videos", read_video),
    }
}

fn read_config(c: &mut Checker, o: &Object) -> CampaignConfig {
    CampaignConfig {
        ad_account_id: c.opt_str(o, "ad_account_id"),
        fb_page_id: c.opt_str(o, "fb_page_id"),
        google_ad_account_id: c.opt_str(o, "google_ad_account_id"),
        advantage_campaign_budget: c.opt_bool(o, "advantage_campaign_budget"),
        google_custom_conversion_action_doc_id: c.opt_str(o, "google_custom_conversion_action_doc_id"),
        meta_sales_purchase_event_name: c.opt_str(o, "meta_sales_purchase_event_name"),
        partner: c.opt_str(o, "partner"),
    }
}

fn read_business(c: &mut Checker, o: &Object) -> BusinessDetails {
    BusinessDetails {
        business_name: c.opt_str(o, "business_name"),
        business_category: c.opt_str(o, "business_category"),
        product_or_service_description: c.opt_str(o, "product_or_service_description"),
        product_or_service_offers_or_usp: c.opt_str(o, "product_or_service_offers_or_usp"),
        website: c.opt_str(o, "website"),
        mobile: c.opt_str(o, "mobile"),
        mobile_without_country_code: c.opt_str(o, "mobile_without_country_code"),
        country_code: c.opt_str(o, "country_code"),
        email: c.opt_str(o, "email"),
        business_logo: c.opt_object(o, "business_logo", |c, o| BusinessLogo {
            square: c.opt_object(o, "square", |c, o| LogoImage {
                url: c.opt_str(o, "url"),
                width: c.opt_integer(o, "width"),
                height: c.opt_integer(o, "height"),
            }),
        }),
        ideal_customers: c.opt_str(o, "ideal_customers"),
        consumer_type: c.opt_str(o, "consumer_type"),
    }
}

fn read_targeting(c: &mut Checker, o: &Object) -> Targeting {
    Targeting {
        age_min: c.opt_integer(o, "age_min"),
        age_max: c.opt_integer(o, "age_max"),
        genders: c.opt_integer_list(o, "genders"),
        geo_locations: c.opt_object(o, "geo_locations", |c, o| GeoLocations {
            location_types: c.opt_str_list(o, "location_types"),
        }),
    }
}

fn read_leadgen_form(c: &mut Checker, o: &Object) -> LeadgenForm {
    LeadgenForm {
        is_optimized_for_quality: c.opt_bool(o, "is_optimized_for_quality"),
        question_page_custom_headline: c.opt_str(o, "question_page_custom_headline"),
        follow_up_action_url: c.opt_str(o, "follow_up_action_url"),
        privacy_policy: c.opt_object(o, "privacy_policy", |c, o| PrivacyPolicyLink {
            link_text: c.opt_str(o, "link_text"),
            url: c.opt_str(o, "url"),
        }),
        name: c.opt_str(o, "name"),
        questions: c.opt_list(o, "questions", |c, o| LeadgenQuestion {
            question_type: c.req_str(o, "type"),
            key: c.req_str(o, "key"),
            label: c.opt_str(o, "label"),
        }),
        block_display_for_non_targeted_viewer: c.opt_bool(o, "block_display_for_non_targeted_viewer"),
        context_card: c.opt_object(o, "context_card", |c, o| ContextCard {
            style: c.opt_str(o, "style"),
            title: c.opt_str(o, "title"),
            content: c.opt_str_list(o, "content"),
        }),
        follow_up_action_text: c.opt_str(o, "follow_up_action_text"),
    }
}

fn read_banner(c: &mut Checker, o: &Object) -> AdBanner {
    AdBanner {
        image: c.opt_object(o, "image", |c, o| BannerImage {
            hash: c.opt_str(o, "hash"),
            width: c.opt_integer(o, "width"),
            height: c.opt_integer(o, "height"),
            s3_url: c.opt_str(o, "s3_url"),
        }),
        banner_data: c.req_object(o, "banner_data", |c, o| BannerData {
            creative_title: c.req_str(o, "creative_title"),
            call_out: c.req_str(o, "call_out"),
            call_to_action: c.req_str(o, "call_to_action"),
            creative_image_url: c.req_url(o, "creative_image_url"),
            size: c.opt_str(o, "size"),
            template_id: c.opt_str(o, "template_id"),
        }),
    }
}

fn read_video(c: &mut Checker, o: &Object) -> AdVideo {
    AdVideo {
        video_url: c.opt_url(o, "video_url"),
        tiktok: c.opt_object(o, "tiktok", |c, o| TikTokVideo {
            video_id: c.opt_str(o, "video_id"),
            thumbnail: c.opt_object(o, "thumbnail", |c, o| VideoThumbnail {
                image_id: c.opt_str(o, "image_id"),
                width: c.opt_integer(o, "width"),
                height: c.opt_integer(o, "height"),
                image_url: c.opt_url(o, "image_url"),
            }),
        }),
    }
}

fn read_geo_location(c: &mut Checker, o: &Object) -> TikTokGeoLocation {
    TikTokGeoLocation {
        geo: c.opt_object(o, "geo", |c, o| GeoDetail {
            description: c.opt_str(o, "description"),
            geo_id: c.opt_str(o, "geo_id"),
            geo_type: c.opt_str(o, "geo_type"),
            parent_id: c.opt_str(o, "parent_id"),
            region_code: c.opt_str(o, "region_code"),
        }),
        isp: c.opt_str(o, "isp"),
        name: c.opt_str(o, "name"),
        status_info: c.opt_object(o, "status_info", |c, o| StatusInfo {
            reason: c.opt_str(o, "reason"),
            status: c.opt_str(o, "status"),
        }),
        targeting_type: c.opt_str(o, "targeting_type"),
    }
}
