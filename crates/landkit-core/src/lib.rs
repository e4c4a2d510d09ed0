//! Landkit Core: campaign input, internal schema and their validators
//!
//! Both validators walk raw JSON with the same [`checker::Checker`] and
//! report every issue with its dotted path.

pub mod campaign;
pub mod checker;
pub mod error;
pub mod internal;

pub use campaign::{
    detect_variant, parse_campaign, validate_campaign, CampaignInput, CampaignVariant,
};
pub use error::{ConfigurationError, IssueCode, LandkitError, ValidationError, ValidationIssue};
pub use internal::{parse_internal, validate_internal, InternalSchema};

/// Landkit engine version
pub const LANDKIT_VERSION: &str = "1.0.0";
