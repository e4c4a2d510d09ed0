//! Landkit Quality: completeness and consistency audit
//!
//! Inspects a validated internal schema and reports fields a page owner
//! should fill in or reconcile. Findings are advisory and never block
//! mapping or rendering.
//!
//! # Example
//!
//! ```ignore
//! use landkit_quality::{audit, AuditSummary};
//!
//! let findings = audit(Some(&schema));
//! let summary = AuditSummary::from_findings(&findings);
//! println!("{}", summary.headline);
//! ```

pub mod checks;
pub mod finding;

pub use finding::{AuditSummary, Finding, FindingKind};

use landkit_core::InternalSchema;
use tracing::debug;

/// Run every check in order. `None` yields no findings.
pub fn audit(schema: Option<&InternalSchema>) -> Vec<Finding> {
    let Some(schema) = schema else {
        return Vec::new();
    };

    let findings: Vec<Finding> = checks::CHECKS.iter().filter_map(|check| check(schema)).collect();
    debug!(count = findings.len(), "audit complete");
    findings
}
