//! Audit findings and their summary

use serde::{Deserialize, Serialize};

/// Separator between the two paths of a cross-field finding
pub const PATH_SEPARATOR: &str = " ↔ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingKind {
    Missing,
    Inconsistent,
}

/// Single advisory finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Dotted path, or two paths joined by [`PATH_SEPARATOR`]
    pub field: String,
    pub label: String,
    pub description: String,
    pub kind: FindingKind,
}

impl Finding {
    pub fn missing(field: &str, label: &str, description: &str) -> Self {
        Self {
            field: field.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            kind: FindingKind::Missing,
        }
    }

    pub fn mismatch(left: &str, right: &str, label: &str, description: String) -> Self {
        Self {
            field: format!("{}{}{}", left, PATH_SEPARATOR, right),
            label: label.to_string(),
            description,
            kind: FindingKind::Inconsistent,
        }
    }

    pub fn is_inconsistent(&self) -> bool {
        self.kind == FindingKind::Inconsistent
    }
}

/// Counts per kind plus a one-line headline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub missing: usize,
    pub inconsistent: usize,
    pub headline: String,
}

impl AuditSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let inconsistent = findings.iter().filter(|f| f.is_inconsistent()).count();
        let missing = findings.len() - inconsistent;
        Self { missing, inconsistent, headline: headline(missing, inconsistent) }
    }

    pub fn is_clean(&self) -> bool {
        self.missing == 0 && self.inconsistent == 0
    }
}

fn missing_fields(n: usize) -> String {
    format!("{} missing field{}", n, if n == 1 { "" } else { "s" })
}

fn inconsistencies(n: usize) -> String {
    format!("{} inconsistenc{}", n, if n == 1 { "y" } else { "ies" })
}

fn headline(missing: usize, inconsistent: usize) -> String {
    match (missing, inconsistent) {
        (0, 0) => "No missing or inconsistent fields.".to_string(),
        (m, 0) => format!("Found {}.", missing_fields(m)),
        (0, i) => format!("Found {} in contact information.", inconsistencies(i)),
        (m, i) => format!("Found {} and {}.", missing_fields(m), inconsistencies(i)),
    }
}
