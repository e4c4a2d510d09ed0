//! Unified Error Model
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Machine-readable reason attached to each validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// Field absent, or present with the wrong JSON type
    InvalidType,
    /// String present but not in the declared format (URLs)
    InvalidString,
    /// Value outside an enumerated set
    InvalidEnumValue,
    /// Required string present but empty
    TooSmall,
    /// Input text is not JSON at all
    InvalidJson,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::InvalidString => "invalid_string",
            Self::InvalidEnumValue => "invalid_enum_value",
            Self::TooSmall => "too_small",
            Self::InvalidJson => "invalid_json",
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-level problem found by a validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Dot-joined location in the input document (`""` for the root)
    pub path: String,
    pub message: String,
    pub code: IssueCode,
}

/// Ordered list of issues, in validator traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Single root-level issue for text that could not be parsed as JSON.
    pub fn malformed_json(err: &serde_json::Error) -> Self {
        Self::new(vec![ValidationIssue {
            path: String::new(),
            message: format!("Invalid JSON: {}", err),
            code: IssueCode::InvalidJson,
        }])
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn paths(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.path.as_str()).collect()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SCHEMA/{} issue(s)", self.issues.len())?;
        for issue in &self.issues {
            let path = if issue.path.is_empty() { "<root>" } else { &issue.path };
            write!(f, "; {}: {} ({})", path, issue.message, issue.code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Environment or configuration problems. Fatal at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("CONFIG/{0} environment variable is required")]
    MissingCredential(String),

    #[error("CONFIG/failed to read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("CONFIG/{0}")]
    Invalid(String),
}

/// Top-level failure for callers that drive the whole pipeline.
#[derive(Error, Debug)]
pub enum LandkitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("RENDER/{0}")]
    Render(String),

    #[error("IO/{0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_code_serializes_snake_case() {
        let json = serde_json::to_string(&IssueCode::InvalidEnumValue).unwrap();
        assert_eq!(json, "\"invalid_enum_value\"");
    }

    #[test]
    fn test_validation_error_display_lists_paths() {
        let err = ValidationError::new(vec![ValidationIssue {
            path: "hero.title".to_string(),
            message: "Required".to_string(),
            code: IssueCode::InvalidType,
        }]);
        let text = err.to_string();
        assert!(text.starts_with("SCHEMA/1 issue(s)"));
        assert!(text.contains("hero.title: Required (invalid_type)"));
    }

    #[test]
    fn test_validation_error_serializes_as_issue_list() {
        let err = ValidationError::new(vec![ValidationIssue {
            path: "business.name".to_string(),
            message: "Required".to_string(),
            code: IssueCode::TooSmall,
        }]);
        let value = serde_json::to_value(&err).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["code"], "too_small");
    }
}
