//! Turning generator text into a validated internal schema.

use crate::error::TransformationFailure;
use landkit_core::{validate_internal, InternalSchema};
use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    /// Opening fence, with or without a `json` tag
    static ref FENCE_OPEN: Regex = Regex::new(r"^```(?:json)?\s*").unwrap();

    /// Closing fence at the very end
    static ref FENCE_CLOSE: Regex = Regex::new(r"\s*```$").unwrap();
}

/// Remove a surrounding markdown code fence, if any.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    if !trimmed.starts_with("```") {
        return trimmed.to_string();
    }
    let opened = FENCE_OPEN.replace(trimmed, "");
    FENCE_CLOSE.replace(&opened, "").trim().to_string()
}

/// Strip fences, parse JSON and validate against the internal schema.
pub fn parse_schema(text: &str) -> Result<InternalSchema, TransformationFailure> {
    let cleaned = strip_code_fences(text);
    let value: Value =
        serde_json::from_str(&cleaned).map_err(|e| TransformationFailure::NotJson(e.to_string()))?;
    Ok(validate_internal(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"{"business":{"name":"A"},"contact":{},"hero":{"title":"B"}}"#;

    #[test]
    fn test_strip_json_fence() {
        let wrapped = format!("```json\n{}\n```", SCHEMA);
        assert_eq!(strip_code_fences(&wrapped), SCHEMA);
    }

    #[test]
    fn test_strip_bare_fence() {
        let wrapped = format!("  ```\n{}```  ", SCHEMA);
        assert_eq!(strip_code_fences(&wrapped), SCHEMA);
    }

    #[test]
    fn test_unfenced_text_untouched() {
        assert_eq!(strip_code_fences(SCHEMA), SCHEMA);
    }

    #[test]
    fn test_parse_schema_outcomes() {
        assert_eq!(parse_schema(SCHEMA).unwrap().business.name, "A");
        assert!(matches!(
            parse_schema("Sure! Here is your JSON"),
            Err(TransformationFailure::NotJson(_))
        ));
        assert!(matches!(
            parse_schema(r#"{"business":{"name":"A"}}"#),
            Err(TransformationFailure::Schema(_))
        ));
    }
}
