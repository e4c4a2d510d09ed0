//! Instruction text sent to the generator.

use landkit_core::CampaignInput;
use serde_json::Value;

const INSTRUCTIONS: &str = include_str!("../prompts/internal_schema.txt");
const CLOSING: &str = "Return the transformed JSON following the exact schema structure above:";

/// Fixed instructions, the pretty-printed campaign, then the closing line.
pub fn build_prompt(campaign: &CampaignInput) -> String {
    let campaign_json = serde_json::to_value(campaign)
        .map(prune)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| "{}".to_string());

    format!("{}{}\n\n{}\n", INSTRUCTIONS, campaign_json, CLOSING)
}

/// Drop nulls and the internal `variant` tag so the model sees only data.
fn prune(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(key, v)| !v.is_null() && key != "variant")
                .map(|(key, v)| (key, prune(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(prune).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use landkit_core::validate_campaign;
    use serde_json::json;

    fn campaign() -> CampaignInput {
        validate_campaign(&json!({
            "campaign": {
                "name": "Springleaf Launch",
                "details": {
                    "business_details": { "business_name": "Springleaf Residence" },
                    "ad_copies": [{ "headline": "Live Above The Park", "primary_text": "Discover" }]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_prompt_carries_rules_and_campaign() {
        let prompt = build_prompt(&campaign());
        assert!(prompt.contains("INTERNAL SCHEMA STRUCTURE:"));
        assert!(prompt.contains("Never fabricate contact details"));
        assert!(prompt.contains("Never fabricate legal links"));
        assert!(prompt.contains("\"business_name\": \"Springleaf Residence\""));
        assert!(prompt.trim_end().ends_with(CLOSING));
    }

    #[test]
    fn test_prompt_omits_nulls_and_variant() {
        let prompt = build_prompt(&campaign());
        let start = prompt.find("INPUT CAMPAIGN JSON:").unwrap();
        let body = &prompt[start..];
        assert!(!body.contains("null"));
        assert!(!body.contains("\"variant\""));
    }
}
