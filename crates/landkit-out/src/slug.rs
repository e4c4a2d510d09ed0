//! URL- and filename-safe names.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w-]+").unwrap();
    static ref DASH_RUN: Regex = Regex::new(r"-{2,}").unwrap();
    static ref STARTS_WITH_LETTER: Regex = Regex::new(r"^[a-z]").unwrap();
}

/// Lowercase, dash-separated, word characters only.
///
/// `"  Springleaf Residence @ Park! "` becomes `"springleaf-residence-park"`.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let dashed = WHITESPACE.replace_all(lowered.trim(), "-");
    let cleaned = NON_WORD.replace_all(&dashed, "");
    let collapsed = DASH_RUN.replace_all(&cleaned, "-");
    collapsed.trim_matches('-').to_string()
}

/// HTML element id derived from `text`, always starting with a letter.
pub fn element_id(text: &str) -> String {
    let slug = slugify(text);
    if STARTS_WITH_LETTER.is_match(&slug) {
        slug
    } else {
        format!("id-{}", slug)
    }
}

/// Title Case each space-separated word.
pub fn title_case(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("  Springleaf Residence @ Park! "), "springleaf-residence-park");
        assert_eq!(slugify("--Hello---World--"), "hello-world");
        assert_eq!(slugify("Under_Score ok"), "under_score-ok");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_element_id_starts_with_letter() {
        assert_eq!(element_id("Gallery"), "gallery");
        assert_eq!(element_id("2 Bedroom"), "id-2-bedroom");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("modern LIVING awaits"), "Modern Living Awaits");
    }
}
