//! Link and image URL filtering for rendered pages.
//!
//! Schema URLs are untrusted text. Only values that cannot execute script or
//! escape their attribute or CSS context reach the templates.

use url::{ParseError, Url};

const LINK_SCHEMES: [&str; 4] = ["http", "https", "mailto", "tel"];
const IMAGE_SCHEMES: [&str; 2] = ["http", "https"];

/// Placeholder for a rejected link
pub const BLOCKED_HREF: &str = "#";

/// Whether `value` is a relative reference or an absolute URL with a scheme
/// in `schemes`.
fn allowed(value: &str, schemes: &[&str]) -> bool {
    match Url::parse(value) {
        Ok(url) => schemes.contains(&url.scheme()),
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

/// Anchor, relative path, `http(s):`, `mailto:` or `tel:` link; anything
/// else becomes `#`.
pub fn safe_href(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return BLOCKED_HREF.to_string();
    }
    if allowed(value, &LINK_SCHEMES) {
        value.to_string()
    } else {
        BLOCKED_HREF.to_string()
    }
}

/// Relative or `http(s):` image source; anything else becomes empty.
///
/// Quotes, parentheses and backslashes are rejected as well, since image
/// URLs are also printed inside CSS `url('...')`.
pub fn safe_src(value: &str) -> String {
    let value = value.trim();
    let breaks_out = value
        .chars()
        .any(|c| c.is_control() || c.is_whitespace() || matches!(c, '\'' | '"' | '(' | ')' | '\\'));
    if value.is_empty() || breaks_out || !allowed(value, &IMAGE_SCHEMES) {
        return String::new();
    }
    value.to_string()
}
