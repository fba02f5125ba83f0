//! Free-text address extraction from `q=` and `/search/` URLs.

use super::coordinate::extract_coordinate;
use crate::text::{decode_or_raw, normalize_width};
use regex::Regex;
use std::sync::LazyLock;

static QUERY_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"[?&]q=([^&]+)").unwrap(),
        Regex::new(r"search/([^/]+)").unwrap(),
    ]
});

/// Japanese postal code, optionally prefixed by the postal mark.
static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s|^)(〒)?[0-9]{3}-[0-9]{4}(\s|$)").unwrap());

const CHOME: &str = "丁目";

/// Extract a searchable address from a Google Maps URL.
///
/// Returns `None` when the URL carries a coordinate or has no query text.
/// The returned address can be empty after cleaning; callers treat that
/// the same as no address.
pub fn extract_address(url: &str) -> Option<String> {
    if extract_coordinate(url).is_some() {
        return None;
    }

    let decoded = decode_or_raw(url);
    let raw = QUERY_PATTERNS
        .iter()
        .find_map(|re| re.captures(&decoded).and_then(|c| c.get(1)))?
        .as_str();

    Some(clean_address(raw))
}

/// Reduce a raw query value to its leading address token.
///
/// Trailing building names and other words after the first space are
/// dropped, as are postal codes.
fn clean_address(raw: &str) -> String {
    let normalized = normalize_width(&raw.replace('+', " "));
    let without_postal = POSTAL_CODE_RE.replace_all(&normalized, " ");
    let without_chome = without_postal.trim().replace(CHOME, "-");

    without_chome
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string()
}
