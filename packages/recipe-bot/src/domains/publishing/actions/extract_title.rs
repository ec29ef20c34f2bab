//! TitleExtractor - recover the display title from generated HTML.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::publishing::models::FALLBACK_TITLE;

lazy_static! {
    // First <h1>, any case, attributes allowed, content may span lines
    static ref H1_REGEX: Regex = Regex::new(r"(?is)<h1(?:\s[^>]*)?>(.*?)</h1\s*>").unwrap();
}

/// Inner text of the first `<h1>` on a single line, or [`FALLBACK_TITLE`].
///
/// Whitespace runs, line breaks included, collapse to one space. No match is
/// the normal fallback path, not an error.
pub fn extract_title(html: &str) -> String {
    H1_REGEX
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}
