//! Wiki-link markers: `[[Name]]` references between notes.
//!
//! A marker is two opening brackets, one or more characters that aren't `]`, and
//! two closing brackets. `[[]]` is not a marker, and neither is `[[a]b]]`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static LINK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid link marker pattern"));

/// Replace every `[[X]]` with `X`, leaving the rest of the text untouched.
pub fn strip_link_markers(text: &str) -> Cow<'_, str> {
    LINK_MARKER.replace_all(text, "$1")
}

/// Link targets in order of appearance, duplicates included.
pub fn extract_links(text: &str) -> Vec<String> {
    LINK_MARKER
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
