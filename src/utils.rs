//! Utility functions for query and text processing.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Clean a raw query: trim, drop literal `[[` / `]]`, collapse whitespace runs.
///
/// The steps run in exactly that order, so `"[[ Foo]]"` becomes `" Foo"` - the
/// space exposed by removing the brackets is collapsed but not trimmed again.
///
/// ```text
/// "  [[Networks   Theory]] " → "Networks Theory"
/// ```
pub fn clean_query(query: &str) -> String {
    let without_markers = query.trim().replace("[[", "").replace("]]", "");
    WHITESPACE_RUN
        .replace_all(&without_markers, " ")
        .into_owned()
}

/// Apply the case rule: lower-case unless matching is case-sensitive.
///
/// Borrows when nothing changes, so case-sensitive searches don't allocate.
#[inline]
pub fn fold_case(text: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_lowercase())
    }
}

/// Count occurrences of `needle` in `haystack` by splitting on it.
///
/// Pieces minus one. Non-overlapping, left to right: `"aaaa"` split on `"aa"`
/// gives three pieces, so two occurrences.
///
/// An empty needle splits between every UTF-16 code unit, so `"abc"` gives two
/// and an empty haystack gives -1 (zero pieces).
pub fn count_occurrences(haystack: &str, needle: &str) -> i64 {
    let pieces = if needle.is_empty() {
        haystack.encode_utf16().count()
    } else {
        haystack.split(needle).count()
    };
    pieces as i64 - 1
}
