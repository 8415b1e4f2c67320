// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how candidates get ordered and cut.
//!
//! Each `SortBy` maps to a single comparator. Sorting is stable, so ties keep the
//! order the snapshot listed them in - the same order an unrecognized `SortBy`
//! leaves untouched.
//!
//! Truncation happens after sorting. A limit of zero or below means "no limit",
//! not "no results".

use crate::config::{SearchOptions, SortBy};
use crate::types::SearchResult;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Order candidates in place according to `sort_by`.
pub fn sort_results(results: &mut [SearchResult<'_>], sort_by: SortBy) {
    match sort_by {
        SortBy::Score => results.sort_by(compare_by_score),
        SortBy::Date => results.sort_by(compare_by_date),
        SortBy::Alphabetical => results.sort_by(compare_by_title),
        SortBy::Popularity => results.sort_by(compare_by_popularity),
        SortBy::Other => {}
    }
}

/// Higher score first.
pub fn compare_by_score(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.score.cmp(&a.score)
}

/// Newer first. Notes without a creation time sort as the Unix epoch.
pub fn compare_by_date(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    created_millis(b).cmp(&created_millis(a))
}

/// Ascending title collation.
pub fn compare_by_title(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    collate_titles(&a.note.title, &b.note.title)
}

/// More outgoing links first.
pub fn compare_by_popularity(a: &SearchResult<'_>, b: &SearchResult<'_>) -> Ordering {
    b.note.link_count().cmp(&a.note.link_count())
}

fn created_millis(result: &SearchResult<'_>) -> i64 {
    result
        .note
        .created_at
        .map_or(0, |created| created.timestamp_millis())
}

/// Dictionary-style title comparison.
///
/// Four levels, each consulted only when the previous one ties:
/// 1. **Base letters** - accents and case stripped (`"École" < "Zebra"`)
/// 2. **Accents** - unaccented first (`"cafe" < "café"`)
/// 3. **Case** - lower-case before upper-case at the first difference (`"apple" < "Apple"`)
/// 4. **Code point** - total order for anything still equal
pub fn collate_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// NFD-decompose, drop combining marks, lower-case.
fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Truncate to `max_results` when it is positive.
pub fn apply_limit<T>(results: &mut Vec<T>, options: &SearchOptions) {
    if let Some(limit) = options.result_limit() {
        results.truncate(limit);
    }
}
