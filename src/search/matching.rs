// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explaining a match: its category and a presentable excerpt.
//!
//! Both run only for candidates, after scoring decided the note is in. They look
//! at the raw note text (link markers included) and apply the same case rule as
//! scoring, so `"Networks Theory"` classifies as an exact title match whether or
//! not the search is case-sensitive.

use crate::types::{MatchType, Note};
use crate::utils::fold_case;

/// Characters that end a sentence for excerpt purposes.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Classify why `note` matched. The first condition that holds wins:
///
/// 1. title equals query → `ExactTitle`
/// 2. title starts with query → `TitleStart`
/// 3. title contains query → `TitleContains`
/// 4. content contains query → `ContentMatch`
/// 5. any tag contains query → `TagMatch`
/// 6. otherwise → `FuzzyMatch`
///
/// The checks ignore `search_in`: a title hit is reported even when only tags
/// were scored.
pub fn match_type(note: &Note, query: &str, case_sensitive: bool) -> MatchType {
    let title = fold_case(&note.title, case_sensitive);

    if title == query {
        return MatchType::ExactTitle;
    }
    if title.starts_with(query) {
        return MatchType::TitleStart;
    }
    if title.contains(query) {
        return MatchType::TitleContains;
    }
    if fold_case(&note.content, case_sensitive).contains(query) {
        return MatchType::ContentMatch;
    }
    if note
        .tags
        .iter()
        .any(|tag| fold_case(tag, case_sensitive).contains(query))
    {
        return MatchType::TagMatch;
    }

    MatchType::FuzzyMatch
}

/// Pick the text a result list should show for `note`.
///
/// The full title when it contains the query. Otherwise the first content
/// sentence that does, trimmed and suffixed with `...`. Failing both, the title.
pub fn matched_text(note: &Note, query: &str, case_sensitive: bool) -> String {
    if fold_case(&note.title, case_sensitive).contains(query) {
        return note.title.clone();
    }

    note.content
        .split(SENTENCE_TERMINATORS)
        .find(|sentence| fold_case(sentence, case_sensitive).contains(query))
        .map(|sentence| format!("{}...", sentence.trim()))
        .unwrap_or_else(|| note.title.clone())
}
