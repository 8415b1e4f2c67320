// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search scores.
//!
//! Every function here takes an already-cleaned query. When matching is
//! case-insensitive the caller folds the query once and each field is folded
//! here, so both sides always follow the same case rule.
//!
//! # Field rules (first match wins within a field)
//!
//! | Field   | Rule                         | Weight             |
//! |---------|------------------------------|--------------------|
//! | Title   | equal / starts with / contains | `exact_title` / `title_start` / `title_contains` |
//! | Content | trimmed equal / contains     | `exact_content` / `content_contains`, +5 per extra occurrence |
//! | Tags    | first tag containing query   | `tag_match` (never summed) |
//! | Fuzzy   | title similarity > 0.7       | `fuzzy_match × similarity` |
//!
//! # Bonuses
//!
//! | Signal     | Full          | Half         |
//! |------------|---------------|--------------|
//! | Recency    | ≤ 7 days old  | ≤ 30 days old |
//! | Popularity | ≥ 5 links     | ≥ 2 links    |

use chrono::{DateTime, Utc};

use crate::config::{ScoreFactors, SearchField, SearchOptions};
use crate::fuzzy::{string_similarity, FUZZY_SIMILARITY_THRESHOLD};
use crate::links::strip_link_markers;
use crate::types::Note;
use crate::utils::{count_occurrences, fold_case};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Extra points for each content occurrence beyond the first.
pub const OCCURRENCE_BONUS: f64 = 5.0;

/// Notes at most this many days old get the full recency bonus.
pub const RECENT_FULL_DAYS: i64 = 7;

/// Notes at most this many days old get half the recency bonus.
pub const RECENT_HALF_DAYS: i64 = 30;

/// Link count for the full popularity bonus.
pub const POPULAR_FULL_LINKS: usize = 5;

/// Link count for half the popularity bonus.
pub const POPULAR_HALF_LINKS: usize = 2;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

// =============================================================================
// BREAKDOWN
// =============================================================================

/// Per-signal contributions for one note, before rounding.
///
/// Disabled signals contribute 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub title: f64,
    pub content: f64,
    pub tags: f64,
    pub fuzzy: f64,
    pub recency: f64,
    pub popularity: f64,
}

impl ScoreBreakdown {
    /// The rounded total: what `SearchResult::score` carries.
    pub fn total(&self) -> i64 {
        round_half_up(
            self.title + self.content + self.tags + self.fuzzy + self.recency + self.popularity,
        )
    }
}

/// Score one note against a cleaned query.
///
/// `query` must already follow the case rule (lower-cased unless
/// `options.case_sensitive`). `now` anchors the recency bonus.
pub fn score_breakdown(
    note: &Note,
    query: &str,
    options: &SearchOptions,
    factors: &ScoreFactors,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    let case_sensitive = options.case_sensitive;
    let mut breakdown = ScoreBreakdown::default();

    if options.searches(SearchField::Title) {
        breakdown.title = title_score(&note.title, query, case_sensitive, factors);
    }
    if options.searches(SearchField::Content) {
        breakdown.content = content_score(&note.content, query, case_sensitive, factors);
    }
    if options.searches(SearchField::Tags) {
        breakdown.tags = tags_score(&note.tags, query, case_sensitive, factors);
    }
    if options.fuzzy_search {
        breakdown.fuzzy = fuzzy_score(&note.title, query, factors);
    }
    if options.boost_recent {
        breakdown.recency = recency_bonus(note.created_at, now, factors);
    }
    if options.boost_popular {
        breakdown.popularity = popularity_bonus(note.link_count(), factors);
    }

    breakdown
}

/// Rounded total score for one note.
#[inline]
pub fn note_score(
    note: &Note,
    query: &str,
    options: &SearchOptions,
    factors: &ScoreFactors,
    now: DateTime<Utc>,
) -> i64 {
    score_breakdown(note, query, options, factors, now).total()
}

// =============================================================================
// FIELD SCORES
// =============================================================================

/// Exact title beats prefix beats substring. No stacking.
pub fn title_score(title: &str, query: &str, case_sensitive: bool, factors: &ScoreFactors) -> f64 {
    let title = fold_case(title, case_sensitive);

    if title == query {
        factors.exact_title
    } else if title.starts_with(query) {
        factors.title_start
    } else if title.contains(query) {
        factors.title_contains
    } else {
        0.0
    }
}

/// Content match with link markers stripped first.
///
/// The base is `exact_content` when the whole trimmed content equals the query,
/// otherwise `content_contains`. Each occurrence past the first adds
/// [`OCCURRENCE_BONUS`], counted by splitting on the query.
///
/// An empty query matches every gap between UTF-16 code units. Blank content
/// then counts -1 occurrences and loses two bonuses from its base.
pub fn content_score(
    content: &str,
    query: &str,
    case_sensitive: bool,
    factors: &ScoreFactors,
) -> f64 {
    let folded = fold_case(content, case_sensitive);
    let cleaned = strip_link_markers(&folded);

    if !cleaned.contains(query) {
        return 0.0;
    }

    let matches = count_occurrences(&cleaned, query);
    let base = if cleaned.trim() == query {
        factors.exact_content
    } else {
        factors.content_contains
    };

    base + (matches - 1) as f64 * OCCURRENCE_BONUS
}

/// The first tag containing the query earns `tag_match`; the rest are ignored.
pub fn tags_score(tags: &[String], query: &str, case_sensitive: bool, factors: &ScoreFactors) -> f64 {
    let hit = tags
        .iter()
        .any(|tag| fold_case(tag, case_sensitive).contains(query));

    if hit {
        factors.tag_match
    } else {
        0.0
    }
}

/// Similarity-scaled bonus for near-miss titles.
///
/// The title is always lower-cased here, even for case-sensitive searches.
pub fn fuzzy_score(title: &str, query: &str, factors: &ScoreFactors) -> f64 {
    let similarity = string_similarity(&title.to_lowercase(), query);

    if similarity > FUZZY_SIMILARITY_THRESHOLD {
        factors.fuzzy_match * similarity
    } else {
        0.0
    }
}

// =============================================================================
// BONUSES
// =============================================================================

/// Whole days since creation, floored. Negative for timestamps in the future.
pub fn days_since(created_at: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - created_at)
        .num_milliseconds()
        .div_euclid(MILLIS_PER_DAY)
}

/// Full bonus within a week, half within a month, nothing after or without a date.
pub fn recency_bonus(
    created_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    factors: &ScoreFactors,
) -> f64 {
    let Some(created_at) = created_at else {
        return 0.0;
    };

    match days_since(created_at, now) {
        days if days <= RECENT_FULL_DAYS => factors.recent_bonus,
        days if days <= RECENT_HALF_DAYS => factors.recent_bonus * 0.5,
        _ => 0.0,
    }
}

/// Full bonus from five outgoing links, half from two.
pub fn popularity_bonus(link_count: usize, factors: &ScoreFactors) -> f64 {
    if link_count >= POPULAR_FULL_LINKS {
        factors.popular_bonus
    } else if link_count >= POPULAR_HALF_LINKS {
        factors.popular_bonus * 0.5
    } else {
        0.0
    }
}

// =============================================================================
// CONFIDENCE & ROUNDING
// =============================================================================

/// Score as a percentage of [`ScoreFactors::max_possible`], capped at 100.
///
/// A non-positive ceiling can't produce a meaningful ratio: positive scores
/// report 100, everything else 0.
pub fn confidence(score: i64, factors: &ScoreFactors) -> i64 {
    let max_possible = factors.max_possible();
    if max_possible <= 0.0 {
        return if score > 0 { 100 } else { 0 };
    }

    round_half_up(score as f64 / max_possible * 100.0).min(100)
}

/// Round to the nearest integer with halves going up (`2.5 → 3`, `-2.5 → -2`).
#[inline]
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
