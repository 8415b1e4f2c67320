// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration: what to look at, how to weigh it, how to order it.
//!
//! Two values configure an engine: [`SearchOptions`] (behavior) and
//! [`ScoreFactors`] (weights). Both are plain immutable values. Updates go through
//! the `*Patch` types, which produce a fresh value that replaces the old one
//! wholesale - nothing is mutated field-by-field under a running search.
//!
//! All three serialize as camelCase JSON. Missing fields take their defaults,
//! unknown fields are ignored, and unrecognized `mode`/`sortBy` strings land in an
//! `Other` variant instead of failing the whole config.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// ENUMS
// =============================================================================

/// How many notes a link lookup resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// The top result only.
    #[default]
    Single,
    /// Every result.
    Multiple,
    /// At most the top three.
    Best,
    /// Anything else; resolves to nothing.
    #[serde(other)]
    Other,
}

/// A note field the engine can score against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Content,
    Tags,
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Descending score.
    #[default]
    Score,
    /// Newest first; notes without a creation time sort as the epoch.
    Date,
    /// Most outgoing links first.
    Popularity,
    /// Ascending title, case-insensitive collation.
    Alphabetical,
    /// Unrecognized; candidates keep snapshot order.
    #[serde(other)]
    Other,
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Behavior switches for a search engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub mode: SearchMode,
    pub search_in: BTreeSet<SearchField>,
    pub case_sensitive: bool,
    /// Truncation limit. Zero or negative means unlimited.
    pub max_results: i64,
    /// A note is a candidate only if its total score is at least this.
    pub min_score: i64,
    pub fuzzy_search: bool,
    /// Reserved; does not change scoring.
    pub include_partial: bool,
    pub sort_by: SortBy,
    pub boost_recent: bool,
    pub boost_popular: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            mode: SearchMode::Single,
            search_in: [SearchField::Title, SearchField::Content, SearchField::Tags]
                .into_iter()
                .collect(),
            case_sensitive: false,
            max_results: 10,
            min_score: 33,
            fuzzy_search: true,
            include_partial: true,
            sort_by: SortBy::Score,
            boost_recent: true,
            boost_popular: true,
        }
    }
}

impl SearchOptions {
    #[inline]
    pub fn searches(&self, field: SearchField) -> bool {
        self.search_in.contains(&field)
    }

    /// `Some(limit)` when truncation applies, `None` for unlimited.
    pub fn result_limit(&self) -> Option<usize> {
        (self.max_results > 0).then(|| usize::try_from(self.max_results).unwrap_or(usize::MAX))
    }

    /// Shallow merge: every field set in the patch wins.
    pub fn merged(&self, patch: &SearchOptionsPatch) -> Self {
        Self {
            mode: patch.mode.unwrap_or(self.mode),
            search_in: patch
                .search_in
                .clone()
                .unwrap_or_else(|| self.search_in.clone()),
            case_sensitive: patch.case_sensitive.unwrap_or(self.case_sensitive),
            max_results: patch.max_results.unwrap_or(self.max_results),
            min_score: patch.min_score.unwrap_or(self.min_score),
            fuzzy_search: patch.fuzzy_search.unwrap_or(self.fuzzy_search),
            include_partial: patch.include_partial.unwrap_or(self.include_partial),
            sort_by: patch.sort_by.unwrap_or(self.sort_by),
            boost_recent: patch.boost_recent.unwrap_or(self.boost_recent),
            boost_popular: patch.boost_popular.unwrap_or(self.boost_popular),
        }
    }
}

/// Partial [`SearchOptions`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptionsPatch {
    pub mode: Option<SearchMode>,
    pub search_in: Option<BTreeSet<SearchField>>,
    pub case_sensitive: Option<bool>,
    pub max_results: Option<i64>,
    pub min_score: Option<i64>,
    pub fuzzy_search: Option<bool>,
    pub include_partial: Option<bool>,
    pub sort_by: Option<SortBy>,
    pub boost_recent: Option<bool>,
    pub boost_popular: Option<bool>,
}

// =============================================================================
// FACTORS
// =============================================================================

/// Score weights. Fractional values are allowed; totals are rounded at the end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreFactors {
    pub exact_title: f64,
    pub title_start: f64,
    pub title_contains: f64,
    pub exact_content: f64,
    pub content_contains: f64,
    pub tag_match: f64,
    /// Scaled by title similarity, not added flat.
    pub fuzzy_match: f64,
    pub recent_bonus: f64,
    pub popular_bonus: f64,
}

impl Default for ScoreFactors {
    fn default() -> Self {
        Self {
            exact_title: 100.0,
            title_start: 80.0,
            title_contains: 60.0,
            exact_content: 40.0,
            content_contains: 20.0,
            tag_match: 70.0,
            fuzzy_match: 30.0,
            recent_bonus: 10.0,
            popular_bonus: 15.0,
        }
    }
}

impl ScoreFactors {
    /// The fixed confidence denominator: best title score plus both bonuses.
    ///
    /// Constant across notes and enabled fields.
    pub fn max_possible(&self) -> f64 {
        self.exact_title + self.recent_bonus + self.popular_bonus
    }

    pub fn merged(&self, patch: &ScoreFactorsPatch) -> Self {
        Self {
            exact_title: patch.exact_title.unwrap_or(self.exact_title),
            title_start: patch.title_start.unwrap_or(self.title_start),
            title_contains: patch.title_contains.unwrap_or(self.title_contains),
            exact_content: patch.exact_content.unwrap_or(self.exact_content),
            content_contains: patch.content_contains.unwrap_or(self.content_contains),
            tag_match: patch.tag_match.unwrap_or(self.tag_match),
            fuzzy_match: patch.fuzzy_match.unwrap_or(self.fuzzy_match),
            recent_bonus: patch.recent_bonus.unwrap_or(self.recent_bonus),
            popular_bonus: patch.popular_bonus.unwrap_or(self.popular_bonus),
        }
    }
}

/// Partial [`ScoreFactors`]; `None` keeps the current weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoreFactorsPatch {
    pub exact_title: Option<f64>,
    pub title_start: Option<f64>,
    pub title_contains: Option<f64>,
    pub exact_content: Option<f64>,
    pub content_contains: Option<f64>,
    pub tag_match: Option<f64>,
    pub fuzzy_match: Option<f64>,
    pub recent_bonus: Option<f64>,
    pub popular_bonus: Option<f64>,
}

// =============================================================================
// CONFIG FILE
// =============================================================================

/// Everything an engine needs besides the notes. This is the config file shape:
///
/// ```json
/// { "options": { "mode": "best", "minScore": 20 }, "factors": { "tagMatch": 90 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FinderConfig {
    pub options: SearchOptions,
    pub factors: ScoreFactors,
}
