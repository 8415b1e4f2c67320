// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows through a search.
//!
//! Notes come in from outside (a document store, a JSON file, a test fixture) and
//! are only ever borrowed. Everything the engine produces - results, link
//! resolutions, stats - points back into the caller's snapshot instead of cloning it.
//!
//! # Invariants
//!
//! - **Note**: read-only to the engine. A missing `created_at` means "no recency
//!   bonus", never an error. Only `linked_notes.len()` is consumed.
//! - **SearchResult**: `score` is the rounded total of every bonus that fired;
//!   `confidence` is in `[0, 100]` for non-negative weights.
//! - **MatchType**: describes the strongest textual reason for the match, decided
//!   independently of which score path actually contributed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::time::Duration;

// =============================================================================
// NOTES
// =============================================================================

/// Opaque note identifier, unique within a snapshot.
pub type NoteId = String;

/// A user-authored note, as loaded from the document store.
///
/// `content` may embed `[[Name]]` link markers. `is_public` is carried for
/// callers that filter by visibility; the engine never looks at it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Absent for notes that were never saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<NoteId>,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub linked_notes: Vec<NoteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Create a note with just a title and content; everything else empty.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            tags: Vec::new(),
            is_public: false,
            linked_notes: Vec::new(),
            created_at: None,
        }
    }

    /// Does this note carry the given identifier?
    ///
    /// Unsaved notes (no id) never match, so excluding `Some("x")` can't drop them.
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }

    /// Number of outgoing links - the popularity signal.
    #[inline]
    pub fn link_count(&self) -> usize {
        self.linked_notes.len()
    }
}

// =============================================================================
// MATCH TYPES
// =============================================================================

/// Why a note matched, strongest reason first.
///
/// Variant order is the precedence order: the first condition that holds wins.
/// `FuzzyMatch` is the fallback label when no textual condition holds, whether or
/// not the fuzzy score actually contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    ExactTitle,
    TitleStart,
    TitleContains,
    ContentMatch,
    TagMatch,
    FuzzyMatch,
}

impl MatchType {
    /// All match types in precedence order.
    pub const ALL: [MatchType; 6] = [
        MatchType::ExactTitle,
        MatchType::TitleStart,
        MatchType::TitleContains,
        MatchType::ContentMatch,
        MatchType::TagMatch,
        MatchType::FuzzyMatch,
    ];

    /// The wire label, e.g. `"exact_title"`.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchType::ExactTitle => "exact_title",
            MatchType::TitleStart => "title_start",
            MatchType::TitleContains => "title_contains",
            MatchType::ContentMatch => "content_match",
            MatchType::TagMatch => "tag_match",
            MatchType::FuzzyMatch => "fuzzy_match",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// One ranked hit. Borrowed from the snapshot the engine was built over.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<'a> {
    pub note: &'a Note,
    /// Rounded sum of all applicable bonuses.
    pub score: i64,
    pub match_type: MatchType,
    /// The title if it matched, else the first content sentence containing the
    /// query (suffixed with `...`), else the title again.
    pub matched_text: String,
    /// Score as a percentage of the fixed theoretical ceiling, capped at 100.
    pub confidence: i64,
}

/// What a link lookup resolved to.
///
/// The shape depends on the engine's [`SearchMode`](crate::SearchMode):
/// `Single` yields `One` or `None`, `Multiple` and `Best` yield `Many`
/// (possibly empty), an unrecognized mode yields `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkResolution<'a> {
    None,
    One(&'a Note),
    Many(Vec<&'a Note>),
}

impl<'a> LinkResolution<'a> {
    /// Flatten into a list regardless of shape.
    pub fn into_vec(self) -> Vec<&'a Note> {
        match self {
            LinkResolution::None => Vec::new(),
            LinkResolution::One(note) => vec![note],
            LinkResolution::Many(notes) => notes,
        }
    }

    /// The best note, if any.
    pub fn first(&self) -> Option<&'a Note> {
        match self {
            LinkResolution::None => None,
            LinkResolution::One(note) => Some(*note),
            LinkResolution::Many(notes) => notes.first().copied(),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LinkResolution::None)
    }
}

/// Summary of one search call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    pub total_results: usize,
    /// Mean result score, rounded; 0 with no results.
    pub avg_score: i64,
    /// Most frequent match type; serialized as `"none"` with no results.
    #[serde(serialize_with = "serialize_top_match_type")]
    pub top_match_type: Option<MatchType>,
    /// Wall-clock time of the search, serialized as fractional milliseconds.
    #[serde(serialize_with = "serialize_millis")]
    pub search_time: Duration,
}

impl SearchStats {
    /// Label for the top match type, `"none"` when there were no results.
    pub fn top_match_type_label(&self) -> &'static str {
        self.top_match_type.map_or("none", MatchType::as_str)
    }

    pub fn search_time_ms(&self) -> f64 {
        self.search_time.as_secs_f64() * 1000.0
    }
}

fn serialize_top_match_type<S: Serializer>(
    value: &Option<MatchType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map_or("none", MatchType::as_str))
}

fn serialize_millis<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.as_secs_f64() * 1000.0)
}
