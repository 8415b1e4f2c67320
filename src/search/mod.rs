// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: score every note, keep the good ones, rank, cut.
//!
//! A [`NoteFinder`] is built over a borrowed snapshot of notes plus a
//! configuration, and is cheap enough to throw away whenever either changes.
//! Every query is a single linear pass over the snapshot:
//!
//! ```text
//! query ─▶ clean ─▶ score each note ─▶ score ≥ min_score? ─▶ sort ─▶ truncate
//!                                               │
//!                                               └─▶ match type, excerpt, confidence
//! ```
//!
//! There is no index, no I/O, and nothing to fail. Empty queries, empty snapshots
//! and low scores all come back as an empty list.

pub mod matching;
pub mod stats;

use chrono::{DateTime, Utc};
use std::time::Instant;
use tracing::{debug, trace};

use crate::config::{
    FinderConfig, ScoreFactors, ScoreFactorsPatch, SearchMode, SearchOptions, SearchOptionsPatch,
};
use crate::scoring::ranking::{apply_limit, sort_results};
use crate::scoring::{confidence, note_score};
use crate::types::{LinkResolution, Note, SearchResult, SearchStats};
use crate::utils::{clean_query, fold_case};

use matching::{match_type, matched_text};

/// How many notes `SearchMode::Best` resolves a link to.
pub const BEST_MODE_LIMIT: usize = 3;

/// Ranks notes from a borrowed snapshot against free-text queries.
///
/// Searching takes `&self` and updating takes `&mut self`, so a finder shared
/// across threads can be searched concurrently but never reconfigured mid-search.
#[derive(Debug, Clone)]
pub struct NoteFinder<'a> {
    notes: &'a [Note],
    options: SearchOptions,
    factors: ScoreFactors,
    /// Fixed "now" for recency; `None` reads the system clock per search.
    clock: Option<DateTime<Utc>>,
}

impl<'a> NoteFinder<'a> {
    pub fn new(notes: &'a [Note], options: SearchOptions, factors: ScoreFactors) -> Self {
        Self {
            notes,
            options,
            factors,
            clock: None,
        }
    }

    /// A finder with default options and weights.
    pub fn with_defaults(notes: &'a [Note]) -> Self {
        Self::new(notes, SearchOptions::default(), ScoreFactors::default())
    }

    pub fn from_config(notes: &'a [Note], config: FinderConfig) -> Self {
        Self::new(notes, config.options, config.factors)
    }

    /// Pin the clock used for the recency bonus.
    pub fn pinned_at(mut self, now: DateTime<Utc>) -> Self {
        self.clock = Some(now);
        self
    }

    pub fn notes(&self) -> &'a [Note] {
        self.notes
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn factors(&self) -> &ScoreFactors {
        &self.factors
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.unwrap_or_else(Utc::now)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Rank the snapshot against `query`.
    ///
    /// The query is trimmed, stripped of `[[`/`]]`, and whitespace-collapsed
    /// before matching. Only a blank raw query short-circuits: `[[]]` cleans to
    /// the empty string, which every title starts with.
    pub fn search(&self, query: &str) -> Vec<SearchResult<'a>> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let cleaned = clean_query(query);
        let case_sensitive = self.options.case_sensitive;
        let query = fold_case(&cleaned, case_sensitive);
        let now = self.now();

        let mut results: Vec<SearchResult<'a>> = self
            .notes
            .iter()
            .filter_map(|note| {
                let score = note_score(note, &query, &self.options, &self.factors, now);
                trace!(title = %note.title, score, "scored note");

                (score >= self.options.min_score).then(|| SearchResult {
                    note,
                    score,
                    match_type: match_type(note, &query, case_sensitive),
                    matched_text: matched_text(note, &query, case_sensitive),
                    confidence: confidence(score, &self.factors),
                })
            })
            .collect();

        let candidates = results.len();
        sort_results(&mut results, self.options.sort_by);
        apply_limit(&mut results, &self.options);

        debug!(
            query = %cleaned,
            notes = self.notes.len(),
            candidates,
            returned = results.len(),
            "search complete"
        );

        results
    }

    /// Resolve wiki-link text to note(s), never returning `exclude_id`.
    ///
    /// Runs a full [`search`](Self::search) (limits included) and then shapes the
    /// survivors by mode: `Single` → the top note, `Multiple` → all of them,
    /// `Best` → the top three, anything else → nothing.
    pub fn find_linked_note(&self, link_text: &str, exclude_id: Option<&str>) -> LinkResolution<'a> {
        let mut notes = self
            .search(link_text)
            .into_iter()
            .map(|result| result.note)
            .filter(|note| exclude_id.is_none_or(|id| !note.has_id(id)));

        match self.options.mode {
            SearchMode::Single => notes.next().map_or(LinkResolution::None, LinkResolution::One),
            SearchMode::Multiple => LinkResolution::Many(notes.collect()),
            SearchMode::Best => LinkResolution::Many(notes.take(BEST_MODE_LIMIT).collect()),
            SearchMode::Other => LinkResolution::None,
        }
    }

    /// Run `query` and report how it went.
    pub fn search_stats(&self, query: &str) -> SearchStats {
        let start = Instant::now();
        let results = self.search(query);
        let elapsed = start.elapsed();

        stats::summarize(&results, elapsed)
    }

    // =========================================================================
    // UPDATES
    // =========================================================================

    /// Replace the options with `patch` merged over the current ones.
    pub fn update_options(&mut self, patch: &SearchOptionsPatch) {
        self.options = self.options.merged(patch);
    }

    /// Replace the weights with `patch` merged over the current ones.
    pub fn update_factors(&mut self, patch: &ScoreFactorsPatch) {
        self.factors = self.factors.merged(patch);
    }
}

// =============================================================================
// ONE-SHOT HELPERS
// =============================================================================

/// Best single note for `query`, whatever mode `options` asked for.
pub fn find_note<'a>(notes: &'a [Note], query: &str, options: SearchOptions) -> Option<&'a Note> {
    let options = SearchOptions {
        mode: SearchMode::Single,
        ..options
    };
    NoteFinder::new(notes, options, ScoreFactors::default())
        .find_linked_note(query, None)
        .first()
}

/// Every note matching `query`, whatever mode `options` asked for.
pub fn find_all_notes<'a>(notes: &'a [Note], query: &str, options: SearchOptions) -> Vec<&'a Note> {
    let options = SearchOptions {
        mode: SearchMode::Multiple,
        ..options
    };
    NoteFinder::new(notes, options, ScoreFactors::default())
        .find_linked_note(query, None)
        .into_vec()
}
