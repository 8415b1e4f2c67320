// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Aggregate numbers over one result list.

use crate::scoring::round_half_up;
use crate::types::{MatchType, SearchResult, SearchStats};
use std::time::Duration;

/// Summarize `results`, which took `elapsed` to compute.
pub fn summarize(results: &[SearchResult<'_>], elapsed: Duration) -> SearchStats {
    let avg_score = if results.is_empty() {
        0
    } else {
        let total: i64 = results.iter().map(|r| r.score).sum();
        round_half_up(total as f64 / results.len() as f64)
    };

    SearchStats {
        total_results: results.len(),
        avg_score,
        top_match_type: top_match_type(results),
        search_time: elapsed,
    }
}

/// The most frequent match type. On a tie, whichever appeared first in the
/// ranked list wins.
pub fn top_match_type(results: &[SearchResult<'_>]) -> Option<MatchType> {
    // Counts in first-seen order; at most six entries
    let mut counts: Vec<(MatchType, usize)> = Vec::with_capacity(MatchType::ALL.len());
    for result in results {
        match counts.iter_mut().find(|(kind, _)| *kind == result.match_type) {
            Some((_, count)) => *count += 1,
            None => counts.push((result.match_type, 1)),
        }
    }

    counts
        .into_iter()
        .fold(None, |best: Option<(MatchType, usize)>, (kind, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((kind, count)),
        })
        .map(|(kind, _)| kind)
}
