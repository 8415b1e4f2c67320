// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries and link texts at a fixed notebook to verify the
//! engine never panics and never hands back results that break its own rules.
//! Brackets, emoji and combining marks all go through `clean_query` first, so
//! that's where the surprises would be.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notefinder::testing::{fixed_now, make_note};
use notefinder::{Note, NoteFinder, ScoreFactors, SearchMode, SearchOptions, SortBy};

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query_bytes: Vec<u8>,
    mode: u8,
    sort_by: u8,
    case_sensitive: bool,
    max_results: i8,
    min_score: i8,
}

fn notebook() -> Vec<Note> {
    let mut notes = vec![
        make_note("nt", "Networks Theory", "Graphs, nodes and edges."),
        make_note("cook", "Cooking", "See [[Networks Theory]] for the pantry graph!"),
        make_note("cafe", "Café Notes", "Über-strong coffee. ملاحظات?"),
        make_note("algo", "Algoritm", "[[]] [[a]b]] [Foo] [[Foo]]"),
    ];
    notes[1].tags = vec!["kitchen".to_string(), "graphs".to_string()];
    notes[2].linked_notes = vec!["nt".to_string(), "cook".to_string()];
    notes[3].created_at = Some(fixed_now());
    notes
}

fuzz_target!(|input: QueryInput| {
    static NOTES: std::sync::OnceLock<Vec<Note>> = std::sync::OnceLock::new();
    let notes = NOTES.get_or_init(notebook);

    // Cap query length (in chars, so we never split a code point) to avoid timeouts
    let query: String = String::from_utf8_lossy(&input.query_bytes)
        .chars()
        .take(200)
        .collect();

    let options = SearchOptions {
        mode: match input.mode % 4 {
            0 => SearchMode::Single,
            1 => SearchMode::Multiple,
            2 => SearchMode::Best,
            _ => SearchMode::Other,
        },
        sort_by: match input.sort_by % 5 {
            0 => SortBy::Score,
            1 => SortBy::Date,
            2 => SortBy::Popularity,
            3 => SortBy::Alphabetical,
            _ => SortBy::Other,
        },
        case_sensitive: input.case_sensitive,
        max_results: i64::from(input.max_results),
        min_score: i64::from(input.min_score),
        ..SearchOptions::default()
    };
    let finder = NoteFinder::new(notes, options.clone(), ScoreFactors::default())
        .pinned_at(fixed_now());

    // INVARIANT 1: search() never panics
    let results = finder.search(&query);

    // INVARIANT 2: every result clears the minimum score
    for result in &results {
        assert!(
            result.score >= options.min_score,
            "score {} below min_score {}",
            result.score,
            options.min_score
        );
        assert!((0..=100).contains(&result.confidence));
    }

    // INVARIANT 3: positive limits are honored
    if let Some(limit) = options.result_limit() {
        assert!(results.len() <= limit);
    }

    // INVARIANT 4: blank queries return nothing
    if query.trim().is_empty() {
        assert!(results.is_empty(), "blank query returned {}", results.len());
    }

    // INVARIANT 5: the excluded note never comes back
    let resolution = finder.find_linked_note(&query, Some("nt"));
    for note in resolution.into_vec() {
        assert!(!note.has_id("nt"), "excluded note resolved for {:?}", query);
    }
});
