//! Shared test utilities and fixtures.

#![allow(dead_code)]

use notefinder::{Note, NoteFinder, ScoreFactors, SearchOptions, SearchResult};

// Re-export canonical test utilities from notefinder::testing
pub use notefinder::testing::{
    fixed_now, make_aged_note, make_linked_note, make_note, make_tagged_note,
};

// ============================================================================
// OPTION PRESETS
// ============================================================================

/// Default options with recency, popularity and fuzzy scoring switched off,
/// so scores come only from the text fields.
pub fn text_only_options() -> SearchOptions {
    SearchOptions {
        fuzzy_search: false,
        boost_recent: false,
        boost_popular: false,
        ..SearchOptions::default()
    }
}

/// Text-only options that keep every candidate with a positive score.
pub fn permissive_options() -> SearchOptions {
    SearchOptions {
        min_score: 1,
        max_results: 0,
        ..text_only_options()
    }
}

// ============================================================================
// FINDERS
// ============================================================================

/// A finder with the clock pinned to [`fixed_now`].
pub fn finder(notes: &[Note], options: SearchOptions) -> NoteFinder<'_> {
    NoteFinder::new(notes, options, ScoreFactors::default()).pinned_at(fixed_now())
}

/// Titles of `results`, in order.
pub fn titles<'a>(results: &[SearchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.note.title.as_str()).collect()
}

/// The Networks Theory note used by several scenarios.
pub fn networks_theory() -> Note {
    Note {
        tags: vec!["science".to_string()],
        created_at: Some(fixed_now()),
        ..make_note("nt", "Networks Theory", "...")
    }
}

/// A small notebook covering every match type.
pub fn notebook() -> Vec<Note> {
    vec![
        networks_theory(),
        make_note("learn", "Learning", "Study habits and spaced repetition."),
        make_note(
            "graphs",
            "Graph Basics",
            "Nodes and edges. See [[Networks Theory]] for more!",
        ),
        make_tagged_note("pantry", "Pantry", &["cooking", "networks"]),
        make_note("algo", "Algoritm", "Misspelled on purpose."),
    ]
}
