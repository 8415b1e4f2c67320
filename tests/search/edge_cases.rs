//! Inputs at the boundaries: empty, odd, non-ASCII, reconfigured.

use crate::common::*;
use notefinder::{
    load_config, load_notes, MatchType, Note, NoteFinder, ScoreFactorsPatch, SearchOptions,
    SearchOptionsPatch, SortBy,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_blank_queries() {
    let notes = notebook();
    let finder = finder(&notes, SearchOptions::default());

    for query in ["", " ", "\t\n"] {
        assert!(finder.search(query).is_empty(), "query {query:?}");
    }
}

#[test]
fn test_bare_link_markers_return_every_note() {
    let notes = notebook();
    let results = finder(&notes, permissive_options()).search("  [[]]  ");

    // Cleans to "", a prefix of every title
    assert_eq!(results.len(), notes.len());
    assert!(results
        .iter()
        .all(|r| r.match_type == MatchType::TitleStart && r.score >= 80));
}

#[test]
fn test_empty_snapshot() {
    let finder = finder(&[], SearchOptions::default());
    assert!(finder.search("anything").is_empty());
    assert!(finder.find_linked_note("anything", None).is_none());
}

#[test]
fn test_query_whitespace_is_collapsed() {
    let notes = vec![networks_theory()];
    let results = finder(&notes, text_only_options()).search("  Networks \t  Theory ");

    assert_eq!(results[0].match_type, MatchType::ExactTitle);
}

#[test]
fn test_min_score_filters_inclusively() {
    let notes = vec![make_note("n1", "Learning", "")];
    let at = SearchOptions {
        min_score: 80,
        ..text_only_options()
    };
    let above = SearchOptions {
        min_score: 81,
        ..text_only_options()
    };

    assert_eq!(finder(&notes, at).search("lea").len(), 1);
    assert!(finder(&notes, above).search("lea").is_empty());
}

#[test]
fn test_negative_min_score_admits_everything() {
    let notes = notebook();
    let options = SearchOptions {
        min_score: -1,
        max_results: 0,
        ..text_only_options()
    };

    assert_eq!(finder(&notes, options).search("zzzz").len(), notes.len());
}

#[test]
fn test_non_ascii_titles() {
    let notes = vec![
        make_note("1", "Café Culture", ""),
        make_note("2", "ملاحظات", ""),
        make_note("3", "ÜBER Notes", ""),
    ];
    let finder = finder(&notes, text_only_options());

    assert_eq!(finder.search("café")[0].score, 80);
    assert_eq!(finder.search("ملاحظات")[0].match_type, MatchType::ExactTitle);
    assert_eq!(finder.search("über")[0].note.title, "ÜBER Notes");
}

#[test]
fn test_excerpt_falls_back_to_title() {
    // Tag match: neither title nor content contains the query
    let notes = vec![make_tagged_note("n1", "Pantry", &["spices"])];
    let results = finder(&notes, text_only_options()).search("spice");

    assert_eq!(results[0].match_type, MatchType::TagMatch);
    assert_eq!(results[0].matched_text, "Pantry");
}

#[test]
fn test_excerpt_picks_first_matching_sentence() {
    let notes = vec![make_note(
        "n1",
        "Diary",
        "Woke up late. Coffee was cold! Had more coffee? Fine.",
    )];
    let results = finder(&notes, permissive_options()).search("coffee");

    assert_eq!(results[0].matched_text, "Coffee was cold...");
}

#[test]
fn test_updates_replace_configuration_for_later_searches() {
    let notes = vec![
        make_note("b", "Rust Beta", ""),
        make_note("a", "Rust Alpha", ""),
    ];
    let mut finder = finder(&notes, text_only_options());
    assert_eq!(titles(&finder.search("rust")), vec!["Rust Beta", "Rust Alpha"]);

    finder.update_options(&SearchOptionsPatch {
        sort_by: Some(SortBy::Alphabetical),
        ..Default::default()
    });
    assert_eq!(titles(&finder.search("rust")), vec!["Rust Alpha", "Rust Beta"]);

    finder.update_factors(&ScoreFactorsPatch {
        title_start: Some(10.0),
        ..Default::default()
    });
    assert!(finder.search("rust").is_empty());
    assert_eq!(finder.options().sort_by, SortBy::Alphabetical);
}

#[test]
fn test_loaded_snapshot_and_config() {
    let mut notes_file = NamedTempFile::new().unwrap();
    notes_file
        .write_all(
            br#"[
                {"id": "1", "title": "Networks Theory", "tags": ["science"]},
                {"id": "2", "title": "Cooking", "content": "See [[Networks Theory]].", "isPublic": true}
            ]"#,
        )
        .unwrap();
    let mut config_file = NamedTempFile::new().unwrap();
    config_file
        .write_all(br#"{"options": {"mode": "multiple", "minScore": 10}}"#)
        .unwrap();

    let notes: Vec<Note> = load_notes(notes_file.path()).unwrap();
    let config = load_config(config_file.path()).unwrap();
    let finder = NoteFinder::from_config(&notes, config).pinned_at(fixed_now());

    let found = finder.find_linked_note("Networks Theory", None).into_vec();
    let ids: Vec<_> = found.iter().filter_map(|n| n.id.as_deref()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}
