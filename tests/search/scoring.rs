//! Score values and match classification for individual notes.

use crate::common::*;
use chrono::Duration;
use notefinder::{MatchType, Note, ScoreFactors, SearchField, SearchOptions};

#[test]
fn test_exact_title_without_bonuses_scores_exact_weight() {
    let notes = vec![networks_theory()];
    let results = finder(&notes, text_only_options()).search("Networks Theory");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::ExactTitle);
    assert_eq!(results[0].score, 100);
    assert_eq!(results[0].confidence, 80);
    assert_eq!(results[0].matched_text, "Networks Theory");
}

#[test]
fn test_exact_title_with_default_bonuses() {
    // 100 exact + 30 fuzzy (similarity 1.0) + 10 recent
    let notes = vec![networks_theory()];
    let results = finder(&notes, SearchOptions::default()).search("networks theory");

    assert_eq!(results[0].score, 140);
    assert_eq!(results[0].confidence, 100);
}

#[test]
fn test_title_prefix() {
    let notes = vec![make_note("learn", "Learning", "")];
    let results = finder(&notes, SearchOptions::default()).search("Lea");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::TitleStart);
    assert_eq!(results[0].score, 80);
}

#[test]
fn test_title_substring() {
    let notes = vec![make_note("g", "Graph Basics", "")];
    let results = finder(&notes, text_only_options()).search("basics");

    assert_eq!(results[0].match_type, MatchType::TitleContains);
    assert_eq!(results[0].score, 60);
}

#[test]
fn test_fuzzy_only_match() {
    let notes = vec![make_note("algo", "Algoritm", "")];
    let options = SearchOptions {
        min_score: 20,
        ..SearchOptions::default()
    };
    let results = finder(&notes, options).search("Algorithm");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::FuzzyMatch);
    // 30 × (1 - 1/9) = 26.67
    assert_eq!(results[0].score, 27);
}

#[test]
fn test_fuzzy_only_match_misses_default_threshold() {
    let notes = vec![make_note("algo", "Algoritm", "")];
    assert!(finder(&notes, SearchOptions::default())
        .search("Algorithm")
        .is_empty());
}

#[test]
fn test_link_markers_stripped_before_content_match() {
    let notes = vec![make_note("n1", "Other", "See [[Foo]] for details.")];
    let results = finder(&notes, permissive_options()).search("Foo");

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].match_type, MatchType::ContentMatch);
    assert_eq!(results[0].score, 20);
    assert_eq!(results[0].matched_text, "See [[Foo]] for details...");
}

#[test]
fn test_content_occurrences_add_bonus() {
    let notes = vec![make_note("n1", "Journal", "rust, more rust, and rust again")];
    let results = finder(&notes, permissive_options()).search("rust");

    // 20 + 2 extra occurrences × 5
    assert_eq!(results[0].score, 30);
}

#[test]
fn test_whole_content_match_uses_exact_content_weight() {
    let notes = vec![make_note("n1", "Journal", "  ownership  ")];
    let results = finder(&notes, permissive_options()).search("Ownership");

    assert_eq!(results[0].score, 40);
}

#[test]
fn test_tag_match_counts_once() {
    let notes = vec![make_tagged_note("n1", "Pantry", &["rustic", "rustacean"])];
    let results = finder(&notes, permissive_options()).search("rust");

    assert_eq!(results[0].match_type, MatchType::TagMatch);
    assert_eq!(results[0].score, 70);
}

#[test]
fn test_signals_stack_across_fields() {
    let notes = vec![Note {
        tags: vec!["rust".to_string()],
        ..make_note("n1", "Rust", "Rust is a language")
    }];
    let results = finder(&notes, permissive_options()).search("rust");

    // 100 title + 20 content + 70 tag
    assert_eq!(results[0].score, 190);
    assert_eq!(results[0].confidence, 100);
}

#[test]
fn test_search_in_limits_scored_fields() {
    let notes = vec![make_note("n1", "Rust", "rust")];
    let options = SearchOptions {
        search_in: [SearchField::Content].into_iter().collect(),
        ..permissive_options()
    };
    let results = finder(&notes, options).search("rust");

    assert_eq!(results[0].score, 40);
    // Classification still looks at the title
    assert_eq!(results[0].match_type, MatchType::ExactTitle);
}

#[test]
fn test_recency_bonus_tiers() {
    let notes = vec![
        make_aged_note("fresh", "Rust", 3),
        make_aged_note("month", "Rust", 20),
        make_aged_note("stale", "Rust", 40),
    ];
    let options = SearchOptions {
        boost_recent: true,
        ..permissive_options()
    };
    let scores: Vec<i64> = finder(&notes, options)
        .search("rust")
        .iter()
        .map(|r| r.score)
        .collect();

    assert_eq!(scores, vec![110, 105, 100]);
}

#[test]
fn test_recency_boundary_days_are_inclusive() {
    let notes = vec![
        make_aged_note("week", "Rust", 7),
        make_aged_note("month", "Rust", 30),
        make_aged_note("after", "Rust", 31),
    ];
    let options = SearchOptions {
        boost_recent: true,
        ..permissive_options()
    };
    let scores: Vec<i64> = finder(&notes, options)
        .search("rust")
        .iter()
        .map(|r| r.score)
        .collect();

    assert_eq!(scores, vec![110, 105, 100]);
}

#[test]
fn test_partial_day_is_floored() {
    let notes = vec![Note {
        created_at: Some(fixed_now() - Duration::days(7) - Duration::hours(23)),
        ..make_note("n1", "Rust", "")
    }];
    let options = SearchOptions {
        boost_recent: true,
        ..permissive_options()
    };

    assert_eq!(finder(&notes, options).search("rust")[0].score, 110);
}

#[test]
fn test_popularity_bonus_rounds_half_up() {
    let notes = vec![
        make_linked_note("hub", "Rust", 5),
        make_linked_note("pair", "Rust", 2),
        make_linked_note("solo", "Rust", 1),
    ];
    let options = SearchOptions {
        boost_popular: true,
        ..permissive_options()
    };
    let scores: Vec<i64> = finder(&notes, options)
        .search("rust")
        .iter()
        .map(|r| r.score)
        .collect();

    // 100 + 15, 100 + 7.5, 100
    assert_eq!(scores, vec![115, 108, 100]);
}

#[test]
fn test_case_sensitive_title_falls_back_to_fuzzy() {
    let notes = vec![make_note("n1", "Rust", "")];
    let options = SearchOptions {
        case_sensitive: true,
        fuzzy_search: true,
        ..permissive_options()
    };
    let results = finder(&notes, options).search("rust");

    // Fuzzy always lower-cases the title, so it still sees a perfect match
    assert_eq!(results[0].score, 30);
    assert_eq!(results[0].match_type, MatchType::FuzzyMatch);
}

#[test]
fn test_custom_factors() {
    let notes = vec![make_note("n1", "Rust", "")];
    let factors = ScoreFactors {
        exact_title: 12.5,
        ..ScoreFactors::default()
    };
    let finder = notefinder::NoteFinder::new(&notes, permissive_options(), factors)
        .pinned_at(fixed_now());
    let results = finder.search("rust");

    assert_eq!(results[0].score, 13);
    // 13 / (12.5 + 10 + 15)
    assert_eq!(results[0].confidence, 35);
}
