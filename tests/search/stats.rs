//! Search statistics.

use crate::common::*;
use notefinder::{MatchType, SearchOptions};

#[test]
fn test_stats_over_mixed_results() {
    let notes = vec![make_note("a", "Rust", ""), make_note("b", "Rust Basics", "")];
    let stats = finder(&notes, SearchOptions::default()).search_stats("rust");

    assert_eq!(stats.total_results, 2);
    // (130 + 80) / 2
    assert_eq!(stats.avg_score, 105);
    // One each; the higher-ranked type wins the tie
    assert_eq!(stats.top_match_type, Some(MatchType::ExactTitle));
}

#[test]
fn test_stats_most_frequent_type_wins() {
    let notes = vec![
        make_note("a", "Rust", ""),
        make_note("b", "Rust Basics", ""),
        make_note("c", "Rust Advanced", ""),
    ];
    let stats = finder(&notes, SearchOptions::default()).search_stats("rust");

    assert_eq!(stats.top_match_type, Some(MatchType::TitleStart));
    // (130 + 80 + 80) / 3 = 96.67
    assert_eq!(stats.avg_score, 97);
}

#[test]
fn test_stats_without_results() {
    let notes = notebook();
    let stats = finder(&notes, SearchOptions::default()).search_stats("zzzz");

    assert_eq!(stats.total_results, 0);
    assert_eq!(stats.avg_score, 0);
    assert_eq!(stats.top_match_type, None);
    assert_eq!(stats.top_match_type_label(), "none");
}

#[test]
fn test_stats_respect_max_results() {
    let notes: Vec<_> = (0..12)
        .map(|i| make_note(&i.to_string(), &format!("Rust {i}"), ""))
        .collect();
    let stats = finder(&notes, SearchOptions::default()).search_stats("rust");

    assert_eq!(stats.total_results, 10);
}

#[test]
fn test_stats_json_shape() {
    let notes = vec![make_note("a", "Rust", "")];
    let stats = finder(&notes, SearchOptions::default()).search_stats("rust");
    let value = serde_json::to_value(&stats).unwrap();

    assert_eq!(value["totalResults"], 1);
    assert_eq!(value["avgScore"], 130);
    assert_eq!(value["topMatchType"], "exact_title");
    assert!(value["searchTime"].as_f64().unwrap() >= 0.0);
}
