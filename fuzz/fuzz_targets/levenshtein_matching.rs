// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance and similarity.
//!
//! Fuzzy title scoring trusts these two numbers completely. If the distance is
//! off by one, a misspelled title lands on the wrong side of the 0.7 threshold.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notefinder::{levenshtein_distance, string_similarity};

/// Fuzz input for edit distance
#[derive(Debug, Arbitrary)]
struct MatchInput {
    a_bytes: Vec<u8>,
    b_bytes: Vec<u8>,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths (in chars) to keep the quadratic matrix small
    let a: String = String::from_utf8_lossy(&input.a_bytes).chars().take(64).collect();
    let b: String = String::from_utf8_lossy(&input.b_bytes).chars().take(64).collect();
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    let distance = levenshtein_distance(&a, &b);

    // INVARIANT 1: symmetric
    assert_eq!(distance, levenshtein_distance(&b, &a));

    // INVARIANT 2: bounded by the length difference below and the longer length above
    assert!(a_len.abs_diff(b_len) <= distance);
    assert!(distance <= a_len.max(b_len));

    // INVARIANT 3: zero exactly for equal strings
    assert_eq!(distance == 0, a == b);

    // INVARIANT 4: similarity in [0, 1], and 1 for equal strings
    let similarity = string_similarity(&a, &b);
    assert!((0.0..=1.0).contains(&similarity), "similarity {}", similarity);
    if a == b {
        assert_eq!(similarity, 1.0);
    }
});
