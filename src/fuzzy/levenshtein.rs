// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance and the similarity ratio built on top of it.
//!
//! The distance is the classic O(nm) dynamic program with unit costs for insert,
//! delete and substitute. It always runs to completion and returns the exact
//! distance, which the similarity ratio divides by.
//!
//! Lengths are counted in Unicode scalar values, never bytes, so "café" has
//! length 4 and is one substitution away from "cafe".

/// Titles more similar than this earn the fuzzy bonus.
pub const FUZZY_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Levenshtein distance between `a` and `b`.
///
/// The matrix has `len(b) + 1` rows and `len(a) + 1` columns. Row 0 and column 0
/// hold the distances to the empty prefix; each inner cell takes the cheapest of
/// deletion, insertion, or substitution (free when the characters match).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let cols = a.len() + 1;
    let rows = b.len() + 1;

    let mut matrix = vec![0usize; rows * cols];
    for i in 0..cols {
        matrix[i] = i;
    }
    for j in 0..rows {
        matrix[j * cols] = j;
    }

    for j in 1..rows {
        for i in 1..cols {
            let indicator = usize::from(a[i - 1] != b[j - 1]);
            let deletion = matrix[j * cols + i - 1] + 1;
            let insertion = matrix[(j - 1) * cols + i] + 1;
            let substitution = matrix[(j - 1) * cols + i - 1] + indicator;
            matrix[j * cols + i] = deletion.min(insertion).min(substitution);
        }
    }

    matrix[rows * cols - 1]
}

/// Normalized similarity in `[0, 1]`: `(maxLen - distance) / maxLen`.
///
/// Two empty strings are identical (1.0).
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let (longer, shorter) = if a.chars().count() > b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let max_len = longer.chars().count();
    if max_len == 0 {
        return 1.0;
    }

    let distance = levenshtein_distance(longer, shorter);
    (max_len - distance) as f64 / max_len as f64
}
