// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Only one comparison happens per note (lower-cased title against the query), so
//! a plain full-matrix Levenshtein is all we need. No automata, no bounds.

mod levenshtein;

pub use levenshtein::*;
