// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Scoring is additive. Each enabled signal (title, content, tags, fuzzy title,
//! recency, popularity) contributes independently and the total is rounded once
//! at the end. Within a single field only the strongest rule fires - an exact
//! title doesn't also collect the prefix and substring bonuses.

mod core;
pub mod ranking;

pub use self::core::*;
