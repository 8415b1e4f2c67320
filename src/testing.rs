//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::types::Note;

/// The instant every pinned test clock reads.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Create a saved note with no tags, links, or creation time.
///
/// This is the canonical implementation used across all tests.
pub fn make_note(id: &str, title: &str, content: &str) -> Note {
    Note {
        id: Some(id.to_string()),
        ..Note::new(title, content)
    }
}

/// Create a note with tags.
pub fn make_tagged_note(id: &str, title: &str, tags: &[&str]) -> Note {
    Note {
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        ..make_note(id, title, "")
    }
}

/// Create a note created `days` days before [`fixed_now`].
pub fn make_aged_note(id: &str, title: &str, days: i64) -> Note {
    Note {
        created_at: Some(fixed_now() - Duration::days(days)),
        ..make_note(id, title, "")
    }
}

/// Create a note with `links` outgoing links.
pub fn make_linked_note(id: &str, title: &str, links: usize) -> Note {
    Note {
        linked_notes: (0..links).map(|i| format!("{id}-link-{i}")).collect(),
        ..make_note(id, title, "")
    }
}
