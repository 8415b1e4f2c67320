//! In-memory note search with weighted heuristic ranking.
//!
//! This crate ranks a snapshot of notes against free-text queries and resolves
//! `[[wiki links]]` to the notes they most likely mean. There is no index: every
//! query is one linear pass, which is plenty for a personal notebook.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  types.rs   │     │  config.rs   │     │    search/       │
//! │ (Note,      │────▶│ (options,    │────▶│ (NoteFinder,     │
//! │  results)   │     │  factors)    │     │  matching, stats)│
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                                                   │
//!        ┌──────────────────────┬───────────────────┤
//!        ▼                      ▼                   ▼
//! ┌─────────────┐     ┌──────────────────┐  ┌──────────────┐
//! │  fuzzy/     │◀────│    scoring/      │  │  links.rs    │
//! │ (edit dist, │     │ (core weights,   │  │  utils.rs    │
//! │  similarity)│     │  ranking, limit) │  │              │
//! └─────────────┘     └──────────────────┘  └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use notefinder::{LinkResolution, Note, NoteFinder};
//!
//! let notes = vec![
//!     Note::new("Networks Theory", "Graphs, nodes and edges."),
//!     Note::new("Cooking", "See [[Networks Theory]] for the pantry graph."),
//! ];
//! let finder = NoteFinder::with_defaults(&notes);
//!
//! let results = finder.search("networks theory");
//! assert_eq!(results[0].note.title, "Networks Theory");
//!
//! match finder.find_linked_note("Networks Theory", None) {
//!     LinkResolution::One(note) => assert_eq!(note.title, "Networks Theory"),
//!     other => panic!("unexpected resolution: {other:?}"),
//! }
//! ```

// Module declarations
mod config;
mod fuzzy;
mod links;
pub mod load;
mod scoring;
mod search;
#[doc(hidden)]
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::{
    FinderConfig, ScoreFactors, ScoreFactorsPatch, SearchField, SearchMode, SearchOptions,
    SearchOptionsPatch, SortBy,
};
pub use fuzzy::{levenshtein_distance, string_similarity, FUZZY_SIMILARITY_THRESHOLD};
pub use links::{extract_links, strip_link_markers};
pub use load::{load_config, load_notes, LoadError};
pub use scoring::ranking::{collate_titles, sort_results};
pub use scoring::{confidence, note_score, score_breakdown, ScoreBreakdown};
pub use search::{find_all_notes, find_note, NoteFinder, BEST_MODE_LIMIT};
pub use types::{LinkResolution, MatchType, Note, NoteId, SearchResult, SearchStats};
pub use utils::clean_query;
