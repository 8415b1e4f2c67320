// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the notefinder command-line interface.
//!
//! Four subcommands over a JSON notes file: `search` ranks notes, `resolve`
//! follows a wiki link, `stats` summarizes a search, and `links` resolves every
//! `[[marker]]` inside one note. Tuning flags override whatever `--config` loaded.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use notefinder::{SearchField, SearchMode, SearchOptionsPatch, SortBy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "notefinder",
    about = "Rank notes and resolve wiki links from a JSON snapshot",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank notes against a query
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// Search query
        query: String,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Resolve wiki-link text to note(s) according to the search mode
    Resolve {
        #[command(flatten)]
        source: SourceArgs,

        /// Link text, with or without the surrounding [[ ]]
        link_text: String,

        /// Never resolve to the note with this id (usually the linking note)
        #[arg(long)]
        exclude: Option<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Show result count, average score, top match type and timing
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Search query
        query: String,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Resolve every [[link]] in one note's content
    Links {
        #[command(flatten)]
        source: SourceArgs,

        /// Id of the note whose links to follow
        note_id: String,

        #[command(flatten)]
        tuning: TuningArgs,
    },
}

/// Where the notes and configuration come from.
#[derive(Args)]
pub struct SourceArgs {
    /// JSON file containing an array of notes
    pub notes: PathBuf,

    /// JSON config file with optional "options" and "factors" objects
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Drop private notes before searching
    #[arg(long)]
    pub public_only: bool,
}

/// Per-invocation overrides on top of the loaded configuration.
#[derive(Args)]
pub struct TuningArgs {
    /// How many notes a link resolves to
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Result ordering
    #[arg(long, value_enum)]
    pub sort_by: Option<SortArg>,

    /// Maximum number of results (0 or negative for unlimited)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub max_results: Option<i64>,

    /// Minimum total score for a note to be returned
    #[arg(long, allow_negative_numbers = true)]
    pub min_score: Option<i64>,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Disable the edit-distance title bonus
    #[arg(long)]
    pub no_fuzzy: bool,

    /// Fields to score, comma-separated
    #[arg(long, value_enum, value_delimiter = ',')]
    pub fields: Option<Vec<FieldArg>>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl TuningArgs {
    /// Only flags the user actually passed end up in the patch.
    pub fn to_patch(&self) -> SearchOptionsPatch {
        SearchOptionsPatch {
            mode: self.mode.map(Into::into),
            search_in: self
                .fields
                .as_ref()
                .map(|fields| fields.iter().copied().map(Into::into).collect()),
            case_sensitive: self.case_sensitive.then_some(true),
            max_results: self.max_results,
            min_score: self.min_score,
            fuzzy_search: self.no_fuzzy.then_some(false),
            sort_by: self.sort_by.map(Into::into),
            ..SearchOptionsPatch::default()
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Single,
    Multiple,
    Best,
}

impl From<ModeArg> for SearchMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Single => SearchMode::Single,
            ModeArg::Multiple => SearchMode::Multiple,
            ModeArg::Best => SearchMode::Best,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    Score,
    Date,
    Popularity,
    Alphabetical,
}

impl From<SortArg> for SortBy {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Score => SortBy::Score,
            SortArg::Date => SortBy::Date,
            SortArg::Popularity => SortBy::Popularity,
            SortArg::Alphabetical => SortBy::Alphabetical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Title,
    Content,
    Tags,
}

impl From<FieldArg> for SearchField {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Title => SearchField::Title,
            FieldArg::Content => SearchField::Content,
            FieldArg::Tags => SearchField::Tags,
        }
    }
}
