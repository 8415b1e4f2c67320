use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use notefinder::{
    extract_links, load_config, load_notes, FinderConfig, LinkResolution, Note, NoteFinder,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, SourceArgs, TuningArgs};

/// Environment variable holding the log filter, e.g. `NOTEFINDER_LOG=notefinder=trace`.
const LOG_ENV: &str = "NOTEFINDER_LOG";

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            source,
            query,
            tuning,
        } => {
            let (notes, config) = load_source(&source)?;
            let finder = build_finder(&notes, config, &tuning);
            let results = finder.search(&query);
            if tuning.json {
                print_json(&results)
            } else {
                display::print_results(&query, &results);
                Ok(())
            }
        }

        Commands::Resolve {
            source,
            link_text,
            exclude,
            tuning,
        } => {
            let (notes, config) = load_source(&source)?;
            let finder = build_finder(&notes, config, &tuning);
            let resolution = finder.find_linked_note(&link_text, exclude.as_deref());
            if tuning.json {
                print_json(&resolution.into_vec())
            } else {
                display::print_resolution(&link_text, &resolution);
                Ok(())
            }
        }

        Commands::Stats {
            source,
            query,
            tuning,
        } => {
            let (notes, config) = load_source(&source)?;
            let finder = build_finder(&notes, config, &tuning);
            let stats = finder.search_stats(&query);
            if tuning.json {
                print_json(&stats)
            } else {
                display::print_stats(&query, &stats);
                Ok(())
            }
        }

        Commands::Links {
            source,
            note_id,
            tuning,
        } => {
            let (notes, config) = load_source(&source)?;
            let note = notes
                .iter()
                .find(|note| note.has_id(&note_id))
                .with_context(|| format!("no note with id '{}'", note_id))?;
            let links = extract_links(&note.content);
            debug!(note = %note_id, links = links.len(), "following links");

            let finder = build_finder(&notes, config, &tuning);
            let resolved: Vec<(String, LinkResolution<'_>)> = links
                .into_iter()
                .map(|link| {
                    let resolution = finder.find_linked_note(&link, Some(&note_id));
                    (link, resolution)
                })
                .collect();

            if tuning.json {
                let entries: Vec<LinkEntry<'_>> = resolved
                    .into_iter()
                    .map(|(link, resolution)| LinkEntry {
                        link,
                        notes: resolution.into_vec(),
                    })
                    .collect();
                print_json(&entries)
            } else {
                if resolved.is_empty() {
                    println!("'{}' has no [[links]]", note.title);
                }
                for (link, resolution) in &resolved {
                    display::print_resolution(link, resolution);
                }
                Ok(())
            }
        }
    }
}

/// One followed link in `links --json` output.
#[derive(Serialize)]
struct LinkEntry<'a> {
    link: String,
    notes: Vec<&'a Note>,
}

fn load_source(source: &SourceArgs) -> Result<(Vec<Note>, FinderConfig)> {
    let mut notes = load_notes(&source.notes).context("failed to load notes")?;
    let config = match &source.config {
        Some(path) => load_config(path).context("failed to load config")?,
        None => FinderConfig::default(),
    };

    if source.public_only {
        let before = notes.len();
        notes.retain(|note| note.is_public);
        info!(kept = notes.len(), dropped = before - notes.len(), "filtered private notes");
    }

    Ok((notes, config))
}

fn build_finder<'a>(notes: &'a [Note], config: FinderConfig, tuning: &TuningArgs) -> NoteFinder<'a> {
    let mut finder = NoteFinder::from_config(notes, config);
    finder.update_options(&tuning.to_patch());
    debug!(options = ?finder.options(), "finder ready");
    finder
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}
