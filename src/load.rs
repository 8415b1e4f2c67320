//! Reading note snapshots and finder configuration from disk.
//!
//! Both are JSON. A notes file is an array of notes; a config file is a
//! [`FinderConfig`] object where every key is optional.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::FinderConfig;
use crate::types::Note;

/// Why a file couldn't be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON array of notes.
pub fn load_notes(path: impl AsRef<Path>) -> Result<Vec<Note>, LoadError> {
    let notes: Vec<Note> = read_json(path.as_ref())?;
    debug!(path = %path.as_ref().display(), count = notes.len(), "loaded notes");
    Ok(notes)
}

/// Load a finder configuration; absent keys take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<FinderConfig, LoadError> {
    read_json(path.as_ref())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })
}
