//! Journal file access
//!
//! Journals are only ever read from disk, to seed a session or feed a
//! one-shot aggregate. Nothing writes them back.

use crate::domain::JournalEntry;
use crate::error::{CompassError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout: one `[[entry]]` table per reflection
#[derive(Debug, Default, Serialize, Deserialize)]
struct JournalDocument {
    #[serde(default, rename = "entry")]
    entries: Vec<JournalEntry>,
}

/// Source of journal entries
pub trait EntrySource {
    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;

    /// Read every entry in stored order
    fn load_entries(&self) -> Result<Vec<JournalEntry>>;
}

/// TOML journal file on disk
#[derive(Debug, Clone)]
pub struct JournalFile {
    pub path: PathBuf,
}

impl JournalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JournalFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EntrySource for JournalFile {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load_entries(&self) -> Result<Vec<JournalEntry>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CompassError::JournalNotFound(self.path.clone())
            } else {
                CompassError::Io(e)
            }
        })?;

        let document = parse_journal(&contents).map_err(|e| CompassError::InvalidJournal {
            path: self.path.clone(),
            message: e.message().to_string(),
        })?;

        tracing::info!(
            source = %self.describe(),
            entries = document.entries.len(),
            "loaded journal"
        );
        Ok(document.entries)
    }
}

fn parse_journal(contents: &str) -> std::result::Result<JournalDocument, toml::de::Error> {
    toml::from_str(contents)
}

/// Render entries in the same layout `JournalFile` reads
pub fn to_toml(entries: &[JournalEntry]) -> Result<String> {
    let document = JournalDocument {
        entries: entries.to_vec(),
    };
    Ok(toml::to_string_pretty(&document)?)
}
