//! Journal aggregate root

use crate::domain::JournalEntry;

/// Ordered, append-only list of entries held for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Journal::default()
    }

    pub fn from_entries(entries: Vec<JournalEntry>) -> Self {
        Journal { entries }
    }

    /// Append an entry; entries are never edited afterwards
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Replace the whole journal, returning the previous entries
    pub fn replace(&mut self, entries: Vec<JournalEntry>) -> Vec<JournalEntry> {
        std::mem::replace(&mut self.entries, entries)
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
