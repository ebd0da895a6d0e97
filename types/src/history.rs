//! Bounded calculation history.
//!
//! Records completed calculations newest-first, capped at [`MAX_HISTORY`]
//! entries by truncating the tail. Append-only from the engine's
//! perspective; the view layer may clear it as an explicit user command.

use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Maximum number of retained history entries.
pub const MAX_HISTORY: usize = 50;

/// Identifier for a history entry, unique for the lifetime of the history
/// (including across sessions, since the counter is persisted with it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An immutable record of one completed calculation, used for display and
/// copy-out, never re-executed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    id: EntryId,
    expression: String,
    result: String,
    timestamp: SystemTime,
}

impl HistoryEntry {
    #[must_use]
    pub fn id(&self) -> EntryId {
        self.id
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn result(&self) -> &str {
        &self.result
    }

    #[must_use]
    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Completed calculations, newest first.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcHistory {
    entries: Vec<HistoryEntry>,
    next_id: u64,
}

impl CalcHistory {
    /// Record a completed calculation.
    ///
    /// The new entry is inserted at the front; once the cap is exceeded the
    /// oldest entry is dropped. Returns the allocated id.
    pub fn record(
        &mut self,
        expression: String,
        result: String,
        timestamp: SystemTime,
    ) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            0,
            HistoryEntry {
                id,
                expression,
                result,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HISTORY);
        id
    }

    /// Entries, newest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empty the list. The id counter keeps counting so ids never repeat.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
