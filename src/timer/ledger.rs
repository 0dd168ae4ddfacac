//! Append-only log of timer lifecycle events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Start,
    Pause,
    Stop,
    /// Synthetic "now" marker, only ever appended to a throwaway copy
    Tick,
    /// Reserved; no transition records it
    Expired,
}

/// A single lifecycle event and when it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub kind: EventKind,
    pub timestamp: DateTime<Utc>,
}

impl LedgerEntry {
    pub fn new(kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        Self { kind, timestamp }
    }
}

/// Chronological event log. Every operation returns a new ledger and leaves
/// the receiver untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger(Vec<LedgerEntry>);

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this ledger with `kind` recorded at the current wall-clock time
    pub fn append(&self, kind: EventKind) -> Self {
        self.append_at(kind, Utc::now())
    }

    /// Copy of this ledger with `kind` recorded at `timestamp`
    pub fn append_at(&self, kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        let mut entries = self.0.clone();
        entries.push(LedgerEntry::new(kind, timestamp));
        Self(entries)
    }

    /// Copy with a synthetic `Tick` for point-in-time queries
    pub fn with_tick(&self) -> Self {
        self.append(EventKind::Tick)
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&LedgerEntry> {
        self.0.last()
    }
}

impl From<Vec<LedgerEntry>> for Ledger {
    fn from(entries: Vec<LedgerEntry>) -> Self {
        Self(entries)
    }
}
