//! Undo/redo history: a truncating log of canvas snapshots and a cursor.
//!
//! `commit` is the only way canvas state changes. It drops every snapshot
//! after the cursor (the redo-able future), appends, and moves the cursor to
//! the new entry. `undo`/`redo` only move the cursor and are silent no-ops at
//! either end. Identical snapshots are not deduplicated: committing the
//! current state again still adds an entry.
//!
//! Invariant: the cursor is `None` iff the log is empty, otherwise it is a
//! valid index.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use tracing::debug;

use crate::doc::Snapshot;

/// Snapshot log with an undo/redo cursor.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Truncate the redo-able future, append `snapshot`, and point the
    /// cursor at it.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        let dropped = self.entries.len() - keep;
        self.entries.truncate(keep);
        self.entries.push(snapshot);
        self.cursor = Some(self.entries.len() - 1);
        debug!(cursor = keep, len = self.entries.len(), dropped, "history commit");
    }

    /// Step back one entry and return it. No-op at the first entry or when
    /// empty.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor.filter(|&c| c > 0)? - 1;
        self.cursor = Some(cursor);
        debug!(cursor, len = self.entries.len(), "history undo");
        self.entries.get(cursor)
    }

    /// Step forward one entry and return it. No-op at the last entry or when
    /// empty.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor.filter(|&c| c + 1 < self.entries.len())? + 1;
        self.cursor = Some(cursor);
        debug!(cursor, len = self.entries.len(), "history redo");
        self.entries.get(cursor)
    }

    /// The snapshot at the cursor, if any commit has happened.
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    /// Cursor index; `None` when the history is empty.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether `undo` would move the cursor.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Whether `redo` would move the cursor.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.entries.len())
    }

    /// All recorded snapshots, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    /// Number of recorded snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry, returning to the empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = None;
    }
}
