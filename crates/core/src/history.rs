//! Undo/redo timeline of full board snapshots.
//!
//! Snapshots are never mutated once stored; undo and redo only move the index
//! and the caller replaces its live board with the snapshot it gets back.

use tracing::debug;

use crate::board::Snapshot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryLog {
    snapshots: Vec<Snapshot>,
    index: usize,
}

impl HistoryLog {
    /// Starts a timeline whose first entry is the board at match start.
    pub fn new(initial: Snapshot) -> Self {
        Self { snapshots: vec![initial], index: 0 }
    }

    /// Pushes to the end without touching the index or any forward entries.
    pub fn append(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
    }

    /// Records a committed action: drops any snapshots after the index, then
    /// appends and points at the new entry.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let discarded = self.snapshots.len() - (self.index + 1);
        if discarded > 0 {
            debug!(discarded, "history: dropping redo branch");
        }
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index = self.snapshots.len() - 1;
    }

    /// Steps back one entry, floored at the first.
    pub fn undo(&mut self) -> &Snapshot {
        self.index = self.index.saturating_sub(1);
        self.current()
    }

    /// Steps forward one entry, capped at the last.
    pub fn redo(&mut self) -> &Snapshot {
        self.index = (self.index + 1).min(self.snapshots.len() - 1);
        self.current()
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the log holds at least the initial board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }
}
