//! # Snapshot History
//!
//! Linear undo/redo over full document snapshots.
//!
//! ## Design
//!
//! - The history is a sequence of complete, independent `SiteConfig` copies
//!   with a cursor pointing at "the document as currently viewed"
//! - `record` truncates everything after the cursor, appends, and advances:
//!   once a new edit lands after an undo, the abandoned future is gone
//! - `undo`/`redo` only move the cursor; snapshots are never modified
//! - Snapshot zero is the document at session start, so undoing all the way
//!   back always reaches the origin

use sitecraft_config::SiteConfig;

#[derive(Debug)]
pub struct History {
    snapshots: Vec<SiteConfig>,
    cursor: usize,
    /// Maximum retained snapshots (0 = unlimited)
    max_snapshots: usize,
}

impl History {
    /// Create an unbounded history seeded with the session-start document.
    pub fn new(initial: SiteConfig) -> Self {
        Self::with_max_snapshots(initial, 0)
    }

    /// Create a history that retains at most `max_snapshots` entries.
    ///
    /// On overflow the oldest snapshot is dropped, which shallows the undo
    /// well: the reachable origin becomes the oldest retained snapshot.
    pub fn with_max_snapshots(initial: SiteConfig, max_snapshots: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_snapshots,
        }
    }

    /// Record a new snapshot, discarding any redo branch.
    pub fn record(&mut self, snapshot: SiteConfig) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);

        if self.max_snapshots > 0 && self.snapshots.len() > self.max_snapshots {
            self.snapshots.remove(0);
        }

        self.cursor = self.snapshots.len() - 1;
    }

    /// Step back one snapshot. Returns the document landed on, or `None` at
    /// the origin.
    pub fn undo(&mut self) -> Option<&SiteConfig> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Step forward one snapshot. Returns the document landed on, or `None`
    /// at the newest edit.
    pub fn redo(&mut self) -> Option<&SiteConfig> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// The snapshot under the cursor.
    pub fn current(&self) -> &SiteConfig {
        &self.snapshots[self.cursor]
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots (always at least the origin).
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
