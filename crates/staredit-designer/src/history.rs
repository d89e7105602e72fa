//! Undo/redo over whole-level snapshots.
//!
//! Levels are small, so each logical edit stores a full copy of the level
//! rather than a reversible command.

use crate::level::Level;

/// Linear undo history for one editing surface.
///
/// Holds snapshots `S[0..n]` and a cursor into them. `S[cursor]` always
/// equals the level as last marked.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    snapshots: Vec<Level>,
    cursor: usize,
    /// Maximum number of snapshots kept; 0 keeps everything.
    max_depth: usize,
}

impl UndoHistory {
    /// Create a history holding one snapshot of `level`.
    pub fn new(level: &Level) -> Self {
        Self::with_depth(level, 0)
    }

    /// Create with a cap on stored snapshots (0 = unbounded)
    pub fn with_depth(level: &Level, max_depth: usize) -> Self {
        Self {
            snapshots: vec![level.copy()],
            cursor: 0,
            max_depth,
        }
    }

    /// Drop every snapshot and start again from `level`.
    pub fn reset(&mut self, level: &Level) {
        self.snapshots.clear();
        self.snapshots.push(level.copy());
        self.cursor = 0;
    }

    /// Push a snapshot of `level` after the cursor, discarding redo entries.
    pub fn mark(&mut self, level: &Level) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(level.copy());
        self.cursor = self.snapshots.len() - 1;

        // Trim if exceeds max depth
        if self.max_depth > 0 && self.snapshots.len() > self.max_depth {
            let excess = self.snapshots.len() - self.max_depth;
            self.snapshots.drain(..excess);
            self.cursor -= excess;
        }
        tracing::debug!("Undo mark {} of {}", self.cursor, self.snapshots.len());
    }

    /// Step back. Returns the snapshot to restore, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Level> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor)
    }

    /// Step forward. Returns the snapshot to restore, or `None` at the end.
    pub fn redo(&mut self) -> Option<&Level> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of stored snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Never true; a history always holds its initial snapshot.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Change the cap. Oldest snapshots are dropped on the next mark.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> Option<&Level> {
        self.snapshots.get(self.cursor)
    }
}
