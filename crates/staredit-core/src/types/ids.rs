//! Stable handles.
//!
//! Entities are addressed by an [`EntityId`] handed out by the level that owns
//! them, never by pointer identity. Levels carry a [`LevelId`] that survives
//! undo/redo restores, so surfaces and listings can keep referring to them.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Handle of an entity inside one level.
///
/// Ids are unique within their level and never reused by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u64);

impl EntityId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a level for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelId(Uuid);

impl LevelId {
    /// Create a new unique level id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LevelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", &self.0.to_string()[..8])
    }
}
