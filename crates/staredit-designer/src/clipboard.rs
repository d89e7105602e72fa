//! Session clipboard shared by every editing surface.

use crate::level::Level;
use crate::model::Entity;
use staredit_core::EntityId;

/// Deep copies of the last copied entities, in level order.
///
/// One clipboard belongs to a session and is passed explicitly to the
/// surface operations that use it, so cut on one level and paste on another
/// works without any global state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clipboard {
    entities: Vec<Entity>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Replace the contents with copies of `ids` taken from `level`.
    pub fn copy_from(&mut self, level: &Level, ids: &[EntityId]) {
        self.entities = ids
            .iter()
            .filter_map(|id| level.get(*id).cloned())
            .collect();
    }

    /// Append fresh copies to `level` and return their handles.
    ///
    /// The clipboard keeps its contents, so pasting twice yields two sets.
    pub fn paste_into(&self, level: &mut Level) -> Vec<EntityId> {
        level.extend(self.entities.iter().cloned())
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}
