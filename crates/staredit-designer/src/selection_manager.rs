//! Hit-testing and selection state.
//!
//! The free functions answer geometric queries against a [`Level`]; the
//! [`SelectionManager`] holds the set of selected handles for one surface.

use std::collections::BTreeSet;

use crate::level::Level;
use crate::model::{Bounds, EntityType, Point};
use staredit_core::EntityId;

/// Returns the topmost entity containing `point`.
///
/// Entities are tested in reverse draw order, so when two entities overlap
/// the one added later wins.
///
/// # Arguments
///
/// * `level` - The level to search
/// * `point` - World coordinates of the query
///
/// # Returns
///
/// `Some(id)` of the hit entity, `None` if the point is over empty space.
pub fn pick(level: &Level, point: Point) -> Option<EntityId> {
    level
        .entities()
        .rev()
        .find(|(_, entity)| entity.contains(point))
        .map(|(id, _)| id)
}

/// Returns every entity containing `point`, in level order.
pub fn pick_all(level: &Level, point: Point) -> Vec<EntityId> {
    level
        .entities()
        .filter(|(_, entity)| entity.contains(point))
        .map(|(id, _)| id)
        .collect()
}

/// Returns every entity whose full circle lies inside `rect`, in level order.
///
/// An entity straddling an edge is left out; one tangent to an edge is kept.
pub fn within(level: &Level, rect: &Bounds) -> Vec<EntityId> {
    level
        .entities()
        .filter(|(_, entity)| entity.inside_rect(rect))
        .map(|(id, _)| id)
        .collect()
}

/// Manages the selected entities of one editing surface.
///
/// # Selection Model
///
/// - Membership is by [`EntityId`], never by entity value, so two identical
///   entities are still distinct.
/// - The set may only name entities of the surface's current level. Callers
///   keep that true by calling [`SelectionManager::retain_present`] after any
///   structural change and [`SelectionManager::clear`] on undo/redo.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected: BTreeSet<EntityId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use staredit_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    /// Selected handles in ascending id order.
    pub fn ids(&self) -> Vec<EntityId> {
        self.selected.iter().copied().collect()
    }

    /// Selected handles in the level's draw order.
    ///
    /// Tools iterate this so that copies are appended in a stable order.
    pub fn ordered_ids(&self, level: &Level) -> Vec<EntityId> {
        level
            .entities()
            .map(|(id, _)| id)
            .filter(|id| self.selected.contains(id))
            .collect()
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Adds one entity to the selection.
    pub fn add(&mut self, id: EntityId) {
        self.selected.insert(id);
    }

    /// Removes one entity from the selection.
    ///
    /// # Returns
    ///
    /// `true` if the entity was selected.
    pub fn remove(&mut self, id: EntityId) -> bool {
        self.selected.remove(&id)
    }

    /// Flips membership of one entity (control-click).
    pub fn toggle(&mut self, id: EntityId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Makes `id` the only selected entity.
    pub fn select_only(&mut self, id: EntityId) {
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Replaces the selection with `ids`.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        self.selected = ids.into_iter().collect();
    }

    /// Toggles every id in `ids` (control-marquee).
    pub fn symmetric_difference(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        let other: BTreeSet<EntityId> = ids.into_iter().collect();
        self.selected = self.selected.symmetric_difference(&other).copied().collect();
    }

    /// Selects every entity in the level, or every entity of one kind.
    ///
    /// # Arguments
    ///
    /// * `level` - The level whose entities are selected
    /// * `filter` - `Some(kind)` to select only that kind
    pub fn select_all(&mut self, level: &Level, filter: Option<EntityType>) {
        self.selected = level
            .entities()
            .filter(|(_, entity)| filter.is_none_or(|kind| entity.entity_type() == kind))
            .map(|(id, _)| id)
            .collect();
    }

    /// Drops handles that no longer name an entity of `level`.
    pub fn retain_present(&mut self, level: &Level) {
        self.selected.retain(|id| level.contains_id(*id));
    }
}
