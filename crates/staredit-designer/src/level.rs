//! Levels: a named, bounded, ordered collection of entities.
//!
//! The level owns its entities and hands out [`EntityId`] handles for them.
//! Insertion order is draw order; later entities draw on top and win
//! hit-test ties.

use crate::model::{Bounds, Entity, EntityType, Point};
use staredit_core::constants::DEFAULT_LEVEL_NAME;
use staredit_core::{EntityId, LevelId};

#[derive(Debug, Clone)]
pub struct Level {
    id: LevelId,
    pub name: String,
    pub bounds: Bounds,
    entities: Vec<(EntityId, Entity)>,
    next_id: u64,
}

impl Level {
    /// A level holding nothing at all.
    pub fn empty(name: impl Into<String>, bounds: Bounds) -> Self {
        Self {
            id: LevelId::new(),
            name: name.into(),
            bounds,
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// A fresh level: default name and bounds, one rocket at the origin.
    pub fn new() -> Self {
        let mut level = Self::empty(DEFAULT_LEVEL_NAME, Bounds::default());
        level.add(Entity::rocket(0.0, 0.0));
        level
    }

    pub fn id(&self) -> LevelId {
        self.id
    }

    /// Append an entity on top of the draw order.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.push((id, entity));
        id
    }

    pub fn extend(&mut self, entities: impl IntoIterator<Item = Entity>) -> Vec<EntityId> {
        entities.into_iter().map(|e| self.add(e)).collect()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    pub fn contains_id(&self, id: EntityId) -> bool {
        self.entities.iter().any(|(eid, _)| *eid == id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|(eid, _)| *eid == id)?;
        Some(self.entities.remove(index).1)
    }

    /// Entities in draw order.
    pub fn entities(&self) -> impl DoubleEndedIterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter().map(|(id, e)| (*id, e))
    }

    pub fn entities_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut Entity)> + '_ {
        self.entities.iter_mut().map(|(id, e)| (*id, e))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|(id, _)| *id).collect()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities of one kind, in level order.
    pub fn entities_of_type(&self, entity_type: EntityType) -> Vec<(EntityId, &Entity)> {
        self.entities()
            .filter(|(_, e)| e.entity_type() == entity_type)
            .collect()
    }

    pub fn count_of(&self, entity_type: EntityType) -> usize {
        self.entities
            .iter()
            .filter(|(_, e)| e.entity_type() == entity_type)
            .count()
    }

    /// Position of an entity, if present.
    pub fn position_of(&self, id: EntityId) -> Option<Point> {
        self.get(id).map(|e| e.position)
    }

    /// Deep copy for undo snapshots. Handles are kept, so a restored copy
    /// addresses its entities by the same ids.
    pub fn copy(&self) -> Level {
        self.clone()
    }

    /// Replace name, bounds and entities with a deep copy of `other` while
    /// keeping this level's own identity.
    pub fn restore(&mut self, other: &Level) {
        self.name = other.name.clone();
        self.bounds = other.bounds;
        self.entities = other.entities.clone();
        self.next_id = self.next_id.max(other.next_id);
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality: name, bounds and entity values in order. Level ids
/// and entity handles are not compared.
impl PartialEq for Level {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.bounds == other.bounds
            && self.entities.len() == other.entities.len()
            && self
                .entities
                .iter()
                .zip(other.entities.iter())
                .all(|((_, a), (_, b))| a == b)
    }
}
