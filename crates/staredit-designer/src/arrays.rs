//! # Array Operations Module
//!
//! Creates copies of entities in two patterns, both anchored on the level
//! origin:
//! - Linear arrays: copies stepping from the entity toward the origin
//! - Circular arrays: copies rotated around the origin in equal angles
//!
//! The originals stay where they are; copies are appended to the level and
//! carry a copy of the original's path, moved the same way.

use crate::level::Level;
use crate::model::Point;
use staredit_core::constants::MAX_ARRAY_COUNT;
use staredit_core::{EntityId, ToolError};

/// Represents different types of array operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayType {
    /// Copies on the segment from the entity to the origin
    Linear,
    /// Rotated copies around the origin
    Circular,
}

/// Main array operation: the pattern and its total count.
///
/// `count` includes the original, so `count - 1` copies are made per entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOperation {
    pub array_type: ArrayType,
    pub count: i64,
}

impl ArrayOperation {
    pub fn linear(count: i64) -> Self {
        Self {
            array_type: ArrayType::Linear,
            count,
        }
    }

    pub fn circular(count: i64) -> Self {
        Self {
            array_type: ArrayType::Circular,
            count,
        }
    }

    /// Validate the array operation
    pub fn validate(&self) -> Result<(), ToolError> {
        if !(1..=MAX_ARRAY_COUNT).contains(&self.count) {
            return Err(ToolError::InvalidCount { count: self.count });
        }
        Ok(())
    }

    /// Copies produced for each eligible entity; zero for a count that
    /// does not validate.
    pub fn copies_per_entity(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        usize::try_from(self.count - 1).unwrap_or(0)
    }

    /// Positions of the copies of an entity at `position`, in creation order.
    ///
    /// Linear arrays return nothing for an entity on the origin; circular
    /// arrays still return (degenerate) copies there.
    pub fn copy_positions(&self, position: Point) -> Vec<Point> {
        let copies = self.copies_per_entity();
        if copies == 0 {
            return Vec::new();
        }
        match self.array_type {
            ArrayType::Linear => {
                if position.is_origin() {
                    return Vec::new();
                }
                let steps = copies as f64;
                let step_x = position.x / steps;
                let step_y = position.y / steps;
                (1..=copies)
                    .map(|i| Point::new(position.x - i as f64 * step_x, position.y - i as f64 * step_y))
                    .collect()
            }
            ArrayType::Circular => {
                let step = 360.0 / self.count as f64;
                (1..=copies)
                    .map(|i| position.rotated_about_origin(i as f64 * step))
                    .collect()
            }
        }
    }
}

/// Apply an array operation to `ids` in `level`.
///
/// Copies are appended after every existing entity, grouped per original in
/// the order of `ids`. The path reference point of each copy moves with it:
/// translated by the same step for linear arrays, rotated by the same angle
/// for circular arrays.
///
/// # Returns
///
/// Handles of the new entities. Empty when `count` is 1 or nothing was
/// eligible.
///
/// # Errors
///
/// [`ToolError::InvalidCount`] for `count <= 0` or above
/// [`MAX_ARRAY_COUNT`]; the level is untouched.
pub fn apply_array(
    level: &mut Level,
    ids: &[EntityId],
    operation: ArrayOperation,
) -> Result<Vec<EntityId>, ToolError> {
    operation.validate()?;

    let mut copies = Vec::new();
    for id in ids {
        let Some(original) = level.get(*id) else {
            continue;
        };
        let start = original.position;
        for (i, target) in operation.copy_positions(start).into_iter().enumerate() {
            let mut copy = original.clone();
            match operation.array_type {
                ArrayType::Linear => copy.translate(target.x - start.x, target.y - start.y),
                ArrayType::Circular => {
                    let angle = (i + 1) as f64 * 360.0 / operation.count as f64;
                    copy.map_points(|p| p.rotated_about_origin(angle));
                }
            }
            copies.push(copy);
        }
    }

    let created = level.extend(copies);
    tracing::debug!(
        "{:?} array x{} created {} entities",
        operation.array_type,
        operation.count,
        created.len()
    );
    Ok(created)
}

/// Linear array of `count` (original included) toward the origin.
pub fn linear_array(level: &mut Level, ids: &[EntityId], count: i64) -> Result<Vec<EntityId>, ToolError> {
    apply_array(level, ids, ArrayOperation::linear(count))
}

/// Circular array of `count` (original included) around the origin.
pub fn circular_array(
    level: &mut Level,
    ids: &[EntityId],
    count: i64,
) -> Result<Vec<EntityId>, ToolError> {
    apply_array(level, ids, ArrayOperation::circular(count))
}
