//! Point transforms applied to a set of entities.
//!
//! Every function moves the entity position and, when a path is attached,
//! the path reference point by the same rule. Parameters are validated
//! before anything is touched. Each returns how many entities it changed.

use crate::level::Level;
use crate::model::{MotionPath, Point};
use staredit_core::{EntityId, ToolError};

fn require_finite(name: &'static str, value: f64) -> Result<(), ToolError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ToolError::InvalidParameter {
            name,
            reason: format!("{} is not a finite number", value),
        })
    }
}

/// Move entities by a fixed offset.
pub fn translate(level: &mut Level, ids: &[EntityId], dx: f64, dy: f64) -> usize {
    let mut moved = 0;
    for id in ids {
        if let Some(entity) = level.get_mut(*id) {
            entity.translate(dx, dy);
            moved += 1;
        }
    }
    moved
}

/// Mirror entities across the axes: `x *= mx`, `y *= my`.
///
/// # Errors
///
/// [`ToolError::InvalidMirror`] unless both factors are 1 or -1.
pub fn mirror(level: &mut Level, ids: &[EntityId], mx: f64, my: f64) -> Result<usize, ToolError> {
    let unit = |v: f64| v == 1.0 || v == -1.0;
    if !unit(mx) || !unit(my) {
        return Err(ToolError::InvalidMirror { mx, my });
    }

    let mut changed = 0;
    for id in ids {
        if let Some(entity) = level.get_mut(*id) {
            entity.map_points(|p| p.mirrored(mx, my));
            changed += 1;
        }
    }
    Ok(changed)
}

/// Rotate entities about the origin by `degrees` (counter-clockwise).
///
/// An entity sitting exactly on the origin has no angle and is left alone,
/// path included.
pub fn rotate(level: &mut Level, ids: &[EntityId], degrees: f64) -> Result<usize, ToolError> {
    require_finite("angle", degrees)?;

    let mut changed = 0;
    for id in ids {
        let Some(entity) = level.get_mut(*id) else {
            continue;
        };
        if entity.position.is_origin() {
            continue;
        }
        entity.map_points(|p| p.rotated_about_origin(degrees));
        changed += 1;
    }
    Ok(changed)
}

/// Give each entity a circular path around `center`.
///
/// Any existing path is replaced. Entities on the origin are included.
pub fn attach_circular_path(
    level: &mut Level,
    ids: &[EntityId],
    center: Point,
    period: f64,
    clockwise: bool,
) -> Result<usize, ToolError> {
    require_finite("period", period)?;
    require_finite("center", center.x + center.y)?;
    Ok(assign_path(level, ids, MotionPath::circular(center, period, clockwise)))
}

/// Give each entity a linear path toward `anchor`.
pub fn attach_linear_path(
    level: &mut Level,
    ids: &[EntityId],
    anchor: Point,
    period: f64,
) -> Result<usize, ToolError> {
    require_finite("period", period)?;
    require_finite("anchor", anchor.x + anchor.y)?;
    Ok(assign_path(level, ids, MotionPath::linear(anchor, period)))
}

fn assign_path(level: &mut Level, ids: &[EntityId], path: MotionPath) -> usize {
    let mut changed = 0;
    for id in ids {
        if let Some(entity) = level.get_mut(*id) {
            entity.path = Some(path);
            changed += 1;
        }
    }
    changed
}

/// Remove the path from each entity. Entities without one are not counted.
pub fn detach_path(level: &mut Level, ids: &[EntityId]) -> usize {
    let mut changed = 0;
    for id in ids {
        if let Some(entity) = level.get_mut(*id) {
            if entity.path.take().is_some() {
                changed += 1;
            }
        }
    }
    changed
}
