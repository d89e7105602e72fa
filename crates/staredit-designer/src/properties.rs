//! Property editing for double-clicked entities.
//!
//! [`PropertyEditor::for_entities`] picks which editor applies to a group
//! and seeds it from the first entity; [`PropertyEditor::apply`] writes the
//! edited values back.

use crate::model::catalog::{ITEM_TYPES, PLANET_SPRITES};
use crate::model::{Entity, EntityKind, EntityType};
use staredit_core::ToolError;

/// Editor chosen for a set of entities, carrying the values being edited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyEditor {
    /// Every entity is a planet: sprite and scale
    Planet { sprite: u32, scale: f64 },
    /// Every entity is a planet, bumper or asteroid: scale only
    Scale { scale: f64 },
    /// Every entity is an item: item type
    Item { item_type: u32 },
}

impl PropertyEditor {
    /// Editor for `entities`, or `None` for an empty or mixed group.
    pub fn for_entities<'a>(entities: impl IntoIterator<Item = &'a Entity>) -> Option<Self> {
        let entities: Vec<&Entity> = entities.into_iter().collect();
        let first = entities.first()?;
        let all = |pred: fn(EntityType) -> bool| entities.iter().all(|e| pred(e.entity_type()));

        if all(|t| t == EntityType::Planet) {
            Some(PropertyEditor::Planet {
                sprite: first.sprite().unwrap_or(0),
                scale: first.scale().unwrap_or(1.0),
            })
        } else if all(EntityType::is_scalable) {
            Some(PropertyEditor::Scale {
                scale: first.scale().unwrap_or(1.0),
            })
        } else if all(|t| t == EntityType::Item) {
            Some(PropertyEditor::Item {
                item_type: first.item_type().unwrap_or(0),
            })
        } else {
            None
        }
    }

    pub fn title(&self) -> &'static str {
        "Entity Options"
    }

    /// Check the edited values against the catalogs and scale range.
    pub fn validate(&self) -> Result<(), ToolError> {
        match *self {
            PropertyEditor::Planet { sprite, scale } => {
                validate_scale(scale)?;
                validate_sprite(sprite)
            }
            PropertyEditor::Scale { scale } => validate_scale(scale),
            PropertyEditor::Item { item_type } => validate_item_type(item_type),
        }
    }

    /// Write the edited values into one entity. Kinds the editor does not
    /// cover are left unchanged.
    pub fn apply(&self, entity: &mut Entity) {
        match *self {
            PropertyEditor::Planet { sprite, scale } => {
                if let EntityKind::Planet {
                    sprite: s,
                    scale: k,
                } = &mut entity.kind
                {
                    *s = sprite;
                    *k = scale;
                }
            }
            PropertyEditor::Scale { scale } => {
                entity.set_scale(scale);
            }
            PropertyEditor::Item { item_type } => {
                if let EntityKind::Item { item_type: t } = &mut entity.kind {
                    *t = item_type;
                }
            }
        }
    }
}

/// Percentage label shown next to the scale slider, e.g. `50%`.
pub fn scale_label(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round() as i64)
}

/// Scale must lie in (0, 1].
pub fn validate_scale(scale: f64) -> Result<(), ToolError> {
    if scale.is_finite() && scale > 0.0 && scale <= 1.0 {
        Ok(())
    } else {
        Err(ToolError::InvalidParameter {
            name: "scale",
            reason: format!("{} is outside (0, 1]", scale),
        })
    }
}

pub fn validate_sprite(sprite: u32) -> Result<(), ToolError> {
    if (sprite as usize) < PLANET_SPRITES.len() {
        Ok(())
    } else {
        Err(ToolError::InvalidParameter {
            name: "sprite",
            reason: format!("no planet sprite with index {}", sprite),
        })
    }
}

pub fn validate_item_type(item_type: u32) -> Result<(), ToolError> {
    if (item_type as usize) < ITEM_TYPES.len() {
        Ok(())
    } else {
        Err(ToolError::InvalidParameter {
            name: "item type",
            reason: format!("no item type with index {}", item_type),
        })
    }
}
