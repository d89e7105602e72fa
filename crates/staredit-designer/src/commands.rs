use crate::arrays::{apply_array, ArrayOperation};
use crate::level::Level;
use crate::model::Point;
use crate::transforms;
use staredit_core::{EntityId, ToolError};

/// A tool invocation on the current selection, as chosen from a menu or
/// dialog. Parameters are checked when the command is applied, before the
/// level is touched.
#[derive(Debug, Clone, PartialEq)]
pub enum DesignerCommand {
    Mirror { mx: f64, my: f64 },
    Rotate { degrees: f64 },
    LinearArray { count: i64 },
    CircularArray { count: i64 },
    AttachCircularPath {
        center: Point,
        period: f64,
        clockwise: bool,
    },
    AttachLinearPath { anchor: Point, period: f64 },
    DetachPath,
}

impl DesignerCommand {
    /// Mirror left/right.
    pub fn mirror_horizontal() -> Self {
        DesignerCommand::Mirror { mx: -1.0, my: 1.0 }
    }

    /// Mirror top/bottom.
    pub fn mirror_vertical() -> Self {
        DesignerCommand::Mirror { mx: 1.0, my: -1.0 }
    }

    /// Returns the name of the command for display.
    pub fn name(&self) -> &'static str {
        match self {
            DesignerCommand::Mirror { .. } => "Mirror",
            DesignerCommand::Rotate { .. } => "Rotate",
            DesignerCommand::LinearArray { .. } => "Linear Array",
            DesignerCommand::CircularArray { .. } => "Circular Array",
            DesignerCommand::AttachCircularPath { .. } => "Circular Path",
            DesignerCommand::AttachLinearPath { .. } => "Linear Path",
            DesignerCommand::DetachPath => "Remove Path",
        }
    }

    /// Array commands only count as an edit when they create something.
    pub fn creates_entities(&self) -> bool {
        matches!(
            self,
            DesignerCommand::LinearArray { .. } | DesignerCommand::CircularArray { .. }
        )
    }

    /// Run the command on `ids`.
    ///
    /// Returns the handles of any entities created (arrays only).
    pub fn apply(&self, level: &mut Level, ids: &[EntityId]) -> Result<Vec<EntityId>, ToolError> {
        match *self {
            DesignerCommand::Mirror { mx, my } => {
                transforms::mirror(level, ids, mx, my)?;
            }
            DesignerCommand::Rotate { degrees } => {
                transforms::rotate(level, ids, degrees)?;
            }
            DesignerCommand::LinearArray { count } => {
                return apply_array(level, ids, ArrayOperation::linear(count));
            }
            DesignerCommand::CircularArray { count } => {
                return apply_array(level, ids, ArrayOperation::circular(count));
            }
            DesignerCommand::AttachCircularPath {
                center,
                period,
                clockwise,
            } => {
                transforms::attach_circular_path(level, ids, center, period, clockwise)?;
            }
            DesignerCommand::AttachLinearPath { anchor, period } => {
                transforms::attach_linear_path(level, ids, anchor, period)?;
            }
            DesignerCommand::DetachPath => {
                transforms::detach_path(level, ids);
            }
        }
        Ok(Vec::new())
    }
}

/// Read an array count from dialog text.
pub fn parse_count(input: &str) -> Result<i64, ToolError> {
    let count: i64 = input.trim().parse().map_err(|_| ToolError::Parse {
        name: "count",
        input: input.to_string(),
    })?;
    ArrayOperation::linear(count).validate()?;
    Ok(count)
}

/// Read a rotation angle in degrees from dialog text.
pub fn parse_degrees(input: &str) -> Result<f64, ToolError> {
    parse_finite("angle", input)
}

/// Read a path period (seconds per cycle) from dialog text.
pub fn parse_period(input: &str) -> Result<f64, ToolError> {
    let period = parse_finite("period", input)?;
    if period < 0.0 {
        return Err(ToolError::InvalidParameter {
            name: "period",
            reason: "must not be negative".to_string(),
        });
    }
    Ok(period)
}

fn parse_finite(name: &'static str, input: &str) -> Result<f64, ToolError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ToolError::Parse {
            name,
            input: input.to_string(),
        }),
    }
}
