//! Canvas type definitions: Modifiers, NudgeDirection, GridOptions, InteractionState.

use crate::model::Point;
use staredit_core::EntityId;

/// Modifier keys held during a pointer or key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        control: false,
        shift: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        control: true,
        shift: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        control: false,
        shift: true,
    };
}

/// Arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NudgeDirection {
    Up,
    Down,
    Left,
    Right,
}

impl NudgeDirection {
    /// Unit vector in world space (up is +y).
    pub fn unit(self) -> (f64, f64) {
        match self {
            NudgeDirection::Up => (0.0, 1.0),
            NudgeDirection::Down => (0.0, -1.0),
            NudgeDirection::Left => (-1.0, 0.0),
            NudgeDirection::Right => (1.0, 0.0),
        }
    }
}

/// Grid display and snapping settings for one surface.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// Minor (x, y) step; drag snapping and plain nudges use it
    pub minor: (f64, f64),
    /// Major (x, y) step; shift-nudges use it
    pub major: (f64, f64),
    pub show_grid: bool,
    pub snap_to_grid: bool,
    /// Nudge distance with control held
    pub fine_step: f64,
}

impl GridOptions {
    /// `round(value / step) * step` when snapping is on, else `value`.
    pub fn snap(&self, value: f64, step: f64) -> f64 {
        if self.snap_to_grid && step > 0.0 {
            (value / step).round() * step
        } else {
            value
        }
    }

    /// Snap a point to the minor grid.
    pub fn snap_point(&self, p: Point) -> Point {
        Point::new(self.snap(p.x, self.minor.0), self.snap(p.y, self.minor.1))
    }

    /// Nudge step for the held modifiers.
    pub fn nudge_step(&self, modifiers: Modifiers) -> (f64, f64) {
        if modifiers.control {
            (self.fine_step, self.fine_step)
        } else if modifiers.shift {
            self.major
        } else {
            self.minor
        }
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            minor: (10.0, 10.0),
            major: (100.0, 100.0),
            show_grid: true,
            snap_to_grid: true,
            fine_step: 1.0,
        }
    }
}

/// One entity taking part in a drag, with where it started.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEntry {
    pub id: EntityId,
    pub start: Point,
    pub path_start: Option<Point>,
}

/// Pointer interaction state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Rubber-band selection from `anchor` to the cursor
    Marquee { anchor: Point },
    /// Moving the selection. The entity under the initial click is first.
    Dragging {
        anchor: Point,
        moving: Vec<DragEntry>,
    },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging { .. })
    }

    pub fn is_marquee(&self) -> bool {
        matches!(self, InteractionState::Marquee { .. })
    }
}
