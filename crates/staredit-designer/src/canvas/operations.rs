//! Pointer and keyboard handling for Canvas.
//!
//! Pointer positions arrive in view pixels and are converted to world
//! coordinates against the current level bounds.

use super::types::{DragEntry, InteractionState, Modifiers, NudgeDirection};
use super::Canvas;
use crate::model::{Bounds, Point};
use crate::selection_manager::{pick, within};
use crate::transforms;
use staredit_core::EditorEvent;

impl Canvas {
    /// Converts view pixels to world coordinates.
    pub fn view_to_world(&self, pixel: Point) -> Point {
        self.viewport.view_to_world(&self.level.borrow().bounds, pixel)
    }

    /// Converts world coordinates to view pixels.
    pub fn world_to_view(&self, world: Point) -> Point {
        self.viewport.world_to_view(&self.level.borrow().bounds, world)
    }

    /// Last pointer position in world coordinates.
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    pub fn interaction_state(&self) -> &InteractionState {
        &self.state
    }

    /// The pending marquee rectangle, normalized, while one is being dragged.
    pub fn marquee_rect(&self) -> Option<Bounds> {
        match self.state {
            InteractionState::Marquee { anchor } => Some(Bounds::from_corners(anchor, self.cursor)),
            _ => None,
        }
    }

    /// Left button pressed.
    ///
    /// On an entity the selection is updated first: control toggles it,
    /// otherwise it becomes the only selection unless it was already
    /// selected. If the entity ends up selected the whole selection starts
    /// dragging with it in front. On empty space a marquee starts, clearing
    /// the selection unless control is held.
    pub fn pointer_down(&mut self, pixel: Point, modifiers: Modifiers) {
        let world = self.view_to_world(pixel);
        self.cursor = world;

        let hit = pick(&self.level.borrow(), world);
        match hit {
            Some(id) => {
                if modifiers.control {
                    self.selection.toggle(id);
                } else if !self.selection.contains(id) {
                    self.selection.select_only(id);
                }

                if self.selection.contains(id) {
                    let level = self.level.borrow();
                    let mut ids = self.selection.ordered_ids(&level);
                    ids.retain(|other| *other != id);
                    ids.insert(0, id);
                    let moving = ids
                        .into_iter()
                        .filter_map(|id| {
                            level.get(id).map(|e| DragEntry {
                                id,
                                start: e.position,
                                path_start: e.path_reference(),
                            })
                        })
                        .collect();
                    self.state = InteractionState::Dragging {
                        anchor: world,
                        moving,
                    };
                }
            }
            None => {
                if !modifiers.control {
                    self.selection.clear();
                }
                self.state = InteractionState::Marquee { anchor: world };
            }
        }
        self.selection_changed();
    }

    /// Pointer moved, button held or not.
    ///
    /// While dragging, the front entity is snapped to the minor grid and the
    /// resulting offset is applied unchanged to every dragged entity.
    pub fn pointer_move(&mut self, pixel: Point) {
        let world = self.view_to_world(pixel);
        self.cursor = world;

        let InteractionState::Dragging { anchor, moving } = &self.state else {
            return;
        };
        let Some(primary) = moving.first() else {
            return;
        };

        let dx = world.x - anchor.x;
        let dy = world.y - anchor.y;
        let (step_x, step_y) = self.grid.minor;
        let mx = self.grid.snap(primary.start.x + dx, step_x) - primary.start.x;
        let my = self.grid.snap(primary.start.y + dy, step_y) - primary.start.y;

        let mut level = self.level.borrow_mut();
        for entry in moving {
            if let Some(entity) = level.get_mut(entry.id) {
                entity.position = entry.start.offset(mx, my);
                if let (Some(path), Some(start)) = (entity.path.as_mut(), entry.path_start) {
                    path.set_reference_point(start.offset(mx, my));
                }
            }
        }
    }

    /// Left button released.
    ///
    /// A drag that moved anything becomes one undo step. A marquee selects
    /// the entities fully inside it, toggling them when control is held.
    pub fn pointer_up(&mut self, pixel: Point, modifiers: Modifiers) {
        self.cursor = self.view_to_world(pixel);

        match std::mem::take(&mut self.state) {
            InteractionState::Marquee { anchor } => {
                let rect = Bounds::from_corners(anchor, self.cursor);
                let inside = within(&self.level.borrow(), &rect);
                if modifiers.control {
                    self.selection.symmetric_difference(inside);
                } else {
                    self.selection.replace(inside);
                }
                self.selection_changed();
            }
            InteractionState::Dragging { moving, .. } => {
                let moved = {
                    let level = self.level.borrow();
                    moving
                        .iter()
                        .any(|entry| level.position_of(entry.id).is_some_and(|p| p != entry.start))
                };
                if moved {
                    tracing::debug!("Dragged {} entities", moving.len());
                    self.changed();
                }
            }
            InteractionState::Idle => {}
        }
    }

    /// Pointer capture was taken away mid-gesture.
    ///
    /// A drag is rolled back to where it started; a marquee is dropped
    /// without changing the selection.
    pub fn capture_lost(&mut self) {
        if let InteractionState::Dragging { moving, .. } = std::mem::take(&mut self.state) {
            let mut level = self.level.borrow_mut();
            for entry in moving {
                if let Some(entity) = level.get_mut(entry.id) {
                    entity.position = entry.start;
                    if let (Some(path), Some(start)) = (entity.path.as_mut(), entry.path_start) {
                        path.set_reference_point(start);
                    }
                }
            }
        }
    }

    /// Double-click: ask for the property dialog of the selection.
    ///
    /// Returns true when a request was published.
    pub fn double_click(&mut self, pixel: Point) -> bool {
        self.cursor = self.view_to_world(pixel);
        if self.selection.is_empty() {
            return false;
        }
        self.publish(EditorEvent::PropertyEditRequested {
            level: self.level_id(),
            entities: self.selected_ids(),
        });
        true
    }

    /// Arrow key: move the selection one grid step.
    ///
    /// Control uses the fine step and shift the major step. Ignored during
    /// a drag or with nothing selected. Returns true when something moved.
    pub fn key_down(&mut self, direction: NudgeDirection, modifiers: Modifiers) -> bool {
        if self.state.is_dragging() || self.selection.is_empty() {
            return false;
        }
        let (ux, uy) = direction.unit();
        let (sx, sy) = self.grid.nudge_step(modifiers);
        let ids = self.selected_ids();
        let moved = transforms::translate(&mut self.level.borrow_mut(), &ids, ux * sx, uy * sy);
        if moved == 0 {
            return false;
        }
        self.changed();
        true
    }

    /// Mouse wheel. With control held, zooms one step per notch.
    ///
    /// Returns true when the scale changed.
    pub fn wheel(&mut self, delta: f64, modifiers: Modifiers) -> bool {
        if !modifiers.control || delta == 0.0 {
            return false;
        }
        let before = self.viewport.scale();
        if delta > 0.0 {
            self.viewport.zoom_in();
        } else {
            self.viewport.zoom_out();
        }
        self.viewport.scale() != before
    }
}
