//! Level listing operations for designer state.

use super::DesignerState;
use crate::level::Level;
use crate::model::Bounds;
use crate::project::LevelSummary;
use staredit_core::{EditorEvent, LevelId, ProjectError};

impl DesignerState {
    fn project_changed(&self) {
        let _ = self.events.publish(EditorEvent::ProjectChanged {
            levels: self.project.len(),
        });
    }

    /// One row per level, in project order.
    pub fn level_summaries(&self) -> Vec<LevelSummary> {
        self.project.summaries()
    }

    /// Append a default level. It is not opened.
    pub fn add_level(&mut self) -> LevelId {
        let id = self.project.add_level(Level::new()).borrow().id();
        self.project_changed();
        id
    }

    /// Remove a level and close its canvas.
    pub fn remove_level(&mut self, id: LevelId) -> Result<(), ProjectError> {
        self.project.remove_level(id)?;
        self.close_level(id);
        if self.active.is_none() {
            self.open_first_level();
        }
        self.project_changed();
        Ok(())
    }

    /// Move a level one place earlier. Returns false when already first.
    pub fn move_level_up(&mut self, id: LevelId) -> Result<bool, ProjectError> {
        let moved = self.project.move_up(id)?;
        if moved {
            self.project_changed();
        }
        Ok(moved)
    }

    /// Move a level one place later. Returns false when already last.
    pub fn move_level_down(&mut self, id: LevelId) -> Result<bool, ProjectError> {
        let moved = self.project.move_down(id)?;
        if moved {
            self.project_changed();
        }
        Ok(moved)
    }

    /// Rename and resize a level.
    ///
    /// When the level is open the edit becomes one undo step on its canvas.
    pub fn set_level_metadata(
        &mut self,
        id: LevelId,
        name: impl Into<String>,
        bounds: Bounds,
    ) -> Result<(), ProjectError> {
        self.project.set_level_metadata(id, name, bounds)?;
        match self.canvas_mut(id) {
            Some(canvas) => canvas.changed(),
            None => {
                let _ = self.events.publish(EditorEvent::LevelChanged { level: id });
            }
        }
        Ok(())
    }
}
