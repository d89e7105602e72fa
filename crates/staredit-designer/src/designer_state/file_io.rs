//! File I/O operations (save, load, new) for designer state.

use std::path::Path;

use anyhow::Context;

use super::DesignerState;
use crate::project::Project;
use staredit_core::EditorEvent;

impl DesignerState {
    /// Save the project to `path` and remember it as the current file.
    pub fn save_to_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.project
            .save(path)
            .with_context(|| format!("Failed to save project to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.set_modified(false);
        let _ = self.events.publish(EditorEvent::ProjectSaved {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Load a project from `path`, replacing the current one.
    ///
    /// On failure the current project, canvases and file path are untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let project = Project::load(path)
            .with_context(|| format!("Failed to load project from {}", path.display()))?;

        self.project = project;
        self.open_first_level();
        self.current_file_path = Some(path.to_path_buf());
        self.set_modified(false);
        let _ = self.events.publish(EditorEvent::ProjectLoaded {
            path: path.to_path_buf(),
        });
        Ok(())
    }

    /// Start over with a fresh one-level project.
    pub fn new_project(&mut self) {
        self.project = Project::new();
        self.open_first_level();
        self.current_file_path = None;
        self.set_modified(false);
        tracing::info!("New project");
    }
}
