//! Designer state manager for UI integration.
//!
//! One `DesignerState` is one editing session: the project, the session
//! clipboard, a canvas per opened level and the unsaved-changes flag.
//!
//! This module is split into submodules:
//! - `file_io`: New, save and load
//! - `levels`: Adding, removing, reordering and describing levels

mod file_io;
mod levels;

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::canvas::{Canvas, GridOptions};
use crate::clipboard::Clipboard;
use crate::project::Project;
use crate::viewport::Viewport;
use staredit_core::constants::{APP_NAME, DEFAULT_LEVEL_NAME};
use staredit_core::{EntityId, EventBus, EventFilter, LevelId, ProjectError, SubscriptionId};

/// Settings every newly opened canvas starts with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SurfaceDefaults {
    pub grid: GridOptions,
    pub viewport: Viewport,
    /// Maximum undo snapshots per canvas (0 = unbounded)
    pub undo_limit: usize,
}

/// Designer state for UI integration
#[derive(Debug)]
pub struct DesignerState {
    pub project: Project,
    pub clipboard: Clipboard,
    pub current_file_path: Option<PathBuf>,
    canvases: Vec<Canvas>,
    active: Option<LevelId>,
    defaults: SurfaceDefaults,
    modified: Arc<AtomicBool>,
    events: Arc<EventBus>,
    subscription: SubscriptionId,
}

impl DesignerState {
    /// Creates a session with a fresh one-level project.
    pub fn new() -> Self {
        Self::with_defaults(SurfaceDefaults::default())
    }

    pub fn with_defaults(defaults: SurfaceDefaults) -> Self {
        let events = Arc::new(EventBus::new());
        let modified = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&modified);
        let subscription = events.subscribe(EventFilter::All, move |event| {
            if event.marks_unsaved() {
                flag.store(true, Ordering::SeqCst);
            }
        });

        let mut state = Self {
            project: Project::new(),
            clipboard: Clipboard::new(),
            current_file_path: None,
            canvases: Vec::new(),
            active: None,
            defaults,
            modified,
            events,
            subscription,
        };
        state.open_first_level();
        state
    }

    /// Event bus shared by every canvas of this session.
    pub fn events(&self) -> Arc<EventBus> {
        Arc::clone(&self.events)
    }

    pub fn defaults(&self) -> &SurfaceDefaults {
        &self.defaults
    }

    /// True when the project differs from what was last saved or loaded.
    pub fn is_modified(&self) -> bool {
        self.modified.load(Ordering::SeqCst)
    }

    pub(crate) fn set_modified(&self, modified: bool) {
        self.modified.store(modified, Ordering::SeqCst);
    }

    /// File name of the project, `* ` in front when unsaved.
    pub fn display_name(&self) -> String {
        let name = self
            .current_file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_LEVEL_NAME.to_string());
        if self.is_modified() {
            format!("* {}", name)
        } else {
            name
        }
    }

    pub fn window_title(&self) -> String {
        format!("{} - {}", self.display_name(), APP_NAME)
    }

    /// Open (or focus) the canvas for a level and make it active.
    pub fn open_level(&mut self, id: LevelId) -> Result<&mut Canvas, ProjectError> {
        let level = self
            .project
            .level(id)
            .ok_or_else(|| ProjectError::LevelNotFound(id.to_string()))?;

        let index = match self.canvases.iter().position(|c| c.level_id() == id) {
            Some(index) => index,
            None => {
                let canvas = Canvas::new(level, self.events())
                    .with_grid(self.defaults.grid.clone())
                    .with_viewport(self.defaults.viewport.clone())
                    .with_undo_limit(self.defaults.undo_limit);
                self.canvases.push(canvas);
                self.canvases.len() - 1
            }
        };
        self.active = Some(id);
        Ok(&mut self.canvases[index])
    }

    /// Open the level at a 0-based position in the project.
    pub fn open_level_at(&mut self, index: usize) -> Result<&mut Canvas, ProjectError> {
        let id = self
            .project
            .level_at(index)
            .map(|level| level.borrow().id())
            .ok_or(ProjectError::IndexOutOfRange {
                index,
                len: self.project.len(),
            })?;
        self.open_level(id)
    }

    /// Close the canvas of a level. Its undo history is discarded.
    pub fn close_level(&mut self, id: LevelId) -> bool {
        let before = self.canvases.len();
        self.canvases.retain(|c| c.level_id() != id);
        if self.active == Some(id) {
            self.active = self.canvases.first().map(Canvas::level_id);
        }
        self.canvases.len() != before
    }

    pub fn canvas(&self, id: LevelId) -> Option<&Canvas> {
        self.canvases.iter().find(|c| c.level_id() == id)
    }

    pub fn canvas_mut(&mut self, id: LevelId) -> Option<&mut Canvas> {
        self.canvases.iter_mut().find(|c| c.level_id() == id)
    }

    /// Number of open canvases.
    pub fn open_canvases(&self) -> usize {
        self.canvases.len()
    }

    pub fn active_level(&self) -> Option<LevelId> {
        self.active
    }

    pub fn active_canvas(&self) -> Option<&Canvas> {
        self.active.and_then(|id| self.canvas(id))
    }

    pub fn active_canvas_mut(&mut self) -> Option<&mut Canvas> {
        let id = self.active?;
        self.canvas_mut(id)
    }

    /// Copy the active selection into the session clipboard.
    pub fn copy(&mut self) {
        let Self {
            canvases,
            clipboard,
            active,
            ..
        } = self;
        if let Some(canvas) = canvases.iter().find(|c| Some(c.level_id()) == *active) {
            canvas.copy(clipboard);
        }
    }

    /// Cut the active selection into the session clipboard.
    pub fn cut(&mut self) {
        let Self {
            canvases,
            clipboard,
            active,
            ..
        } = self;
        if let Some(canvas) = canvases.iter_mut().find(|c| Some(c.level_id()) == *active) {
            canvas.cut(clipboard);
        }
    }

    /// Paste the session clipboard into the active level.
    pub fn paste(&mut self) {
        let Self {
            canvases,
            clipboard,
            active,
            ..
        } = self;
        if let Some(canvas) = canvases.iter_mut().find(|c| Some(c.level_id()) == *active) {
            canvas.paste(clipboard);
        }
    }

    /// Duplicate the active selection through the session clipboard.
    ///
    /// Returns the new handles; empty when nothing is selected.
    pub fn duplicate(&mut self) -> Vec<EntityId> {
        let Self {
            canvases,
            clipboard,
            active,
            ..
        } = self;
        canvases
            .iter_mut()
            .find(|c| Some(c.level_id()) == *active)
            .map(|canvas| canvas.duplicate(clipboard))
            .unwrap_or_default()
    }

    /// Drop every canvas and open the first level of the project.
    pub(crate) fn open_first_level(&mut self) {
        self.canvases.clear();
        self.active = None;
        let first = self.project.level_at(0).map(|level| level.borrow().id());
        if let Some(id) = first {
            // The project always holds its first level.
            let _ = self.open_level(id);
        }
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DesignerState {
    fn drop(&mut self) {
        self.events.unsubscribe(self.subscription);
    }
}
