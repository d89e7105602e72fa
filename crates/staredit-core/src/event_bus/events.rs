//! Editor event definitions.
//!
//! Surfaces publish these after every logical edit; the project listing and
//! the session's unsaved flag are driven by them.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{EntityId, LevelId};

/// Root event enum for all editor events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// A level's content or metadata changed (one per logical edit).
    LevelChanged { level: LevelId },
    /// The selection of a surface changed without touching the model.
    SelectionChanged { level: LevelId, count: usize },
    /// A double-click asked for the property dialog of these entities.
    PropertyEditRequested {
        level: LevelId,
        entities: Vec<EntityId>,
    },
    /// Levels were added, removed or reordered.
    ProjectChanged { levels: usize },
    /// A project file was loaded and replaced the session project.
    ProjectLoaded { path: PathBuf },
    /// The session project was written to disk.
    ProjectSaved { path: PathBuf },
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::LevelChanged { .. } => EventCategory::Level,
            EditorEvent::SelectionChanged { .. } | EditorEvent::PropertyEditRequested { .. } => {
                EventCategory::Selection
            }
            EditorEvent::ProjectChanged { .. }
            | EditorEvent::ProjectLoaded { .. }
            | EditorEvent::ProjectSaved { .. } => EventCategory::Project,
        }
    }

    /// Level this event is about, if any
    pub fn level(&self) -> Option<LevelId> {
        match self {
            EditorEvent::LevelChanged { level }
            | EditorEvent::SelectionChanged { level, .. }
            | EditorEvent::PropertyEditRequested { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Whether this event means the project now differs from what is on disk
    pub fn marks_unsaved(&self) -> bool {
        matches!(
            self,
            EditorEvent::LevelChanged { .. } | EditorEvent::ProjectChanged { .. }
        )
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::LevelChanged { level } => format!("{} changed", level),
            EditorEvent::SelectionChanged { level, count } => {
                format!("{} selection: {} entities", level, count)
            }
            EditorEvent::PropertyEditRequested { level, entities } => {
                format!("{} property edit for {} entities", level, entities.len())
            }
            EditorEvent::ProjectChanged { levels } => format!("Project now has {} levels", levels),
            EditorEvent::ProjectLoaded { path } => format!("Loaded {}", path.display()),
            EditorEvent::ProjectSaved { path } => format!("Saved {}", path.display()),
        }
    }
}

impl std::fmt::Display for EditorEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Level content and metadata edits.
    Level,
    /// Selection and property-edit requests.
    Selection,
    /// Level list and file events.
    Project,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Level => write!(f, "Level"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Project => write!(f, "Project"),
        }
    }
}
