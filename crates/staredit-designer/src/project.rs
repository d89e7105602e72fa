//! Projects: the ordered, never-empty list of levels saved together.
//!
//! Levels are held as [`Shared<Level>`] so that every editing surface opened
//! on a level and the project listing see the same value.

use std::path::Path;
use std::rc::Rc;

use staredit_core::{shared, FileFormatError, LevelId, ProjectError, Shared};

use crate::level::Level;
use crate::model::{Bounds, EntityType};
use crate::serialization::{levels_from_str, levels_to_string};

/// One row of the level listing
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    pub id: LevelId,
    /// 1-based position in the project
    pub number: usize,
    pub name: String,
    pub stars: usize,
}

#[derive(Debug)]
pub struct Project {
    levels: Vec<Shared<Level>>,
}

impl Project {
    /// A project with one default level.
    pub fn new() -> Self {
        Self {
            levels: vec![shared(Level::new())],
        }
    }

    /// `None` when `levels` is empty.
    pub fn from_levels(levels: Vec<Level>) -> Option<Self> {
        if levels.is_empty() {
            return None;
        }
        Some(Self {
            levels: levels.into_iter().map(shared).collect(),
        })
    }

    pub fn levels(&self) -> &[Shared<Level>] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, id: LevelId) -> Option<Shared<Level>> {
        self.levels
            .iter()
            .find(|level| level.borrow().id() == id)
            .cloned()
    }

    pub fn level_at(&self, index: usize) -> Option<Shared<Level>> {
        self.levels.get(index).cloned()
    }

    pub fn index_of(&self, id: LevelId) -> Option<usize> {
        self.levels.iter().position(|level| level.borrow().id() == id)
    }

    fn require_index(&self, id: LevelId) -> Result<usize, ProjectError> {
        self.index_of(id)
            .ok_or_else(|| ProjectError::LevelNotFound(id.to_string()))
    }

    /// Append a level and return the shared handle to it.
    pub fn add_level(&mut self, level: Level) -> Shared<Level> {
        let handle = shared(level);
        self.levels.push(Rc::clone(&handle));
        tracing::info!("Added level {} ({} total)", handle.borrow().id(), self.levels.len());
        handle
    }

    /// Remove a level. The last remaining level cannot be removed.
    pub fn remove_level(&mut self, id: LevelId) -> Result<Shared<Level>, ProjectError> {
        let index = self.require_index(id)?;
        if self.levels.len() == 1 {
            return Err(ProjectError::LastLevel);
        }
        tracing::info!("Removed level {}", id);
        Ok(self.levels.remove(index))
    }

    /// Swap with the previous level. Returns false when already first.
    pub fn move_up(&mut self, id: LevelId) -> Result<bool, ProjectError> {
        let index = self.require_index(id)?;
        if index == 0 {
            return Ok(false);
        }
        self.levels.swap(index, index - 1);
        Ok(true)
    }

    /// Swap with the next level. Returns false when already last.
    pub fn move_down(&mut self, id: LevelId) -> Result<bool, ProjectError> {
        let index = self.require_index(id)?;
        if index + 1 >= self.levels.len() {
            return Ok(false);
        }
        self.levels.swap(index, index + 1);
        Ok(true)
    }

    /// Rename and resize a level.
    pub fn set_level_metadata(
        &mut self,
        id: LevelId,
        name: impl Into<String>,
        bounds: Bounds,
    ) -> Result<(), ProjectError> {
        if !bounds.is_valid() {
            return Err(ProjectError::InvalidBounds {
                left: bounds.left,
                bottom: bounds.bottom,
                right: bounds.right,
                top: bounds.top,
            });
        }
        let level = self
            .level(id)
            .ok_or_else(|| ProjectError::LevelNotFound(id.to_string()))?;
        let mut level = level.borrow_mut();
        level.name = name.into();
        level.bounds = bounds;
        Ok(())
    }

    pub fn summaries(&self) -> Vec<LevelSummary> {
        self.levels
            .iter()
            .enumerate()
            .map(|(index, level)| {
                let level = level.borrow();
                LevelSummary {
                    id: level.id(),
                    number: index + 1,
                    name: level.name.clone(),
                    stars: level.count_of(EntityType::Star),
                }
            })
            .collect()
    }

    /// Deep copies of every level, in order.
    pub fn snapshot(&self) -> Vec<Level> {
        self.levels.iter().map(|level| level.borrow().copy()).collect()
    }

    pub fn to_json(&self) -> Result<String, FileFormatError> {
        let levels: Vec<std::cell::Ref<'_, Level>> =
            self.levels.iter().map(|level| level.borrow()).collect();
        levels_to_string(levels.iter().map(|level| &**level))
    }

    pub fn from_json(text: &str) -> Result<Self, FileFormatError> {
        let levels = levels_from_str(text)?;
        Self::from_levels(levels).ok_or(FileFormatError::EmptyProject)
    }

    /// Write the whole project to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), FileFormatError> {
        let text = self.to_json()?;
        std::fs::write(path.as_ref(), text)?;
        tracing::info!("Saved {} levels to {}", self.len(), path.as_ref().display());
        Ok(())
    }

    /// Read a whole project from `path`. Nothing is returned unless every
    /// level decodes.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FileFormatError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let project = Self::from_json(&text)?;
        tracing::info!(
            "Loaded {} levels from {}",
            project.len(),
            path.as_ref().display()
        );
        Ok(project)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.levels.len() == other.levels.len()
            && self
                .levels
                .iter()
                .zip(other.levels.iter())
                .all(|(a, b)| *a.borrow() == *b.borrow())
    }
}
