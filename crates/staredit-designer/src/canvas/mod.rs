//! Canvas: the editing surface for one level.
//!
//! A canvas owns the selection, undo history, viewport and pointer state of
//! the level it shows. The level itself is shared with the project. Every
//! logical edit pushes exactly one undo snapshot and publishes one
//! [`EditorEvent::LevelChanged`] on the session event bus.

mod operations;
mod types;

pub use types::{DragEntry, GridOptions, InteractionState, Modifiers, NudgeDirection};

use std::rc::Rc;
use std::sync::Arc;

use crate::clipboard::Clipboard;
use crate::commands::DesignerCommand;
use crate::history::UndoHistory;
use crate::level::Level;
use crate::model::{Entity, EntityType, Point};
use crate::properties::{validate_item_type, validate_scale, validate_sprite, PropertyEditor};
use crate::renderer::{LevelPainter, Renderer};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;
use staredit_core::{EditorEvent, EntityId, EventBus, LevelId, Shared, ToolError};

/// Canvas state for one open level.
#[derive(Debug)]
pub struct Canvas {
    level: Shared<Level>,
    selection: SelectionManager,
    history: UndoHistory,
    viewport: Viewport,
    grid: GridOptions,
    state: InteractionState,
    cursor: Point,
    events: Arc<EventBus>,
}

impl Canvas {
    /// Creates a canvas showing `level`, publishing on `events`.
    pub fn new(level: Shared<Level>, events: Arc<EventBus>) -> Self {
        let history = UndoHistory::new(&level.borrow());
        Self {
            level,
            selection: SelectionManager::new(),
            history,
            viewport: Viewport::default(),
            grid: GridOptions::default(),
            state: InteractionState::Idle,
            cursor: Point::ORIGIN,
            events,
        }
    }

    /// Caps the undo history (0 = unbounded).
    pub fn with_undo_limit(mut self, limit: usize) -> Self {
        self.history.set_max_depth(limit);
        self
    }

    pub fn with_grid(mut self, grid: GridOptions) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Shared handle to the level being edited.
    pub fn level(&self) -> Shared<Level> {
        Rc::clone(&self.level)
    }

    pub fn level_id(&self) -> LevelId {
        self.level.borrow().id()
    }

    /// Switch to another level. Selection, pointer state and history start
    /// over from that level.
    pub fn set_level(&mut self, level: Shared<Level>) {
        self.level = level;
        self.selection.clear();
        self.state = InteractionState::Idle;
        self.history.reset(&self.level.borrow());
        tracing::debug!("Canvas now editing {}", self.level_id());
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    /// Selected handles in draw order.
    pub fn selected_ids(&self) -> Vec<EntityId> {
        self.selection.ordered_ids(&self.level.borrow())
    }

    /// Replace the selection. Handles not in the level are dropped.
    pub fn set_selection(&mut self, ids: impl IntoIterator<Item = EntityId>) {
        self.selection.replace(ids);
        self.selection.retain_present(&self.level.borrow());
        self.selection_changed();
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn grid(&self) -> &GridOptions {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut GridOptions {
        &mut self.grid
    }

    /// Smallest view showing the level bounds plus padding.
    pub fn min_size(&self) -> (f64, f64) {
        self.viewport.min_size(&self.level.borrow().bounds)
    }

    /// Record the current level as one undo step and tell listeners.
    ///
    /// External dialogs that edit entities directly call this once when
    /// they are done.
    pub fn changed(&mut self) {
        self.history.mark(&self.level.borrow());
        self.publish(EditorEvent::LevelChanged {
            level: self.level_id(),
        });
    }

    fn publish(&self, event: EditorEvent) {
        // Nobody listening is fine
        let _ = self.events.publish(event);
    }

    fn selection_changed(&self) {
        self.publish(EditorEvent::SelectionChanged {
            level: self.level_id(),
            count: self.selection.len(),
        });
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one edit. Returns false at the start of the history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.level.borrow_mut().restore(snapshot);
        self.after_restore();
        true
    }

    /// Step forward one edit. Returns false at the end of the history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.level.borrow_mut().restore(snapshot);
        self.after_restore();
        true
    }

    fn after_restore(&mut self) {
        self.selection.clear();
        self.state = InteractionState::Idle;
        self.publish(EditorEvent::LevelChanged {
            level: self.level_id(),
        });
    }

    /// Append an entity on top of the level.
    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = self.level.borrow_mut().add(entity);
        self.changed();
        id
    }

    /// Copy the selection into `clipboard`. Does nothing when the selection
    /// is empty, so the clipboard keeps its previous contents.
    pub fn copy(&self, clipboard: &mut Clipboard) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return;
        }
        clipboard.copy_from(&self.level.borrow(), &ids);
    }

    pub fn cut(&mut self, clipboard: &mut Clipboard) {
        self.copy(clipboard);
        self.delete();
    }

    /// Append copies of the clipboard contents and select them.
    pub fn paste(&mut self, clipboard: &Clipboard) -> Vec<EntityId> {
        if clipboard.is_empty() {
            return Vec::new();
        }
        let pasted = clipboard.paste_into(&mut self.level.borrow_mut());
        self.selection.replace(pasted.iter().copied());
        self.changed();
        self.selection_changed();
        pasted
    }

    /// Copy then paste in place.
    pub fn duplicate(&mut self, clipboard: &mut Clipboard) -> Vec<EntityId> {
        if self.selection.is_empty() {
            return Vec::new();
        }
        self.copy(clipboard);
        self.paste(clipboard)
    }

    /// Remove the selected entities.
    pub fn delete(&mut self) {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return;
        }
        {
            let mut level = self.level.borrow_mut();
            for id in &ids {
                level.remove(*id);
            }
        }
        self.selection.clear();
        self.changed();
    }

    /// Select every entity, or every entity of one kind.
    pub fn select_all(&mut self, filter: Option<EntityType>) {
        self.selection.select_all(&self.level.borrow(), filter);
        self.selection_changed();
    }

    /// Run a tool on the selection.
    ///
    /// Invalid parameters are rejected before the level changes. With an
    /// empty selection the command does nothing. Array tools only count as
    /// an edit when they create copies.
    pub fn execute(&mut self, command: &DesignerCommand) -> Result<Vec<EntityId>, ToolError> {
        let ids = self.selected_ids();
        let created = match command.apply(&mut self.level.borrow_mut(), &ids) {
            Ok(created) => created,
            Err(err) => {
                tracing::warn!("{} rejected: {}", command.name(), err);
                return Err(err);
            }
        };

        let edited = if command.creates_entities() {
            !created.is_empty()
        } else {
            !ids.is_empty()
        };
        if edited {
            tracing::debug!("{} applied to {} entities", command.name(), ids.len());
            self.changed();
        }
        Ok(created)
    }

    pub fn mirror(&mut self, mx: f64, my: f64) -> Result<(), ToolError> {
        self.execute(&DesignerCommand::Mirror { mx, my }).map(|_| ())
    }

    pub fn rotate(&mut self, degrees: f64) -> Result<(), ToolError> {
        self.execute(&DesignerCommand::Rotate { degrees }).map(|_| ())
    }

    pub fn linear_array(&mut self, count: i64) -> Result<Vec<EntityId>, ToolError> {
        self.execute(&DesignerCommand::LinearArray { count })
    }

    pub fn circular_array(&mut self, count: i64) -> Result<Vec<EntityId>, ToolError> {
        self.execute(&DesignerCommand::CircularArray { count })
    }

    pub fn attach_circular_path(
        &mut self,
        center: Point,
        period: f64,
        clockwise: bool,
    ) -> Result<(), ToolError> {
        self.execute(&DesignerCommand::AttachCircularPath {
            center,
            period,
            clockwise,
        })
        .map(|_| ())
    }

    pub fn attach_linear_path(&mut self, anchor: Point, period: f64) -> Result<(), ToolError> {
        self.execute(&DesignerCommand::AttachLinearPath { anchor, period })
            .map(|_| ())
    }

    pub fn detach_path(&mut self) {
        let _ = self.execute(&DesignerCommand::DetachPath);
    }

    /// Editor matching the current selection, seeded from its first entity.
    pub fn property_editor(&self) -> Option<PropertyEditor> {
        let level = self.level.borrow();
        let ids = self.selection.ordered_ids(&level);
        PropertyEditor::for_entities(ids.iter().filter_map(|id| level.get(*id)))
    }

    /// Write property editor values into every selected entity.
    pub fn apply_properties(&mut self, editor: &PropertyEditor) -> Result<(), ToolError> {
        editor.validate()?;
        self.edit_selected(|entity| editor.apply(entity));
        Ok(())
    }

    /// Set the scale of every selected planet, bumper and asteroid.
    pub fn set_scale(&mut self, scale: f64) -> Result<(), ToolError> {
        validate_scale(scale)?;
        self.edit_matching(|e| e.entity_type().is_scalable(), |e| {
            e.set_scale(scale);
        });
        Ok(())
    }

    /// Set the sprite of every selected planet.
    pub fn set_planet_sprite(&mut self, sprite: u32) -> Result<(), ToolError> {
        validate_sprite(sprite)?;
        self.edit_matching(
            |e| e.entity_type() == EntityType::Planet,
            |e| {
                if let crate::model::EntityKind::Planet { sprite: s, .. } = &mut e.kind {
                    *s = sprite;
                }
            },
        );
        Ok(())
    }

    /// Set the type of every selected item.
    pub fn set_item_type(&mut self, item_type: u32) -> Result<(), ToolError> {
        validate_item_type(item_type)?;
        self.edit_matching(
            |e| e.entity_type() == EntityType::Item,
            |e| {
                if let crate::model::EntityKind::Item { item_type: t } = &mut e.kind {
                    *t = item_type;
                }
            },
        );
        Ok(())
    }

    /// Apply `edit` to every selected entity as one undo step.
    pub fn edit_selected(&mut self, edit: impl FnMut(&mut Entity)) {
        self.edit_matching(|_| true, edit);
    }

    fn edit_matching(&mut self, filter: impl Fn(&Entity) -> bool, mut edit: impl FnMut(&mut Entity)) {
        let ids = self.selected_ids();
        let mut touched = 0;
        {
            let mut level = self.level.borrow_mut();
            for id in &ids {
                if let Some(entity) = level.get_mut(*id).filter(|e| filter(e)) {
                    edit(entity);
                    touched += 1;
                }
            }
        }
        if touched > 0 {
            self.changed();
        }
    }

    /// Draw the level, grid, selection and pending marquee.
    pub fn paint(&self, renderer: &mut impl Renderer) {
        let level = self.level.borrow();
        LevelPainter::new(&level, &self.viewport)
            .with_grid(&self.grid)
            .with_selection(&self.selection)
            .with_marquee(self.marquee_rect())
            .paint(renderer);
    }
}
