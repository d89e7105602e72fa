//! # Star Edit Designer
//!
//! Scene model and editing engine for Star Edit levels: rockets, stars,
//! planets, bumpers, asteroids and items placed on bounded 2D levels, with
//! optional circular or linear motion paths.
//!
//! ## Core Components
//!
//! - **Model**: Points, bounds, entities and paths
//! - **Level / Project**: Ordered entity arena per level, ordered levels per project
//! - **Serialization**: The JSON project file, including the older path encoding
//! - **Selection**: Hit-testing and marquee containment
//! - **History**: Snapshot-based undo/redo
//! - **Tools**: Mirror, rotate, linear and circular arrays, paths
//! - **Canvas**: Pointer and keyboard interaction for one level
//! - **DesignerState**: A session of canvases over one project
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (session)
//!   ├── Project ── Shared<Level> ...
//!   ├── Clipboard
//!   └── Canvas per open level
//!         ├── SelectionManager
//!         ├── UndoHistory
//!         ├── Viewport
//!         └── LevelPainter -> Renderer (view)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use staredit_designer::{DesignerState, Entity};
//!
//! let mut state = DesignerState::new();
//! let canvas = state.active_canvas_mut().expect("a new session opens its first level");
//! let star = canvas.add_entity(Entity::star(40.0, 20.0));
//! canvas.set_selection([star]);
//! canvas.circular_array(4).expect("count is valid");
//! assert_eq!(canvas.level().borrow().len(), 5);
//! ```

pub mod arrays;
pub mod canvas;
pub mod clipboard;
pub mod commands;
pub mod designer_state;
pub mod history;
pub mod level;
pub mod model;
pub mod project;
pub mod properties;
pub mod renderer;
pub mod selection_manager;
pub mod serialization;
pub mod transforms;
pub mod viewport;

pub use arrays::{circular_array, linear_array, ArrayOperation, ArrayType};
pub use canvas::{Canvas, GridOptions, InteractionState, Modifiers, NudgeDirection};
pub use clipboard::Clipboard;
pub use commands::{parse_count, parse_degrees, parse_period, DesignerCommand};
pub use designer_state::{DesignerState, SurfaceDefaults};
pub use history::UndoHistory;
pub use level::Level;
pub use model::{
    Bounds, CircularPath, Entity, EntityKind, EntityType, LinearPath, MotionPath, PathType, Point,
};
pub use project::{LevelSummary, Project};
pub use properties::PropertyEditor;
pub use renderer::{Color, LevelPainter, LineStyle, Renderer, Stroke};
pub use selection_manager::{pick, pick_all, within, SelectionManager};
pub use serialization::{levels_from_str, levels_to_string};
pub use viewport::Viewport;
