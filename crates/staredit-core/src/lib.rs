//! # Star Edit Core
//!
//! Core types shared by every Star Edit crate: stable ids for levels and
//! entities, the error taxonomy, editor constants, and the event bus that
//! carries "level changed" and "property edit requested" notifications from
//! editing surfaces to whoever is listening.

pub mod constants;
pub mod error;
pub mod event_bus;
pub mod types;

pub use error::{Error, FileFormatError, ProjectError, Result, ToolError};

pub use event_bus::{
    EditorEvent, EventBus, EventBusError, EventCategory, EventFilter,
    SubscriptionId,
};

pub use types::{shared, EntityId, LevelId, Shared};
