//! Shared type definitions.
//!
//! - [`ids`]: stable handles for levels and entities
//! - [`aliases`]: single-threaded shared ownership helpers

pub mod aliases;
pub mod ids;

pub use aliases::{shared, Shared};
pub use ids::{EntityId, LevelId};
