//! Star Edit Settings Crate
//!
//! Editor preferences: grid steps and snapping, view scale and zoom limits,
//! nudge and undo behaviour, recent files.

pub mod config;
pub mod error;

pub use config::{Config, EditingSettings, GridSettings, GridStep, ViewSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
