//! Editor preferences
//!
//! Stored as JSON or TOML (chosen by file extension) in the platform config
//! directory. Every section has defaults, so a partial file is fine.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const RECENT_FILES_LIMIT: usize = 10;

/// A grid spacing along both axes, in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStep {
    pub x: f64,
    pub y: f64,
}

impl GridStep {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Grid display and snapping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Fine grid, used for drag snapping and arrow-key nudges
    pub minor: GridStep,
    /// Coarse grid, drawn brighter and used for shift-nudges
    pub major: GridStep,
    pub show_grid: bool,
    pub snap_to_grid: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            minor: GridStep::new(10.0, 10.0),
            major: GridStep::new(100.0, 100.0),
            show_grid: true,
            snap_to_grid: true,
        }
    }
}

/// View scale and zoom limits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    /// Pixels per world unit when a surface opens
    pub scale: f64,
    pub zoom_step: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Pixels kept around the level bounds
    pub padding: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            zoom_step: 0.1,
            min_zoom: 0.1,
            max_zoom: 4.0,
            padding: 25.0,
        }
    }
}

/// Editing behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditingSettings {
    /// Nudge distance when the control modifier is held
    pub fine_nudge_step: f64,
    /// Maximum undo snapshots per surface, 0 for no limit
    pub undo_limit: usize,
    /// Scale for newly placed planets, bumpers and asteroids
    pub default_entity_scale: f64,
}

impl Default for EditingSettings {
    fn default() -> Self {
        Self {
            fine_nudge_step: 1.0,
            undo_limit: 0,
            default_entity_scale: 0.5,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Most recently opened project files, newest first
    pub recent_files: Vec<PathBuf>,
    pub grid: GridSettings,
    pub view: ViewSettings,
    pub editing: EditingSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location: `<config dir>/staredit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("staredit").join("config.toml"))
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::of(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Load config from file, or defaults when the file does not exist yet
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let steps = [
            ("grid.minor.x", self.grid.minor.x),
            ("grid.minor.y", self.grid.minor.y),
            ("grid.major.x", self.grid.major.x),
            ("grid.major.y", self.grid.major.y),
            ("editing.fine_nudge_step", self.editing.fine_nudge_step),
            ("view.scale", self.view.scale),
            ("view.zoom_step", self.view.zoom_step),
            ("view.min_zoom", self.view.min_zoom),
        ];
        for (key, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if !(self.view.max_zoom.is_finite() && self.view.max_zoom >= self.view.min_zoom) {
            return Err(ConfigError::out_of_range("view.max_zoom", self.view.max_zoom));
        }

        if !(self.view.padding.is_finite() && self.view.padding >= 0.0) {
            return Err(ConfigError::out_of_range("view.padding", self.view.padding));
        }

        let scale = self.editing.default_entity_scale;
        if !(scale > 0.0 && scale <= 1.0) {
            return Err(ConfigError::out_of_range(
                "editing.default_entity_scale",
                scale,
            ));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(RECENT_FILES_LIMIT);
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("").to_string(),
            )),
        }
    }
}
