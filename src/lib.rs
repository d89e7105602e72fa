//! # Star Edit
//!
//! Level editor core for a 2D space game: rockets, stars, planets, bumpers,
//! asteroids and items placed on bounded levels, some of them moving on
//! circular or linear paths.
//!
//! ## Architecture
//!
//! Star Edit is organized as a workspace with multiple crates:
//!
//! 1. **staredit-core** - Ids, errors, constants, event bus
//! 2. **staredit-settings** - Editor preferences (grid, zoom, nudge, undo depth)
//! 3. **staredit-designer** - Scene model, project files, editing surfaces
//! 4. **staredit** - Logging setup, settings wiring and the command line tool

use std::path::Path;

use anyhow::Context;

pub use staredit_core::{EditorEvent, EntityId, FileFormatError, LevelId, ProjectError, ToolError};
pub use staredit_designer as designer;
pub use staredit_designer::{
    Canvas, DesignerState, Entity, EntityType, GridOptions, Level, Project, SurfaceDefaults,
    Viewport,
};
pub use staredit_settings::{Config, EditingSettings, GridSettings, ViewSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable that switches log output to JSON lines
pub const LOG_JSON_ENV: &str = "STAREDIT_LOG_JSON";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, `info` by default
/// - Human readable output on stderr, or JSON when `STAREDIT_LOG_JSON=1`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());
    let json = std::env::var(LOG_JSON_ENV).is_ok_and(|v| v == "1");

    let registry = tracing_subscriber::registry().with(env_filter);
    let installed = if json {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true),
            )
            .try_init()
    };
    installed.context("Failed to install the log subscriber")?;

    Ok(())
}

/// Grid, view and undo settings for new editing surfaces.
pub fn surface_defaults(config: &Config) -> SurfaceDefaults {
    let grid = GridOptions {
        minor: (config.grid.minor.x, config.grid.minor.y),
        major: (config.grid.major.x, config.grid.major.y),
        show_grid: config.grid.show_grid,
        snap_to_grid: config.grid.snap_to_grid,
        fine_step: config.editing.fine_nudge_step,
    };

    let view = &config.view;
    let mut viewport = Viewport::default()
        .with_zoom_limits(view.zoom_step, view.min_zoom, view.max_zoom)
        .with_padding(view.padding);
    viewport.set_scale(view.scale);

    SurfaceDefaults {
        grid,
        viewport,
        undo_limit: config.editing.undo_limit,
    }
}

/// A fresh editing session configured from `config`.
pub fn session_from_config(config: &Config) -> DesignerState {
    DesignerState::with_defaults(surface_defaults(config))
}

/// One line per level: number, name, bounds and entity counts by kind.
pub fn project_report(project: &Project) -> Vec<String> {
    project
        .levels()
        .iter()
        .enumerate()
        .map(|(index, level)| {
            let level = level.borrow();
            let counts: Vec<String> = EntityType::ALL
                .iter()
                .filter_map(|kind| match level.count_of(*kind) {
                    0 => None,
                    n => Some(format!("{}{}", n, kind.code())),
                })
                .collect();
            format!(
                "{:>3}  {:<24} {}  {}",
                index + 1,
                level.name,
                level.bounds,
                counts.join(" ")
            )
        })
        .collect()
}

/// Read a project in any supported encoding and write it back in the
/// current one. Returns the number of levels written.
pub fn migrate_file(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let project = Project::load(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    project
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!(
        "Migrated {} levels from {} to {}",
        project.len(),
        input.display(),
        output.display()
    );
    Ok(project.len())
}

/// Write a new one-level project to `output`.
pub fn create_project(output: &Path) -> anyhow::Result<()> {
    Project::new()
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))
}
