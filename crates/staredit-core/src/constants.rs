//! Editor-wide constants.
//!
//! Radii are in world units. Scaled kinds (planet, bumper, asteroid) multiply
//! their base radius by the entity's scale.

/// Application name shown in window titles.
pub const APP_NAME: &str = "Star Edit";

/// Name given to new levels and to projects that were never saved.
pub const DEFAULT_LEVEL_NAME: &str = "(Untitled)";

/// Default level bounds as (left, bottom, right, top).
pub const DEFAULT_BOUNDS: (f64, f64, f64, f64) = (-240.0, -160.0, 240.0, 160.0);

/// Scale given to planets, bumpers and asteroids when none is stored.
pub const DEFAULT_SCALE: f64 = 0.5;

pub const ROCKET_RADIUS: f64 = 20.0;
pub const STAR_RADIUS: f64 = 12.0;
pub const ITEM_RADIUS: f64 = 12.0;
pub const PLANET_RADIUS: f64 = 64.0;
pub const BUMPER_RADIUS: f64 = 64.0;
pub const ASTEROID_RADIUS: f64 = 32.0;

/// Path type tag written for circular paths.
pub const PATH_CIRCULAR: i64 = 1;
/// Path type tag written for linear paths.
pub const PATH_LINEAR: i64 = 2;

/// Largest count the array tools accept, original included.
pub const MAX_ARRAY_COUNT: i64 = 1000;

/// Decimal places used when writing numbers to project files.
pub const FILE_DECIMALS: usize = 2;

/// Radius of the marker drawn at the world origin.
pub const ORIGIN_MARKER_RADIUS: f64 = 10.0;

/// Pixel padding around the level bounds when sizing the view.
pub const VIEW_PADDING: f64 = 25.0;
