//! Scene model: points, rectangles, entities and their motion paths.

use serde::{Deserialize, Serialize};
use staredit_core::constants::DEFAULT_BOUNDS;

pub mod catalog;
mod entity;
mod path;

pub use entity::{Entity, EntityKind, EntityType};
pub use path::{CircularPath, LinearPath, MotionPath, PathType};

/// A position in world (level) coordinates. Y grows upwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Component-wise scale, used by mirroring with factors of 1 or -1.
    pub fn mirrored(&self, mx: f64, my: f64) -> Point {
        Point::new(self.x * mx, self.y * my)
    }

    /// Treat the point as polar coordinates about the origin and add `degrees`
    /// to its angle, keeping the distance.
    pub fn rotated_about_origin(&self, degrees: f64) -> Point {
        let d = self.x.hypot(self.y);
        let angle = self.y.atan2(self.x) + degrees.to_radians();
        Point::new(d * angle.cos(), d * angle.sin())
    }
}

/// An axis-aligned rectangle as (left, bottom, right, top).
///
/// Used for level bounds and for marquee queries. A proper rectangle has
/// `left < right` and `bottom < top`; see [`Bounds::is_valid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    pub const fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Rectangle spanned by two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            bottom: a.y.min(b.y),
            right: a.x.max(b.x),
            top: a.y.max(b.y),
        }
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.left, self.bottom, self.right, self.top]
    }

    pub fn is_valid(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite())
            && self.left < self.right
            && self.bottom < self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }
}

impl Default for Bounds {
    fn default() -> Self {
        let (l, b, r, t) = DEFAULT_BOUNDS;
        Self::new(l, b, r, t)
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.bottom, self.right, self.top
        )
    }
}
