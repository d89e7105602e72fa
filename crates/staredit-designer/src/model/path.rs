//! Motion paths attached to entities.
//!
//! A path stores a reference point (the orbit center or the line anchor)
//! that is independent of its entity's position. Whatever moves, mirrors or
//! rotates an entity must do the same to this point.

use super::Point;
use staredit_core::constants::{PATH_CIRCULAR, PATH_LINEAR};

/// Discriminator written as the `type` tag of a path record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    Circular,
    Linear,
}

impl PathType {
    pub fn tag(self) -> i64 {
        match self {
            PathType::Circular => PATH_CIRCULAR,
            PathType::Linear => PATH_LINEAR,
        }
    }

    pub fn from_tag(tag: i64) -> Option<Self> {
        match tag {
            PATH_CIRCULAR => Some(PathType::Circular),
            PATH_LINEAR => Some(PathType::Linear),
            _ => None,
        }
    }
}

/// Orbit around `center`. The radius is the entity's distance to the center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularPath {
    pub center: Point,
    pub period: f64,
    pub clockwise: bool,
}

impl CircularPath {
    pub fn new(center: Point, period: f64, clockwise: bool) -> Self {
        Self {
            center,
            period,
            clockwise,
        }
    }

    /// Decode the older radius/angle form. `angle` is in degrees and gives
    /// the direction from the center to the entity.
    pub fn from_radius_angle(
        position: Point,
        radius: f64,
        angle: f64,
        period: f64,
        clockwise: bool,
    ) -> Self {
        let back = (angle + 180.0).to_radians();
        let center = Point::new(
            position.x + back.cos() * radius,
            position.y + back.sin() * radius,
        );
        Self::new(center, period, clockwise)
    }

    pub fn orbit_radius(&self, position: Point) -> f64 {
        position.distance_to(&self.center)
    }

    /// Angle in degrees from the center to `position`.
    pub fn phase(&self, position: Point) -> f64 {
        (position.y - self.center.y)
            .atan2(position.x - self.center.x)
            .to_degrees()
    }
}

/// Back-and-forth motion between `anchor` and the entity's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPath {
    pub anchor: Point,
    pub period: f64,
}

impl LinearPath {
    pub fn new(anchor: Point, period: f64) -> Self {
        Self { anchor, period }
    }

    /// Decode the older displacement form, where `(dx, dy)` is the entity
    /// position minus the anchor.
    pub fn from_displacement(position: Point, dx: f64, dy: f64, period: f64) -> Self {
        Self::new(position.offset(-dx, -dy), period)
    }

    pub fn displacement(&self, position: Point) -> Point {
        Point::new(position.x - self.anchor.x, position.y - self.anchor.y)
    }
}

/// Optional motion descriptor owned by exactly one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionPath {
    Circular(CircularPath),
    Linear(LinearPath),
}

impl MotionPath {
    pub fn circular(center: Point, period: f64, clockwise: bool) -> Self {
        MotionPath::Circular(CircularPath::new(center, period, clockwise))
    }

    pub fn linear(anchor: Point, period: f64) -> Self {
        MotionPath::Linear(LinearPath::new(anchor, period))
    }

    pub fn path_type(&self) -> PathType {
        match self {
            MotionPath::Circular(_) => PathType::Circular,
            MotionPath::Linear(_) => PathType::Linear,
        }
    }

    pub fn period(&self) -> f64 {
        match self {
            MotionPath::Circular(p) => p.period,
            MotionPath::Linear(p) => p.period,
        }
    }

    /// Center of a circular path or anchor of a linear one.
    pub fn reference_point(&self) -> Point {
        match self {
            MotionPath::Circular(p) => p.center,
            MotionPath::Linear(p) => p.anchor,
        }
    }

    pub fn set_reference_point(&mut self, point: Point) {
        match self {
            MotionPath::Circular(p) => p.center = point,
            MotionPath::Linear(p) => p.anchor = point,
        }
    }

    pub fn map_reference_point(&mut self, f: impl FnOnce(Point) -> Point) {
        let moved = f(self.reference_point());
        self.set_reference_point(moved);
    }
}
