use super::{Bounds, MotionPath, Point};
use staredit_core::constants::{
    ASTEROID_RADIUS, BUMPER_RADIUS, DEFAULT_SCALE, ITEM_RADIUS, PLANET_RADIUS, ROCKET_RADIUS,
    STAR_RADIUS,
};

/// Kind discriminator without per-kind data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    Asteroid,
    Bumper,
    Item,
    Planet,
    Rocket,
    Star,
}

impl EntityType {
    /// All kinds, in the order their buckets appear in a project file.
    pub const ALL: [EntityType; 6] = [
        EntityType::Asteroid,
        EntityType::Bumper,
        EntityType::Item,
        EntityType::Planet,
        EntityType::Rocket,
        EntityType::Star,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntityType::Asteroid => "Asteroid",
            EntityType::Bumper => "Bumper",
            EntityType::Item => "Item",
            EntityType::Planet => "Planet",
            EntityType::Rocket => "Rocket",
            EntityType::Star => "Star",
        }
    }

    /// One-letter code used on toolbar buttons and in debug output.
    pub fn code(self) -> char {
        match self {
            EntityType::Asteroid => 'A',
            EntityType::Bumper => 'B',
            EntityType::Item => 'I',
            EntityType::Planet => 'P',
            EntityType::Rocket => 'R',
            EntityType::Star => 'S',
        }
    }

    /// Key of this kind's bucket in a level record.
    pub fn bucket(self) -> &'static str {
        match self {
            EntityType::Asteroid => "asteroids",
            EntityType::Bumper => "bumpers",
            EntityType::Item => "items",
            EntityType::Planet => "planets",
            EntityType::Rocket => "rockets",
            EntityType::Star => "stars",
        }
    }

    /// Radius at scale 1.
    pub fn base_radius(self) -> f64 {
        match self {
            EntityType::Asteroid => ASTEROID_RADIUS,
            EntityType::Bumper => BUMPER_RADIUS,
            EntityType::Item => ITEM_RADIUS,
            EntityType::Planet => PLANET_RADIUS,
            EntityType::Rocket => ROCKET_RADIUS,
            EntityType::Star => STAR_RADIUS,
        }
    }

    pub fn is_scalable(self) -> bool {
        matches!(
            self,
            EntityType::Asteroid | EntityType::Bumper | EntityType::Planet
        )
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind together with the fields only that kind has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    Rocket,
    Star,
    Planet { sprite: u32, scale: f64 },
    Bumper { scale: f64 },
    Asteroid { scale: f64 },
    Item { item_type: u32 },
}

impl EntityKind {
    pub fn entity_type(&self) -> EntityType {
        match self {
            EntityKind::Rocket => EntityType::Rocket,
            EntityKind::Star => EntityType::Star,
            EntityKind::Planet { .. } => EntityType::Planet,
            EntityKind::Bumper { .. } => EntityType::Bumper,
            EntityKind::Asteroid { .. } => EntityType::Asteroid,
            EntityKind::Item { .. } => EntityType::Item,
        }
    }

    /// Kind with default attributes (scale 0.5, sprite and item type 0).
    pub fn with_defaults(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Rocket => EntityKind::Rocket,
            EntityType::Star => EntityKind::Star,
            EntityType::Planet => EntityKind::Planet {
                sprite: 0,
                scale: DEFAULT_SCALE,
            },
            EntityType::Bumper => EntityKind::Bumper {
                scale: DEFAULT_SCALE,
            },
            EntityType::Asteroid => EntityKind::Asteroid {
                scale: DEFAULT_SCALE,
            },
            EntityType::Item => EntityKind::Item { item_type: 0 },
        }
    }
}

/// A placeable object. Cloning is a deep copy, path included.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub position: Point,
    pub kind: EntityKind,
    pub path: Option<MotionPath>,
}

impl Entity {
    pub fn new(kind: EntityKind, position: Point) -> Self {
        Self {
            position,
            kind,
            path: None,
        }
    }

    pub fn with_defaults(entity_type: EntityType, position: Point) -> Self {
        Self::new(EntityKind::with_defaults(entity_type), position)
    }

    pub fn rocket(x: f64, y: f64) -> Self {
        Self::new(EntityKind::Rocket, Point::new(x, y))
    }

    pub fn star(x: f64, y: f64) -> Self {
        Self::new(EntityKind::Star, Point::new(x, y))
    }

    pub fn planet(x: f64, y: f64, scale: f64, sprite: u32) -> Self {
        Self::new(EntityKind::Planet { sprite, scale }, Point::new(x, y))
    }

    pub fn bumper(x: f64, y: f64, scale: f64) -> Self {
        Self::new(EntityKind::Bumper { scale }, Point::new(x, y))
    }

    pub fn asteroid(x: f64, y: f64, scale: f64) -> Self {
        Self::new(EntityKind::Asteroid { scale }, Point::new(x, y))
    }

    pub fn item(x: f64, y: f64, item_type: u32) -> Self {
        Self::new(EntityKind::Item { item_type }, Point::new(x, y))
    }

    pub fn with_path(mut self, path: MotionPath) -> Self {
        self.path = Some(path);
        self
    }

    pub fn entity_type(&self) -> EntityType {
        self.kind.entity_type()
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn scale(&self) -> Option<f64> {
        match self.kind {
            EntityKind::Planet { scale, .. }
            | EntityKind::Bumper { scale }
            | EntityKind::Asteroid { scale } => Some(scale),
            _ => None,
        }
    }

    /// Returns false for kinds without a scale.
    pub fn set_scale(&mut self, value: f64) -> bool {
        match &mut self.kind {
            EntityKind::Planet { scale, .. }
            | EntityKind::Bumper { scale }
            | EntityKind::Asteroid { scale } => {
                *scale = value;
                true
            }
            _ => false,
        }
    }

    pub fn sprite(&self) -> Option<u32> {
        match self.kind {
            EntityKind::Planet { sprite, .. } => Some(sprite),
            _ => None,
        }
    }

    pub fn item_type(&self) -> Option<u32> {
        match self.kind {
            EntityKind::Item { item_type } => Some(item_type),
            _ => None,
        }
    }

    pub fn radius(&self) -> f64 {
        let base = self.entity_type().base_radius();
        base * self.scale().unwrap_or(1.0)
    }

    /// Point-in-circle test with a bounding-box early out.
    pub fn contains(&self, p: Point) -> bool {
        let r = self.radius();
        let dx = p.x - self.position.x;
        let dy = p.y - self.position.y;
        if dx.abs() > r || dy.abs() > r {
            return false;
        }
        dx * dx + dy * dy <= r * r
    }

    /// True when the whole circle lies inside `rect`; touching an edge counts.
    pub fn inside_rect(&self, rect: &Bounds) -> bool {
        let r = self.radius();
        let Point { x, y } = self.position;
        x - r >= rect.left && y - r >= rect.bottom && x + r <= rect.right && y + r <= rect.top
    }

    /// Move the entity and its path reference point by the same offset.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.map_points(|p| p.offset(dx, dy));
    }

    /// Apply one point transform to the position and the path reference point.
    pub fn map_points(&mut self, f: impl Fn(Point) -> Point) {
        self.position = f(self.position);
        if let Some(path) = self.path.as_mut() {
            path.map_reference_point(&f);
        }
    }

    /// Path reference point, if a path is attached.
    pub fn path_reference(&self) -> Option<Point> {
        self.path.as_ref().map(MotionPath::reference_point)
    }
}
