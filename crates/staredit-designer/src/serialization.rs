//! Project file format.
//!
//! A project file is a JSON list of level records:
//!
//! ```text
//! [{"name": "...", "bounds": [l, b, r, t],
//!   "entities": {"asteroids": [...], "bumpers": [...], "items": [...],
//!                "planets": [...], "rockets": [...], "stars": [...]}}]
//! ```
//!
//! Entity records hold `x`, `y`, the kind's own fields (`scale`, `sprite`,
//! `type`) and an optional `path`. Path records are tagged by `type`
//! (1 circular, 2 linear). Two reference encodings exist: the current one
//! stores the center/anchor as `x`/`y`; an older one stores `radius`/`angle`
//! (circular) or `dx`/`dy` (linear) relative to the entity. Both are read,
//! only the current one is written.
//!
//! Numbers are written with two decimals; any precision is accepted on read.
//! Sprite and item indices are written as integers. On read any whole,
//! non-negative number is accepted, so `2.0` decodes as `2`.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use staredit_core::constants::{DEFAULT_LEVEL_NAME, DEFAULT_SCALE, FILE_DECIMALS};
use staredit_core::FileFormatError;
use std::io;

use crate::level::Level;
use crate::model::{
    Bounds, CircularPath, Entity, EntityKind, EntityType, LinearPath, MotionPath, PathType, Point,
};

fn default_name() -> String {
    DEFAULT_LEVEL_NAME.to_string()
}

fn default_bounds() -> [f64; 4] {
    Bounds::default().to_array()
}

/// One level as stored on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_bounds")]
    pub bounds: [f64; 4],
    #[serde(default)]
    pub entities: EntityBuckets,
}

/// Entity records grouped by kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityBuckets {
    pub asteroids: Vec<EntityRecord>,
    pub bumpers: Vec<EntityRecord>,
    pub items: Vec<EntityRecord>,
    pub planets: Vec<EntityRecord>,
    pub rockets: Vec<EntityRecord>,
    pub stars: Vec<EntityRecord>,
}

impl EntityBuckets {
    fn bucket(&self, entity_type: EntityType) -> &[EntityRecord] {
        match entity_type {
            EntityType::Asteroid => &self.asteroids,
            EntityType::Bumper => &self.bumpers,
            EntityType::Item => &self.items,
            EntityType::Planet => &self.planets,
            EntityType::Rocket => &self.rockets,
            EntityType::Star => &self.stars,
        }
    }

    fn bucket_mut(&mut self, entity_type: EntityType) -> &mut Vec<EntityRecord> {
        match entity_type {
            EntityType::Asteroid => &mut self.asteroids,
            EntityType::Bumper => &mut self.bumpers,
            EntityType::Item => &mut self.items,
            EntityType::Planet => &mut self.planets,
            EntityType::Rocket => &mut self.rockets,
            EntityType::Star => &mut self.stars,
        }
    }
}

/// Fields of any entity kind; which ones are meaningful depends on the bucket
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityRecord {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Number>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub item_type: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathRecord>,
}

/// Path record in either encoding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathRecord {
    #[serde(rename = "type")]
    pub tag: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clockwise: Option<bool>,
}

impl PathRecord {
    /// Encode in the reference-point form.
    pub fn from_path(path: &MotionPath) -> Self {
        let reference = path.reference_point();
        let clockwise = match path {
            MotionPath::Circular(p) => Some(p.clockwise),
            MotionPath::Linear(_) => None,
        };
        Self {
            tag: path.path_type().tag(),
            x: Some(reference.x),
            y: Some(reference.y),
            period: Some(path.period()),
            clockwise,
            ..Default::default()
        }
    }

    /// Whether this record uses the older relative encoding.
    pub fn is_legacy(&self) -> bool {
        self.x.is_none() || self.y.is_none()
    }

    /// Decode for an entity at `position`.
    pub fn to_path(&self, position: Point, level: &str) -> Result<MotionPath, FileFormatError> {
        let path_type =
            PathType::from_tag(self.tag).ok_or_else(|| FileFormatError::UnknownPathType {
                tag: self.tag,
                level: level.to_string(),
            })?;
        let missing = |field: &'static str| FileFormatError::MissingPathField {
            field,
            level: level.to_string(),
        };
        let period = self.period.unwrap_or(0.0);

        let path = match (path_type, self.x.zip(self.y)) {
            (PathType::Circular, Some((x, y))) => {
                MotionPath::circular(Point::new(x, y), period, self.clockwise.unwrap_or(false))
            }
            (PathType::Linear, Some((x, y))) => MotionPath::linear(Point::new(x, y), period),
            (PathType::Circular, None) => {
                let radius = self.radius.ok_or_else(|| missing("radius"))?;
                let angle = self.angle.ok_or_else(|| missing("angle"))?;
                MotionPath::Circular(CircularPath::from_radius_angle(
                    position,
                    radius,
                    angle,
                    period,
                    self.clockwise.unwrap_or(false),
                ))
            }
            (PathType::Linear, None) => {
                let dx = self.dx.ok_or_else(|| missing("dx"))?;
                let dy = self.dy.ok_or_else(|| missing("dy"))?;
                MotionPath::Linear(LinearPath::from_displacement(position, dx, dy, period))
            }
        };
        Ok(path)
    }
}

impl EntityRecord {
    pub fn from_entity(entity: &Entity) -> Self {
        let (scale, sprite, item_type) = match entity.kind {
            EntityKind::Rocket | EntityKind::Star => (None, None, None),
            EntityKind::Planet { sprite, scale } => (Some(scale), Some(sprite), None),
            EntityKind::Bumper { scale } | EntityKind::Asteroid { scale } => {
                (Some(scale), None, None)
            }
            EntityKind::Item { item_type } => (None, None, Some(item_type)),
        };
        Self {
            x: entity.position.x,
            y: entity.position.y,
            scale,
            sprite: sprite.map(Number::from),
            item_type: item_type.map(Number::from),
            path: entity.path.as_ref().map(PathRecord::from_path),
        }
    }

    /// Build an entity of `entity_type`, filling absent fields with defaults.
    pub fn to_entity(&self, entity_type: EntityType, level: &str) -> Result<Entity, FileFormatError> {
        let scale = self.scale.unwrap_or(DEFAULT_SCALE);
        let kind = match entity_type {
            EntityType::Rocket => EntityKind::Rocket,
            EntityType::Star => EntityKind::Star,
            EntityType::Planet => EntityKind::Planet {
                sprite: decode_index(self.sprite.as_ref(), "sprite", level)?,
                scale,
            },
            EntityType::Bumper => EntityKind::Bumper { scale },
            EntityType::Asteroid => EntityKind::Asteroid { scale },
            EntityType::Item => EntityKind::Item {
                item_type: decode_index(self.item_type.as_ref(), "type", level)?,
            },
        };
        let position = Point::new(self.x, self.y);
        let mut entity = Entity::new(kind, position);
        if let Some(record) = &self.path {
            if record.is_legacy() {
                tracing::debug!("Decoding legacy {} path in level '{}'", entity_type, level);
            }
            entity.path = Some(record.to_path(position, level)?);
        }
        Ok(entity)
    }
}

/// Read a sprite or item index; absent means 0.
fn decode_index(
    number: Option<&Number>,
    field: &'static str,
    level: &str,
) -> Result<u32, FileFormatError> {
    let Some(number) = number else {
        return Ok(0);
    };
    let index = match number.as_u64() {
        Some(n) => u32::try_from(n).ok(),
        None => number
            .as_f64()
            .filter(|v| v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(v))
            .map(|v| v as u32),
    };
    index.ok_or_else(|| FileFormatError::InvalidIndex {
        field,
        value: number.to_string(),
        level: level.to_string(),
    })
}

impl LevelRecord {
    pub fn from_level(level: &Level) -> Self {
        let mut entities = EntityBuckets::default();
        for (_, entity) in level.entities() {
            entities
                .bucket_mut(entity.entity_type())
                .push(EntityRecord::from_entity(entity));
        }
        Self {
            name: level.name.clone(),
            bounds: level.bounds.to_array(),
            entities,
        }
    }

    /// Rebuild a level. Entities come back grouped by kind, in bucket order.
    pub fn to_level(&self) -> Result<Level, FileFormatError> {
        let bounds = Bounds::from_array(self.bounds);
        if !bounds.is_valid() {
            return Err(FileFormatError::InvalidBounds {
                level: self.name.clone(),
                left: bounds.left,
                bottom: bounds.bottom,
                right: bounds.right,
                top: bounds.top,
            });
        }

        let mut level = Level::empty(self.name.clone(), bounds);
        for entity_type in EntityType::ALL {
            for record in self.entities.bucket(entity_type) {
                level.add(record.to_entity(entity_type, &self.name)?);
            }
        }
        Ok(level)
    }
}

/// Writes every float with a fixed number of decimals.
struct FixedDecimals;

impl serde_json::ser::Formatter for FixedDecimals {
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if value.is_finite() {
            write!(writer, "{:.*}", FILE_DECIMALS, value)
        } else {
            writer.write_all(b"null")
        }
    }
}

/// Serialize levels to project-file text.
pub fn levels_to_string<'a>(
    levels: impl IntoIterator<Item = &'a Level>,
) -> Result<String, FileFormatError> {
    let records: Vec<LevelRecord> = levels.into_iter().map(LevelRecord::from_level).collect();
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, FixedDecimals);
    records.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| FileFormatError::Io(io::Error::other(e)))
}

/// Parse project-file text. Either every level decodes or an error is returned.
pub fn levels_from_str(text: &str) -> Result<Vec<Level>, FileFormatError> {
    let records: Vec<LevelRecord> = serde_json::from_str(text)?;
    if records.is_empty() {
        return Err(FileFormatError::EmptyProject);
    }
    records.iter().map(LevelRecord::to_level).collect()
}
