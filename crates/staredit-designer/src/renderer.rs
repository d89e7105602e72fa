//! Level renderer seam.
//!
//! The core never touches pixels. [`LevelPainter`] walks a level in draw
//! order, converts world geometry through the [`Viewport`], and hands pixel
//! primitives to a [`Renderer`] supplied by the view.
//!
//! Draw order:
//! - minor grid, then major grid (only when the grid is shown)
//! - origin marker and level bounds
//! - every attached path
//! - every entity, later entities on top
//! - the pending marquee rectangle

use crate::canvas::GridOptions;
use crate::level::Level;
use crate::model::{Bounds, Entity, EntityType, MotionPath, Point};
use crate::selection_manager::SelectionManager;
use crate::viewport::Viewport;
use staredit_core::constants::ORIGIN_MARKER_RADIUS;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const WHITE: Color = Color(255, 255, 255);
    pub const MINOR_GRID: Color = Color(32, 32, 32);
    pub const MAJOR_GRID: Color = Color(96, 96, 96);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// Pen used for subsequent primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Width in pixels
    pub width: f64,
    pub style: LineStyle,
}

impl Stroke {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    pub fn dotted(color: Color) -> Self {
        Self {
            color,
            width: 1.0,
            style: LineStyle::Dotted,
        }
    }
}

/// Stroke and fill for an entity kind: `(stroke, fill)`.
pub fn entity_palette(entity_type: EntityType) -> (Color, Color) {
    match entity_type {
        EntityType::Rocket => (Color(127, 0, 0), Color(255, 127, 127)),
        EntityType::Planet => (Color(64, 64, 64), Color(128, 128, 128)),
        EntityType::Bumper => (Color(0, 40, 127), Color(50, 115, 255)),
        EntityType::Asteroid => (Color(63, 44, 31), Color(191, 133, 95)),
        EntityType::Item => (Color(0, 127, 14), Color(127, 255, 142)),
        EntityType::Star => (Color(255, 127, 0), Color(255, 233, 127)),
    }
}

/// Pixel-space drawing backend implemented by the view.
///
/// All coordinates are view pixels with y growing downwards.
pub trait Renderer {
    /// Sets the pen for following line, circle and rectangle calls.
    fn set_stroke(&mut self, stroke: Stroke);

    fn line(&mut self, from: Point, to: Point);

    /// Unfilled circle.
    fn circle(&mut self, center: Point, radius: f64);

    /// Unfilled rectangle from its top-left corner.
    fn rectangle(&mut self, top_left: Point, width: f64, height: f64);

    /// Text centered on `center`.
    fn text(&mut self, text: &str, center: Point);

    /// One entity sprite. `radius` is already scaled to pixels.
    fn entity(&mut self, entity: &Entity, center: Point, radius: f64, selected: bool);
}

/// Draws one level through a [`Renderer`].
pub struct LevelPainter<'a> {
    level: &'a Level,
    viewport: &'a Viewport,
    grid: Option<&'a GridOptions>,
    selection: Option<&'a SelectionManager>,
    marquee: Option<Bounds>,
}

impl<'a> LevelPainter<'a> {
    pub fn new(level: &'a Level, viewport: &'a Viewport) -> Self {
        Self {
            level,
            viewport,
            grid: None,
            selection: None,
            marquee: None,
        }
    }

    pub fn with_grid(mut self, grid: &'a GridOptions) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn with_selection(mut self, selection: &'a SelectionManager) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn with_marquee(mut self, marquee: Option<Bounds>) -> Self {
        self.marquee = marquee;
        self
    }

    fn to_view(&self, p: Point) -> Point {
        self.viewport.world_to_view(&self.level.bounds, p)
    }

    fn line(&self, r: &mut impl Renderer, a: Point, b: Point) {
        r.line(self.to_view(a), self.to_view(b));
    }

    fn circle(&self, r: &mut impl Renderer, center: Point, radius: f64) {
        let (c, radius) = self.viewport.circle_to_view(&self.level.bounds, center, radius);
        r.circle(c, radius);
    }

    fn rectangle(&self, r: &mut impl Renderer, rect: &Bounds) {
        let top_left = self.to_view(Point::new(rect.left, rect.top));
        let scale = self.viewport.scale();
        r.rectangle(top_left, rect.width() * scale, rect.height() * scale);
    }

    /// Draw everything in order.
    pub fn paint(&self, r: &mut impl Renderer) {
        if let Some(grid) = self.grid.filter(|g| g.show_grid) {
            r.set_stroke(Stroke::solid(Color::MINOR_GRID, 1.0));
            self.grid_lines(r, grid.minor);
            r.set_stroke(Stroke::solid(Color::MAJOR_GRID, 1.0));
            self.grid_lines(r, grid.major);
        }

        r.set_stroke(Stroke::solid(Color::MAJOR_GRID, 1.0));
        self.circle(r, Point::ORIGIN, ORIGIN_MARKER_RADIUS);
        r.set_stroke(Stroke::solid(Color::MAJOR_GRID, 3.0));
        self.rectangle(r, &self.level.bounds);

        r.set_stroke(Stroke::dotted(Color::WHITE));
        for (_, entity) in self.level.entities() {
            self.path(r, entity);
        }

        let scale = self.viewport.scale();
        for (id, entity) in self.level.entities() {
            let selected = self.selection.is_some_and(|s| s.contains(id));
            let center = self.to_view(entity.position);
            r.entity(entity, center, entity.radius() * scale, selected);
        }

        if let Some(marquee) = self.marquee {
            r.set_stroke(Stroke::dotted(Color::WHITE));
            self.rectangle(r, &marquee);
        }
    }

    fn path(&self, r: &mut impl Renderer, entity: &Entity) {
        match entity.path {
            Some(MotionPath::Circular(orbit)) => {
                self.circle(r, orbit.center, orbit.orbit_radius(entity.position));
            }
            Some(MotionPath::Linear(line)) => {
                self.line(r, line.anchor, entity.position);
            }
            None => {}
        }
    }

    /// Grid lines stepping out from the origin to the level bounds.
    fn grid_lines(&self, r: &mut impl Renderer, (xstep, ystep): (f64, f64)) {
        if xstep <= 0.0 || ystep <= 0.0 {
            return;
        }
        let Bounds {
            left,
            bottom,
            right,
            top,
        } = self.level.bounds;

        for x in axis_ticks(left, right, xstep) {
            self.line(r, Point::new(x, bottom), Point::new(x, top));
        }
        for y in axis_ticks(bottom, top, ystep) {
            self.line(r, Point::new(left, y), Point::new(right, y));
        }
    }
}

/// Multiples of `step` within `[low, high]`, starting at 0 and walking out.
fn axis_ticks(low: f64, high: f64, step: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut v = 0.0;
    while v >= low {
        if v <= high {
            ticks.push(v);
        }
        v -= step;
    }
    let mut v = step;
    while v <= high {
        if v >= low {
            ticks.push(v);
        }
        v += step;
    }
    ticks
}
