//! Viewport and coordinate transformation for level views.
//!
//! Converts between world coordinates (level space, +Y up) and view pixels
//! (0,0 at top-left, +Y down). The level's bounds rectangle is centered in the
//! view and scaled by `scale` pixels per world unit.

use std::fmt;

use crate::model::{Bounds, Point};
use staredit_core::constants::VIEW_PADDING;

/// Represents the view transformation state (scale and view size).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    view_width: f64,
    view_height: f64,
    zoom_step: f64,
    min_scale: f64,
    max_scale: f64,
    padding: f64,
}

impl Viewport {
    /// Creates a viewport of the given pixel size at scale 1.
    pub fn new(view_width: f64, view_height: f64) -> Self {
        Self {
            scale: 1.0,
            view_width,
            view_height,
            zoom_step: 0.1,
            min_scale: 0.1,
            max_scale: 4.0,
            padding: VIEW_PADDING,
        }
    }

    /// Sets the zoom increment and the allowed scale range.
    pub fn with_zoom_limits(mut self, step: f64, min: f64, max: f64) -> Self {
        self.zoom_step = step;
        self.min_scale = min;
        self.max_scale = max.max(min);
        self.scale = self.scale.clamp(self.min_scale, self.max_scale);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    /// Sets the view size (typically called when the window resizes).
    pub fn set_view_size(&mut self, width: f64, height: f64) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamped to the allowed range.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// Increases the scale by one zoom step.
    pub fn zoom_in(&mut self) {
        self.zoom_by(1.0);
    }

    /// Decreases the scale by one zoom step.
    pub fn zoom_out(&mut self) {
        self.zoom_by(-1.0);
    }

    fn zoom_by(&mut self, steps: f64) {
        let current = (self.scale / self.zoom_step).round();
        self.set_scale((current + steps) * self.zoom_step);
    }

    /// Pixel offsets that center `bounds` in the view.
    fn origin(&self, bounds: &Bounds) -> (f64, f64) {
        let px = (self.view_width - bounds.width() * self.scale) / 2.0;
        let py = (self.view_height - bounds.height() * self.scale) / 2.0;
        (px, py)
    }

    /// Converts world coordinates to view pixels.
    ///
    /// ```text
    /// pixel_x = (w - (r - l) * s) / 2 + s * (x - l)
    /// pixel_y = (h - (t - b) * s) / 2 + s * (t - y)
    /// ```
    pub fn world_to_view(&self, bounds: &Bounds, world: Point) -> Point {
        let (px, py) = self.origin(bounds);
        Point::new(
            px + self.scale * (world.x - bounds.left),
            py + self.scale * (bounds.top - world.y),
        )
    }

    /// Converts a world circle to view pixels, radius included.
    pub fn circle_to_view(&self, bounds: &Bounds, center: Point, radius: f64) -> (Point, f64) {
        (self.world_to_view(bounds, center), radius * self.scale)
    }

    /// Converts view pixels to world coordinates; exact inverse of
    /// [`Viewport::world_to_view`].
    pub fn view_to_world(&self, bounds: &Bounds, pixel: Point) -> Point {
        let (px, py) = self.origin(bounds);
        Point::new(
            bounds.left + (pixel.x - px) / self.scale,
            bounds.top - (pixel.y - py) / self.scale,
        )
    }

    /// Smallest view that shows `bounds` plus padding at the current scale.
    pub fn min_size(&self, bounds: &Bounds) -> (f64, f64) {
        (
            (bounds.width() + self.padding * 2.0) * self.scale,
            (bounds.height() + self.padding * 2.0) * self.scale,
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | View: {:.0}x{:.0}",
            self.scale, self.view_width, self.view_height
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
