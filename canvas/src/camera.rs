#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Camera state for pan/zoom of the card layer.
///
/// `pan_x` / `pan_y` are in CSS pixels.
/// `zoom` is a scale factor (1.0 = no zoom) and is always positive.
///
/// The renderer applies `translate(pan) * scale(zoom)`; [`Camera::screen_to_world`]
/// is its exact inverse, so hit-testing and drawing share this one value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Current pan offset as a point.
    #[must_use]
    pub fn pan(&self) -> Point {
        Point::new(self.pan_x, self.pan_y)
    }

    /// Set the pan offset absolutely.
    pub fn pan_to(&mut self, pan: Point) {
        self.pan_x = pan.x;
        self.pan_y = pan.y;
    }

    /// Shift the pan offset by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Scale by `factor` around the screen point `anchor`.
    ///
    /// The world point under `anchor` stays under it afterwards. The resulting
    /// zoom is clamped to `[MIN_ZOOM, MAX_ZOOM]`. Returns `false` and leaves the
    /// camera untouched when `factor` is not a finite positive number.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let world = self.screen_to_world(anchor);
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);

        self.pan_x -= world.x * (new_zoom - old_zoom);
        self.pan_y -= world.y * (new_zoom - old_zoom);
        self.zoom = new_zoom;
        true
    }
}

/// Zoom factor for one wheel event: in for negative `delta_y`, out otherwise.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP }
}
