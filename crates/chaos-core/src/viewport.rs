//! World <-> screen mapping with pan and cursor-anchored zoom.
//!
//! Screen origin is the top-left corner of the canvas in pixels; the viewport
//! centre maps to the middle of the canvas. The y axis is flipped so that
//! world "up" is screen "up".

use crate::constants::{triangle_bbox_center, TRIANGLE_HEIGHT, TRIANGLE_WIDTH, VIEWPORT_PADDING, ZOOM_BASE};
use crate::error::ChaosError;
use crate::geometry::{Point, Rect};
use glam::DVec2;

/// Canvas backing-store size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// True while layout has not produced a usable drawing area yet.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Visible region: world coordinates at the canvas centre plus pixels per world unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        let c = triangle_bbox_center();
        Self {
            x: c.x,
            y: c.y,
            scale: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(x: f64, y: f64, scale: f64) -> Result<Self, ChaosError> {
        if scale.is_finite() && scale > 0.0 {
            Ok(Self { x, y, scale })
        } else {
            Err(ChaosError::InvalidScale(scale))
        }
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn center(&self) -> Point {
        DVec2::new(self.x, self.y)
    }

    /// Fit the triangle's bounding box into `canvas` with padding.
    ///
    /// Returns `None` for a canvas with no drawable area.
    pub fn initial(canvas: CanvasSize) -> Option<Self> {
        if canvas.is_degenerate() {
            return None;
        }
        let scale = (canvas.width / (TRIANGLE_WIDTH * VIEWPORT_PADDING))
            .min(canvas.height / (TRIANGLE_HEIGHT * VIEWPORT_PADDING));
        let c = triangle_bbox_center();
        Self::new(c.x, c.y, scale).ok()
    }

    pub fn to_screen(&self, world: Point, canvas: CanvasSize) -> Point {
        let half = canvas.center();
        DVec2::new(
            half.x + (world.x - self.x) * self.scale,
            half.y - (world.y - self.y) * self.scale,
        )
    }

    pub fn to_world(&self, screen: Point, canvas: CanvasSize) -> Point {
        let half = canvas.center();
        DVec2::new(
            self.x + (screen.x - half.x) / self.scale,
            self.y - (screen.y - half.y) / self.scale,
        )
    }

    /// Multiplicative zoom that keeps the world point under `screen` fixed.
    ///
    /// Equal and opposite wheel deltas compose back to the original viewport.
    pub fn zoom_at(&self, screen: Point, delta_wheel: f64, canvas: CanvasSize) -> Self {
        let anchor = self.to_world(screen, canvas);
        let zoom_factor = ZOOM_BASE.powf(delta_wheel);
        let new_scale = self.scale * zoom_factor;
        if !(new_scale.is_finite() && new_scale > 0.0) {
            log::debug!("[viewport] rejecting zoom to scale {}", new_scale);
            return *self;
        }
        let half = canvas.center();
        Self {
            x: anchor.x - (screen.x - half.x) / new_scale,
            y: anchor.y + (screen.y - half.y) / new_scale,
            scale: new_scale,
        }
    }

    pub fn pan(&self, dx_screen: f64, dy_screen: f64) -> Self {
        Self {
            x: self.x - dx_screen / self.scale,
            y: self.y + dy_screen / self.scale,
            scale: self.scale,
        }
    }

    /// World rectangle currently covered by the canvas.
    pub fn visible_rect(&self, canvas: CanvasSize) -> Rect {
        let top_left = self.to_world(DVec2::ZERO, canvas);
        let bottom_right = self.to_world(DVec2::new(canvas.width, canvas.height), canvas);
        Rect::from_corners(top_left, bottom_right)
    }
}
