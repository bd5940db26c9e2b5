use std::time::Duration;

// Shared tuning constants for the chaos game and its viewport.

// Triangle layout
pub const TRIANGLE_WIDTH: f64 = 1.0;
pub const TRIANGLE_HEIGHT: f64 = 0.866_025_403_784_438_6; // sqrt(0.75)

// Viewport fitting
pub const VIEWPORT_PADDING: f64 = 1.1; // bounding box is fit into canvas / 1.1
pub const ZOOM_BASE: f64 = 0.998; // scale factor per unit of wheel delta

// Seed reacquisition
pub const SEED_ATTEMPTS: usize = 100; // rejection samples before falling back to the whole triangle

// Animation pacing
pub const ANIMATION_TICKS: u32 = 100; // iterations per animated run
pub const TICK_DELAY: Duration = Duration::from_millis(100);
pub const HIGHLIGHT_LIFE: i32 = 5; // ticks a chosen vertex stays highlighted

#[inline]
pub fn triangle_bbox_center() -> glam::DVec2 {
    glam::DVec2::new(TRIANGLE_WIDTH * 0.5, TRIANGLE_HEIGHT * 0.5)
}
