//! What a drawing backend gets to see after every mutation.

use crate::animation::{AnimationStep, HighlightedVertex};
use crate::geometry::Point;
use crate::viewport::{CanvasSize, Viewport};

/// Consistent view of the session for one redraw.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub points: &'a [Point],
    pub viewport: Viewport,
    pub canvas: CanvasSize,
    pub step: Option<&'a AnimationStep>,
    pub highlights: &'a [HighlightedVertex],
    pub running: bool,
}

/// Small numeric summary used for status readouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stats {
    pub point_count: usize,
    pub scale: f64,
    pub running: bool,
}

/// A backend that can paint a [`Frame`]. Applying the viewport transform and
/// choosing visual style are the backend's job.
pub trait RenderSurface {
    type Error;

    fn present(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}
