//! Fixed triangle geometry and sampling helpers.

use crate::constants::{TRIANGLE_HEIGHT, TRIANGLE_WIDTH};
use glam::DVec2;
use rand::Rng;

/// A point in the world plane.
pub type Point = DVec2;

/// The three corners of the equilateral triangle, constant for the process lifetime.
pub const VERTICES: [Point; 3] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(TRIANGLE_WIDTH, 0.0),
    DVec2::new(TRIANGLE_WIDTH * 0.5, TRIANGLE_HEIGHT),
];

#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    a * 0.5 + b * 0.5
}

#[inline]
fn edge_sign(p: Point, a: Point, b: Point) -> f64 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Boundary-inclusive membership test.
///
/// The point is inside iff the three edge cross products never disagree in
/// strict sign, which holds for either winding of `vertices`.
pub fn is_point_in_triangle(p: Point, vertices: &[Point; 3]) -> bool {
    let [a, b, c] = *vertices;
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Uniform point inside the triangle using barycentric weights `(1-s-t, s, t)`.
pub fn sample_in_triangle<R: Rng + ?Sized>(rng: &mut R, vertices: &[Point; 3]) -> Point {
    let mut s: f64 = rng.gen();
    let mut t: f64 = rng.gen();
    if s + t > 1.0 {
        // reflect back into the simplex
        s = 1.0 - s;
        t = 1.0 - t;
    }
    vertices[0] * (1.0 - s - t) + vertices[1] * s + vertices[2] * t
}

/// Axis-aligned world rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Build from two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let u: f64 = rng.gen();
        let v: f64 = rng.gen();
        self.min + (self.max - self.min) * DVec2::new(u, v)
    }
}
