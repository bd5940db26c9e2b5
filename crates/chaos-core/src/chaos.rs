use crate::constants::SEED_ATTEMPTS;
use crate::error::ChaosError;
use crate::geometry::{is_point_in_triangle, midpoint, sample_in_triangle, Point, VERTICES};
use crate::viewport::{CanvasSize, Viewport};
use rand::prelude::*;

/// Number of iterations run by one batch generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BatchSize {
    #[default]
    Hundred,
    Thousand,
    TenThousand,
}

impl BatchSize {
    #[inline]
    pub fn count(self) -> usize {
        match self {
            BatchSize::Hundred => 100,
            BatchSize::Thousand => 1_000,
            BatchSize::TenThousand => 10_000,
        }
    }
}

impl TryFrom<usize> for BatchSize {
    type Error = ChaosError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            100 => Ok(BatchSize::Hundred),
            1_000 => Ok(BatchSize::Thousand),
            10_000 => Ok(BatchSize::TenThousand),
            other => Err(ChaosError::UnsupportedBatchSize(other)),
        }
    }
}

/// Chaos-game state: the running point plus everything generated this session.
pub struct ChaosGame {
    rng: StdRng,
    current: Point,
    points: Vec<Point>,
}

impl ChaosGame {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(mut rng: StdRng) -> Self {
        let current = sample_in_triangle(&mut rng, &VERTICES);
        Self {
            rng,
            current,
            points: Vec::new(),
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn current_point(&self) -> Point {
        self.current
    }

    pub fn set_current_point(&mut self, p: Point) {
        self.current = p;
    }

    /// One iteration: pick a vertex uniformly and move halfway toward it.
    pub fn step(&mut self, current: Point) -> (Point, Point) {
        let target = *VERTICES.choose(&mut self.rng).unwrap_or(&VERTICES[0]);
        (target, midpoint(current, target))
    }

    /// Starting point for the next run of iterations.
    ///
    /// Keeps the current point while it is visible and the session already has
    /// points; otherwise draws a fresh seed inside the triangle, preferring the
    /// visible part of it.
    pub fn reacquire_seed(&mut self, viewport: &Viewport, canvas: CanvasSize) -> Point {
        let visible = viewport.visible_rect(canvas);
        if !self.points.is_empty() && visible.contains(self.current) {
            return self.current;
        }
        for _ in 0..SEED_ATTEMPTS {
            let candidate = visible.sample(&mut self.rng);
            if is_point_in_triangle(candidate, &VERTICES) {
                return candidate;
            }
        }
        log::debug!(
            "[chaos] no visible seed after {} attempts; sampling whole triangle",
            SEED_ATTEMPTS
        );
        sample_in_triangle(&mut self.rng, &VERTICES)
    }

    /// Run `size` iterations and append the results in one update.
    pub fn generate_batch(&mut self, size: BatchSize, viewport: &Viewport, canvas: CanvasSize) {
        let n = size.count();
        let mut current = self.reacquire_seed(viewport, canvas);
        let mut batch = Vec::with_capacity(n);
        for _ in 0..n {
            let (_, next) = self.step(current);
            batch.push(next);
            current = next;
        }
        self.points.extend(batch);
        self.current = current;
        log::debug!("[chaos] batch of {} points; total={}", n, self.points.len());
    }

    /// Append a single point without moving the current point.
    pub fn push_point(&mut self, p: Point) {
        self.points.push(p);
    }

    /// Clear the collection and restart from a fresh random seed in the triangle.
    pub fn reset(&mut self) {
        self.points.clear();
        self.current = sample_in_triangle(&mut self.rng, &VERTICES);
    }
}
