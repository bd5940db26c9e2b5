//! Session state and the operations the UI drives.
//!
//! A [`Session`] owns everything that changes while the app runs: the chaos
//! game, the viewport, the animation controller and the tick scheduler. Input
//! adapters and controls call into it; the renderer reads [`Session::frame`].

use crate::animation::{AnimationController, PendingTick, TickOutcome};
use crate::chaos::{BatchSize, ChaosGame};
use crate::error::ChaosError;
use crate::geometry::Point;
use crate::scheduler::TickScheduler;
use crate::surface::{Frame, Stats};
use crate::viewport::{CanvasSize, Viewport};

#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    /// Fixed RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub animation_mode: bool,
    pub batch_size: BatchSize,
}

pub struct Session<S: TickScheduler> {
    game: ChaosGame,
    viewport: Viewport,
    canvas: CanvasSize,
    animation: AnimationController,
    scheduler: S,
    pending: Option<S::Handle>,
    animation_mode: bool,
    batch_size: BatchSize,
}

impl<S: TickScheduler> Session<S> {
    pub fn new(config: SessionConfig, canvas: CanvasSize, scheduler: S) -> Self {
        let game = match config.seed {
            Some(seed) => ChaosGame::new(seed),
            None => ChaosGame::from_entropy(),
        };
        Self {
            game,
            viewport: Viewport::initial(canvas).unwrap_or_default(),
            canvas,
            animation: AnimationController::new(),
            scheduler,
            pending: None,
            animation_mode: config.animation_mode,
            batch_size: config.batch_size,
        }
    }

    #[inline]
    pub fn game(&self) -> &ChaosGame {
        &self.game
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.game.points()
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[inline]
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    #[inline]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.animation.is_running()
    }

    #[inline]
    pub fn animation_mode(&self) -> bool {
        self.animation_mode
    }

    #[inline]
    pub fn batch_size(&self) -> BatchSize {
        self.batch_size
    }

    /// Generate and mode controls are only usable while no run is in progress.
    #[inline]
    pub fn controls_enabled(&self) -> bool {
        !self.is_running()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            points: self.game.points(),
            viewport: self.viewport,
            canvas: self.canvas,
            step: self.animation.step(),
            highlights: self.animation.highlights(),
            running: self.is_running(),
        }
    }

    pub fn stats(&self) -> Stats {
        Stats {
            point_count: self.game.points().len(),
            scale: self.viewport.scale(),
            running: self.is_running(),
        }
    }

    // ---------------- Controls ----------------

    /// Run `n` iterations synchronously; `n` must be 100, 1000 or 10000.
    pub fn generate_batch(&mut self, n: usize) -> Result<(), ChaosError> {
        let size = BatchSize::try_from(n)?;
        self.ensure_idle()?;
        self.game.generate_batch(size, &self.viewport, self.canvas);
        Ok(())
    }

    pub fn set_animation_mode(&mut self, enabled: bool) -> Result<(), ChaosError> {
        self.ensure_idle()?;
        self.animation_mode = enabled;
        Ok(())
    }

    pub fn set_batch_size(&mut self, size: BatchSize) {
        self.batch_size = size;
    }

    /// Batch or animated generation depending on the selected mode.
    pub fn generate(&mut self) -> Result<(), ChaosError> {
        self.ensure_idle()?;
        if self.animation_mode {
            self.start_animation()
        } else {
            self.game.generate_batch(self.batch_size, &self.viewport, self.canvas);
            Ok(())
        }
    }

    fn start_animation(&mut self) -> Result<(), ChaosError> {
        let seed = self.game.reacquire_seed(&self.viewport, self.canvas);
        let first = self.animation.start(seed)?;
        self.pending = Some(self.scheduler.schedule(first));
        Ok(())
    }

    /// Deliver a tick fired by the scheduler.
    pub fn on_tick(&mut self, tick: PendingTick) -> TickOutcome {
        let outcome = self.animation.tick(tick, &mut self.game);
        match outcome {
            TickOutcome::Scheduled(next) => self.pending = Some(self.scheduler.schedule(next)),
            TickOutcome::Finished => self.pending = None,
            TickOutcome::Stale => {}
        }
        outcome
    }

    /// Cancel any run, refit the view and start over with an empty collection.
    pub fn reset(&mut self) {
        // the pending tick must be gone before any state below changes
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        if self.animation.cancel() {
            log::info!("[session] animation cancelled by reset");
        }
        if let Some(v) = Viewport::initial(self.canvas) {
            self.viewport = v;
        }
        self.game.reset();
        log::info!("[session] reset");
    }

    /// Refit the view to the triangle without touching the points.
    pub fn fit_view(&mut self) {
        if let Some(v) = Viewport::initial(self.canvas) {
            self.viewport = v;
        }
    }

    // ---------------- Input adapter ----------------

    pub fn on_wheel(&mut self, screen: Point, delta_y: f64) {
        self.viewport = self.viewport.zoom_at(screen, delta_y, self.canvas);
    }

    pub fn on_drag_delta(&mut self, dx: f64, dy: f64) {
        self.viewport = self.viewport.pan(dx, dy);
    }

    /// Record the new canvas size; the view is refit only while nothing has been drawn.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        self.canvas = CanvasSize::new(width, height);
        if self.game.points().is_empty() {
            if let Some(v) = Viewport::initial(self.canvas) {
                self.viewport = v;
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), ChaosError> {
        if self.is_running() {
            log::warn!("[session] rejected while animation is running");
            return Err(ChaosError::AnimationRunning);
        }
        Ok(())
    }
}
