//! Paced, one-iteration-per-tick visualization of the chaos game.
//!
//! The controller never sleeps or owns a timer. `start` and each `tick` hand
//! back the next [`PendingTick`] for a scheduler to fire later, and every
//! tick carries the id of the run that produced it so a tick that outlives
//! its run is ignored.

use crate::chaos::ChaosGame;
use crate::constants::{ANIMATION_TICKS, HIGHLIGHT_LIFE, TICK_DELAY};
use crate::error::ChaosError;
use crate::geometry::Point;
use smallvec::SmallVec;
use std::time::Duration;

/// Snapshot of the iteration currently being shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationStep {
    pub current_point: Point,
    pub target_vertex: Point,
    pub new_point: Point,
}

/// A recently chosen vertex and the number of ticks it stays lit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightedVertex {
    pub vertex: Point,
    pub life: i32,
}

/// Identifies one animated run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RunId(u64);

/// A tick waiting to be fired by a scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTick {
    pub run: RunId,
    pub count: u32,
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// The run continues; fire this tick next.
    Scheduled(PendingTick),
    /// The last tick of the run completed and the controller is idle again.
    Finished,
    /// The tick belonged to a cancelled or finished run and changed nothing.
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    Idle,
    Running { run: RunId, current: Point },
}

pub struct AnimationController {
    state: AnimationState,
    step: Option<AnimationStep>,
    highlights: SmallVec<[HighlightedVertex; 8]>,
    next_run: u64,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            state: AnimationState::Idle,
            step: None,
            highlights: SmallVec::new(),
            next_run: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    #[inline]
    pub fn step(&self) -> Option<&AnimationStep> {
        self.step.as_ref()
    }

    #[inline]
    pub fn highlights(&self) -> &[HighlightedVertex] {
        &self.highlights
    }

    /// Begin a run from `seed`. Only valid while idle.
    pub fn start(&mut self, seed: Point) -> Result<PendingTick, ChaosError> {
        if self.is_running() {
            return Err(ChaosError::AnimationRunning);
        }
        self.clear_transient();
        let run = RunId(self.next_run);
        self.next_run = self.next_run.wrapping_add(1);
        self.state = AnimationState::Running { run, current: seed };
        log::info!("[anim] run {} started at ({:.4},{:.4})", run.0, seed.x, seed.y);
        Ok(PendingTick {
            run,
            count: 0,
            delay: Duration::ZERO,
        })
    }

    /// Perform one paced iteration.
    pub fn tick(&mut self, pending: PendingTick, game: &mut ChaosGame) -> TickOutcome {
        let current = match self.state {
            AnimationState::Running { run, current } if run == pending.run => current,
            _ => {
                log::debug!("[anim] dropping stale tick {} of run {}", pending.count, pending.run.0);
                return TickOutcome::Stale;
            }
        };

        let (target_vertex, new_point) = game.step(current);
        self.step = Some(AnimationStep {
            current_point: current,
            target_vertex,
            new_point,
        });
        self.highlights.insert(
            0,
            HighlightedVertex {
                vertex: target_vertex,
                life: HIGHLIGHT_LIFE,
            },
        );
        for h in self.highlights.iter_mut() {
            h.life -= 1;
        }
        self.highlights.retain(|h| h.life > 0);
        game.push_point(new_point);

        let next = pending.count + 1;
        if next < ANIMATION_TICKS {
            self.state = AnimationState::Running {
                run: pending.run,
                current: new_point,
            };
            TickOutcome::Scheduled(PendingTick {
                run: pending.run,
                count: next,
                delay: TICK_DELAY,
            })
        } else {
            self.state = AnimationState::Idle;
            game.set_current_point(new_point);
            self.clear_transient();
            log::info!("[anim] run {} finished after {} ticks", pending.run.0, next);
            TickOutcome::Finished
        }
    }

    /// Stop the active run, if any. Returns whether a run was cancelled.
    pub fn cancel(&mut self) -> bool {
        let was_running = self.is_running();
        self.state = AnimationState::Idle;
        self.clear_transient();
        was_running
    }

    fn clear_transient(&mut self) {
        self.step = None;
        self.highlights.clear();
    }
}
