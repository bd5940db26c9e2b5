use crate::animation::PendingTick;
use std::collections::VecDeque;

/// Fires animation ticks after their delay.
///
/// `schedule` returns a handle that the session keeps for the single pending
/// tick; `cancel` must guarantee the tick is never delivered.
pub trait TickScheduler {
    type Handle;

    fn schedule(&mut self, tick: PendingTick) -> Self::Handle;
    fn cancel(&mut self, handle: Self::Handle);
}

/// Scheduler that only queues ticks; the owner decides when they fire.
///
/// Used by tests and headless drivers to step an animated run deterministically.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    queue: VecDeque<(u64, PendingTick)>,
    next_id: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest queued tick.
    pub fn take_next(&mut self) -> Option<PendingTick> {
        self.queue.pop_front().map(|(_, t)| t)
    }

    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }
}

impl TickScheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, tick: PendingTick) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push_back((id, tick));
        id
    }

    fn cancel(&mut self, handle: u64) {
        self.queue.retain(|(id, _)| *id != handle);
    }
}
