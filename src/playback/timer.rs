//! Single-slot scheduled tick
//!
//! [`TickTimer`] holds at most one pending deadline. Scheduling replaces
//! whatever was pending, so two advances can never be queued at once, and
//! cancelling drops the pending tick before it can fire.
//!
//! The timer never reads the clock itself; callers pass `now`.

use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    deadline: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick `delay` after `now`, replacing any pending one.
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.cancel();
        let at = now + delay;
        trace!(delay_ms = delay.as_millis() as u64, "tick scheduled");
        self.deadline = Some(at);
    }

    /// Drop the pending tick, if any.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            trace!("pending tick cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending tick, zero if it is already due
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|at| at.saturating_duration_since(now))
    }

    /// Consume the pending tick if it is due at `now`.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if at <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
