//! Repeating-tick driver.
//!
//! Single-threaded and cooperative: the animator never spawns anything, it
//! just arms a deadline that callers poll with their own notion of "now".
//! `poll` yields at most one tick per call and re-arms from the polled
//! instant, so ticks are strictly sequential and never overlap.

use std::time::{Duration, Instant};

/// Polled deadline ticker with idempotent start/stop.
///
/// The deadline is armed iff the animator is running; the two collapse into
/// one `Option`.
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    period: Duration,
    deadline: Option<Instant>,
}

impl Animator {
    /// Create a stopped animator with the given tick period.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// Tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// True while a deadline is armed.
    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Arm the first deadline. No-op (returns `false`) when already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + self.period);
        tracing::debug!("animator started");
        true
    }

    /// Disarm. No-op (returns `false`) when not running.
    pub fn stop(&mut self) -> bool {
        let was_running = self.deadline.take().is_some();
        if was_running {
            tracing::debug!("animator stopped");
        }
        was_running
    }

    /// Consume one due tick, if any, and re-arm from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/animator.rs"]
mod tests;
