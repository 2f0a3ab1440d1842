//! Per-node animation state machine.
//!
//! A node moves its scale between the two integral rest points 0 and 1, one
//! tick at a time. The first half of a traversal advances at half rate, the
//! second at full rate (`update_value` with denominators 2 and 1), giving the
//! fill-then-rotate feel.

use crate::animation::scale::update_value;
use crate::config::StageConfig;

/// Movement sense of a node's scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// At rest; updates are no-ops.
    #[default]
    Idle,
    /// Scale grows toward the next rest point.
    Advance,
    /// Scale shrinks toward the previous rest point.
    Retreat,
}

impl Direction {
    /// Signed multiplier applied to the per-tick increment.
    pub fn signum(self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::Advance => 1.0,
            Self::Retreat => -1.0,
        }
    }
}

/// Result of one [`PulseState::update`] tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Still mid-cycle (or idle).
    InProgress,
    /// A full unit was traversed this tick; the state is back at rest.
    Completed,
}

/// Result of a [`PulseState::start`] request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The cycle began.
    Started,
    /// Already animating; the request was dropped.
    Ignored,
}

/// One node's scale, committed rest point, and movement direction.
///
/// `committed` only ever holds exactly 0.0 or 1.0; `scale` is snapped back to
/// it whenever a cycle completes, so float drift cannot accumulate across
/// cycles.
#[derive(Clone, Copy, Debug, Default)]
pub struct PulseState {
    scale: f64,
    committed: f64,
    direction: Direction,
}

impl PulseState {
    /// Current scale in `[0, 1]` plus the in-flight overshoot of one tick.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current movement direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True when the node sits at a rest point.
    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Idle
    }

    /// Advance one tick.
    ///
    /// Once a full unit has been traversed the scale snaps to the exact next
    /// integral rest point, the direction returns to idle, and `Completed` is
    /// reported — at most once per unit.
    pub fn update(&mut self, cfg: &StageConfig) -> UpdateOutcome {
        let dir = self.direction.signum();
        self.scale += update_value(self.scale, dir, 2.0, 1.0, cfg.sc_gap, cfg.sc_div);
        if (self.scale - self.committed).abs() > 1.0 {
            self.scale = (self.committed + dir).round();
            self.committed = self.scale;
            self.direction = Direction::Idle;
            tracing::debug!(committed = self.committed, "pulse cycle completed");
            return UpdateOutcome::Completed;
        }
        UpdateOutcome::InProgress
    }

    /// Kick off a cycle when idle; mid-cycle requests are ignored.
    ///
    /// The direction alternates with the committed rest point: advance from 0,
    /// retreat from 1. The comparison is a midpoint test rather than exact
    /// float equality.
    pub fn start(&mut self) -> StartOutcome {
        if self.direction != Direction::Idle {
            return StartOutcome::Ignored;
        }
        self.direction = if self.committed < 0.5 {
            Direction::Advance
        } else {
            Direction::Retreat
        };
        StartOutcome::Started
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/state.rs"]
mod tests;
