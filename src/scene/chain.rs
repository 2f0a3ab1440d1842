//! The ordered chain of nodes and its traversal cursor.
//!
//! The chain owns every node state in one arena; neighbors are index lookups.
//! Exactly one node animates at a time, and the cursor walks down the column
//! then back up, flipping only at the two ends.

use crate::animation::state::{PulseState, StartOutcome, UpdateOutcome};
use crate::config::StageConfig;
use crate::foundation::core::Viewport;
use crate::foundation::error::TrifillResult;
use crate::render::draw::draw_node;

/// Direction the cursor moves through the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    /// Head to tail (down the column).
    Forward,
    /// Tail to head (back up).
    Backward,
}

impl Traversal {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Arena of node states plus the active cursor.
#[derive(Clone, Debug)]
pub struct Chain {
    states: Vec<PulseState>,
    current: usize,
    traversal: Traversal,
}

impl Chain {
    /// Build a chain with `cfg.nodes` nodes, cursor at the head.
    pub fn new(cfg: &StageConfig) -> TrifillResult<Self> {
        cfg.validate()?;
        Ok(Self {
            states: vec![PulseState::default(); cfg.nodes],
            current: 0,
            traversal: Traversal::Forward,
        })
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when the chain has no nodes; [`Chain::new`] never builds one.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index of the node the cursor sits on.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Current traversal direction.
    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// True when no node is mid-cycle.
    pub fn is_idle(&self) -> bool {
        self.states.iter().all(PulseState::is_idle)
    }

    /// Draw every node, head to tail.
    pub fn draw(&self, ctx: &mut vello_cpu::RenderContext, cfg: &StageConfig, viewport: Viewport) {
        for (i, state) in self.states.iter().enumerate() {
            draw_node(ctx, cfg, viewport, i, state.scale());
        }
    }

    /// Ask the active node to begin a cycle; ignored while one is running.
    pub fn start_updating(&mut self) -> StartOutcome {
        self.states[self.current].start()
    }

    /// Tick the active node; on completion the cursor advances.
    pub fn update(&mut self, cfg: &StageConfig) -> UpdateOutcome {
        let outcome = self.states[self.current].update(cfg);
        if outcome == UpdateOutcome::Completed {
            self.advance();
        }
        outcome
    }

    /// Move the cursor one step in the traversal direction.
    ///
    /// Running off either end keeps the cursor in place and flips the
    /// traversal, so the next cycle replays the boundary node.
    fn advance(&mut self) {
        let last = self.states.len() - 1;
        match self.traversal {
            Traversal::Forward if self.current < last => self.current += 1,
            Traversal::Backward if self.current > 0 => self.current -= 1,
            _ => {
                self.traversal = self.traversal.flipped();
                tracing::debug!(at = self.current, "chain boundary, traversal flipped");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/chain.rs"]
mod tests;
