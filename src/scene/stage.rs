//! Top-level orchestration: chain + animator + surface.
//!
//! A tap arms the animator; each polled tick produces one frame, steps the
//! active node, and on cycle completion stops the animator and produces one
//! final frame at rest. Everything runs on the caller's thread against the
//! caller's clock.

use std::time::Instant;

use crate::animation::state::{StartOutcome, UpdateOutcome};
use crate::config::StageConfig;
use crate::foundation::core::Viewport;
use crate::foundation::error::TrifillResult;
use crate::render::surface::{FrameRgba, StageSurface};
use crate::scene::animator::Animator;
use crate::scene::chain::Chain;

/// Discrete input the stage reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A tap / pointer press anywhere on the stage.
    PointerDown,
}

/// Chain plus animator; everything except the pixels.
#[derive(Clone, Debug)]
pub(crate) struct Renderer {
    chain: Chain,
    animator: Animator,
}

impl Renderer {
    pub(crate) fn new(cfg: &StageConfig) -> TrifillResult<Self> {
        Ok(Self {
            chain: Chain::new(cfg)?,
            animator: Animator::new(cfg.tick_period()),
        })
    }

    pub(crate) fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Start the active node's cycle and arm the animator.
    ///
    /// Taps landing mid-cycle are ignored; the start guard in the state
    /// machine makes re-entrancy a no-op.
    pub(crate) fn handle_tap(&mut self, now: Instant) -> bool {
        match self.chain.start_updating() {
            StartOutcome::Started => {
                self.animator.start(now);
                true
            }
            StartOutcome::Ignored => false,
        }
    }

    /// Consume one due tick, if any.
    pub(crate) fn tick_due(&mut self, now: Instant) -> bool {
        self.animator.poll(now)
    }

    /// Step the active node; a completed cycle stops the animator.
    pub(crate) fn step(&mut self, cfg: &StageConfig) -> UpdateOutcome {
        let outcome = self.chain.update(cfg);
        if outcome == UpdateOutcome::Completed {
            self.animator.stop();
        }
        outcome
    }
}

/// Owns the surface and drives the renderer.
pub struct Stage {
    cfg: StageConfig,
    renderer: Renderer,
    surface: StageSurface,
}

impl Stage {
    /// Build a stage for the given config and viewport.
    pub fn new(cfg: StageConfig, viewport: Viewport) -> TrifillResult<Self> {
        cfg.validate()?;
        Ok(Self {
            renderer: Renderer::new(&cfg)?,
            surface: StageSurface::new(viewport)?,
            cfg,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &StageConfig {
        &self.cfg
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.surface.viewport()
    }

    /// The node chain, for state inspection.
    pub fn chain(&self) -> &Chain {
        &self.renderer.chain
    }

    /// True while the animator is armed.
    pub fn is_animating(&self) -> bool {
        self.renderer.is_animating()
    }

    /// Swap in a new viewport; node geometry follows on the next draw.
    pub fn resize(&mut self, viewport: Viewport) -> TrifillResult<()> {
        self.surface = StageSurface::new(viewport)?;
        Ok(())
    }

    /// Route a discrete input event.
    pub fn handle_event(&mut self, event: InputEvent, now: Instant) -> bool {
        match event {
            InputEvent::PointerDown => self.handle_tap(now),
        }
    }

    /// Tap the stage; returns whether a cycle started.
    pub fn handle_tap(&mut self, now: Instant) -> bool {
        self.renderer.handle_tap(now)
    }

    /// Render the current state: background clear, then the chain.
    #[tracing::instrument(skip(self))]
    pub fn render(&mut self) -> TrifillResult<FrameRgba> {
        let cfg = &self.cfg;
        let renderer = &self.renderer;
        let viewport = self.surface.viewport();
        let clear = cfg.back_color.to_rgba8_premul();
        let frame = self
            .surface
            .render_with(clear, |ctx| renderer.chain.draw(ctx, cfg, viewport));
        Ok(frame)
    }

    /// Advance the animation to `now` and collect the frames it produced.
    ///
    /// At most one tick fires per call. A tick yields one frame before the
    /// state steps; a completed cycle yields one more frame at rest, after
    /// the animator has stopped.
    #[tracing::instrument(skip(self))]
    pub fn pump(&mut self, now: Instant) -> TrifillResult<Vec<FrameRgba>> {
        let mut frames = Vec::new();
        if self.renderer.tick_due(now) {
            frames.push(self.render()?);
            if self.renderer.step(&self.cfg) == UpdateOutcome::Completed {
                frames.push(self.render()?);
            }
        }
        Ok(frames)
    }
}
