//! Trifill renders a looping geometric animation: a vertical chain of nodes,
//! each drawing a pair of mirrored triangles that fill from the bottom up and
//! rotate into place, advanced one node per tap.
//!
//! The public API is stage-oriented:
//!
//! - Build a [`StageConfig`] (or take the defaults)
//! - Create a [`Stage`] with a viewport
//! - Feed it taps via [`Stage::handle_tap`] and pump ticks via [`Stage::pump`]
//! - Each produced [`FrameRgba`] holds premultiplied RGBA8 pixels
//!
//! Everything runs on one logical thread; the animator is a polled deadline,
//! not an OS timer, so the whole loop is deterministic under a virtual clock.
#![forbid(unsafe_code)]

pub mod animation;
pub mod config;
mod foundation;
pub mod render;
pub mod scene;

pub use crate::foundation::core::{Affine, BezPath, Point, Rect, Rgba8Premul, Vec2, Viewport};
pub use crate::foundation::error::{TrifillError, TrifillResult};

pub use crate::animation::state::{Direction, PulseState, StartOutcome, UpdateOutcome};
pub use crate::config::{Color, StageConfig};
pub use crate::render::surface::FrameRgba;
pub use crate::scene::animator::Animator;
pub use crate::scene::chain::{Chain, Traversal};
pub use crate::scene::stage::{InputEvent, Stage};
