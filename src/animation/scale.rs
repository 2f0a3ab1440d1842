//! Scale arithmetic shared by the state machine and the drawing routines.
//!
//! A node's progress is one `scale` value in `[0, 1]` that sub-shapes carve
//! local `[0, 1]` windows out of, so sibling animations run staggered rather
//! than simultaneously.

/// Clamp `scale` down by the per-sibling offset `i/n`, never below zero.
pub fn max_scale(scale: f64, i: usize, n: usize) -> f64 {
    (scale - (i as f64) / (n as f64)).max(0.0)
}

/// Local `[0, 1]` progress for sibling `i` of `n` given global `scale`.
pub fn divide_scale(scale: f64, i: usize, n: usize) -> f64 {
    let n_f = n as f64;
    (1.0 / n_f).min(max_scale(scale, i, n)) * n_f
}

/// 0/1 half-cycle toggle: `floor(scale / sc_div)`.
pub fn scale_factor(scale: f64, sc_div: f64) -> f64 {
    (scale / sc_div).floor()
}

/// Blend between increment denominators `a` (first half) and `b` (second half).
pub fn mirror_value(scale: f64, a: f64, b: f64, sc_div: f64) -> f64 {
    let k = scale_factor(scale, sc_div);
    (1.0 - k) / a + k / b
}

/// Signed per-tick increment: rate follows the active half, sign follows `dir`.
pub fn update_value(scale: f64, dir: f64, a: f64, b: f64, sc_gap: f64, sc_div: f64) -> f64 {
    mirror_value(scale, a, b, sc_div) * dir * sc_gap
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scale.rs"]
mod tests;
