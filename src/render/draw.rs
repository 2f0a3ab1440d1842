//! Stateless drawing routines for one node's shapes.
//!
//! A node is a connector line plus two mirrored triangles that fill from the
//! bottom up and rotate into place. All geometry is built in a node-local
//! frame and positioned with explicit affines; nothing here touches context
//! state beyond transform, paint, stroke, and scoped clip layers.

use std::f64::consts::FRAC_PI_2;

use crate::animation::scale::divide_scale;
use crate::config::StageConfig;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Viewport};

/// The two staggered phases of a node cycle: fill, then rotation.
const PHASES: usize = 2;

/// Triangle with apex at the local origin and base of width `size` above it.
pub(crate) fn triangle_path(size: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, 0.0));
    path.line_to((-size / 2.0, -size / 2.0));
    path.line_to((size / 2.0, -size / 2.0));
    path.close_path();
    path
}

/// Progress bar growing upward from the apex: full height is `size / 2`.
pub(crate) fn fill_progress_rect(size: f64, sc: f64) -> Rect {
    Rect::new(-size / 2.0, -size / 2.0 * sc, size / 2.0, 0.0)
}

fn stroke_segment(ctx: &mut vello_cpu::RenderContext, transform: Affine, p0: Point, p1: Point) {
    let mut path = BezPath::new();
    path.move_to(p0);
    path.line_to(p1);
    ctx.set_transform(affine_to_cpu(transform));
    ctx.stroke_path(&bezpath_to_cpu(&path));
}

/// Stroke the connector and triangle outline, then fill the progress rect
/// inside a clip scoped to that same triangle.
///
/// `sc` in `[0, 1]` is this triangle's local fill progress; the clip layer is
/// popped before returning so sibling shapes are unaffected.
pub(crate) fn draw_fill_triangle(
    ctx: &mut vello_cpu::RenderContext,
    cfg: &StageConfig,
    transform: Affine,
    sc: f64,
    size: f64,
) {
    let x = -size * 0.75;
    stroke_segment(ctx, transform, Point::new(0.0, 0.0), Point::new(x, 0.0));

    let local = transform * Affine::translate((x, 0.0));
    let triangle = bezpath_to_cpu(&triangle_path(size));
    ctx.set_transform(affine_to_cpu(local));
    ctx.stroke_path(&triangle);

    ctx.push_clip_layer(&triangle);
    let [r, g, b, a] = cfg.fore_color.to_rgba8();
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    let rect = fill_progress_rect(size, sc);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(rect.x0, rect.y0, rect.x1, rect.y1));
    ctx.pop_layer();
}

/// Draw node `index` of the chain at global progress `scale`.
///
/// The node sits at the horizontal center of its vertical slot; the first
/// half of `scale` drives the mirrored fills, the second rotates the whole
/// node by up to 90°.
pub(crate) fn draw_node(
    ctx: &mut vello_cpu::RenderContext,
    cfg: &StageConfig,
    viewport: Viewport,
    index: usize,
    scale: f64,
) {
    let w = f64::from(viewport.width);
    let h = f64::from(viewport.height);
    let gap = h / (cfg.nodes as f64 + 1.0);
    let size = gap / cfg.size_factor;
    let sc1 = divide_scale(scale, 0, PHASES);
    let sc2 = divide_scale(scale, 1, PHASES);

    let [r, g, b, a] = cfg.fore_color.to_rgba8();
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
    ctx.set_stroke(
        vello_cpu::kurbo::Stroke::new(viewport.min_side() / cfg.stroke_factor)
            .with_caps(vello_cpu::kurbo::Cap::Round),
    );

    let base = Affine::translate((w / 2.0, gap * (index as f64 + 1.0)))
        * Affine::rotate(FRAC_PI_2 * sc2);
    for j in 0..cfg.triangles {
        // Odd indices mirror across the vertical axis.
        let mirrored = base * Affine::scale_non_uniform(1.0 - 2.0 * (j % 2) as f64, 1.0);
        draw_fill_triangle(ctx, cfg, mirrored, divide_scale(sc1, j, cfg.triangles), size);
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
