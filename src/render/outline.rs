//! Outline rasterizer - pressure-weighted stamped-circle stroking
//!
//! Thick lines are approximated by stepping along each segment's major axis
//! and stamping a filled disk at every step. Overlapping disks read as a
//! continuous stroke at quick-sketch fidelity without an analytic thick-line
//! polygon.

use super::blend::blend_pixel;
use crate::brush::{BrushSettings, Path};
use crate::surface::{Rect, Rgba, Surface};

/// Stroke every segment of `path` with the configured outline
///
/// Paths with fewer than 2 points are skipped. Effective opacity is
/// `outline_opacity * outline_color.a`; per-segment width is scaled by the
/// segment start point's pressure when `outline_width_pressure` is set
/// (pressure is not clamped, so out-of-range input passes through).
/// Returns the touched dirty region, clamped to the surface.
pub fn render_outline<S: Surface>(surface: &mut S, path: &Path, settings: &BrushSettings) -> Rect {
    if path.len() < 2 {
        return Rect::empty();
    }

    let color = settings.outline_color;
    let opacity = settings.outline_opacity * color.a;
    let mut dirty = Rect::empty();

    for (p1, p2) in path.segments() {
        let width = if settings.outline_width_pressure {
            settings.outline_width * p1.pressure
        } else {
            settings.outline_width
        };

        draw_line(surface, p1.x, p1.y, p2.x, p2.y, width, color, opacity, &mut dirty);
    }

    dirty.clamp_to(surface.width(), surface.height());
    dirty
}

/// Stamp disks of `width / 2` radius along the segment's major axis
#[allow(clippy::too_many_arguments)]
fn draw_line<S: Surface>(
    surface: &mut S,
    mut x1: f32,
    mut y1: f32,
    mut x2: f32,
    mut y2: f32,
    width: f32,
    color: Rgba,
    opacity: f32,
    dirty: &mut Rect,
) {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();

    // Zero-length segment: a single stamp
    if dx == 0.0 && dy == 0.0 {
        stamp_circle(surface, x1, y1, width / 2.0, color, opacity, dirty);
        return;
    }

    if dx > dy {
        if x1 > x2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }
        for x in (x1 as i32)..=(x2 as i32) {
            let t = (x as f32 - x1) / (x2 - x1);
            let y = y1 + (y2 - y1) * t;
            stamp_circle(surface, x as f32, y, width / 2.0, color, opacity, dirty);
        }
    } else {
        if y1 > y2 {
            std::mem::swap(&mut x1, &mut x2);
            std::mem::swap(&mut y1, &mut y2);
        }
        for y in (y1 as i32)..=(y2 as i32) {
            let t = (y as f32 - y1) / (y2 - y1);
            let x = x1 + (x2 - x1) * t;
            stamp_circle(surface, x, y as f32, width / 2.0, color, opacity, dirty);
        }
    }
}

/// Composite a filled disk centered at (cx, cy) onto the surface
///
/// The radius is truncated to whole pixels with a 1 px minimum, so even a
/// zero or negative width leaves a visible mark.
fn stamp_circle<S: Surface>(
    surface: &mut S,
    cx: f32,
    cy: f32,
    radius: f32,
    color: Rgba,
    opacity: f32,
    dirty: &mut Rect,
) {
    let r = (radius as i32).max(1);
    dirty.expand(cx as i32, cy as i32, r);

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                let px = (cx + dx as f32) as i32;
                let py = (cy + dy as f32) as i32;
                blend_pixel(surface, px, py, color, opacity);
            }
        }
    }
}
