//! Scan-line polygon filler
//!
//! Rasterizes a closed path's interior with the classic even-odd scan-line
//! rule: intersect every pixel row with the path's edges, sort the
//! intersection points, and fill between successive pairs.
//!
//! Only edges present in the point sequence are considered; there is no
//! implicit closing edge, so callers must pass a pre-closed path for a
//! fully bounded region. Self-intersecting or degenerate polygons may fill
//! incorrectly; this is a quick-sketch brush, not a robust polygon engine.

use super::blend::blend_pixel;
use crate::brush::Path;
use crate::surface::{Rect, Rgba, Surface};

/// Horizontal edges below this y-extent contribute no intersection
const EDGE_EPSILON: f32 = 1e-3;

/// Fill the interior of `path` onto `surface`
///
/// Paths with fewer than 3 points are skipped. Returns the dirty region
/// that was touched (empty when nothing was drawn).
pub fn fill_path<S: Surface>(
    surface: &mut S,
    path: &Path,
    fill_color: Rgba,
    fill_opacity: f32,
) -> Rect {
    if path.len() < 3 {
        return Rect::empty();
    }

    let width = surface.width() as i32;
    let height = surface.height() as i32;
    let (min_y, max_y) = vertical_bounds(path, height);
    let mut dirty = Rect::empty();

    for y in min_y..=max_y {
        let mut intersections = scanline_intersections(path, y as f32);
        intersections.sort_by(f32::total_cmp);

        // Successive pairs delimit inside spans; an odd leftover is dropped
        for pair in intersections.chunks_exact(2) {
            let x1 = pair[0] as i32;
            let x2 = pair[1] as i32;

            for x in x1..=x2 {
                if x >= 0 && x < width {
                    blend_pixel(surface, x, y, fill_color, fill_opacity);
                }
            }

            let left = x1.max(0);
            let right = x2.min(width - 1);
            if left <= right {
                dirty.union(&Rect::new(left, y, right + 1, y + 1));
            }
        }
    }

    dirty
}

/// Vertical bounding range of the path, clamped to the surface
fn vertical_bounds(path: &Path, height: i32) -> (i32, i32) {
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for p in path.iter() {
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }
    ((min_y as i32).max(0), (max_y as i32).min(height - 1))
}

/// X coordinates where the horizontal line at `y` crosses the path's edges
fn scanline_intersections(path: &Path, y: f32) -> Vec<f32> {
    let mut intersections = Vec::new();

    for (p1, p2) in path.segments() {
        let straddles = (p1.y <= y && p2.y >= y) || (p1.y >= y && p2.y <= y);
        if !straddles {
            continue;
        }
        // Horizontal edges contribute no intersection
        if (p2.y - p1.y).abs() > EDGE_EPSILON {
            let t = (y - p1.y) / (p2.y - p1.y);
            intersections.push(p1.x + t * (p2.x - p1.x));
        }
    }

    intersections
}
