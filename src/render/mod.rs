//! Brush renderer - fill-then-outline rasterization of completed paths

pub mod blend;
pub mod fill;
pub mod outline;

pub use blend::{blend_over, blend_pixel};
pub use fill::fill_path;
pub use outline::render_outline;

use crate::brush::{BrushSettings, OutlineFillBrush, Path};
use crate::surface::{Rect, Surface};

/// Fill the interior of a single path
///
/// Paths with fewer than 3 points are skipped. Effective opacity is
/// `fill_opacity * fill_color.a`.
pub fn render_fill<S: Surface>(surface: &mut S, path: &Path, settings: &BrushSettings) -> Rect {
    if path.len() < 3 {
        return Rect::empty();
    }

    let color = settings.fill_color;
    let opacity = settings.fill_opacity * color.a;
    fill_path(surface, path, color, opacity)
}

/// Render every completed path of the brush, fill first, outline on top
///
/// The in-progress path is never rendered. Settings are snapshotted once
/// for the whole pass, so a concurrent editor cannot change them mid-render.
/// Returns the union of all touched dirty regions.
pub fn render_brush<S: Surface>(surface: &mut S, brush: &OutlineFillBrush) -> Rect {
    let settings = brush.settings.clone();
    let mut dirty = Rect::empty();

    for path in brush.completed_paths() {
        dirty.union(&render_fill(surface, path, &settings));
        dirty.union(&render_outline(surface, path, &settings));
    }

    dirty
}
