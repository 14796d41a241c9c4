//! Brush settings - outline, fill and path configuration
//!
//! A plain value record mutated directly by the host's settings editor.
//! The renderer snapshots it once per render pass, so hosts only need to
//! serialize edits against renders (no internal locking).

use crate::surface::Rgba;
use serde::{Deserialize, Serialize};

/// Fill algorithm selector
///
/// Only `Solid` is rendered; `Gradient` and `Pattern` are reserved
/// extension points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    #[default]
    Solid,
    Gradient,
    Pattern,
}

/// Outline-fill brush configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushSettings {
    /// Base outline width in pixels
    pub outline_width: f32,
    /// Outline color
    pub outline_color: Rgba,
    /// Outline opacity (0-1), multiplied with the outline color's alpha
    pub outline_opacity: f32,

    /// Fill color
    pub fill_color: Rgba,
    /// Fill opacity (0-1), multiplied with the fill color's alpha
    pub fill_opacity: f32,
    /// Fill algorithm (only `Solid` implemented)
    pub fill_mode: FillMode,

    /// Smoothing strength (0-1); reserved, the fixed-kernel smoother
    /// does not consult it yet
    pub smoothness: f32,
    /// Append a closing point to finished strokes
    pub close_path: bool,
    /// Fill the interior of finished strokes; reserved
    pub auto_fill: bool,

    /// Scale outline width by per-point pressure
    pub outline_width_pressure: bool,
    /// Scale fill alpha by pressure; reserved
    pub fill_pressure_alpha: bool,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            outline_width: 2.0,
            outline_color: Rgba::new(0.0, 0.0, 0.0, 1.0),
            outline_opacity: 1.0,
            fill_color: Rgba::new(1.0, 0.0, 0.0, 0.5),
            fill_opacity: 0.5,
            fill_mode: FillMode::Solid,
            smoothness: 0.8,
            close_path: true,
            auto_fill: true,
            outline_width_pressure: true,
            fill_pressure_alpha: true,
        }
    }
}
