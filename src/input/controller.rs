//! BrushTool - event-driven bridge between host input and the brush
//!
//! Plays the role the host-side brush manager plays in a full painting
//! application: while active it turns pointer events into stroke state
//! transitions and renders each finished stroke onto the host's surface.

use super::{PointerEvent, PressureCurve};
use crate::brush::{BrushSettings, OutlineFillBrush};
use crate::render::{render_fill, render_outline};
use crate::surface::{Rect, Surface};

/// Event-driven outline-fill brush tool
pub struct BrushTool {
    brush: OutlineFillBrush,
    active: bool,
    /// Optional pressure mapping applied before points reach the brush.
    /// None preserves raw (unclamped) device pressure.
    pressure_curve: Option<PressureCurve>,
}

impl BrushTool {
    pub fn new() -> Self {
        Self {
            brush: OutlineFillBrush::new(),
            active: false,
            pressure_curve: None,
        }
    }

    pub fn with_settings(settings: BrushSettings) -> Self {
        Self {
            brush: OutlineFillBrush::with_settings(settings),
            active: false,
            pressure_curve: None,
        }
    }

    /// Opt into a pressure curve; curves clamp pressure to 0-1
    pub fn set_pressure_curve(&mut self, curve: Option<PressureCurve>) {
        self.pressure_curve = curve;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn brush(&self) -> &OutlineFillBrush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut OutlineFillBrush {
        &mut self.brush
    }

    /// Start routing pointer events to the brush
    pub fn activate(&mut self) {
        self.active = true;
        tracing::info!("[BrushTool] Activated");
    }

    /// Stop routing pointer events; an in-progress stroke is abandoned
    pub fn deactivate(&mut self) {
        self.active = false;
        tracing::info!("[BrushTool] Deactivated");
    }

    /// Drop every captured path
    pub fn clear(&mut self) {
        self.brush.clear_paths();
    }

    /// Feed one pointer event, rendering onto `surface` when a stroke ends
    ///
    /// Returns the dirty region that was repainted; empty for events that
    /// did not render anything (Down, Move, discarded strokes) and while
    /// the tool is inactive.
    pub fn handle_event<S: Surface>(&mut self, event: PointerEvent, surface: &mut S) -> Rect {
        if !self.active {
            return Rect::empty();
        }

        match event {
            PointerEvent::Down { x, y, pressure } => {
                self.brush.start_stroke(x, y, self.map_pressure(pressure));
                Rect::empty()
            }
            PointerEvent::Move { x, y, pressure } => {
                self.brush.add_point(x, y, self.map_pressure(pressure));
                Rect::empty()
            }
            PointerEvent::Up { x, y, pressure } => {
                self.brush.add_point(x, y, self.map_pressure(pressure));
                if self.brush.end_stroke() {
                    self.render_last_path(surface)
                } else {
                    Rect::empty()
                }
            }
        }
    }

    fn map_pressure(&self, pressure: f32) -> f32 {
        match self.pressure_curve {
            Some(curve) => curve.apply(pressure),
            None => pressure,
        }
    }

    /// Render the most recently completed path, fill first then outline
    fn render_last_path<S: Surface>(&self, surface: &mut S) -> Rect {
        let Some(path) = self.brush.completed_paths().last() else {
            return Rect::empty();
        };

        let settings = self.brush.settings.clone();
        let mut dirty = Rect::empty();
        dirty.union(&render_fill(surface, path, &settings));
        dirty.union(&render_outline(surface, path, &settings));

        tracing::trace!(
            left = dirty.left,
            top = dirty.top,
            right = dirty.right,
            bottom = dirty.bottom,
            "stroke rendered"
        );
        dirty
    }
}

impl Default for BrushTool {
    fn default() -> Self {
        Self::new()
    }
}
