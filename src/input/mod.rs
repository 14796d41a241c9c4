//! Pointer input boundary
//!
//! The brush core has no dependency on any windowing or event-callback
//! mechanism; whatever owns the event loop translates its pointer events
//! into [`PointerEvent`] values and feeds them to a [`BrushTool`].

mod controller;

pub use controller::BrushTool;

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Instant;

/// A raw pointer sample from the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawInputPoint {
    pub x: f32,
    pub y: f32,
    /// Nominally 0-1; devices without pressure report 1.0
    pub pressure: f32,
    /// Monotonic sample time in milliseconds
    pub timestamp_ms: f64,
}

impl RawInputPoint {
    pub fn new(x: f32, y: f32, pressure: f32) -> Self {
        Self {
            x,
            y,
            pressure,
            timestamp_ms: current_time_ms(),
        }
    }
}

/// Pointer events the host forwards to the brush tool
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Pointer pressed: begins a stroke
    Down { x: f32, y: f32, pressure: f32 },
    /// Pointer moved while pressed: extends the stroke
    Move { x: f32, y: f32, pressure: f32 },
    /// Pointer released: finalizes and renders the stroke
    Up { x: f32, y: f32, pressure: f32 },
}

impl PointerEvent {
    /// The sample carried by the event, timestamped on extraction
    pub fn point(&self) -> RawInputPoint {
        match *self {
            PointerEvent::Down { x, y, pressure }
            | PointerEvent::Move { x, y, pressure }
            | PointerEvent::Up { x, y, pressure } => RawInputPoint::new(x, y, pressure),
        }
    }
}

/// Pressure curve types for mapping raw pressure to output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureCurve {
    /// Linear mapping (1:1)
    Linear,
    /// Soft curve (easier light pressure)
    Soft,
    /// Hard curve (requires more pressure)
    Hard,
    /// S-curve (soft at extremes, linear in middle)
    SCurve,
}

impl PressureCurve {
    /// Apply the pressure curve to a normalized pressure value (0.0 - 1.0)
    pub fn apply(&self, pressure: f32) -> f32 {
        let p = pressure.clamp(0.0, 1.0);
        match self {
            PressureCurve::Linear => p,
            PressureCurve::Soft => p.sqrt(),
            PressureCurve::Hard => p * p,
            PressureCurve::SCurve => {
                // S-curve using smoothstep
                p * p * (3.0 - 2.0 * p)
            }
        }
    }
}

/// Milliseconds since the first call, from a monotonic clock
pub fn current_time_ms() -> f64 {
    static EPOCH: OnceLock<Instant> = OnceLock::new();
    let epoch = EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_secs_f64() * 1000.0
}
