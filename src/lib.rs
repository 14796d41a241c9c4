//! Outline-fill brush engine
//!
//! Freehand vector-path capture with smoothing, plus a CPU rasterization
//! engine: scan-line polygon filling, pressure-weighted stamped-circle
//! stroking and alpha compositing onto a raster [`Surface`].
//!
//! The crate is the core of a painting-application plugin; the host owns
//! windows, dialogs and the event loop, and drives this engine through
//! [`input::PointerEvent`]s (or the [`OutlineFillBrush`] methods directly).
//!
//! ```
//! use outline_fill_brush::{BrushTool, PixelBuffer, PointerEvent};
//!
//! let mut surface = PixelBuffer::new(64, 64);
//! let mut tool = BrushTool::new();
//! tool.activate();
//!
//! tool.handle_event(PointerEvent::Down { x: 10.0, y: 10.0, pressure: 1.0 }, &mut surface);
//! tool.handle_event(PointerEvent::Move { x: 50.0, y: 10.0, pressure: 0.8 }, &mut surface);
//! tool.handle_event(PointerEvent::Move { x: 50.0, y: 50.0, pressure: 0.8 }, &mut surface);
//! let dirty = tool.handle_event(PointerEvent::Up { x: 10.0, y: 50.0, pressure: 0.5 }, &mut surface);
//! assert!(!dirty.is_empty());
//! ```

pub mod brush;
pub mod input;
pub mod render;
pub mod surface;

pub use brush::{BrushSettings, FillMode, OutlineFillBrush, Path, PathPoint};
pub use input::{BrushTool, PointerEvent, PressureCurve, RawInputPoint};
pub use render::{render_brush, render_fill, render_outline};
pub use surface::{PixelBuffer, Rect, Rgba, Surface, SurfaceError};
