//! Brush core - path model, smoothing, settings and stroke capture

pub mod path;
pub mod settings;
pub mod smoothing;
pub mod stroke;

pub use path::{Path, PathPoint};
pub use settings::{BrushSettings, FillMode};
pub use smoothing::smooth_path;
pub use stroke::OutlineFillBrush;
