//! Stroke state machine - capture lifecycle of the outline-fill brush
//!
//! Owns the in-progress path while the pointer is down and the list of
//! completed paths afterwards. Finalization smooths the raw input and
//! optionally closes it into a fillable polygon.

use super::path::{Path, PathPoint};
use super::settings::BrushSettings;
use super::smoothing::smooth_path;
use crate::input::current_time_ms;

/// Freehand outline-fill brush
///
/// Single-threaded by contract: the host drives `start_stroke` /
/// `add_point` / `end_stroke` serially from its event loop.
#[derive(Debug, Default)]
pub struct OutlineFillBrush {
    current_path: Path,
    completed_paths: Vec<Path>,
    pub settings: BrushSettings,
    is_drawing: bool,
}

impl OutlineFillBrush {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: BrushSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Whether a stroke capture is in progress
    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    /// Finished strokes, in completion order
    pub fn completed_paths(&self) -> &[Path] {
        &self.completed_paths
    }

    /// Points captured so far for the in-progress stroke
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Begin a new stroke at the given position
    ///
    /// Calling this while already capturing discards the prior in-progress
    /// points and restarts; that reset is intentional, not an error.
    pub fn start_stroke(&mut self, x: f32, y: f32, pressure: f32) {
        self.is_drawing = true;
        self.current_path.clear();
        self.add_point(x, y, pressure);
    }

    /// Append a point to the in-progress stroke
    ///
    /// No-op while idle. Coordinates and pressure are stored as given;
    /// pressure is not clamped to 0-1.
    pub fn add_point(&mut self, x: f32, y: f32, pressure: f32) {
        if !self.is_drawing {
            return;
        }
        self.current_path
            .push(PathPoint::new(x, y, pressure, current_time_ms()));
    }

    /// Finish the in-progress stroke
    ///
    /// Strokes with fewer than 2 points are discarded. Otherwise the path
    /// is smoothed, closed when `settings.close_path` is set and it has
    /// more than 2 points, and moved into the completed list.
    ///
    /// Returns true when a path was finalized.
    pub fn end_stroke(&mut self) -> bool {
        if !self.is_drawing || self.current_path.len() < 2 {
            self.current_path.clear();
            self.is_drawing = false;
            return false;
        }

        let mut smoothed = smooth_path(&self.current_path);

        if self.settings.close_path && smoothed.len() > 2 {
            smoothed.close();
        }

        tracing::debug!(points = smoothed.len(), "stroke finalized");

        self.completed_paths.push(smoothed);
        self.current_path.clear();
        self.is_drawing = false;
        true
    }

    /// Discard the in-progress stroke and all completed paths
    pub fn clear_paths(&mut self) {
        self.current_path.clear();
        self.completed_paths.clear();
        self.is_drawing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let brush = OutlineFillBrush::new();
        assert!(!brush.is_drawing());
        assert!(brush.current_path().is_empty());
        assert!(brush.completed_paths().is_empty());
    }

    #[test]
    fn test_add_point_while_idle_is_noop() {
        let mut brush = OutlineFillBrush::new();
        brush.add_point(10.0, 10.0, 1.0);
        assert!(brush.current_path().is_empty());
    }

    #[test]
    fn test_single_point_stroke_discarded() {
        let mut brush = OutlineFillBrush::new();
        brush.start_stroke(5.0, 5.0, 1.0);
        assert!(brush.is_drawing());

        assert!(!brush.end_stroke());
        assert!(!brush.is_drawing());
        assert!(brush.current_path().is_empty());
        assert!(brush.completed_paths().is_empty());
    }

    #[test]
    fn test_end_stroke_while_idle_is_noop() {
        let mut brush = OutlineFillBrush::new();
        assert!(!brush.end_stroke());
        assert!(brush.completed_paths().is_empty());
    }

    #[test]
    fn test_two_point_stroke_completes() {
        let mut brush = OutlineFillBrush::new();
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(10.0, 0.0, 1.0);

        assert!(brush.end_stroke());
        assert_eq!(brush.completed_paths().len(), 1);
        // 2 points: smoothing is identity, and close_path only applies
        // to paths longer than 2 points
        assert_eq!(brush.completed_paths()[0].len(), 2);
    }

    #[test]
    fn test_close_path_appends_first_point() {
        let mut brush = OutlineFillBrush::new();
        brush.settings.close_path = true;
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(10.0, 0.0, 1.0);
        brush.add_point(10.0, 10.0, 1.0);
        brush.end_stroke();

        let path = &brush.completed_paths()[0];
        assert_eq!(path.len(), 4);
        assert!(path.is_closed());
    }

    #[test]
    fn test_close_path_disabled() {
        let mut brush = OutlineFillBrush::new();
        brush.settings.close_path = false;
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(10.0, 0.0, 1.0);
        brush.add_point(10.0, 10.0, 1.0);
        brush.end_stroke();

        let path = &brush.completed_paths()[0];
        assert_eq!(path.len(), 3);
        assert!(!path.is_closed());
    }

    #[test]
    fn test_restart_discards_in_progress_points() {
        let mut brush = OutlineFillBrush::new();
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(1.0, 0.0, 1.0);
        brush.add_point(2.0, 0.0, 1.0);

        brush.start_stroke(50.0, 50.0, 1.0);
        assert_eq!(brush.current_path().len(), 1);
        assert_eq!(brush.current_path().first().map(|p| p.x), Some(50.0));
    }

    #[test]
    fn test_completed_path_is_smoothed() {
        let mut brush = OutlineFillBrush::new();
        brush.settings.close_path = false;
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(4.0, 8.0, 1.0);
        brush.add_point(8.0, 0.0, 1.0);
        brush.end_stroke();

        let mid = brush.completed_paths()[0].points()[1];
        assert_eq!(mid.x, 4.0);
        assert_eq!(mid.y, 4.0);
    }

    #[test]
    fn test_clear_paths() {
        let mut brush = OutlineFillBrush::new();
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(10.0, 0.0, 1.0);
        brush.end_stroke();
        assert_eq!(brush.completed_paths().len(), 1);

        // Clear while a new capture is active: both lists empty, idle
        brush.start_stroke(5.0, 5.0, 1.0);
        brush.clear_paths();
        assert!(!brush.is_drawing());
        assert!(brush.current_path().is_empty());
        assert!(brush.completed_paths().is_empty());
    }

    #[test]
    fn test_pressure_passed_through_unclamped() {
        let mut brush = OutlineFillBrush::new();
        brush.start_stroke(0.0, 0.0, 1.7);
        assert_eq!(brush.current_path().points()[0].pressure, 1.7);
    }

    #[test]
    fn test_timestamps_monotonic() {
        let mut brush = OutlineFillBrush::new();
        brush.start_stroke(0.0, 0.0, 1.0);
        brush.add_point(1.0, 0.0, 1.0);
        brush.add_point(2.0, 0.0, 1.0);

        let points = brush.current_path().points();
        assert!(points[0].timestamp_ms <= points[1].timestamp_ms);
        assert!(points[1].timestamp_ms <= points[2].timestamp_ms);
    }
}
