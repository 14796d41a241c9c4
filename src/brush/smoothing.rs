//! Path smoothing - fixed 1-2-1 binomial kernel
//!
//! A single non-iterative pass of local weighted averaging over the interior
//! points of a path. Cheap enough to run once per stroke end without any
//! perceptible latency, and strong enough to take the jitter out of raw
//! pointer input.

use super::path::{Path, PathPoint};

/// Smooth a path with a 1-2-1 weighted average over interior points
///
/// Endpoints are passed through unmodified, as are pressure and timestamp
/// of every point. Paths with fewer than 3 points are returned as-is.
/// The output always has the same length as the input.
pub fn smooth_path(path: &Path) -> Path {
    let points = path.points();
    if points.len() < 3 {
        return path.clone();
    }

    let mut smoothed = Vec::with_capacity(points.len());
    for i in 0..points.len() {
        if i == 0 || i == points.len() - 1 {
            smoothed.push(points[i]);
        } else {
            let prev = points[i - 1];
            let curr = points[i];
            let next = points[i + 1];

            smoothed.push(PathPoint {
                x: (prev.x + curr.x * 2.0 + next.x) / 4.0,
                y: (prev.y + curr.y * 2.0 + next.y) / 4.0,
                pressure: curr.pressure,
                timestamp_ms: curr.timestamp_ms,
            });
        }
    }

    Path::from_points(smoothed)
}
