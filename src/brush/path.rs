//! Path model - sampled freehand stroke geometry
//!
//! A [`Path`] is an ordered sequence of [`PathPoint`]s captured from pointer
//! input. Points carry position, pressure and a monotonic timestamp. Pressure
//! is stored exactly as supplied by the input device; it is not clamped here.

/// A single sampled point of a freehand stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    /// X position in surface coordinates
    pub x: f32,
    /// Y position in surface coordinates
    pub y: f32,
    /// Input pressure, nominally 0-1 (passed through unclamped)
    pub pressure: f32,
    /// Monotonic capture time in milliseconds
    pub timestamp_ms: f64,
}

impl PathPoint {
    pub fn new(x: f32, y: f32, pressure: f32, timestamp_ms: f64) -> Self {
        Self {
            x,
            y,
            pressure,
            timestamp_ms,
        }
    }
}

/// Ordered point sequence representing one stroke
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<PathPoint>,
}

impl Path {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<PathPoint>) -> Self {
        Self { points }
    }

    pub fn push(&mut self, point: PathPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn first(&self) -> Option<&PathPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PathPoint> {
        self.points.last()
    }

    pub fn points(&self) -> &[PathPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathPoint> {
        self.points.iter()
    }

    /// Iterate over consecutive point pairs (the stroke's segments)
    pub fn segments(&self) -> impl Iterator<Item = (&PathPoint, &PathPoint)> {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Append a copy of the first point, closing the path
    ///
    /// No-op on an empty path.
    pub fn close(&mut self) {
        if let Some(first) = self.points.first().copied() {
            self.points.push(first);
        }
    }

    /// Whether the first and last points coincide in position
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                first.x == last.x && first.y == last.y
            }
            _ => false,
        }
    }
}

impl FromIterator<PathPoint> for Path {
    fn from_iter<I: IntoIterator<Item = PathPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
