//! Raster surface abstraction
//!
//! The brush engine renders onto any target implementing [`Surface`]. A
//! concrete in-memory implementation is provided by [`PixelBuffer`] for
//! hosts and tests that do not bring their own raster backend.

mod pixel_buffer;

pub use pixel_buffer::{PixelBuffer, SurfaceError};

use serde::{Deserialize, Serialize};

/// RGBA color with straight (non-premultiplied) alpha, channels in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black
    pub const TRANSPARENT: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Opaque black
    pub const BLACK: Rgba = Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Opaque white
    pub const WHITE: Rgba = Rgba {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    pub fn to_rgba_u8(&self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
            (self.a.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }
}

/// A simple rectangle for dirty region tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn empty() -> Self {
        Self {
            left: i32::MAX,
            top: i32::MAX,
            right: i32::MIN,
            bottom: i32::MIN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.top >= self.bottom
    }

    pub fn expand(&mut self, x: i32, y: i32, radius: i32) {
        self.left = self.left.min(x - radius);
        self.top = self.top.min(y - radius);
        self.right = self.right.max(x + radius + 1);
        self.bottom = self.bottom.max(y + radius + 1);
    }

    pub fn union(&mut self, other: &Rect) {
        if other.is_empty() {
            return;
        }
        self.left = self.left.min(other.left);
        self.top = self.top.min(other.top);
        self.right = self.right.max(other.right);
        self.bottom = self.bottom.max(other.bottom);
    }

    pub fn clamp_to(&mut self, width: u32, height: u32) {
        self.left = self.left.max(0);
        self.top = self.top.max(0);
        self.right = self.right.min(width as i32);
        self.bottom = self.bottom.min(height as i32);
    }

    pub fn width(&self) -> i32 {
        (self.right - self.left).max(0)
    }

    pub fn height(&self) -> i32 {
        (self.bottom - self.top).max(0)
    }
}

/// Raster target the brush engine renders onto
///
/// Implementations must tolerate out-of-range access: reads outside
/// `[0,width) x [0,height)` return transparent, writes outside are dropped.
/// The render code bounds-checks before every access anyway, so a panic-free
/// implementation never sees out-of-range coordinates in practice.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Read the pixel at the given coordinates
    fn pixel(&self, x: u32, y: u32) -> Rgba;

    /// Overwrite the pixel at the given coordinates
    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba);
}
