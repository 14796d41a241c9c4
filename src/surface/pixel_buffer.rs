//! PixelBuffer - owned in-memory raster surface
//!
//! A straightforward `Vec<Rgba>` backing store implementing [`Surface`],
//! with conversions to and from raw RGBA bytes and `image::RgbaImage` so
//! hosts and tests can inspect or export render results.

use super::{Rgba, Surface};
use image::RgbaImage;
use thiserror::Error;

/// Errors from constructing a surface out of external pixel data
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("pixel data length {actual} does not match {width}x{height} RGBA ({expected} bytes)")]
    DataLengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// Owned RGBA raster surface
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<Rgba>,
}

impl PixelBuffer {
    /// Create a transparent buffer with given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![Rgba::TRANSPARENT; size],
        }
    }

    /// Reset every pixel to transparent
    pub fn clear(&mut self) {
        for pixel in &mut self.data {
            *pixel = Rgba::TRANSPARENT;
        }
    }

    /// Overwrite every pixel with a single color
    pub fn fill(&mut self, color: Rgba) {
        for pixel in &mut self.data {
            *pixel = color;
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Build a buffer from tightly packed RGBA bytes (row-major)
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self, SurfaceError> {
        let expected = (width * height) as usize * 4;
        if bytes.len() != expected {
            return Err(SurfaceError::DataLengthMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| Rgba::from_rgba_u8(px[0], px[1], px[2], px[3]))
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Export as tightly packed RGBA bytes (row-major)
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for pixel in &self.data {
            bytes.extend_from_slice(&pixel.to_rgba_u8());
        }
        bytes
    }

    /// Export as an `image::RgbaImage`
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width, self.height);
        for (x, y, px) in img.enumerate_pixels_mut() {
            px.0 = self.pixel(x, y).to_rgba_u8();
        }
        img
    }

    /// Build a buffer from an `image::RgbaImage`
    pub fn from_image(img: &RgbaImage) -> Self {
        let mut buffer = Self::new(img.width(), img.height());
        for (x, y, px) in img.enumerate_pixels() {
            buffer.set_pixel(x, y, Rgba::from_rgba_u8(px.0[0], px.0[1], px.0[2], px.0[3]));
        }
        buffer
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return Rgba::TRANSPARENT;
        }
        let idx = (y * self.width + x) as usize;
        self.data.get(idx).copied().unwrap_or_default()
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) as usize;
        if let Some(px) = self.data.get_mut(idx) {
            *px = color;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = PixelBuffer::new(100, 50);
        assert_eq!(buffer.dimensions(), (100, 50));
        assert_eq!(buffer.pixel(0, 0), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_set_get_pixel() {
        let mut buffer = PixelBuffer::new(10, 10);
        let red = Rgba::new(1.0, 0.0, 0.0, 1.0);
        buffer.set_pixel(3, 4, red);
        assert_eq!(buffer.pixel(3, 4), red);
        assert_eq!(buffer.pixel(4, 3), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_out_of_bounds_access_is_harmless() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.set_pixel(100, 100, Rgba::WHITE);
        assert_eq!(buffer.pixel(100, 100), Rgba::TRANSPARENT);
    }

    #[test]
    fn test_from_rgba_bytes_length_check() {
        let bytes = vec![0u8; 3 * 3 * 4];
        assert!(PixelBuffer::from_rgba_bytes(3, 3, &bytes).is_ok());

        let err = PixelBuffer::from_rgba_bytes(4, 4, &bytes);
        assert!(matches!(
            err,
            Err(SurfaceError::DataLengthMismatch { expected: 64, .. })
        ));
    }

    #[test]
    fn test_bytes_round_trip() -> Result<(), SurfaceError> {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.set_pixel(0, 0, Rgba::from_rgba_u8(255, 0, 0, 255));
        buffer.set_pixel(1, 1, Rgba::from_rgba_u8(0, 255, 0, 128));

        let bytes = buffer.to_rgba_bytes();
        let restored = PixelBuffer::from_rgba_bytes(2, 2, &bytes)?;
        assert_eq!(restored.pixel(0, 0).to_rgba_u8(), [255, 0, 0, 255]);
        assert_eq!(restored.pixel(1, 1).to_rgba_u8(), [0, 255, 0, 128]);
        Ok(())
    }

    #[test]
    fn test_image_conversion() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer.set_pixel(1, 1, Rgba::WHITE);

        let img = buffer.to_image();
        assert_eq!(img.get_pixel(1, 1).0, [255, 255, 255, 255]);

        let restored = PixelBuffer::from_image(&img);
        assert_eq!(restored.pixel(1, 1).to_rgba_u8(), [255, 255, 255, 255]);
    }
}
