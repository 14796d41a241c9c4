//! Alpha compositing for brush rendering
//!
//! Straight-alpha "over" blending where the effective blend weight is the
//! foreground alpha multiplied by an extra opacity factor.

use crate::surface::{Rgba, Surface};

/// Composite `fg` over `bg` at the given opacity
///
/// The blend weight is `fg.a * opacity`; the result alpha is
/// `bg.a * (1 - weight) + weight`.
#[inline]
pub fn blend_over(bg: Rgba, fg: Rgba, opacity: f32) -> Rgba {
    let alpha = fg.a * opacity;
    let inv_alpha = 1.0 - alpha;
    Rgba {
        r: bg.r * inv_alpha + fg.r * alpha,
        g: bg.g * inv_alpha + fg.g * alpha,
        b: bg.b * inv_alpha + fg.b * alpha,
        a: bg.a * inv_alpha + alpha,
    }
}

/// Blend a color onto a single surface pixel
///
/// Out-of-bounds coordinates are skipped; a pixel write never fails the
/// surrounding render operation.
#[inline]
pub fn blend_pixel<S: Surface>(surface: &mut S, x: i32, y: i32, fg: Rgba, opacity: f32) {
    if x < 0 || y < 0 || x >= surface.width() as i32 || y >= surface.height() as i32 {
        return;
    }
    let (ux, uy) = (x as u32, y as u32);
    let bg = surface.pixel(ux, uy);
    surface.set_pixel(ux, uy, blend_over(bg, fg, opacity));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelBuffer;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_blend_opacity_zero_is_identity() {
        let bg = Rgba::new(0.2, 0.4, 0.6, 0.8);
        let fg = Rgba::new(1.0, 0.0, 0.0, 1.0);

        let result = blend_over(bg, fg, 0.0);
        assert_eq!(result, bg);
    }

    #[test]
    fn test_blend_opaque_full_opacity_replaces() {
        let bg = Rgba::new(0.0, 1.0, 0.0, 1.0);
        let fg = Rgba::new(1.0, 0.0, 0.0, 1.0);

        let result = blend_over(bg, fg, 1.0);
        assert!(approx_eq(result.r, 1.0));
        assert!(approx_eq(result.g, 0.0));
        assert!(approx_eq(result.b, 0.0));
        assert!(approx_eq(result.a, 1.0));
    }

    #[test]
    fn test_blend_half_alpha() {
        let bg = Rgba::new(0.0, 1.0, 0.0, 1.0);
        let fg = Rgba::new(1.0, 0.0, 0.0, 0.5);

        // weight = 0.5 * 1.0 = 0.5
        let result = blend_over(bg, fg, 1.0);
        assert!(approx_eq(result.r, 0.5));
        assert!(approx_eq(result.g, 0.5));
        assert!(approx_eq(result.a, 1.0));
    }

    #[test]
    fn test_blend_alpha_accumulates_over_transparent() {
        let bg = Rgba::TRANSPARENT;
        let fg = Rgba::new(1.0, 1.0, 1.0, 1.0);

        let result = blend_over(bg, fg, 0.25);
        assert!(approx_eq(result.a, 0.25));
        assert!(approx_eq(result.r, 0.25));
    }

    #[test]
    fn test_blend_pixel_out_of_bounds_skipped() {
        let mut buffer = PixelBuffer::new(4, 4);
        blend_pixel(&mut buffer, -1, 0, Rgba::WHITE, 1.0);
        blend_pixel(&mut buffer, 0, 4, Rgba::WHITE, 1.0);
        blend_pixel(&mut buffer, 100, 100, Rgba::WHITE, 1.0);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(buffer.pixel(x, y), Rgba::TRANSPARENT);
            }
        }
    }

    #[test]
    fn test_blend_pixel_writes_in_bounds() {
        let mut buffer = PixelBuffer::new(4, 4);
        blend_pixel(&mut buffer, 2, 3, Rgba::WHITE, 1.0);
        assert!(approx_eq(buffer.pixel(2, 3).a, 1.0));
    }
}
