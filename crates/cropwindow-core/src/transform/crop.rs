//! Pixel-rectangle extraction.
//!
//! Copies a rectangle of the scaled raster into a new raster, row by row.
//! Rectangles that reach past the raster are clipped to it.

use crate::decode::DecodedImage;

/// A rectangle of whole pixels in raster coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clip to a `width x height` raster, keeping at least one pixel.
    pub fn clipped_to(self, width: u32, height: u32) -> Self {
        let x = self.x.min(width.saturating_sub(1));
        let y = self.y.min(height.saturating_sub(1));
        let right = x.saturating_add(self.width).min(width);
        let bottom = y.saturating_add(self.height).min(height);

        Self {
            x,
            y,
            width: right.saturating_sub(x).max(1),
            height: bottom.saturating_sub(y).max(1),
        }
    }
}

/// Extract `rect` from `image`, clipped to the image bounds.
///
/// Minimum output dimension is 1x1 pixels.
///
/// # Panics
///
/// Panics if `image.pixels` is shorter than its dimensions require. Callers
/// holding unchecked input go through `compositor::render_crop`, which
/// rejects such images first.
pub fn extract_region(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    let rect = rect.clipped_to(image.width, image.height);

    // Fast path: the whole raster
    if rect == PixelRect::new(0, 0, image.width, image.height) {
        return image.clone();
    }

    let row_bytes = (rect.width * 3) as usize;
    let mut output = Vec::with_capacity(row_bytes * rect.height as usize);

    for y in 0..rect.height {
        let src_row = ((rect.y + y) * image.width + rect.x) as usize * 3;
        output.extend_from_slice(&image.pixels[src_row..src_row + row_bytes]);
    }

    DecodedImage {
        width: rect.width,
        height: rect.height,
        pixels: output,
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output dimensions are positive and within the source.
        #[test]
        fn prop_output_bounded(
            (width, height) in (1u32..=60, 1u32..=60),
            (x, y, w, h) in (0u32..=80, 0u32..=80, 0u32..=80, 0u32..=80),
        ) {
            let img = DecodedImage::new(width, height, vec![9u8; (width * height * 3) as usize]);
            let result = extract_region(&img, PixelRect::new(x, y, w, h));

            prop_assert!(result.width >= 1 && result.width <= width);
            prop_assert!(result.height >= 1 && result.height <= height);
            prop_assert_eq!(result.pixels.len(), (result.width * result.height * 3) as usize);
        }

        /// Property: In-bounds extraction copies the exact source pixels.
        #[test]
        fn prop_in_bounds_copy_is_exact(
            (x, y) in (0u32..20, 0u32..20),
            (w, h) in (1u32..=20, 1u32..=20),
        ) {
            let mut pixels = Vec::new();
            for py in 0..40u32 {
                for px in 0..40u32 {
                    pixels.extend_from_slice(&[px as u8, py as u8, 0]);
                }
            }
            let img = DecodedImage::new(40, 40, pixels);
            let result = extract_region(&img, PixelRect::new(x, y, w, h));

            prop_assert_eq!(result.dimensions(), (w, h));
            let last = result.pixels.len() - 3;
            prop_assert_eq!(&result.pixels[0..2], &[x as u8, y as u8]);
            prop_assert_eq!(&result.pixels[last..last + 2], &[(x + w - 1) as u8, (y + h - 1) as u8]);
        }
    }
}
