//! Producing the fixed-size output from the current selection.
//!
//! The pipeline is: sample the selection out of the scaled raster (skipping
//! the selection frame on the left and top), resample to the target size,
//! encode as JPEG. Nothing here mutates the selection, so compositing can be
//! repeated as often as the caller likes.

use crate::config::CropConfig;
use crate::decode::{resize, DecodeError, DecodedImage};
use crate::encode::{encode_jpeg_image, jpeg_data_url, JPEG_MIME_TYPE};
use crate::error::CropError;
use crate::geometry::SelectionRegion;
use crate::transform::{extract_region, PixelRect};

/// The encoded output of one crop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CroppedImage {
    /// Output width in pixels (always the configured target width).
    pub width: u32,
    /// Output height in pixels (always the configured target height).
    pub height: u32,
    /// JPEG payload.
    pub jpeg: Vec<u8>,
}

impl CroppedImage {
    pub fn mime_type(&self) -> &'static str {
        JPEG_MIME_TYPE
    }

    /// The payload as a `data:image/jpeg;base64,...` URL.
    pub fn to_data_url(&self) -> String {
        jpeg_data_url(&self.jpeg)
    }
}

/// Raster rectangle sampled for `region`, offset inward by the frame.
///
/// The offset can push the rectangle past the raster edge (a selection flush
/// with the bottom-right corner loses one column and one row). The clipped
/// sample is still stretched across the whole target, so the output never has
/// an unfilled margin.
pub fn sample_rect(region: &SelectionRegion, border: u32) -> PixelRect {
    PixelRect::new(
        region.left.max(0) as u32 + border,
        region.top.max(0) as u32 + border,
        region.width.max(1) as u32,
        region.height.max(1) as u32,
    )
}

/// Sample `region` out of `scaled` and resample it to the target size.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if `scaled` has a pixel buffer that
/// doesn't match its dimensions.
pub fn render_crop(
    scaled: &DecodedImage,
    region: &SelectionRegion,
    config: &CropConfig,
) -> Result<DecodedImage, DecodeError> {
    if !scaled.has_valid_buffer() {
        return Err(DecodeError::CorruptedFile(format!(
            "Scaled raster {}x{} holds {} bytes",
            scaled.width,
            scaled.height,
            scaled.pixels.len()
        )));
    }
    let sampled = extract_region(scaled, sample_rect(region, config.border_width));
    resize(
        &sampled,
        config.target_width,
        config.target_height,
        config.filter,
    )
}

/// Render and encode the crop described by `region`.
pub fn composite_crop(
    scaled: &DecodedImage,
    region: &SelectionRegion,
    config: &CropConfig,
) -> Result<CroppedImage, CropError> {
    let rendered = render_crop(scaled, region, config)?;
    let jpeg = encode_jpeg_image(&rendered, config.jpeg_quality)?;

    tracing::debug!(
        left = region.left,
        top = region.top,
        width = region.width,
        height = region.height,
        bytes = jpeg.len(),
        "composited crop"
    );

    Ok(CroppedImage {
        width: rendered.width,
        height: rendered.height,
        jpeg,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: Output dimensions never depend on the selection size.
        #[test]
        fn prop_output_is_target_size(
            left in 0i32..200,
            top in 0i32..100,
            width in 1i32..=240,
            height in 1i32..=120,
        ) {
            let scaled = DecodedImage::new(448, 224, vec![128u8; 448 * 224 * 3]);
            let region = SelectionRegion::new(left, top, width, height);

            let rendered = render_crop(&scaled, &region, &CropConfig::default()).unwrap();
            prop_assert_eq!(rendered.dimensions(), (368, 224));
        }
    }
}
