//! Exact-dimension resampling.
//!
//! Wraps the `image` crate's resize so that both the display scaling and the
//! crop compositor go through one code path.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// The aspect ratio of the input is not preserved; callers compute the target
/// dimensions themselves.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if a target dimension is zero and
/// `DecodeError::CorruptedFile` if the pixel buffer doesn't match the
/// declared dimensions.
pub fn resize(
    image: &DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidFormat);
    }
    if !image.has_valid_buffer() {
        return Err(DecodeError::CorruptedFile(format!(
            "Pixel buffer holds {} bytes, expected {} for {}x{}",
            image.pixels.len(),
            (image.width as usize) * (image.height as usize) * 3,
            image.width,
            image.height
        )));
    }

    // Fast path: if dimensions match, just clone
    if image.width == width && image.height == height {
        return Ok(image.clone());
    }

    let rgb_image = image
        .to_rgb_image()
        .ok_or_else(|| DecodeError::CorruptedFile("Failed to create RgbImage".to_string()))?;

    let resized = image::imageops::resize(&rgb_image, width, height, filter.to_image_filter());

    Ok(DecodedImage::from_rgb_image(resized))
}
