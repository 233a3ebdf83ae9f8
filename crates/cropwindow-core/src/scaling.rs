//! Fitting the source image into the square display surface.
//!
//! The source is scaled uniformly by
//! `ratio = min(container / src_width, container / src_height)`, so it fits
//! the surface on both axes and touches it on the constraining axis. Sources
//! smaller than the surface are scaled up.

use crate::decode::{resize, DecodeError, DecodedImage, FilterType};
use crate::geometry::ImageBounds;

/// Uniform scale factor that fits `(src_width, src_height)` into a square of
/// side `container_size`.
///
/// Returns `0.0` for a zero-sized source.
pub fn compute_scale_ratio(src_width: u32, src_height: u32, container_size: u32) -> f64 {
    if src_width == 0 || src_height == 0 {
        return 0.0;
    }

    let h_ratio = container_size as f64 / src_width as f64;
    let v_ratio = container_size as f64 / src_height as f64;
    h_ratio.min(v_ratio)
}

/// Whole-pixel dimensions of the scaled image.
///
/// Each axis is rounded and kept within `1..=container_size`, so the binding
/// axis lands exactly on the container size despite floating-point error.
pub fn scaled_dimensions(src_width: u32, src_height: u32, container_size: u32) -> (u32, u32) {
    if src_width == 0 || src_height == 0 || container_size == 0 {
        return (0, 0);
    }

    let ratio = compute_scale_ratio(src_width, src_height, container_size);
    let scale = |side: u32| ((side as f64 * ratio).round() as u32).clamp(1, container_size);
    (scale(src_width), scale(src_height))
}

/// The source image resampled for interactive display.
#[derive(Debug, Clone)]
pub struct ScaledImage {
    /// Resampled raster, exactly `bounds()` in size.
    pub image: DecodedImage,
    /// Scale factor applied to the source.
    pub ratio: f64,
    /// Native source width.
    pub source_width: u32,
    /// Native source height.
    pub source_height: u32,
}

impl ScaledImage {
    pub fn width(&self) -> u32 {
        self.image.width
    }

    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// Coordinate space of the selection.
    pub fn bounds(&self) -> ImageBounds {
        ImageBounds::new(self.image.width, self.image.height)
    }
}

/// Resample `source` to fit a `container_size` square, preserving its aspect.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` for a zero-sized source or container,
/// and `DecodeError::CorruptedFile` when the pixel buffer doesn't match the
/// source dimensions.
pub fn scale_to_container(
    source: &DecodedImage,
    container_size: u32,
    filter: FilterType,
) -> Result<ScaledImage, DecodeError> {
    if source.is_empty() || container_size == 0 {
        return Err(DecodeError::EmptyImage {
            width: source.width,
            height: source.height,
        });
    }

    let ratio = compute_scale_ratio(source.width, source.height, container_size);
    let (width, height) = scaled_dimensions(source.width, source.height, container_size);
    let image = resize(source, width, height, filter)?;

    Ok(ScaledImage {
        image,
        ratio,
        source_width: source.width,
        source_height: source.height,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
