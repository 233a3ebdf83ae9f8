//! Geometry and output configuration for a crop session.
//!
//! Defaults reproduce the event-card crop window: a 28rem square display
//! surface and a 23rem x 14rem output, both at 16px per rem.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::FilterType;
use crate::encode::DEFAULT_JPEG_QUALITY;

/// Side length of the square display surface in pixels.
pub const DEFAULT_CONTAINER_SIZE: u32 = 448;
/// Output width in pixels.
pub const DEFAULT_TARGET_WIDTH: u32 = 368;
/// Output height in pixels.
pub const DEFAULT_TARGET_HEIGHT: u32 = 224;
/// Width of the selection when a source image first loads.
pub const DEFAULT_INITIAL_SELECTION_WIDTH: u32 = 250;
/// Thickness of the selection frame, excluded when sampling.
pub const DEFAULT_BORDER_WIDTH: u32 = 1;
/// Side length of the square resize handle at the selection's top-left.
pub const DEFAULT_HANDLE_SIZE: u32 = 10;

/// Errors raised by [`CropConfig::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Container size must be non-zero")]
    ZeroContainer,

    #[error("Target dimensions must be non-zero, got {width}x{height}")]
    ZeroTarget { width: u32, height: u32 },

    #[error("Initial selection width must be non-zero")]
    ZeroInitialWidth,

    #[error("Container size {0} exceeds the signed pixel coordinate range")]
    ContainerTooLarge(u32),

    #[error("Border width {border} exceeds container size {container}")]
    BorderTooLarge { border: u32, container: u32 },

    #[error("Handle size {handle} exceeds container size {container}")]
    HandleTooLarge { handle: u32, container: u32 },

    #[error("JPEG quality must be within 1-100, got {0}")]
    InvalidQuality(u8),
}

/// Fixed geometry constants of one crop session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropConfig {
    /// Side length of the square display surface.
    pub container_size: u32,
    /// Output raster width.
    pub target_width: u32,
    /// Output raster height.
    pub target_height: u32,
    /// Selection width when the source first loads.
    pub initial_selection_width: u32,
    /// Selection frame thickness.
    pub border_width: u32,
    /// Resize handle side length.
    pub handle_size: u32,
    /// JPEG quality (1-100).
    pub jpeg_quality: u8,
    /// Resampling filter for both display scaling and output rendering.
    pub filter: FilterType,
}

impl Default for CropConfig {
    fn default() -> Self {
        Self {
            container_size: DEFAULT_CONTAINER_SIZE,
            target_width: DEFAULT_TARGET_WIDTH,
            target_height: DEFAULT_TARGET_HEIGHT,
            initial_selection_width: DEFAULT_INITIAL_SELECTION_WIDTH,
            border_width: DEFAULT_BORDER_WIDTH,
            handle_size: DEFAULT_HANDLE_SIZE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            filter: FilterType::Bilinear,
        }
    }
}

impl CropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width over height of the output, which the selection must match.
    pub fn aspect_ratio(&self) -> f64 {
        self.target_width as f64 / self.target_height as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_size == 0 {
            return Err(ConfigError::ZeroContainer);
        }
        if self.container_size > i32::MAX as u32 {
            return Err(ConfigError::ContainerTooLarge(self.container_size));
        }
        if self.border_width > self.container_size {
            return Err(ConfigError::BorderTooLarge {
                border: self.border_width,
                container: self.container_size,
            });
        }
        if self.handle_size > self.container_size {
            return Err(ConfigError::HandleTooLarge {
                handle: self.handle_size,
                container: self.container_size,
            });
        }
        if self.target_width == 0 || self.target_height == 0 {
            return Err(ConfigError::ZeroTarget {
                width: self.target_width,
                height: self.target_height,
            });
        }
        if self.initial_selection_width == 0 {
            return Err(ConfigError::ZeroInitialWidth);
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ConfigError::InvalidQuality(self.jpeg_quality));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(CropConfig::new().validate(), Ok(()));
    }

    #[test]
    fn test_default_aspect_ratio_is_23_by_14() {
        let config = CropConfig::default();
        assert!((config.aspect_ratio() - 23.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_container_rejected() {
        let mut config = CropConfig::default();
        config.container_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroContainer));
    }

    #[test]
    fn test_zero_target_rejected() {
        let mut config = CropConfig::default();
        config.target_height = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroTarget {
                width: 368,
                height: 0
            })
        );
    }

    #[test]
    fn test_zero_initial_width_rejected() {
        let mut config = CropConfig::default();
        config.initial_selection_width = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroInitialWidth));
    }

    #[test]
    fn test_oversized_container_rejected() {
        let mut config = CropConfig::default();
        config.container_size = u32::MAX;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ContainerTooLarge(u32::MAX))
        );
    }

    #[test]
    fn test_border_larger_than_container_rejected() {
        let mut config = CropConfig::default();
        config.border_width = u32::MAX;
        assert_eq!(
            config.validate(),
            Err(ConfigError::BorderTooLarge {
                border: u32::MAX,
                container: 448
            })
        );

        config.border_width = 448;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_handle_larger_than_container_rejected() {
        let mut config = CropConfig::default();
        config.handle_size = 3_000_000_000;
        assert_eq!(
            config.validate(),
            Err(ConfigError::HandleTooLarge {
                handle: 3_000_000_000,
                container: 448
            })
        );
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        let mut config = CropConfig::default();
        config.jpeg_quality = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidQuality(0)));

        config.jpeg_quality = 101;
        assert_eq!(config.validate(), Err(ConfigError::InvalidQuality(101)));
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ZeroTarget {
            width: 0,
            height: 224,
        };
        assert_eq!(err.to_string(), "Target dimensions must be non-zero, got 0x224");
    }
}
