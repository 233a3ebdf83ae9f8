//! Session-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::decode::DecodeError;
use crate::encode::EncodeError;

/// Errors surfaced by a crop session.
#[derive(Debug, Error)]
pub enum CropError {
    /// A crop was requested before any source image finished loading.
    #[error("No source image is loaded; crop is unavailable until loading completes")]
    NotReady,

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The source image could not be decoded or resampled.
    #[error("Failed to load source image: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}
