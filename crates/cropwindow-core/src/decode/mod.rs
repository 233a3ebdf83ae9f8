//! Source image decoding for Cropwindow.
//!
//! This module provides functionality for:
//! - Decoding the persisted source image (JPEG or PNG)
//! - Correcting EXIF orientation so the selection matches what the user sees
//! - Exact-dimension resampling shared by scaling and compositing
//!
//! All operations are synchronous and single-threaded. Fetching the bytes is
//! the caller's concern; decoding runs once they are fully available.
//!
//! # Examples
//!
//! ```ignore
//! use cropwindow_core::decode::decode_source;
//!
//! let bytes = std::fs::read("upload.jpg").unwrap();
//! let image = decode_source(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod resize;
mod source;
mod types;

pub use resize::resize;
pub use source::decode_source;
pub use types::{DecodeError, DecodedImage, FilterType, Orientation};
