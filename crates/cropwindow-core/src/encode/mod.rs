//! Output encoding for Cropwindow.
//!
//! This module provides functionality for:
//! - Encoding the cropped raster as JPEG with configurable quality
//! - Wrapping the payload as a `data:image/jpeg;base64,...` URL
//!
//! # Examples
//!
//! ```ignore
//! use cropwindow_core::encode::{encode_jpeg, jpeg_data_url};
//!
//! let pixels = vec![128u8; 368 * 224 * 3];
//! let jpeg = encode_jpeg(&pixels, 368, 224, 70).unwrap();
//! let url = jpeg_data_url(&jpeg);
//! ```

mod jpeg;

pub use jpeg::{
    encode_jpeg, encode_jpeg_image, jpeg_data_url, EncodeError, DEFAULT_JPEG_QUALITY,
    JPEG_MIME_TYPE,
};
