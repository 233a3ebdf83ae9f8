//! Cropwindow Core - Fixed-aspect image cropping engine
//!
//! This crate scales a source image into a square container, lets a pointer
//! drag and resize an aspect-locked selection over it, and composites the
//! selection into a fixed-size JPEG.

pub mod compositor;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod scaling;
pub mod session;
pub mod transform;

pub use compositor::{composite_crop, render_crop, CroppedImage};
pub use config::{ConfigError, CropConfig};
pub use decode::{decode_source, DecodeError, DecodedImage, FilterType};
pub use encode::{encode_jpeg, EncodeError};
pub use error::CropError;
pub use geometry::{ImageBounds, SelectionRegion};
pub use gesture::{GestureState, PointerPosition, PointerTarget, Propagation};
pub use scaling::{scale_to_container, ScaledImage};
pub use session::CropWindow;
