//! Raster transforms used by the crop compositor.
//!
//! # Coordinate System
//!
//! - Rectangles are in whole pixels of the raster they are applied to
//! - Origin is top-left corner

mod crop;

pub use crop::{extract_region, PixelRect};
