//! Resizing the selection from its top-left handle.
//!
//! # Algorithm
//!
//! The output aspect ratio is fixed, so only the horizontal pointer delta is
//! independent. For a horizontal delta `dx` from the gesture origin:
//!
//! ```text
//! width'  = width - dx
//! height' = round(width' / aspect)
//! dy      = height - height'
//! left'   = left + dx - border
//! top'    = top + dy
//! ```
//!
//! Negative `dx` grows the region, positive `dx` shrinks it. A candidate that
//! crosses any bound is dropped and the region keeps its current value.
//! Clamping each axis separately, as dragging does, would break the aspect
//! ratio.

use super::{InteractionSession, PointerPosition};
use crate::geometry::{ImageBounds, SelectionRegion};

/// Converts pointer deltas into an aspect-locked resize of the selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeController {
    bounds: ImageBounds,
    aspect_ratio: f64,
    border: u32,
}

impl ResizeController {
    pub fn new(bounds: ImageBounds, aspect_ratio: f64, border: u32) -> Self {
        Self {
            bounds,
            aspect_ratio,
            border,
        }
    }

    /// Record the pointer, the region and the permitted resize range.
    pub fn begin(&self, region: SelectionRegion, origin: PointerPosition) -> InteractionSession {
        InteractionSession {
            origin,
            snapshot: region,
            range: region.resize_range(self.border),
        }
    }

    /// Region after the pointer has moved to `position`, or `None` when the
    /// resize would leave the image or collapse the region.
    ///
    /// The vertical pointer movement is ignored.
    pub fn update(
        &self,
        session: &InteractionSession,
        position: PointerPosition,
    ) -> Option<SelectionRegion> {
        let (dx, _) = session.delta_to(position);
        session.snapshot.resize_within(
            dx,
            &session.range,
            self.bounds,
            self.aspect_ratio,
            self.border,
        )
    }
}
