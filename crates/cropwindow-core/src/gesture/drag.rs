//! Translating the selection with the pointer.

use super::{InteractionSession, PointerPosition};
use crate::geometry::{ImageBounds, SelectionRegion};

/// Converts pointer deltas into a clamped translation of the selection.
///
/// Any requested delta is applied as far as the image edges allow on each
/// axis independently, so a drag never fails and never leaves the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragController {
    bounds: ImageBounds,
}

impl DragController {
    pub fn new(bounds: ImageBounds) -> Self {
        Self { bounds }
    }

    /// Record the pointer, the region and the permitted translation range.
    pub fn begin(&self, region: SelectionRegion, origin: PointerPosition) -> InteractionSession {
        InteractionSession {
            origin,
            snapshot: region,
            range: region.translation_range(self.bounds),
        }
    }

    /// Region after the pointer has moved to `position`.
    pub fn update(&self, session: &InteractionSession, position: PointerPosition) -> SelectionRegion {
        let (dx, dy) = session.delta_to(position);
        session.snapshot.translate_within(dx, dy, &session.range)
    }
}
