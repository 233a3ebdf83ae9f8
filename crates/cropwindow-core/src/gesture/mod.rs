//! Pointer gestures over the selection region.
//!
//! A gesture is one pointer-down, any number of pointer-moves and a
//! pointer-up. At most one gesture is active at a time, expressed by
//! [`GestureState`]: a drag and a resize can never run together.
//!
//! Both controllers compute the new region from the snapshot taken when the
//! gesture began plus the total pointer delta since then, never from the
//! previous move event. A move event therefore can't accumulate rounding or
//! clamping error.
//!
//! ## Controllers
//!
//! - **Drag** ([`DragController`]): translation, clamped per axis
//! - **Resize** ([`ResizeController`]): aspect-locked scaling anchored at the
//!   bottom-right corner, rejected as a whole when out of bounds

mod drag;
mod resize;

pub use drag::DragController;
pub use resize::ResizeController;

use crate::geometry::{DeltaRange, SelectionRegion};

/// Pointer position in scaled-image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The resize handle outside the selection's top-left corner.
    ResizeHandle,
    /// The selection body, which starts a drag.
    Selection,
    /// Anywhere else.
    Outside,
}

/// Whether the host should keep dispatching an event to ancestor handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// The engine consumed the event.
    Stop,
    /// The engine ignored the event.
    Continue,
}

impl Propagation {
    pub fn is_stopped(self) -> bool {
        self == Propagation::Stop
    }
}

/// State recorded at pointer-down for the lifetime of one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSession {
    /// Pointer position at gesture start.
    pub origin: PointerPosition,
    /// Region at gesture start.
    pub snapshot: SelectionRegion,
    /// Deltas the gesture may apply on each axis. Updates are checked
    /// against this range.
    pub range: DeltaRange,
}

impl InteractionSession {
    /// Whole-pixel pointer delta from the gesture origin to `position`.
    pub fn delta_to(&self, position: PointerPosition) -> (i32, i32) {
        (
            (position.x - self.origin.x).round() as i32,
            (position.y - self.origin.y).round() as i32,
        )
    }
}

/// The single active-gesture slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(InteractionSession),
    Resizing(InteractionSession),
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, GestureState::Resizing(_))
    }

    /// The recorded session of the active gesture, if any.
    pub fn session(&self) -> Option<&InteractionSession> {
        match self {
            GestureState::Idle => None,
            GestureState::Dragging(session) | GestureState::Resizing(session) => Some(session),
        }
    }
}

/// Classify a pointer position against the region and its resize handle.
///
/// The handle is a `handle_size` square sitting diagonally outside the
/// region's top-left corner. It is tested first because it is nested inside
/// the drag target.
pub fn hit_test(
    region: &SelectionRegion,
    position: PointerPosition,
    handle_size: u32,
) -> PointerTarget {
    let handle = SelectionRegion::new(
        region.left - handle_size as i32,
        region.top - handle_size as i32,
        handle_size as i32,
        handle_size as i32,
    );

    if handle_size > 0 && handle.contains(position.x, position.y) {
        PointerTarget::ResizeHandle
    } else if region.contains(position.x, position.y) {
        PointerTarget::Selection
    } else {
        PointerTarget::Outside
    }
}
