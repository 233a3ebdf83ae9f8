//! Selection rectangle geometry in scaled-image coordinates.
//!
//! A [`SelectionRegion`] is plain data. Its invariants are relative to the
//! [`ImageBounds`] of the scaled image it sits on:
//!
//! - `0 <= left`, `0 <= top`
//! - `left + width <= bounds.width`, `top + height <= bounds.height`
//! - `width > 0`, `height > 0`
//! - `height == round(width / aspect_ratio)`
//!
//! The only ways to derive a new region are [`SelectionRegion::clamped_translate`]
//! and [`SelectionRegion::clamped_resize`]. Translation clamps each axis
//! independently. Resizing couples the axes through the aspect ratio, so it
//! either applies the full delta or nothing.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the scaled image
//! - Positive x is rightward, positive y is downward
//! - Values are whole pixels, signed so that deltas share the type

use serde::{Deserialize, Serialize};

/// Dimensions of the scaled image a selection lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBounds {
    pub width: u32,
    pub height: u32,
}

impl ImageBounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    fn right(self) -> i32 {
        self.width as i32
    }

    #[inline]
    fn bottom(self) -> i32 {
        self.height as i32
    }
}

/// Inclusive range of permitted deltas on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    /// Most negative permitted delta (leftward or upward).
    pub min: i32,
    /// Most positive permitted delta (rightward or downward).
    pub max: i32,
}

impl AxisRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Clamp a requested delta into the range.
    #[inline]
    pub fn clamp(self, delta: i32) -> i32 {
        delta.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(self, delta: i32) -> bool {
        self.min <= delta && delta <= self.max
    }
}

/// Permitted deltas on both axes, captured at the start of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaRange {
    pub horizontal: AxisRange,
    pub vertical: AxisRange,
}

/// Height that matches `width` under `aspect_ratio`, rounded to a whole pixel.
#[inline]
pub fn height_for_width(width: i32, aspect_ratio: f64) -> i32 {
    (width as f64 / aspect_ratio).round() as i32
}

/// The user-manipulated crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRegion {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl SelectionRegion {
    pub fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create the initial selection, flush with the bottom-right corner.
    ///
    /// The height follows from `initial_width` and `aspect_ratio`. When the
    /// requested width doesn't fit the bounds it is reduced to the largest
    /// aspect-correct width that does, and never below one pixel.
    pub fn create(bounds: ImageBounds, initial_width: u32, aspect_ratio: f64) -> Self {
        let max_width_by_height = (bounds.height as f64 * aspect_ratio).floor() as i32;
        let mut width = (initial_width as i32)
            .min(bounds.right())
            .min(max_width_by_height)
            .max(1);
        let mut height = height_for_width(width, aspect_ratio);

        // Rounding the height up can overshoot by a pixel on tall-constrained bounds
        while height > bounds.bottom() && width > 1 {
            width -= 1;
            height = height_for_width(width, aspect_ratio);
        }
        let height = height.clamp(1, bounds.bottom().max(1));

        Self {
            left: bounds.right() - width,
            top: bounds.bottom() - height,
            width,
            height,
        }
    }

    /// Right edge (exclusive), `left + width`.
    #[inline]
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    /// Bottom edge (exclusive), `top + height`.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Whether the region satisfies the positional invariants for `bounds`.
    pub fn fits_within(&self, bounds: ImageBounds) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.width > 0
            && self.height > 0
            && self.right() <= bounds.right()
            && self.bottom() <= bounds.bottom()
    }

    /// Whether the region's height matches its width under `aspect_ratio`.
    pub fn matches_aspect(&self, aspect_ratio: f64) -> bool {
        self.height == height_for_width(self.width, aspect_ratio)
    }

    /// Whether a point lies inside the region.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left as f64
            && x < self.right() as f64
            && y >= self.top as f64
            && y < self.bottom() as f64
    }

    /// Deltas a translation may apply without leaving `bounds`.
    pub fn translation_range(&self, bounds: ImageBounds) -> DeltaRange {
        DeltaRange {
            horizontal: AxisRange::new(-self.left, bounds.right() - self.right()),
            vertical: AxisRange::new(-self.top, bounds.bottom() - self.bottom()),
        }
    }

    /// Deltas a resize may apply.
    ///
    /// Negative deltas grow the region up and to the left, positive deltas
    /// shrink it. Growth stops where the left edge, after reserving
    /// `border` pixels, would cross zero; shrinking stops one pixel short of
    /// an empty region. The vertical range applies to the derived vertical
    /// delta.
    pub fn resize_range(&self, border: u32) -> DeltaRange {
        DeltaRange {
            horizontal: AxisRange::new(border as i32 - self.left, self.width - 1),
            vertical: AxisRange::new(-self.top, self.height - 1),
        }
    }

    /// Translate by `(dx, dy)`, clamping each axis so the region stays inside
    /// `bounds`. Width and height are unchanged.
    pub fn clamped_translate(&self, dx: i32, dy: i32, bounds: ImageBounds) -> Self {
        self.translate_within(dx, dy, &self.translation_range(bounds))
    }

    /// Translate by `(dx, dy)`, clamping each axis into a precomputed `range`.
    pub fn translate_within(&self, dx: i32, dy: i32, range: &DeltaRange) -> Self {
        Self {
            left: self.left + range.horizontal.clamp(dx),
            top: self.top + range.vertical.clamp(dy),
            ..*self
        }
    }

    /// Resize by horizontal delta `dx`, anchored at the bottom-right corner.
    ///
    /// The vertical delta is derived from `dx` through `aspect_ratio`. Returns
    /// `None` when the candidate would break any invariant; there is no
    /// partial application.
    pub fn clamped_resize(
        &self,
        dx: i32,
        bounds: ImageBounds,
        aspect_ratio: f64,
        border: u32,
    ) -> Option<Self> {
        self.resize_within(dx, &self.resize_range(border), bounds, aspect_ratio, border)
    }

    /// Resize by `dx` as [`SelectionRegion::clamped_resize`] does, checking the
    /// deltas against a precomputed `range`.
    ///
    /// The candidate must still fit `bounds`, whatever `range` allows.
    pub fn resize_within(
        &self,
        dx: i32,
        range: &DeltaRange,
        bounds: ImageBounds,
        aspect_ratio: f64,
        border: u32,
    ) -> Option<Self> {
        if !range.horizontal.contains(dx) {
            return None;
        }

        let width = self.width - dx;
        let height = height_for_width(width, aspect_ratio);
        let dy = self.height - height;
        if !range.vertical.contains(dy) {
            return None;
        }

        let candidate = Self {
            left: self.left + dx - border as i32,
            top: self.top + dy,
            width,
            height,
        };
        candidate.fits_within(bounds).then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD_ASPECT: f64 = 23.0 / 14.0;

    fn landscape_bounds() -> ImageBounds {
        ImageBounds::new(448, 224)
    }

    #[test]
    fn test_create_flush_bottom_right() {
        let region = SelectionRegion::create(landscape_bounds(), 250, CARD_ASPECT);

        assert_eq!(region, SelectionRegion::new(198, 72, 250, 152));
        assert_eq!(region.right(), 448);
        assert_eq!(region.bottom(), 224);
    }

    #[test]
    fn test_create_shrinks_to_fit_short_bounds() {
        let bounds = ImageBounds::new(448, 100);
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        assert!(region.fits_within(bounds));
        assert!(region.matches_aspect(CARD_ASPECT));
        assert_eq!(region.bottom(), 100);
        assert_eq!(region.right(), 448);
    }

    #[test]
    fn test_create_shrinks_to_fit_narrow_bounds() {
        let bounds = ImageBounds::new(120, 448);
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        assert_eq!(region.width, 120);
        assert_eq!(region.left, 0);
        assert!(region.fits_within(bounds));
    }

    #[test]
    fn test_create_on_tiny_bounds() {
        let bounds = ImageBounds::new(1, 1);
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        assert_eq!(region, SelectionRegion::new(0, 0, 1, 1));
    }

    #[test]
    fn test_contains() {
        let region = SelectionRegion::new(10, 20, 30, 40);

        assert!(region.contains(10.0, 20.0));
        assert!(region.contains(39.5, 59.5));
        assert!(!region.contains(40.0, 30.0));
        assert!(!region.contains(9.9, 30.0));
    }

    #[test]
    fn test_translation_range() {
        let region = SelectionRegion::create(landscape_bounds(), 250, CARD_ASPECT);
        let range = region.translation_range(landscape_bounds());

        assert_eq!(range.horizontal, AxisRange::new(-198, 0));
        assert_eq!(range.vertical, AxisRange::new(-72, 0));
    }

    #[test]
    fn test_translate_clamps_rightward() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        let moved = region.clamped_translate(500, 0, bounds);
        assert_eq!(moved, region);
    }

    #[test]
    fn test_translate_clamps_each_axis_independently() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        let moved = region.clamped_translate(-50, -1000, bounds);
        assert_eq!(moved.left, 148);
        assert_eq!(moved.top, 0);
        assert_eq!(moved.width, region.width);
        assert_eq!(moved.height, region.height);
    }

    #[test]
    fn test_translate_within_range_is_exact() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::new(100, 30, 100, 61);

        let moved = region.clamped_translate(-20, 15, bounds);
        assert_eq!(moved, SelectionRegion::new(80, 45, 100, 61));
    }

    #[test]
    fn test_resize_grow() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        let grown = region.clamped_resize(-23, bounds, CARD_ASPECT, 1).unwrap();
        assert_eq!(grown.width, 273);
        assert_eq!(grown.height, height_for_width(273, CARD_ASPECT));
        assert_eq!(grown.left, 198 - 23 - 1);
        assert_eq!(grown.bottom(), region.bottom());
        assert!(grown.fits_within(bounds));
    }

    #[test]
    fn test_resize_shrink() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        let shrunk = region.clamped_resize(46, bounds, CARD_ASPECT, 1).unwrap();
        assert_eq!(shrunk.width, 204);
        assert_eq!(shrunk.height, height_for_width(204, CARD_ASPECT));
        assert_eq!(shrunk.bottom(), 224);
        assert_eq!(shrunk.right(), 447);
    }

    #[test]
    fn test_resize_without_border_keeps_anchor() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        let resized = region.clamped_resize(-40, bounds, CARD_ASPECT, 0).unwrap();
        assert_eq!(resized.right(), region.right());
        assert_eq!(resized.bottom(), region.bottom());
    }

    #[test]
    fn test_resize_rejects_growth_past_top() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        // 72px of headroom allows at most ~118px of horizontal growth
        assert!(region.clamped_resize(-130, bounds, CARD_ASPECT, 1).is_none());
    }

    #[test]
    fn test_resize_rejects_growth_past_left() {
        let bounds = ImageBounds::new(448, 448);
        let region = SelectionRegion::new(10, 200, 100, 61);

        assert!(region.clamped_resize(-10, bounds, CARD_ASPECT, 1).is_none());
        assert!(region.clamped_resize(-9, bounds, CARD_ASPECT, 1).is_some());
    }

    #[test]
    fn test_resize_rejects_collapse() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);

        assert!(region.clamped_resize(250, bounds, CARD_ASPECT, 1).is_none());
        assert!(region.clamped_resize(400, bounds, CARD_ASPECT, 1).is_none());
    }

    #[test]
    fn test_resize_range() {
        let region = SelectionRegion::new(198, 72, 250, 152);
        let range = region.resize_range(1);

        assert_eq!(range.horizontal, AxisRange::new(-197, 249));
        assert_eq!(range.vertical, AxisRange::new(-72, 151));
    }

    #[test]
    fn test_translate_within_narrower_range() {
        let region = SelectionRegion::new(100, 30, 100, 61);
        let range = DeltaRange {
            horizontal: AxisRange::new(-5, 5),
            vertical: AxisRange::new(0, 0),
        };

        assert_eq!(
            region.translate_within(-50, 40, &range),
            SelectionRegion::new(95, 30, 100, 61)
        );
    }

    #[test]
    fn test_resize_within_narrower_range() {
        let bounds = landscape_bounds();
        let region = SelectionRegion::create(bounds, 250, CARD_ASPECT);
        let range = DeltaRange {
            horizontal: AxisRange::new(-10, 10),
            vertical: AxisRange::new(-72, 151),
        };

        assert!(region.resize_within(-20, &range, bounds, CARD_ASPECT, 1).is_none());
        assert!(region.resize_within(-10, &range, bounds, CARD_ASPECT, 1).is_some());
    }

    #[test]
    fn test_axis_range() {
        let range = AxisRange::new(-5, 10);

        assert_eq!(range.clamp(-20), -5);
        assert_eq!(range.clamp(3), 3);
        assert_eq!(range.clamp(20), 10);
        assert!(range.contains(-5));
        assert!(range.contains(10));
        assert!(!range.contains(11));
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Scaled-image bounds as the scaling engine would produce them.
    fn bounds_strategy() -> impl Strategy<Value = ImageBounds> {
        prop_oneof![
            (50u32..=448).prop_map(|h| ImageBounds::new(448, h)),
            (50u32..=448).prop_map(|w| ImageBounds::new(w, 448)),
        ]
    }

    fn aspect_strategy() -> impl Strategy<Value = f64> {
        prop_oneof![Just(23.0 / 14.0), Just(1.0), Just(16.0 / 9.0), Just(3.0 / 4.0)]
    }

    proptest! {
        /// Property: The initial region always satisfies every invariant.
        #[test]
        fn prop_create_satisfies_invariants(
            bounds in bounds_strategy(),
            initial_width in 1u32..=600,
            aspect in aspect_strategy(),
        ) {
            let region = SelectionRegion::create(bounds, initial_width, aspect);

            prop_assert!(region.fits_within(bounds), "{:?} outside {:?}", region, bounds);
            prop_assert_eq!(region.right(), bounds.width as i32);
            prop_assert_eq!(region.bottom(), bounds.height as i32);
        }

        /// Property: No drag sequence can move the region out of bounds.
        #[test]
        fn prop_drag_sequence_stays_in_bounds(
            bounds in bounds_strategy(),
            deltas in prop::collection::vec((-2000i32..=2000, -2000i32..=2000), 1..30),
        ) {
            let mut region = SelectionRegion::create(bounds, 250, 23.0 / 14.0);
            let (width, height) = (region.width, region.height);

            for (dx, dy) in deltas {
                region = region.clamped_translate(dx, dy, bounds);
                prop_assert!(region.left >= 0);
                prop_assert!(region.top >= 0);
                prop_assert!(region.right() <= bounds.width as i32);
                prop_assert!(region.bottom() <= bounds.height as i32);
                prop_assert_eq!(region.width, width);
                prop_assert_eq!(region.height, height);
            }
        }

        /// Property: Resizing never lets the aspect ratio drift.
        #[test]
        fn prop_resize_sequence_preserves_aspect(
            bounds in bounds_strategy(),
            aspect in aspect_strategy(),
            deltas in prop::collection::vec(-300i32..=300, 1..30),
        ) {
            let mut region = SelectionRegion::create(bounds, 250, aspect);
            prop_assert!(region.matches_aspect(aspect));

            for dx in deltas {
                if let Some(next) = region.clamped_resize(dx, bounds, aspect, 1) {
                    region = next;
                }
                prop_assert!(region.matches_aspect(aspect));
                prop_assert!(region.fits_within(bounds));

                let ratio = region.width as f64 / region.height as f64;
                let tolerance = aspect / (2.0 * region.height as f64 - 1.0).max(1.0);
                prop_assert!((ratio - aspect).abs() <= tolerance + 1e-9);
            }
        }

        /// Property: A resize is only rejected when a bound would be crossed.
        #[test]
        fn prop_resize_rejected_only_on_bound_violation(
            bounds in bounds_strategy(),
            dx in -1000i32..=1000,
        ) {
            let region = SelectionRegion::create(bounds, 250, 23.0 / 14.0);

            match region.clamped_resize(dx, bounds, 23.0 / 14.0, 1) {
                Some(next) => prop_assert!(next.fits_within(bounds)),
                None => {
                    let range = region.resize_range(1);
                    let height = height_for_width(region.width - dx, 23.0 / 14.0);
                    let dy = region.height - height;
                    prop_assert!(!range.horizontal.contains(dx) || !range.vertical.contains(dy));
                }
            }
        }

        /// Property: Accepted resizes keep the bottom edge fixed.
        #[test]
        fn prop_resize_keeps_bottom_anchor(
            bounds in bounds_strategy(),
            dx in -200i32..=200,
        ) {
            let region = SelectionRegion::create(bounds, 250, 23.0 / 14.0);
            if let Some(next) = region.clamped_resize(dx, bounds, 23.0 / 14.0, 1) {
                prop_assert_eq!(next.bottom(), region.bottom());
                prop_assert_eq!(next.right(), region.right() - 1);
            }
        }
    }
}
