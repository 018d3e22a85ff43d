// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window geometry: which slice of a fixed-extent list is realized, and where.
//!
//! Everything here is a pure function of the item count, the per-item extent,
//! the viewport extent, and the visible start index. Nothing is cached; hosts
//! recompute geometry on every render pass.

use core::ops::Range;

use crate::Scalar;

/// Derived geometry for one render pass of a fixed-extent list.
///
/// All extents live in the list's 1D coordinate space (typically logical
/// pixels along the vertical axis).
#[derive(Clone, Debug, PartialEq)]
pub struct WindowGeometry<S: Scalar> {
    /// Number of item slots needed to cover the viewport, rounded up.
    ///
    /// Rounding up trades one possibly-unused row for never leaving a blank
    /// strip at the trailing edge of the viewport.
    pub display_count: usize,
    /// Number of realized slots: `display_count` plus one boundary slot.
    ///
    /// When the scroll offset sits between item boundaries, one item straddles
    /// the trailing edge of the viewport; the boundary slot realizes it.
    pub slot_count: usize,
    /// Full scrollable extent: `item_count * item_extent`.
    pub content_extent: S,
    /// Extent of the scrollable region: `min(content_extent, display_count * item_extent)`.
    ///
    /// Never exceeds the content, so a short list does not leave empty space
    /// below its last item.
    pub viewport_extent: S,
    /// Translation applied to the realized block: `visible.start * item_extent`.
    pub window_offset: S,
    /// Realized indices, clipped to `0..item_count`.
    ///
    /// Empty when `item_count == 0` or the start index is past the end.
    pub visible: Range<usize>,
}

impl<S: Scalar> WindowGeometry<S> {
    /// Number of items in the realized slice.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Returns `true` if no item is realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// Number of slots of `item_extent` needed to cover `viewport_extent`.
///
/// Computed as `ceil(viewport_extent / item_extent)`.
///
/// `item_extent` must be strictly positive; a zero extent is a caller contract
/// violation and panics in debug builds.
#[must_use]
pub fn display_count<S: Scalar>(item_extent: S, viewport_extent: S) -> usize {
    debug_assert!(
        item_extent > S::zero(),
        "item extent must be positive, got {item_extent}"
    );
    (viewport_extent / item_extent).ceil_to_usize()
}

/// Snaps a raw scroll offset to the nearest item boundary and returns its index.
///
/// Computed as `round(offset / item_extent)`, so the snap point sits halfway
/// between adjacent items.
#[must_use]
pub fn start_index_for_offset<S: Scalar>(offset: S, item_extent: S) -> usize {
    debug_assert!(
        item_extent > S::zero(),
        "item extent must be positive, got {item_extent}"
    );
    (offset / item_extent).round_to_usize()
}

/// Returns the scroll offset at which `index` sits at the top of the viewport.
#[must_use]
pub fn offset_for_index<S: Scalar>(index: usize, item_extent: S) -> S {
    S::from_usize(index) * item_extent
}

/// Computes the window geometry for one render pass.
///
/// Inputs are expected to be pre-validated by the caller: `item_extent` and
/// `viewport_extent` strictly positive and finite. The function is pure and
/// deterministic; calling it twice with the same inputs yields equal results.
///
/// ```rust
/// use understory_vlist::compute_window;
///
/// // 100 000 rows of 50px in a 200px viewport, scrolled to row 16.
/// let geometry = compute_window(100_000, 50.0_f64, 200.0, 16);
/// assert_eq!(geometry.display_count, 4);
/// assert_eq!(geometry.visible, 16..21);
/// assert_eq!(geometry.window_offset, 800.0);
/// assert_eq!(geometry.viewport_extent, 200.0);
/// ```
#[must_use]
pub fn compute_window<S: Scalar>(
    item_count: usize,
    item_extent: S,
    viewport_extent: S,
    start_index: usize,
) -> WindowGeometry<S> {
    debug_assert!(
        viewport_extent.is_finite() && viewport_extent > S::zero(),
        "viewport extent must be positive and finite, got {viewport_extent}"
    );
    let display_count = display_count(item_extent, viewport_extent);
    let slot_count = display_count + 1;
    let content_extent = S::from_usize(item_count) * item_extent;
    let viewport_extent = content_extent.min(S::from_usize(display_count) * item_extent);

    let start = start_index.min(item_count);
    let end = start_index.saturating_add(slot_count).min(item_count);

    WindowGeometry {
        display_count,
        slot_count,
        content_extent,
        viewport_extent,
        window_offset: offset_for_index(start_index, item_extent),
        visible: start..end,
    }
}

#[cfg(test)]
mod tests {
    use super::{compute_window, display_count, offset_for_index, start_index_for_offset};

    #[test]
    fn display_count_rounds_up_partial_slots() {
        assert_eq!(display_count(50.0_f64, 200.0), 4);
        assert_eq!(display_count(30.0_f64, 100.0), 4);
        assert_eq!(display_count(20.0_f32, 200.0), 10);
    }

    #[test]
    fn short_list_shrinks_viewport_to_content() {
        let geometry = compute_window(3, 20.0_f64, 200.0, 0);
        assert_eq!(geometry.content_extent, 60.0);
        assert_eq!(geometry.viewport_extent, 60.0);
        assert_eq!(geometry.visible, 0..3);
    }

    #[test]
    fn long_list_realizes_display_count_plus_boundary_slot() {
        let geometry = compute_window(100_000, 50.0_f64, 200.0, 0);
        assert_eq!(geometry.display_count, 4);
        assert_eq!(geometry.slot_count, 5);
        assert_eq!(geometry.viewport_extent, 200.0);
        assert_eq!(geometry.content_extent, 5_000_000.0);
        assert_eq!(geometry.visible, 0..5);
        assert_eq!(geometry.window_offset, 0.0);
    }

    #[test]
    fn slice_is_clipped_at_the_tail() {
        let geometry = compute_window(10, 50.0_f64, 200.0, 8);
        assert_eq!(geometry.visible, 8..10);
        assert_eq!(geometry.window_offset, 400.0);
    }

    #[test]
    fn start_past_the_end_yields_empty_slice() {
        let geometry = compute_window(10, 50.0_f64, 200.0, 42);
        assert!(geometry.is_empty());
        assert_eq!(geometry.visible_len(), 0);
    }

    #[test]
    fn empty_collection_realizes_nothing() {
        let geometry = compute_window(0, 50.0_f64, 200.0, 0);
        assert!(geometry.is_empty());
        assert_eq!(geometry.content_extent, 0.0);
        assert_eq!(geometry.viewport_extent, 0.0);
    }

    #[test]
    fn offsets_snap_to_nearest_index() {
        assert_eq!(start_index_for_offset(800.0_f64, 50.0), 16);
        assert_eq!(start_index_for_offset(824.0_f64, 50.0), 16);
        assert_eq!(start_index_for_offset(825.0_f64, 50.0), 17);
        assert_eq!(start_index_for_offset(0.0_f64, 50.0), 0);
    }

    #[test]
    fn index_offset_is_exact_multiple() {
        assert_eq!(offset_for_index(16, 50.0_f64), 800.0);
        assert_eq!(offset_for_index(0, 50.0_f32), 0.0);
    }
}
