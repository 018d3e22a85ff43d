// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for window geometry and scroll snapping.
//!
//! 1. `display_count` is `ceil(viewport / item)`.
//! 2. The scrollable region never exceeds the content.
//! 3. Slice length is `min(slot_count, max(0, len - start))`.
//! 4. The window offset is exactly `start * item_extent`.
//! 5. Geometry is a pure function of its inputs.
//! 6. Scrolling to `k * item_extent` snaps back to `k`.
//! 7. Render cost tracks the window, not the collection.

use proptest::prelude::*;
use understory_vlist::{
    ListConfig, MemoryScrollHost, VirtualList, compute_window, offset_for_index,
    start_index_for_offset,
};

// ── Helpers ─────────────────────────────────────────────────────────────

/// Whole-pixel extents keep `ceil` expectations exact in `f64`.
fn extent_strategy() -> impl Strategy<Value = f64> {
    (1_u32..=400).prop_map(f64::from)
}

fn count_strategy() -> impl Strategy<Value = usize> {
    0_usize..=1_000_000
}

proptest! {
    #[test]
    fn display_count_is_ceiling(
        item in extent_strategy(),
        viewport in extent_strategy(),
        len in count_strategy(),
    ) {
        let geometry = compute_window(len, item, viewport, 0);
        let expected = (viewport / item).ceil() as usize;
        prop_assert_eq!(geometry.display_count, expected);
        prop_assert_eq!(geometry.slot_count, expected + 1);
    }

    #[test]
    fn viewport_never_exceeds_content(
        item in extent_strategy(),
        viewport in extent_strategy(),
        len in count_strategy(),
        start in 0_usize..=2_000_000,
    ) {
        let geometry = compute_window(len, item, viewport, start);
        prop_assert!(
            geometry.viewport_extent <= geometry.content_extent,
            "viewport {} exceeds content {}",
            geometry.viewport_extent,
            geometry.content_extent
        );
    }

    #[test]
    fn slice_length_is_bounded(
        item in extent_strategy(),
        viewport in extent_strategy(),
        len in count_strategy(),
        start in 0_usize..=2_000_000,
    ) {
        let geometry = compute_window(len, item, viewport, start);
        let expected = geometry.slot_count.min(len.saturating_sub(start));
        prop_assert_eq!(geometry.visible.len(), expected);
        prop_assert!(geometry.visible.end <= len);
        if !geometry.visible.is_empty() {
            prop_assert_eq!(geometry.visible.start, start);
        }
    }

    #[test]
    fn window_offset_is_exact(
        item in extent_strategy(),
        viewport in extent_strategy(),
        start in 0_usize..=2_000_000,
    ) {
        let geometry = compute_window(10_000_000, item, viewport, start);
        prop_assert_eq!(geometry.window_offset, start as f64 * item);
    }

    #[test]
    fn geometry_is_pure(
        item in extent_strategy(),
        viewport in extent_strategy(),
        len in count_strategy(),
        start in 0_usize..=2_000_000,
    ) {
        prop_assert_eq!(
            compute_window(len, item, viewport, start),
            compute_window(len, item, viewport, start)
        );
    }

    #[test]
    fn index_offset_round_trip(item in extent_strategy(), k in 0_usize..=1_000_000) {
        let offset = offset_for_index(k, item);
        prop_assert_eq!(start_index_for_offset(offset, item), k);

        let mut host = MemoryScrollHost::new();
        let mut list = VirtualList::new(ListConfig::new(item, item * 4.0), &mut host);
        let event = list.on_scroll_offset_changed(offset);
        prop_assert_eq!(event.start_index, k);
        prop_assert_eq!(list.start_index(), k);
    }

    #[test]
    fn render_touches_only_the_window(
        len in 0_usize..=5_000,
        start in 0_usize..=6_000,
    ) {
        let items: Vec<usize> = (0..len).collect();
        let mut host = MemoryScrollHost::new();
        let list = VirtualList::new(
            ListConfig::new(20.0, 100.0).with_start_index(start),
            &mut host,
        );
        let calls = std::cell::Cell::new(0_usize);
        let view = list.render(&items, |item, i| {
            calls.set(calls.get() + 1);
            assert_eq!(*item, i);
            i
        });
        let geometry = list.geometry(len);
        prop_assert_eq!(calls.get(), geometry.visible.len());
        prop_assert!(view.items().len() <= geometry.slot_count);
        let indices: Vec<usize> = view.indices().collect();
        let expected: Vec<usize> = geometry.visible.clone().collect();
        prop_assert_eq!(indices, expected);
    }
}
