// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_vlist --heading-base-level=0

//! Understory VList: a fixed-extent windowed list engine.
//!
//! This crate renders a very long list inside a fixed-size scrollable viewport
//! while realizing only as many elements as fit in the viewport. Rendering
//! cost depends on the viewport size, never on the total item count.
//!
//! The core concepts are:
//!
//! - [`compute_window`]: a pure function mapping item count, item extent,
//!   viewport extent, and start index to a [`WindowGeometry`]: which indices
//!   to realize, where to place them, and how large the scrollable content is.
//! - [`ScrollState`]: holds the visible start index and snaps raw scroll
//!   offsets to it (`round(offset / item_extent)`).
//! - [`render_window`]: materializes the visible slice through a caller
//!   template into a four-level region tree (scrollable viewport, content
//!   spacer, one offset block, item slots) keyed by reusable [`SlotKey`]s.
//! - [`VirtualList`]: ties the three together against a [`ScrollHost`], the
//!   embedding environment that owns the live scroll offset.
//!
//! This crate deliberately does **not** know about any particular UI
//! framework. Host integrations are responsible for:
//!
//! - Owning the item collection and exposing it as an [`ItemSource`].
//! - Delivering scroll notifications via [`VirtualList::handle_scroll`].
//! - Turning the returned [`ViewportRegion`] into real elements, diffing
//!   item slots by [`SlotKey`].
//!
//! Native scroll mechanics (scrollbar, momentum, wheel and keyboard scrolling)
//! stay with the host: the content spacer gives it the true scrollable extent.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_vlist::{Attributes, ListConfig, MemoryScrollHost, ScrollHost, VirtualList};
//!
//! let items: Vec<String> = (0..100_000).map(|i| format!("Item {i}")).collect();
//!
//! // 50px rows in a 200px viewport, starting scrolled to row 16.
//! let config = ListConfig::new(50.0_f64, 200.0)
//!     .with_start_index(16)
//!     .with_item_attributes(Attributes::new().with("role", "listitem"));
//! let mut host = MemoryScrollHost::new();
//! let mut list = VirtualList::new(config, &mut host);
//! assert_eq!(host.scroll_offset(), 800.0);
//!
//! // The user scrolls; the host reports it; the list re-derives its window.
//! host.scroll_to(400.0);
//! list.handle_scroll(&host);
//!
//! let view = list.render(&items, |item, i| format!("{i}: {item}"));
//! assert_eq!(view.indices().collect::<Vec<_>>(), [8, 9, 10, 11, 12]);
//! assert_eq!(view.window_offset(), 400.0);
//! assert_eq!(view.content_extent(), 5_000_000.0);
//! ```
//!
//! All extents and offsets live in a caller-chosen 1D coordinate space
//! (typically logical pixels) and are expected to be finite. Item and
//! viewport extents must be strictly positive; this is checked by debug
//! assertions only.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo's `std` feature.
//! - `libm`: forwards to Kurbo's `libm` feature for `no_std` builds.
//! - `tracing`: emits `tracing` events on mount, scroll, and render.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod config;
mod geometry;
mod host;
mod render;
mod scalar;
mod scroll;
mod source;
mod virtual_list;

pub use attributes::Attributes;
pub use config::{ListConfig, Width};
pub use geometry::{
    WindowGeometry, compute_window, display_count, offset_for_index, start_index_for_offset,
};
pub use host::{MemoryScrollHost, ScrollHost};
pub use render::{
    BoxStyle, ItemSlot, OffsetBlock, Overflow, SlotKey, SpacerRegion, ViewportRegion,
    render_window,
};
pub use scalar::Scalar;
pub use scroll::{ScrollEvent, ScrollPhase, ScrollState};
pub use source::ItemSource;
pub use virtual_list::VirtualList;
