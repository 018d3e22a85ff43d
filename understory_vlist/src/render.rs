// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window rendering: turns a [`WindowGeometry`] into a host-agnostic element tree.
//!
//! The tree always has the same four levels:
//!
//! ```text
//! ViewportRegion   overflow: auto,    extent = viewport_extent, caller container attributes
//! └ SpacerRegion   overflow: visible, extent = content_extent
//!   └ OffsetBlock  overflow: visible, extent = 0, translated by window_offset
//!     └ ItemSlot*  overflow: hidden,  extent = item_extent, caller item attributes
//! ```
//!
//! The spacer gives the host's native scrollbar the full content extent while
//! only the realized slice exists as children. Scrolling moves the single
//! offset block instead of repositioning each item, and items are keyed by
//! [`SlotKey`] so the host keeps the same element identities across scroll
//! updates and only patches their content.

use alloc::vec::Vec;

use kurbo::Affine;

use crate::{Attributes, ItemSource, ListConfig, Scalar, Width, WindowGeometry};

/// How an element treats content that exceeds its box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Overflow {
    /// Scrollable when content overflows.
    Auto,
    /// Overflowing content is clipped.
    Hidden,
    /// Overflowing content is painted outside the box.
    Visible,
}

/// Box parameters for one element of the tree.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStyle<S: Scalar> {
    /// Size along the scroll axis.
    pub extent: S,
    /// Size along the cross axis.
    pub width: Width<S>,
    /// Overflow behavior.
    pub overflow: Overflow,
}

/// Stable identity of an item slot.
///
/// Derived from `index % slot_count`, so a fixed set of identities is reused
/// as the window slides: scrolling down by one row retires key `k` at the top
/// and reuses it for the row entering at the bottom. Keys are unique within
/// one window.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlotKey(pub usize);

/// One realized item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemSlot<V, S: Scalar> {
    /// Reused slot identity.
    pub key: SlotKey,
    /// Absolute index in the item collection.
    pub index: usize,
    /// Item wrapper box.
    pub style: BoxStyle<S>,
    /// Caller-supplied item attributes.
    pub attributes: Attributes,
    /// Output of the caller's template for this item.
    pub visual: V,
}

/// The single repositioned container holding the realized items.
#[derive(Clone, Debug, PartialEq)]
pub struct OffsetBlock<V, S: Scalar> {
    /// Zero-extent, overflow-visible box.
    pub style: BoxStyle<S>,
    /// Offset along the scroll axis; `start_index * item_extent`.
    pub offset: S,
    /// Realized items in index order.
    pub items: Vec<ItemSlot<V, S>>,
}

impl<V, S: Scalar> OffsetBlock<V, S> {
    /// Transform placing the block at [`Self::offset`] along the vertical axis.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::translate((0.0, self.offset.to_f64()))
    }
}

/// Region establishing the full content extent for the host's scrollbar.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacerRegion<V, S: Scalar> {
    /// Box sized to the content extent.
    pub style: BoxStyle<S>,
    /// The offset block.
    pub block: OffsetBlock<V, S>,
}

/// Outer scrollable region: the root of a rendered window.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportRegion<V, S: Scalar> {
    /// Scrollable box sized to the viewport extent.
    pub style: BoxStyle<S>,
    /// Caller-supplied container attributes.
    pub attributes: Attributes,
    /// The content spacer.
    pub spacer: SpacerRegion<V, S>,
}

impl<V, S: Scalar> ViewportRegion<V, S> {
    /// Realized items in index order.
    #[must_use]
    pub fn items(&self) -> &[ItemSlot<V, S>] {
        &self.spacer.block.items
    }

    /// Absolute indices of the realized items.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items().iter().map(|slot| slot.index)
    }

    /// Template outputs of the realized items.
    pub fn visuals(&self) -> impl Iterator<Item = &V> + '_ {
        self.items().iter().map(|slot| &slot.visual)
    }

    /// Offset of the realized block along the scroll axis.
    #[must_use]
    pub fn window_offset(&self) -> S {
        self.spacer.block.offset
    }

    /// Full scrollable extent.
    #[must_use]
    pub fn content_extent(&self) -> S {
        self.spacer.style.extent
    }
}

/// Materializes the items in `geometry.visible` and wraps them in the region tree.
///
/// `template` is called exactly once per realized item, in index order, with
/// the item and its absolute index. Nothing outside the visible slice is read.
pub fn render_window<C, V, S, F>(
    config: &ListConfig<S>,
    geometry: &WindowGeometry<S>,
    items: &C,
    template: F,
) -> ViewportRegion<V, S>
where
    C: ItemSource + ?Sized,
    S: Scalar,
    F: Fn(&C::Item, usize) -> V,
{
    let width = config.width;
    let item_style = BoxStyle {
        extent: config.item_extent,
        width,
        overflow: Overflow::Hidden,
    };

    let slots: Vec<_> = geometry
        .visible
        .clone()
        .filter_map(|index| {
            let item = items.get(index)?;
            Some(ItemSlot {
                key: SlotKey(index % geometry.slot_count),
                index,
                style: item_style.clone(),
                attributes: config.item_attributes.clone(),
                visual: template(item, index),
            })
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        start = geometry.visible.start,
        end = geometry.visible.end,
        realized = slots.len(),
        offset = geometry.window_offset.to_f64(),
        "rendered window"
    );

    ViewportRegion {
        style: BoxStyle {
            extent: geometry.viewport_extent,
            width,
            overflow: Overflow::Auto,
        },
        attributes: config.container_attributes.clone(),
        spacer: SpacerRegion {
            style: BoxStyle {
                extent: geometry.content_extent,
                width,
                overflow: Overflow::Visible,
            },
            block: OffsetBlock {
                style: BoxStyle {
                    extent: S::zero(),
                    width,
                    overflow: Overflow::Visible,
                },
                offset: geometry.window_offset,
                items: slots,
            },
        },
    }
}
