// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use crate::{
    Attributes, ItemSource, ListConfig, Scalar, ScrollEvent, ScrollHost, ScrollPhase, ScrollState,
    ViewportRegion, Width, WindowGeometry, compute_window, render_window,
};

type ScrollCallback = Box<dyn FnMut(ScrollEvent)>;

/// A fixed-extent windowed list bound to a host scroll container.
///
/// `VirtualList` ties the three pieces together:
/// - [`ScrollState`] holds the visible start index and is updated only by
///   [`VirtualList::handle_scroll`] / [`VirtualList::on_scroll_offset_changed`].
/// - [`compute_window`] derives geometry for the current item count.
/// - [`render_window`] materializes the visible slice.
///
/// After any scroll update or configuration change, the previous output is
/// stale; call [`VirtualList::render`] again before presenting.
///
/// ```rust
/// use understory_vlist::{ListConfig, MemoryScrollHost, VirtualList};
///
/// let items: Vec<String> = (0..100_000).map(|i| format!("Item {i}")).collect();
/// let mut host = MemoryScrollHost::new();
/// let mut list = VirtualList::new(ListConfig::new(50.0_f64, 200.0), &mut host);
///
/// host.scroll_to(800.0);
/// list.handle_scroll(&host);
///
/// let view = list.render(&items, |item, i| format!("{i}: {item}"));
/// assert_eq!(view.indices().collect::<Vec<_>>(), [16, 17, 18, 19, 20]);
/// ```
pub struct VirtualList<S: Scalar = f64> {
    config: ListConfig<S>,
    scroll: ScrollState<S>,
    on_scroll: Option<ScrollCallback>,
}

impl<S: Scalar> fmt::Debug for VirtualList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("config", &self.config)
            .field("scroll", &self.scroll)
            .field("on_scroll", &self.on_scroll.as_ref().map(|_| "<callback>"))
            .finish()
    }
}

impl<S: Scalar> VirtualList<S> {
    /// Creates a list and performs its one-time initialization.
    ///
    /// The held start index is set to `config.start_index`, and the host's
    /// scroll offset is set to `start_index * item_extent`. This is the only
    /// time the list writes to the host; afterwards the host owns the offset.
    pub fn new<H: ScrollHost<S>>(config: ListConfig<S>, host: &mut H) -> Self {
        let scroll = ScrollState::new(config.item_extent, config.start_index);
        host.set_scroll_offset(scroll.snapped_offset());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            start_index = config.start_index,
            item_extent = config.item_extent.to_f64(),
            viewport_extent = config.viewport_extent.to_f64(),
            "virtual list mounted"
        );

        Self {
            config,
            scroll,
            on_scroll: None,
        }
    }

    /// Builder form of [`VirtualList::set_on_scroll`].
    #[must_use]
    pub fn with_on_scroll(mut self, callback: impl FnMut(ScrollEvent) + 'static) -> Self {
        self.set_on_scroll(callback);
        self
    }

    /// Installs an observer invoked on every processed scroll notification.
    ///
    /// The observer fires even when the start index did not change.
    pub fn set_on_scroll(&mut self, callback: impl FnMut(ScrollEvent) + 'static) {
        self.on_scroll = Some(Box::new(callback));
    }

    /// Removes the scroll observer.
    pub fn clear_on_scroll(&mut self) {
        self.on_scroll = None;
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ListConfig<S> {
        &self.config
    }

    /// Returns the held visible start index.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.scroll.start_index()
    }

    /// Returns whether a scroll notification has been processed yet.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.scroll.phase()
    }

    /// Handles the host's payload-less "scroll offset changed" notification.
    ///
    /// Re-reads the live offset from `host` and forwards it to
    /// [`VirtualList::on_scroll_offset_changed`].
    pub fn handle_scroll<H: ScrollHost<S> + ?Sized>(&mut self, host: &H) -> ScrollEvent {
        self.on_scroll_offset_changed(host.scroll_offset())
    }

    /// Processes a raw scroll offset.
    ///
    /// Updates the held start index to `round(raw_offset / item_extent)` and
    /// notifies the observer, if any, synchronously before returning.
    pub fn on_scroll_offset_changed(&mut self, raw_offset: S) -> ScrollEvent {
        let event = self.scroll.on_scroll_offset_changed(raw_offset);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            offset = raw_offset.to_f64(),
            start_index = event.start_index,
            "scroll offset changed"
        );

        if let Some(callback) = self.on_scroll.as_mut() {
            callback(event);
        }
        event
    }

    /// Computes the window geometry for `item_count` items.
    #[must_use]
    pub fn geometry(&self, item_count: usize) -> WindowGeometry<S> {
        compute_window(
            item_count,
            self.config.item_extent,
            self.config.viewport_extent,
            self.scroll.start_index(),
        )
    }

    /// Renders the current window of `items`.
    ///
    /// `template` maps an item and its absolute index to the caller's visual.
    /// `items` is only borrowed for the duration of the call.
    pub fn render<C, V, F>(&self, items: &C, template: F) -> ViewportRegion<V, S>
    where
        C: ItemSource + ?Sized,
        F: Fn(&C::Item, usize) -> V,
    {
        let geometry = self.geometry(items.len());
        render_window(&self.config, &geometry, items, template)
    }

    /// Updates the viewport extent. Takes effect on the next render.
    pub fn set_viewport_extent(&mut self, viewport_extent: S) {
        debug_assert!(
            viewport_extent.is_finite() && viewport_extent > S::zero(),
            "viewport extent must be positive and finite, got {viewport_extent}"
        );
        self.config.viewport_extent = viewport_extent;
    }

    /// Updates the cross-axis size. Takes effect on the next render.
    pub fn set_width(&mut self, width: Width<S>) {
        self.config.width = width;
    }

    /// Replaces the outer region attributes. Takes effect on the next render.
    pub fn set_container_attributes(&mut self, attributes: Attributes) {
        self.config.container_attributes = attributes;
    }

    /// Replaces the item wrapper attributes. Takes effect on the next render.
    pub fn set_item_attributes(&mut self, attributes: Attributes) {
        self.config.item_attributes = attributes;
    }
}
