// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll state: the canonical visible start index.
//!
//! The held index only changes in response to a scroll notification from the
//! host. Each notification is processed synchronously and unconditionally:
//! there is no debouncing, no coalescing, and no deduplication.

use crate::Scalar;
use crate::geometry::start_index_for_offset;

/// Payload delivered to scroll observers.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScrollEvent {
    /// Index of the first displayed item as of this notification.
    pub start_index: usize,
}

/// Lifecycle of a [`ScrollState`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    /// No scroll notification has been processed; the held index is the
    /// configured initial index.
    #[default]
    Initializing,
    /// At least one scroll notification has been processed; the held index is
    /// derived from the last reported offset.
    Tracking,
}

/// Holds the visible start index and converts raw offsets into it.
#[derive(Clone, Debug)]
pub struct ScrollState<S: Scalar> {
    item_extent: S,
    start_index: usize,
    phase: ScrollPhase,
}

impl<S: Scalar> ScrollState<S> {
    /// Creates a state holding `initial_index`, in [`ScrollPhase::Initializing`].
    #[must_use]
    pub fn new(item_extent: S, initial_index: usize) -> Self {
        Self {
            item_extent,
            start_index: initial_index,
            phase: ScrollPhase::Initializing,
        }
    }

    /// Returns the held start index.
    #[must_use]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Returns the per-item extent used to snap offsets.
    #[must_use]
    pub fn item_extent(&self) -> S {
        self.item_extent
    }

    /// Offset at which the held index sits at the top of the viewport.
    #[must_use]
    pub fn snapped_offset(&self) -> S {
        S::from_usize(self.start_index) * self.item_extent
    }

    /// Processes a raw scroll offset reported by the host.
    ///
    /// The start index becomes `round(raw_offset / item_extent)` and replaces
    /// the held value even if it is unchanged. The state moves to
    /// [`ScrollPhase::Tracking`] and never returns to `Initializing`.
    pub fn on_scroll_offset_changed(&mut self, raw_offset: S) -> ScrollEvent {
        let start_index = start_index_for_offset(raw_offset, self.item_extent);
        self.start_index = start_index;
        self.phase = ScrollPhase::Tracking;
        ScrollEvent { start_index }
    }
}
