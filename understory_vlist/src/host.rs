// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host boundary: the live scroll offset owned by the embedding environment.
//!
//! The host (a browser element, a native scroll view, a terminal pane, ...)
//! is the source of truth for the scroll offset. The list only reads it when
//! the host reports that it changed, and writes it once at construction.
//!
//! [`MemoryScrollHost`] is a headless host for tests, demos, and benchmarks.
//! It clamps writes to the scrollable range the way a browser does.

use crate::Scalar;

/// Read/write access to a host's live scroll offset along the list axis.
pub trait ScrollHost<S: Scalar> {
    /// Returns the host's current scroll offset.
    ///
    /// Hosts clamp this to `[0, content_extent - viewport_extent]`.
    fn scroll_offset(&self) -> S;

    /// Imperatively sets the host's scroll offset.
    fn set_scroll_offset(&mut self, offset: S);
}

impl<S: Scalar, H: ScrollHost<S> + ?Sized> ScrollHost<S> for &mut H {
    fn scroll_offset(&self) -> S {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: S) {
        (**self).set_scroll_offset(offset);
    }
}

/// In-memory scroll host.
///
/// Until extents are supplied via [`MemoryScrollHost::set_extents`], writes
/// are only clamped to be non-negative. Once extents are known, writes are
/// clamped to `[0, content_extent - viewport_extent]`.
#[derive(Clone, Debug)]
pub struct MemoryScrollHost<S: Scalar> {
    offset: S,
    max_offset: Option<S>,
    writes: usize,
}

impl<S: Scalar> Default for MemoryScrollHost<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scalar> MemoryScrollHost<S> {
    /// Creates a host scrolled to the origin with no known extents.
    #[must_use]
    pub fn new() -> Self {
        Self {
            offset: S::zero(),
            max_offset: None,
            writes: 0,
        }
    }

    /// Sets the content and viewport extents used to clamp the offset.
    ///
    /// The current offset is re-clamped into the new range. This is a layout
    /// update, not a scroll write, so it does not bump [`Self::write_count`].
    pub fn set_extents(&mut self, content_extent: S, viewport_extent: S) {
        let max = (content_extent - viewport_extent).max(S::zero());
        self.max_offset = Some(max);
        self.offset = self.clamp(self.offset);
    }

    /// Simulates the user scrolling to `offset`.
    ///
    /// This is the same clamped write as [`ScrollHost::set_scroll_offset`];
    /// hosts deliver the resulting change notification separately.
    pub fn scroll_to(&mut self, offset: S) {
        self.set_scroll_offset(offset);
    }

    /// Number of offset writes received so far, including user scrolls.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn clamp(&self, offset: S) -> S {
        let offset = offset.max(S::zero());
        match self.max_offset {
            Some(max) => offset.min(max),
            None => offset,
        }
    }
}

impl<S: Scalar> ScrollHost<S> for MemoryScrollHost<S> {
    fn scroll_offset(&self) -> S {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: S) {
        self.writes += 1;
        self.offset = self.clamp(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryScrollHost, ScrollHost};

    #[test]
    fn writes_are_clamped_non_negative() {
        let mut host = MemoryScrollHost::<f64>::new();
        host.scroll_to(-20.0);
        assert_eq!(host.scroll_offset(), 0.0);
        host.scroll_to(1_000.0);
        assert_eq!(host.scroll_offset(), 1_000.0);
        assert_eq!(host.write_count(), 2);
    }

    #[test]
    fn extents_bound_the_offset() {
        let mut host = MemoryScrollHost::<f64>::new();
        host.scroll_to(900.0);
        // 10 rows of 50 in a 200 viewport: max offset 300.
        host.set_extents(500.0, 200.0);
        assert_eq!(host.scroll_offset(), 300.0);
        host.scroll_to(250.0);
        assert_eq!(host.scroll_offset(), 250.0);
        host.scroll_to(10_000.0);
        assert_eq!(host.scroll_offset(), 300.0);
    }

    #[test]
    fn content_shorter_than_viewport_pins_to_origin() {
        let mut host = MemoryScrollHost::<f32>::new();
        host.set_extents(60.0, 200.0);
        host.scroll_to(40.0);
        assert_eq!(host.scroll_offset(), 0.0);
    }

    #[test]
    fn mutable_references_forward() {
        fn drive<H: ScrollHost<f64>>(mut host: H) -> f64 {
            host.set_scroll_offset(75.0);
            host.scroll_offset()
        }

        let mut host = MemoryScrollHost::<f64>::new();
        assert_eq!(drive(&mut host), 75.0);
        assert_eq!(host.write_count(), 1);
    }
}
