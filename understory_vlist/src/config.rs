// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use core::fmt;

use crate::{Attributes, Scalar};

/// Cross-axis size applied identically to the container, spacer, block, and items.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Width<S: Scalar> {
    /// Fixed size in logical pixels.
    Pixels(S),
    /// Percentage of the host's available width.
    Percent(S),
}

impl<S: Scalar> Default for Width<S> {
    /// `100%` of the available width.
    fn default() -> Self {
        Self::Percent(S::from_usize(100))
    }
}

impl<S: Scalar> fmt::Display for Width<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(px) => write!(f, "{px}px"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Options for a [`VirtualList`](crate::VirtualList).
///
/// `item_extent` and `viewport_extent` are required; everything else has a
/// default. Both extents must be strictly positive and finite. They are not
/// validated at runtime beyond debug assertions: a zero item extent is a
/// caller bug, not a recoverable condition.
///
/// ```rust
/// use understory_vlist::{Attributes, ListConfig, Width};
///
/// let config = ListConfig::new(50.0_f64, 200.0)
///     .with_start_index(16)
///     .with_width(Width::Pixels(320.0))
///     .with_container_attributes(Attributes::new().with("role", "feed"));
/// assert_eq!(config.width.to_string(), "320px");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ListConfig<S: Scalar> {
    /// Extent of every item along the scroll axis.
    pub item_extent: S,
    /// Extent of the viewport along the scroll axis.
    pub viewport_extent: S,
    /// Cross-axis size. Defaults to `100%`.
    pub width: Width<S>,
    /// Index scrolled to the top of the viewport at construction. Defaults to `0`.
    pub start_index: usize,
    /// Attributes merged onto the outer scrollable region.
    pub container_attributes: Attributes,
    /// Attributes merged onto every item wrapper.
    pub item_attributes: Attributes,
}

impl<S: Scalar> ListConfig<S> {
    /// Creates a configuration with default width, start index, and attributes.
    #[must_use]
    pub fn new(item_extent: S, viewport_extent: S) -> Self {
        debug_assert!(
            item_extent.is_finite() && item_extent > S::zero(),
            "item extent must be positive and finite, got {item_extent}"
        );
        debug_assert!(
            viewport_extent.is_finite() && viewport_extent > S::zero(),
            "viewport extent must be positive and finite, got {viewport_extent}"
        );
        Self {
            item_extent,
            viewport_extent,
            width: Width::default(),
            start_index: 0,
            container_attributes: Attributes::new(),
            item_attributes: Attributes::new(),
        }
    }

    /// Sets the cross-axis size.
    #[must_use]
    pub fn with_width(mut self, width: Width<S>) -> Self {
        self.width = width;
        self
    }

    /// Sets the index scrolled into view at construction.
    #[must_use]
    pub fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Sets the attributes for the outer scrollable region.
    #[must_use]
    pub fn with_container_attributes(mut self, attributes: Attributes) -> Self {
        self.container_attributes = attributes;
        self
    }

    /// Sets the attributes for every item wrapper.
    #[must_use]
    pub fn with_item_attributes(mut self, attributes: Attributes) -> Self {
        self.item_attributes = attributes;
        self
    }
}
