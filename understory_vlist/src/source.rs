// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only access to the caller's item collection.

use alloc::collections::VecDeque;
use alloc::vec::Vec;

/// An ordered, indexable sequence of items.
///
/// The list only ever reads the length and the items inside the realized
/// window, and only for the duration of a render pass. Implement this for
/// external or paged storage; slices, `Vec`, and `VecDeque` work out of the box.
pub trait ItemSource {
    /// Item type handed to the render template.
    type Item;

    /// Total number of items.
    fn len(&self) -> usize;

    /// Returns the item at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Returns `true` if there are no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> ItemSource for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T, const N: usize> ItemSource for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ItemSource for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<T> ItemSource for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        Self::get(self, index)
    }
}
