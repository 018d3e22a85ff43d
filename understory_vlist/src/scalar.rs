// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for extents, offsets, and scroll positions.
//!
//! This trait is intentionally small and only implemented for `f32` and `f64`.
//! The rounding helpers are written against integer casts so the crate stays
//! usable without `std` float intrinsics.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for extents, offsets, and scroll positions.
///
/// This is currently implemented for `f32` and `f64`. The trait is deliberately
/// minimal and geared toward finite, non-negative floating-point coordinates.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Widens the value to `f64` (used for transforms, which are always `f64`).
    fn to_f64(self) -> f64;

    /// Truncates toward zero and converts to `usize`.
    ///
    /// Negative and NaN inputs saturate to `0`.
    fn trunc_to_usize(self) -> usize;

    /// Rounds up to the next whole number and converts to `usize`.
    ///
    /// Intended for non-negative inputs.
    fn ceil_to_usize(self) -> usize {
        let whole = self.trunc_to_usize();
        if Self::from_usize(whole) < self {
            whole + 1
        } else {
            whole
        }
    }

    /// Rounds to the nearest whole number and converts to `usize`.
    ///
    /// Halfway values round up, so `0.5` becomes `1` and `16.5` becomes `17`.
    /// Intended for non-negative inputs.
    fn round_to_usize(self) -> usize {
        let whole = self.trunc_to_usize();
        let fraction = self - Self::from_usize(whole);
        if fraction + fraction >= Self::from_usize(1) {
            whole + 1
        } else {
            whole
        }
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    fn trunc_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Index conversion; `as` saturates and callers clip to the item count"
        )]
        {
            self as usize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn to_f64(self) -> f64 {
        self
    }

    fn trunc_to_usize(self) -> usize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Index conversion; `as` saturates and callers clip to the item count"
        )]
        {
            self as usize
        }
    }
}
