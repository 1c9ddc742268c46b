// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction for scroll-axis quantities.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// A floating-point scalar used for offsets, extents, and item heights.
///
/// Implemented for `f32` and `f64`. Only the operations the list needs are
/// exposed, and none of them require `std` float math.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts an item count or index into this scalar type.
    fn from_usize(value: usize) -> Self;

    /// Rounds towards negative infinity and converts to `isize`.
    ///
    /// Out-of-range values saturate and NaN maps to `0`.
    fn floor_to_isize(self) -> isize;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Returns `true` if this value is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set (including `-0.0`).
    fn is_sign_negative(self) -> bool;

    /// Returns the larger of two values, ignoring NaN.
    fn max(self, other: Self) -> Self;

    /// Returns the smaller of two values, ignoring NaN.
    fn min(self, other: Self) -> Self;
}

macro_rules! impl_scalar {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[allow(
                clippy::cast_precision_loss,
                reason = "Item counts beyond the mantissa are not meaningful scroll positions"
            )]
            #[inline]
            fn from_usize(value: usize) -> Self {
                value as Self
            }

            #[allow(
                clippy::cast_possible_truncation,
                reason = "The float-to-int cast saturates, which is the intended clamp"
            )]
            #[inline]
            fn floor_to_isize(self) -> isize {
                let truncated = self as isize;
                // Round towards -∞ (the cast above has already truncated).
                if (truncated as Self) > self {
                    truncated.saturating_sub(1)
                } else {
                    truncated
                }
            }

            #[allow(
                trivial_numeric_casts,
                reason = "Shared macro body for f32 and f64"
            )]
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn is_finite(self) -> bool {
                <$ty>::is_finite(self)
            }

            #[inline]
            fn is_sign_negative(self) -> bool {
                <$ty>::is_sign_negative(self)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                <$ty>::max(self, other)
            }

            #[inline]
            fn min(self, other: Self) -> Self {
                <$ty>::min(self, other)
            }
        }
    };
}

impl_scalar!(f32);
impl_scalar!(f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_rounds_towards_negative_infinity() {
        assert_eq!(Scalar::floor_to_isize(3.7_f32), 3);
        assert_eq!(Scalar::floor_to_isize(3.0_f64), 3);
        assert_eq!(Scalar::floor_to_isize(-0.5_f32), -1);
        assert_eq!(Scalar::floor_to_isize(-1.0_f64), -1);
        assert_eq!(Scalar::floor_to_isize(-1.25_f64), -2);
    }

    #[test]
    fn floor_saturates_and_maps_nan_to_zero() {
        assert_eq!(Scalar::floor_to_isize(f32::NAN), 0);
        assert_eq!(Scalar::floor_to_isize(f64::INFINITY), isize::MAX);
        assert_eq!(Scalar::floor_to_isize(f64::NEG_INFINITY), isize::MIN);
    }

    #[test]
    fn max_ignores_nan() {
        assert_eq!(Scalar::max(f32::NAN, 0.0), 0.0);
        assert_eq!(Scalar::min(f64::NAN, 2.0), 2.0);
    }
}
