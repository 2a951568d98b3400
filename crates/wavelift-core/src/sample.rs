//! Coefficient abstraction.
//!
//! The whole transform is parameterised by the element type; `f32` and `f64`
//! share the algebraic structure but carry their own tolerances. The kernels
//! are written once against [`Sample`] and instantiated at both precisions.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// An IEEE-754 scalar the lifting kernels can operate on.
///
/// The bound set is exactly what the kernels need: ring arithmetic, compound
/// assignment (the lifting step is `v[i] += c * (v[i-1] + v[i+1])`), and a
/// handful of conversions for constants and diagnostics.
pub trait Sample:
    Copy
    + Default
    + Debug
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// The constant 2 (mirrored boundary terms double the present neighbour).
    const TWO: Self;
    /// Max-norm round-trip tolerance on well-behaved inputs.
    const ROUND_TRIP_EPS: Self;
    /// Max-norm tolerance between two equivalent kernel schedules.
    const SCHEDULE_EPS: Self;

    /// Lossy conversion from a double-precision constant.
    fn from_f64(v: f64) -> Self;

    /// Widening conversion for diagnostics and statistics.
    fn to_f64(self) -> f64;

    /// Absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// `false` for NaN and the infinities.
    fn is_finite(self) -> bool;

    /// Multiplicative inverse.
    #[inline]
    #[must_use]
    fn recip(self) -> Self {
        Self::ONE / self
    }
}

impl Sample for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const ROUND_TRIP_EPS: Self = 1e-3;
    const SCHEDULE_EPS: Self = 1e-4;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as Self
    }

    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn abs(self) -> Self {
        Self::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

impl Sample for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const ROUND_TRIP_EPS: Self = 1e-6;
    const SCHEDULE_EPS: Self = 1e-8;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn abs(self) -> Self {
        Self::abs(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recip_is_inverse() {
        let z = f64::from_f64(1.149_604_398_860_2);
        assert!((z * z.recip() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn finiteness() {
        assert!(1.0f32.is_finite());
        assert!(!f32::NAN.is_finite());
        assert!(!f64::INFINITY.is_finite());
    }
}
