//! Lifting constants and parameter sets.
//!
//! The per-step constants handed to the kernels are *signed*: forward CDF
//! 9/7 runs `(-p1, u1, -p2, u2, ζ)` with scaling after lifting, the inverse
//! runs `(-u2, p2, -u1, p1, ζ)` with scaling before lifting. No tuning knob
//! is exposed; the constants are part of the wavelet.

use serde::{Deserialize, Serialize};

use wavelift_core::Sample;

/// CDF 9/7 predict-1 coefficient.
pub const CDF97_P1: f64 = 1.586_134_342_420_59;
/// CDF 9/7 update-1 coefficient.
pub const CDF97_U1: f64 = -0.052_980_118_572_9;
/// CDF 9/7 predict-2 coefficient.
pub const CDF97_P2: f64 = -0.882_911_075_530_9;
/// CDF 9/7 update-2 coefficient.
pub const CDF97_U2: f64 = 0.443_506_852_043_9;
/// CDF 9/7 scaling factor ζ.
pub const CDF97_ZETA: f64 = 1.149_604_398_860_2;

/// CDF 5/3 predict coefficient.
pub const CDF53_P1: f64 = 0.5;
/// CDF 5/3 update coefficient.
pub const CDF53_U1: f64 = 0.25;
/// CDF 5/3 scaling factor √2.
pub const CDF53_ZETA: f64 = core::f64::consts::SQRT_2;

/// Scaling direction relative to the lifting steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scaling {
    /// Scale before lifting (inverse transforms).
    Before,
    /// No scaling.
    None,
    /// Scale after lifting (forward transforms).
    After,
}

/// The four signed lifting coefficients and the scaling factor of a merged
/// four-step kernel invocation.
#[derive(Clone, Copy, Debug)]
pub struct LiftOp4<T> {
    /// First applied step coefficient.
    pub alpha: T,
    /// Second step coefficient.
    pub beta: T,
    /// Third step coefficient.
    pub gamma: T,
    /// Fourth step coefficient.
    pub delta: T,
    /// Scaling factor ζ.
    pub zeta: T,
}

/// One predict/update step pair for the sweep engine, with signs folded in.
#[derive(Clone, Copy, Debug)]
pub struct LiftPair<T> {
    /// Signed predict coefficient (applied to odd positions).
    pub predict: T,
    /// Signed update coefficient (applied to even positions).
    pub update: T,
}

/// Forward CDF 9/7 kernel parameters (scale after lifting).
#[inline]
#[must_use]
pub fn cdf97_forward<T: Sample>() -> LiftOp4<T> {
    LiftOp4 {
        alpha: T::from_f64(-CDF97_P1),
        beta: T::from_f64(CDF97_U1),
        gamma: T::from_f64(-CDF97_P2),
        delta: T::from_f64(CDF97_U2),
        zeta: T::from_f64(CDF97_ZETA),
    }
}

/// Inverse CDF 9/7 kernel parameters (scale before lifting).
#[inline]
#[must_use]
pub fn cdf97_inverse<T: Sample>() -> LiftOp4<T> {
    LiftOp4 {
        alpha: T::from_f64(-CDF97_U2),
        beta: T::from_f64(CDF97_P2),
        gamma: T::from_f64(-CDF97_U1),
        delta: T::from_f64(CDF97_P1),
        zeta: T::from_f64(CDF97_ZETA),
    }
}

/// CDF 9/7 as a step list for the sweep engine.
#[inline]
#[must_use]
pub fn cdf97_pairs<T: Sample>() -> [LiftPair<T>; 2] {
    [
        LiftPair {
            predict: T::from_f64(-CDF97_P1),
            update: T::from_f64(CDF97_U1),
        },
        LiftPair {
            predict: T::from_f64(-CDF97_P2),
            update: T::from_f64(CDF97_U2),
        },
    ]
}

/// CDF 5/3 as a step list for the sweep engine.
#[inline]
#[must_use]
pub fn cdf53_pairs<T: Sample>() -> [LiftPair<T>; 1] {
    [LiftPair {
        predict: T::from_f64(-CDF53_P1),
        update: T::from_f64(CDF53_U1),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeta_is_not_self_inverse() {
        // ζ * (1/ζ) == 1 but ζ != 1; both precisions keep the distinction.
        let z32 = f32::from_f64(CDF97_ZETA);
        assert!(z32 > 1.0 && (z32 * z32.recip() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn inverse_swaps_and_negates() {
        let f = cdf97_forward::<f64>();
        let i = cdf97_inverse::<f64>();
        assert_eq!(i.alpha, -f.delta);
        assert_eq!(i.beta, -f.gamma);
        assert_eq!(i.gamma, -f.beta);
        assert_eq!(i.delta, -f.alpha);
    }
}
