//! Per-step sweep engine (the naive schedule).
//!
//! One pass over the vector per lifting step, plus a final scale sweep.
//! Maximum memory traffic, minimum working set; this is also the engine for
//! CDF 5/3, whose single predict/update pair never warrants the merged
//! pipeline. Boundaries substitute `2 * present_neighbour` (symmetric
//! reflection); which formula applies at the right edge depends on the
//! parity of `n`.

use wavelift_core::Sample;

use crate::wavelet::LiftPair;

/// Forward lifting of `t` through `pairs` in order, then scaling (evens by
/// ζ, odds by 1/ζ). Needs `t.len() >= 2`.
pub fn forward_sweeps<T: Sample>(t: &mut [T], pairs: &[LiftPair<T>], zeta: T) {
    debug_assert!(t.len() >= 2);
    for pair in pairs {
        forward_pair(t, pair);
    }
    let inv_zeta = zeta.recip();
    let mut i = 0;
    while i < t.len() {
        t[i] *= zeta;
        i += 2;
    }
    let mut i = 1;
    while i < t.len() {
        t[i] *= inv_zeta;
        i += 2;
    }
}

/// Inverse of [`forward_sweeps`]: descale, then undo the pairs in reverse
/// order with negated coefficients.
pub fn inverse_sweeps<T: Sample>(t: &mut [T], pairs: &[LiftPair<T>], zeta: T) {
    debug_assert!(t.len() >= 2);
    let inv_zeta = zeta.recip();
    let mut i = 0;
    while i < t.len() {
        t[i] *= inv_zeta;
        i += 2;
    }
    let mut i = 1;
    while i < t.len() {
        t[i] *= zeta;
        i += 2;
    }
    for pair in pairs.iter().rev() {
        inverse_pair(t, pair);
    }
}

/// One predict step (odd positions) followed by one update step (even
/// positions), edges mirrored.
fn forward_pair<T: Sample>(t: &mut [T], pair: &LiftPair<T>) {
    let n = t.len();
    let (p, u) = (pair.predict, pair.update);
    let two = T::TWO;

    let mut i = 1;
    while i < n - 2 + (n & 1) {
        t[i] += p * (t[i - 1] + t[i + 1]);
        i += 2;
    }
    if n % 2 == 1 {
        t[n - 1] += two * u * t[n - 2];
    } else {
        t[n - 1] += two * p * t[n - 2];
    }
    t[0] += two * u * t[1];
    let mut i = 2;
    while i < n - (n & 1) {
        t[i] += u * (t[i - 1] + t[i + 1]);
        i += 2;
    }
}

/// Exact inverse of [`forward_pair`].
fn inverse_pair<T: Sample>(t: &mut [T], pair: &LiftPair<T>) {
    let n = t.len();
    let (p, u) = (-pair.predict, -pair.update);
    let two = T::TWO;

    let mut i = 2;
    while i < n - (n & 1) {
        t[i] += u * (t[i - 1] + t[i + 1]);
        i += 2;
    }
    t[0] += two * u * t[1];
    if n % 2 == 1 {
        t[n - 1] += two * u * t[n - 2];
    } else {
        t[n - 1] += two * p * t[n - 2];
    }
    let mut i = 1;
    while i < n - 2 + (n & 1) {
        t[i] += p * (t[i - 1] + t[i + 1]);
        i += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wavelet::{cdf53_pairs, cdf97_pairs, CDF53_ZETA, CDF97_ZETA};
    use proptest::prelude::*;

    fn roundtrip_97(mut v: Vec<f64>) -> Vec<f64> {
        let pairs = cdf97_pairs::<f64>();
        let zeta = CDF97_ZETA;
        forward_sweeps(&mut v, &pairs, zeta);
        inverse_sweeps(&mut v, &pairs, zeta);
        v
    }

    #[test]
    fn roundtrip_small_lengths() {
        for n in 2..40usize {
            let orig: Vec<f64> = (0..n).map(|i| (i as f64).sin() + 0.5).collect();
            let back = roundtrip_97(orig.clone());
            for (a, b) in orig.iter().zip(&back) {
                assert!((a - b).abs() < 1e-10, "n={n}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn constant_input_has_tiny_details() {
        // Lifting preserves constants: the H half of a constant signal
        // vanishes up to the precision of the published constants (the
        // truncated 9/7 coefficients cancel to about 1e-6 relative).
        let mut v = vec![7.5f64; 64];
        forward_sweeps(&mut v, &cdf97_pairs::<f64>(), CDF97_ZETA);
        for (i, x) in v.iter().enumerate() {
            if i % 2 == 1 {
                assert!(x.abs() < 1e-4, "detail {i} = {x}");
            }
        }
    }

    #[test]
    fn cdf53_roundtrip() {
        for n in 2..32usize {
            let orig: Vec<f32> = (0..n).map(|i| (i * i % 13) as f32).collect();
            let mut v = orig.clone();
            forward_sweeps(&mut v, &cdf53_pairs::<f32>(), CDF53_ZETA as f32);
            inverse_sweeps(&mut v, &cdf53_pairs::<f32>(), CDF53_ZETA as f32);
            for (a, b) in orig.iter().zip(&v) {
                assert!((a - b).abs() < 1e-4, "n={n}");
            }
        }
    }

    proptest! {
        #[test]
        fn roundtrip_random(v in prop::collection::vec(-1e3f64..1e3, 2..200)) {
            let back = roundtrip_97(v.clone());
            for (a, b) in v.iter().zip(&back) {
                prop_assert!((a - b).abs() < 1e-8);
            }
        }
    }
}
