//! CDF 9/7 1-D entry points.
//!
//! The forward direction gathers `n` strided samples into the scratch,
//! runs the merged four-step kernel (offset 1, scale after), and scatters
//! the lifted evens to the L positions and odds to the H positions; the
//! inverse gathers the halves back interleaved (offset 0, scale before) and
//! reconstructs the samples. `n == 1` is a single multiplication by ζ
//! (forward) or 1/ζ (inverse); `n == 0` never touches the buffer.

use wavelift_core::geom::{ceil_div2, floor_div2};
use wavelift_core::stride::copy_stride;
use wavelift_core::Sample;

use crate::op4::lift4;
use crate::schedule::Schedule;
use crate::scratch::Scratch;
use crate::wavelet::{cdf97_forward, cdf97_inverse, Scaling, CDF97_ZETA};
use crate::{Cdf97, Lifting1d};

/// Extra scratch elements past the line length: one lane group of pipeline
/// prefetch plus the lane shift that aligns `scratch[off]`.
pub(crate) const LINE_SLACK: usize = 6;

/// Forward CDF 9/7 of one line; L half to `0, stride, …`, H half to
/// `split, split + stride, …`.
pub fn forward_split<T: Sample>(
    line: &mut [T],
    stride: usize,
    n: usize,
    split: usize,
    scratch: &mut Scratch<T>,
    schedule: Schedule,
) {
    assert!(stride >= 1, "stride must be at least 1");
    if n < 2 {
        if n == 1 {
            line[0] *= T::from_f64(CDF97_ZETA);
        }
        return;
    }

    let tmp = scratch.slice_aligned(n + LINE_SLACK, 1);
    copy_stride(tmp, 1, line, stride, n);

    lift4(tmp, 1, n, &cdf97_forward::<T>(), Scaling::After, schedule);

    copy_stride(line, stride, tmp, 2, ceil_div2(n));
    copy_stride(&mut line[split..], stride, &tmp[1..], 2, floor_div2(n));
}

/// Inverse CDF 9/7 of one line from its halves at `0` and `split`.
pub fn inverse_merge<T: Sample>(
    line: &mut [T],
    stride: usize,
    n: usize,
    split: usize,
    scratch: &mut Scratch<T>,
    schedule: Schedule,
) {
    assert!(stride >= 1, "stride must be at least 1");
    if n < 2 {
        if n == 1 {
            line[0] *= T::from_f64(CDF97_ZETA).recip();
        }
        return;
    }

    let tmp = scratch.slice_aligned(n + LINE_SLACK, 0);
    copy_stride(tmp, 2, &line[..], stride, ceil_div2(n));
    copy_stride(&mut tmp[1..], 2, &line[split..], stride, floor_div2(n));

    lift4(tmp, 0, n, &cdf97_inverse::<T>(), Scaling::Before, schedule);

    copy_stride(line, stride, tmp, 1, n);
}

impl<T: Sample> Lifting1d<T> for Cdf97 {
    fn forward_split(
        line: &mut [T],
        stride: usize,
        n: usize,
        split: usize,
        scratch: &mut Scratch<T>,
        schedule: Schedule,
    ) {
        forward_split(line, stride, n, split, scratch, schedule);
    }

    fn inverse_merge(
        line: &mut [T],
        stride: usize,
        n: usize,
        split: usize,
        scratch: &mut Scratch<T>,
        schedule: Schedule,
    ) {
        inverse_merge(line, stride, n, split, scratch, schedule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(n: usize) -> Scratch<f64> {
        Scratch::with_capacity(n + LINE_SLACK)
    }

    /// The four-sample row of the reference scenario: forward then inverse
    /// restores [1, 2, 3, 4] to double precision.
    #[test]
    fn four_samples_roundtrip() {
        let mut line = [1.0f64, 2.0, 3.0, 4.0];
        let mut s = scratch(4);
        forward_split(&mut line, 1, 4, 2, &mut s, Schedule::Baseline);
        // L half first, then H half.
        let transformed = line;
        inverse_merge(&mut line, 1, 4, 2, &mut s, Schedule::Baseline);
        for (i, v) in [1.0, 2.0, 3.0, 4.0].iter().enumerate() {
            assert!((line[i] - v).abs() < 1e-6, "i={i}: {} vs {v}", line[i]);
        }
        assert_ne!(transformed, line);
    }

    #[test]
    fn single_sample_scales_by_zeta() {
        let mut line = [2.0f64];
        let mut s = scratch(1);
        forward_split(&mut line, 1, 1, 1, &mut s, Schedule::Baseline);
        assert!((line[0] - 2.0 * CDF97_ZETA).abs() < 1e-12);
        inverse_merge(&mut line, 1, 1, 1, &mut s, Schedule::Baseline);
        assert!((line[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn empty_line_is_untouched() {
        let mut line = [9.0f64, 9.0];
        let mut s = scratch(2);
        forward_split(&mut line, 1, 0, 0, &mut s, Schedule::Baseline);
        assert_eq!(line, [9.0, 9.0]);
    }

    /// Strided access must match the contiguous transform.
    #[test]
    fn strided_matches_contiguous() {
        let n = 21;
        let samples: Vec<f64> = (0..n).map(|i| ((i * 7) % 5) as f64 - 1.5).collect();

        let mut contiguous = samples.clone();
        let mut s = scratch(n);
        forward_split(&mut contiguous, 1, n, ceil_div2(n), &mut s, Schedule::Baseline);

        let mut strided = vec![0.0f64; 3 * n];
        for (i, v) in samples.iter().enumerate() {
            strided[3 * i] = *v;
        }
        forward_split(&mut strided, 3, n, 3 * ceil_div2(n), &mut s, Schedule::Baseline);

        for i in 0..n {
            assert!((contiguous[i] - strided[3 * i]).abs() < 1e-12, "i={i}");
        }
    }

    #[test]
    fn roundtrip_all_lengths_and_schedules() {
        for n in 1..70usize {
            for schedule in [Schedule::Baseline, Schedule::DoubleLoop, Schedule::Sdl6Vec] {
                let orig: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();
                let mut line = orig.clone();
                let mut s = scratch(n);
                forward_split(&mut line, 1, n, ceil_div2(n), &mut s, schedule);
                inverse_merge(&mut line, 1, n, ceil_div2(n), &mut s, schedule);
                for i in 0..n {
                    assert!(
                        (line[i] - orig[i]).abs() < 1e-9,
                        "n={n} {schedule:?} i={i}"
                    );
                }
            }
        }
    }
}
