//! CDF 5/3 1-D entry points.
//!
//! The 5/3 wavelet is the degenerate two-step case: one predict/update pair
//! plus the √2 scaling. It runs through the per-step sweep engine — a
//! single pair never fills the merged pipeline, so the schedule selection
//! only applies to the 9/7 kernel.

use wavelift_core::geom::{ceil_div2, floor_div2};
use wavelift_core::stride::copy_stride;
use wavelift_core::Sample;

use crate::cdf97::LINE_SLACK;
use crate::schedule::Schedule;
use crate::scratch::Scratch;
use crate::sweep::{forward_sweeps, inverse_sweeps};
use crate::wavelet::{cdf53_pairs, CDF53_ZETA};
use crate::{Cdf53, Lifting1d};

/// Forward CDF 5/3 of one line; L half to `0, stride, …`, H half to
/// `split, split + stride, …`.
pub fn forward_split<T: Sample>(
    line: &mut [T],
    stride: usize,
    n: usize,
    split: usize,
    scratch: &mut Scratch<T>,
    _schedule: Schedule,
) {
    assert!(stride >= 1, "stride must be at least 1");
    if n < 2 {
        if n == 1 {
            line[0] *= T::from_f64(CDF53_ZETA);
        }
        return;
    }

    let tmp = scratch.slice_aligned(n + LINE_SLACK, 0);
    copy_stride(tmp, 1, line, stride, n);

    forward_sweeps(&mut tmp[..n], &cdf53_pairs::<T>(), T::from_f64(CDF53_ZETA));

    copy_stride(line, stride, tmp, 2, ceil_div2(n));
    copy_stride(&mut line[split..], stride, &tmp[1..], 2, floor_div2(n));
}

/// Inverse CDF 5/3 of one line from its halves at `0` and `split`.
pub fn inverse_merge<T: Sample>(
    line: &mut [T],
    stride: usize,
    n: usize,
    split: usize,
    scratch: &mut Scratch<T>,
    _schedule: Schedule,
) {
    assert!(stride >= 1, "stride must be at least 1");
    if n < 2 {
        if n == 1 {
            line[0] *= T::from_f64(CDF53_ZETA).recip();
        }
        return;
    }

    let tmp = scratch.slice_aligned(n + LINE_SLACK, 0);
    copy_stride(tmp, 2, &line[..], stride, ceil_div2(n));
    copy_stride(&mut tmp[1..], 2, &line[split..], stride, floor_div2(n));

    inverse_sweeps(&mut tmp[..n], &cdf53_pairs::<T>(), T::from_f64(CDF53_ZETA));

    copy_stride(line, stride, tmp, 1, n);
}

impl<T: Sample> Lifting1d<T> for Cdf53 {
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
