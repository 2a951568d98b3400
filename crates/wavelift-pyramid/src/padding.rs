//! Zero padding of frame cells outside the produced subbands.
//!
//! With a *sparse* or *simple* frame the transform of an `n`-sample line
//! leaves cells between the subband extents and the frame quadrant
//! undefined; when requested, the driver zeroes them so downstream
//! consumers can assume a clean frame.

use wavelift_core::geom::{ceil_div2, floor_div2};
use wavelift_core::stride::fill_stride;
use wavelift_core::Sample;

/// After a forward split of `n` samples: zero the L tail
/// `ceil(n/2)..n_dst_l` and the H tail `floor(n/2)..n_dst_h` (the latter
/// measured from `split`).
pub(crate) fn zero_forward<T: Sample>(
    line: &mut [T],
    stride: usize,
    n: usize,
    n_dst_l: usize,
    n_dst_h: usize,
    split: usize,
) {
    let l0 = ceil_div2(n);
    if n_dst_l > l0 {
        fill_stride(&mut line[l0 * stride..], stride, n_dst_l - l0, T::ZERO);
    }
    let h0 = floor_div2(n);
    if n_dst_h > h0 {
        fill_stride(
            &mut line[split + h0 * stride..],
            stride,
            n_dst_h - h0,
            T::ZERO,
        );
    }
}

/// After an inverse merge of `n` samples: zero the single tail `n..n_dst`.
pub(crate) fn zero_inverse<T: Sample>(line: &mut [T], stride: usize, n: usize, n_dst: usize) {
    if n_dst > n {
        fill_stride(&mut line[n * stride..], stride, n_dst - n, T::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_zeroes_both_tails() {
        // 5 samples split into L=3, H=2 inside an 8-cell quadrant pair
        // (L quadrant 4 wide at 0, H quadrant 4 wide at 4).
        let mut line = [9.0f32; 8];
        zero_forward(&mut line, 1, 5, 4, 4, 4);
        assert_eq!(line, [9.0, 9.0, 9.0, 0.0, 9.0, 9.0, 0.0, 0.0]);
    }

    #[test]
    fn inverse_zeroes_tail() {
        let mut line = [9.0f64; 6];
        zero_inverse(&mut line, 1, 4, 6);
        assert_eq!(line, [9.0, 9.0, 9.0, 9.0, 0.0, 0.0]);
    }
}
