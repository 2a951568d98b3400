//! Strided addressing and gather/scatter copies.
//!
//! Strides are counts of elements, not bytes. A stride of 1 on both sides
//! degrades to a plain contiguous copy.

use crate::sample::Sample;

/// Linear index of coefficient `(y, x)` in a buffer with row stride
/// `stride_x` and sample stride `stride_y`.
#[inline]
#[must_use]
pub const fn at(y: usize, x: usize, stride_x: usize, stride_y: usize) -> usize {
    y * stride_x + x * stride_y
}

/// Copy `n` samples from `src` (stepping `src_stride`) into `dst` (stepping
/// `dst_stride`). The slices only need to cover the touched positions.
#[inline]
pub fn copy_stride<T: Sample>(
    dst: &mut [T],
    dst_stride: usize,
    src: &[T],
    src_stride: usize,
    n: usize,
) {
    debug_assert!(dst_stride >= 1 && src_stride >= 1);
    if dst_stride == 1 && src_stride == 1 {
        dst[..n].copy_from_slice(&src[..n]);
        return;
    }
    for i in 0..n {
        dst[i * dst_stride] = src[i * src_stride];
    }
}

/// Overwrite `n` strided positions of `dst` with a constant.
#[inline]
pub fn fill_stride<T: Sample>(dst: &mut [T], stride: usize, n: usize, value: T) {
    debug_assert!(stride >= 1);
    if stride == 1 {
        dst[..n].fill(value);
        return;
    }
    for i in 0..n {
        dst[i * stride] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contiguous_copy() {
        let src = [1.0f32, 2.0, 3.0, 4.0];
        let mut dst = [0.0f32; 4];
        copy_stride(&mut dst, 1, &src, 1, 4);
        assert_eq!(dst, src);
    }

    #[test]
    fn deinterleave_by_stride() {
        let src = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut evens = [0.0f64; 3];
        copy_stride(&mut evens, 1, &src, 2, 3);
        assert_eq!(evens, [1.0, 3.0, 5.0]);

        let mut spread = [0.0f64; 5];
        copy_stride(&mut spread, 2, &src, 1, 3);
        assert_eq!(spread, [1.0, 0.0, 2.0, 0.0, 3.0]);
    }

    #[test]
    fn fill_tail() {
        let mut buf = [9.0f32; 6];
        fill_stride(&mut buf[1..], 2, 2, 0.0);
        assert_eq!(buf, [9.0, 0.0, 9.0, 0.0, 9.0, 9.0]);
    }
}
