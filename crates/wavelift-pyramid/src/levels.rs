//! Level controller.
//!
//! The level cap is `ceil(log2)` of the larger outer axis when a length-1
//! axis may keep decomposing along the other (`decompose_one`), of the
//! smaller otherwise. Forward calls clamp the caller's request in place
//! (`-1` means "as deep as possible") and the written-back value is what a
//! matching inverse call must pass; the inverse trusts it, clamping only
//! overshoot.

use wavelift_core::geom::ceil_log2;
use wavelift_core::Extent;

/// Deepest level the outer frame permits.
#[must_use]
pub fn level_limit(size_o: Extent, decompose_one: bool) -> i32 {
    let axis = if decompose_one {
        size_o.max_axis()
    } else {
        size_o.min_axis()
    };
    ceil_log2(axis) as i32
}

/// Clamp a forward level request in place and return the effective count.
/// Negative and too-deep requests become the limit.
pub fn clamp_levels(j_max: &mut i32, size_o: Extent, decompose_one: bool) -> i32 {
    let limit = level_limit(size_o, decompose_one);
    if *j_max < 0 || *j_max > limit {
        *j_max = limit;
    }
    *j_max
}

/// Effective level count for an inverse call: the caller's value when it is
/// a valid depth, the frame limit otherwise.
#[must_use]
pub fn effective_inverse_levels(j_max: i32, size_o: Extent, decompose_one: bool) -> i32 {
    let limit = level_limit(size_o, decompose_one);
    if (0..limit).contains(&j_max) {
        j_max
    } else {
        limit
    }
}
