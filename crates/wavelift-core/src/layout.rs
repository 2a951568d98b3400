//! Frame layouts: how the outer frame relates to the nested image.

use serde::{Deserialize, Serialize};

use crate::geom::next_pow2;
use crate::image::Extent;

/// The three conventions for embedding the nested image in the outer frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Outer frame is the next power of two per axis; the border is
    /// zero-filled and the transform operates on the full outer frame.
    Simple,
    /// Outer frame is the next power of two per axis; the transform operates
    /// on the nested image only and leaves the border cells undefined
    /// (unless zero padding is requested).
    Sparse,
    /// Outer frame equals the nested image; no padding at all.
    Packed,
}

impl Layout {
    /// Whether this layout requires a power-of-two outer frame.
    #[inline]
    #[must_use]
    pub const fn requires_pow2_frame(self) -> bool {
        matches!(self, Self::Simple | Self::Sparse)
    }

    /// Outer frame extent for `inner` samples.
    #[must_use]
    pub fn frame_extent(self, inner: Extent) -> Extent {
        match self {
            Self::Simple | Self::Sparse => Extent::new(next_pow2(inner.x), next_pow2(inner.y)),
            Self::Packed => inner,
        }
    }

    /// The nested extent the transform actually operates on. *Simple* and
    /// *packed* transform the whole outer frame; *sparse* keeps the caller's
    /// image size.
    #[must_use]
    pub fn nested_extent(self, outer: Extent, inner: Extent) -> Extent {
        match self {
            Self::Simple | Self::Packed => outer,
            Self::Sparse => inner,
        }
    }

    /// Check the frame invariants this layout imposes. Violations are
    /// contract errors; inverse calls on a non-power-of-two *simple* or
    /// *sparse* frame must abort.
    pub fn validate_frame(self, outer: Extent) {
        if self.requires_pow2_frame() {
            assert!(
                outer.x.is_power_of_two() && outer.y.is_power_of_two(),
                "{self:?} layout requires a power-of-two outer frame, got {}x{}",
                outer.x,
                outer.y
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_fitting() {
        let inner = Extent::new(300, 200);
        assert_eq!(Layout::Simple.frame_extent(inner), Extent::new(512, 256));
        assert_eq!(Layout::Sparse.frame_extent(inner), Extent::new(512, 256));
        assert_eq!(Layout::Packed.frame_extent(inner), inner);
    }

    #[test]
    fn nested_extent_rules() {
        let inner = Extent::new(300, 200);
        let outer = Extent::new(512, 256);
        assert_eq!(Layout::Simple.nested_extent(outer, inner), outer);
        assert_eq!(Layout::Sparse.nested_extent(outer, inner), inner);
        assert_eq!(Layout::Packed.nested_extent(inner, inner), inner);
    }

    #[test]
    #[should_panic(expected = "power-of-two")]
    fn sparse_rejects_odd_frames() {
        Layout::Sparse.validate_frame(Extent::new(17, 16));
    }
}
