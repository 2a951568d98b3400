//! Subband locator.
//!
//! After `j` forward passes the frame is a pyramid: LL(j) in the upper left,
//! with HL/LH/HH rings at levels `1..=j`. The locator derives the origin and
//! extent of any quadrant by halving the outer frame (ceiling for the
//! low-pass side, floor for the high-pass side), tracking the nested image
//! independently.
//!
//! Band naming: the first letter is the horizontal (x) filter, the second
//! the vertical — HL is the right/top quadrant, LH the left/bottom.

use serde::{Deserialize, Serialize};

use crate::geom::{ceil_div_pow2, floor_div2};
use crate::image::Extent;

/// One quadrant tag of a level-`j` decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Low-low (approximation); recursively decomposed at the next level.
    Ll,
    /// High in x, low in y.
    Hl,
    /// Low in x, high in y.
    Lh,
    /// High-high (diagonal detail).
    Hh,
}

/// Origin and extent of a subband within the outer frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubbandRect {
    /// Column of the first cell.
    pub x: usize,
    /// Row of the first cell.
    pub y: usize,
    /// Meaningful samples horizontally.
    pub width: usize,
    /// Meaningful samples vertically.
    pub height: usize,
}

/// Locate `band` of decomposition level `level` (1-based; `Ll` also accepts
/// 0 for the undecomposed image). Pure function of the frame geometry.
#[must_use]
pub fn locate_subband(outer: Extent, inner: Extent, level: u32, band: Band) -> SubbandRect {
    assert!(
        level >= 1 || band == Band::Ll,
        "detail bands only exist at level >= 1"
    );
    let j = level;
    // Low-pass extents after j and j-1 halvings.
    let lo = |n: usize| ceil_div_pow2(n, j);
    let prev = |n: usize| ceil_div_pow2(n, j.saturating_sub(1));
    // High-pass half of the previous level's samples.
    let hi = |n: usize| floor_div2(prev(n));

    match band {
        Band::Ll => SubbandRect {
            x: 0,
            y: 0,
            width: lo(inner.x),
            height: lo(inner.y),
        },
        Band::Hl => SubbandRect {
            x: lo(outer.x),
            y: 0,
            width: hi(inner.x),
            height: lo(inner.y),
        },
        Band::Lh => SubbandRect {
            x: 0,
            y: lo(outer.y),
            width: lo(inner.x),
            height: hi(inner.y),
        },
        Band::Hh => SubbandRect {
            x: lo(outer.x),
            y: lo(outer.y),
            width: hi(inner.x),
            height: hi(inner.y),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_even_frame_level_one() {
        let e = Extent::new(8, 8);
        assert_eq!(
            locate_subband(e, e, 1, Band::Ll),
            SubbandRect { x: 0, y: 0, width: 4, height: 4 }
        );
        assert_eq!(
            locate_subband(e, e, 1, Band::Hl),
            SubbandRect { x: 4, y: 0, width: 4, height: 4 }
        );
        assert_eq!(
            locate_subband(e, e, 1, Band::Lh),
            SubbandRect { x: 0, y: 4, width: 4, height: 4 }
        );
        assert_eq!(
            locate_subband(e, e, 1, Band::Hh),
            SubbandRect { x: 4, y: 4, width: 4, height: 4 }
        );
    }

    #[test]
    fn odd_frames_split_ceil_floor() {
        let e = Extent::new(17, 17);
        let ll = locate_subband(e, e, 1, Band::Ll);
        let hh = locate_subband(e, e, 1, Band::Hh);
        assert_eq!((ll.width, ll.height), (9, 9));
        assert_eq!((hh.x, hh.y), (9, 9));
        assert_eq!((hh.width, hh.height), (8, 8));

        // Level 2 halves the 9-wide LL into 5 + 4.
        let ll2 = locate_subband(e, e, 2, Band::Ll);
        let hl2 = locate_subband(e, e, 2, Band::Hl);
        assert_eq!((ll2.width, ll2.height), (5, 5));
        assert_eq!(hl2.x, 5);
        assert_eq!((hl2.width, hl2.height), (4, 5));
    }

    #[test]
    fn sparse_tracks_nested_separately() {
        let outer = Extent::new(512, 256);
        let inner = Extent::new(300, 200);
        let hl = locate_subband(outer, inner, 1, Band::Hl);
        // Origin follows the outer frame, extent the nested image.
        assert_eq!(hl.x, 256);
        assert_eq!(hl.width, 150);
        assert_eq!(hl.height, 100);
    }
}
