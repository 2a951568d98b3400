//! Kernel schedule selection.
//!
//! The nine interior schedules compute identical coefficients and differ
//! only in memory-access pattern; the selector validates applicability
//! (minimum interior length, scratch alignment) and falls back to the
//! baseline when a guard fails.

use serde::{Deserialize, Serialize};

/// One of the equivalent orderings of the lifting arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Schedule {
    /// Merged four-sweep interior; the reference everything falls back to.
    Baseline,
    /// Offload stub, vector partitioned into accelerator-bank blocks.
    OffloadBanked,
    /// Prolog and epilog only, no interior work (a measurement aid; the
    /// transform output is *not* valid).
    EdgesOnly,
    /// Offload stub, whole vector at once.
    OffloadWhole,
    /// Kutil's single-loop "double-loop" with a sliding 4-state.
    DoubleLoop,
    /// Shifted double-loop.
    Sdl,
    /// Shifted double-loop, 2 iterations merged per pass pair.
    Sdl2,
    /// Shifted double-loop, 6 iterations merged via register rotation.
    Sdl6,
    /// Four-lane vector form of [`Schedule::Sdl2`]; needs aligned scratch.
    Sdl2Vec,
    /// Four-lane vector form of [`Schedule::Sdl6`]; needs aligned scratch.
    Sdl6Vec,
}

impl Schedule {
    /// All schedules, indexed by their stable numeric tag `0..=9`.
    pub const ALL: [Self; 10] = [
        Self::Baseline,
        Self::OffloadBanked,
        Self::EdgesOnly,
        Self::OffloadWhole,
        Self::DoubleLoop,
        Self::Sdl,
        Self::Sdl2,
        Self::Sdl6,
        Self::Sdl2Vec,
        Self::Sdl6Vec,
    ];

    /// Stable numeric tag of this schedule.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Baseline => 0,
            Self::OffloadBanked => 1,
            Self::EdgesOnly => 2,
            Self::OffloadWhole => 3,
            Self::DoubleLoop => 4,
            Self::Sdl => 5,
            Self::Sdl2 => 6,
            Self::Sdl6 => 7,
            Self::Sdl2Vec => 8,
            Self::Sdl6Vec => 9,
        }
    }

    /// Schedule for a numeric tag. The table is closed: an unknown value is
    /// a contract violation.
    #[must_use]
    pub fn from_index(i: u8) -> Self {
        assert!(
            (i as usize) < Self::ALL.len(),
            "unsupported acceleration type {i}"
        );
        Self::ALL[i as usize]
    }

    /// Whether this schedule demands a 16-byte aligned work vector.
    #[inline]
    #[must_use]
    pub const fn needs_alignment(self) -> bool {
        matches!(self, Self::Sdl2Vec | Self::Sdl6Vec)
    }
}

/// Whether a slice starts on a 16-byte boundary.
#[inline]
#[must_use]
pub fn is_aligned_16<T>(s: &[T]) -> bool {
    (s.as_ptr() as usize) % 16 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for (i, s) in Schedule::ALL.iter().enumerate() {
            assert_eq!(Schedule::from_index(i as u8), *s);
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    #[should_panic(expected = "unsupported acceleration type")]
    fn unknown_tag_aborts() {
        let _ = Schedule::from_index(10);
    }
}
