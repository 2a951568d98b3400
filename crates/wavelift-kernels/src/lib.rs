//! 1-D lifting kernels for the wavelift workspace.
//!
//! - `wavelet`: the CDF 9/7 and CDF 5/3 lifting constants and the signed
//!   forward/inverse parameter sets.
//! - `sweep`: the per-step sweep engine over a 2- or 4-coefficient step
//!   list (the naive schedule, and the sole engine for CDF 5/3).
//! - `op4`: the merged four-step kernel with its boundary handler and the
//!   eight interior schedules (baseline, offload, double-loop, SDL,
//!   SDL2/SDL6 and their four-lane vector forms), plus the dispatcher.
//! - `scratch`: a heap-allocated, 16-byte aligned work vector.
//! - `cdf97`/`cdf53`: the public 1-D split/merge entry points used by the
//!   2-D driver.
//!
//! All kernels transform in place and are generic over
//! [`wavelift_core::Sample`], so `f32` and `f64` share one implementation.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod cdf53;
pub mod cdf97;
pub mod op4;
pub mod schedule;
pub mod scratch;
pub mod sweep;
pub mod wavelet;

pub use schedule::Schedule;
pub use scratch::Scratch;
pub use wavelet::{LiftOp4, LiftPair, Scaling};

use wavelift_core::Sample;

/// A wavelet's pair of 1-D row transforms, as consumed by the 2-D driver.
///
/// `line` is one row or column of the frame. The forward direction reads `n`
/// samples at `stride`, lifts them, and scatters the L half to positions
/// `0, stride, …` and the H half to `split, split + stride, …`; the inverse
/// gathers the halves back and reconstructs the `n` samples in place.
/// `n == 1` is a single scale multiplication and `n == 0` never touches the
/// buffer.
pub trait Lifting1d<T: Sample> {
    /// Forward transform of one line, split into L and H halves.
    fn forward_split(
        line: &mut [T],
        stride: usize,
        n: usize,
        split: usize,
        scratch: &mut Scratch<T>,
        schedule: Schedule,
    );

    /// Inverse transform of one line from its L and H halves.
    fn inverse_merge(
        line: &mut [T],
        stride: usize,
        n: usize,
        split: usize,
        scratch: &mut Scratch<T>,
        schedule: Schedule,
    );
}

/// The CDF 9/7 biorthogonal wavelet (four lifting steps + scaling).
pub struct Cdf97;

/// The CDF 5/3 biorthogonal wavelet (two lifting steps + scaling).
pub struct Cdf53;
