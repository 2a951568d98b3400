//! The merged four-step lifting kernel and its schedules.
//!
//! All schedules share one arrangement: the four lifting steps are applied
//! at staggered offsets (step `k` writes positions `off + (4 - k) + 2s`),
//! so that after the interior runs, every coefficient further than four
//! positions from either edge carries its complete update. The first and
//! last few coefficients are finished by the straight-line prolog/epilog in
//! [`boundary`], and vectors with fewer than four interior coefficients are
//! handled entirely by its `short` routine.
//!
//! The interior itself is pure data movement arithmetic and is provided in
//! eight equivalent orderings (see [`crate::Schedule`]); [`lift4`] is the
//! selector that validates applicability and falls back to the baseline.

pub mod boundary;
pub(crate) mod dl;
pub(crate) mod offload;
pub(crate) mod reg;
pub(crate) mod sdl;
pub(crate) mod sdl2;
pub(crate) mod sdl6;

use tracing::warn;
use wavelift_core::geom::even_floor;
use wavelift_core::Sample;

use crate::schedule::{is_aligned_16, Schedule};
use crate::wavelet::{LiftOp4, Scaling};

/// Transform `arr[off..n]` in place through the four lifting steps plus
/// scaling. `off` selects whether the first treated coefficient is a detail
/// (1, forward) or an approximation (0, inverse); `scaling` places the
/// ζ-sweep before or after the lifting.
///
/// Contract: `n >= 2`, `off <= 1`, `arr` covers at least `n + 2` elements
/// (the merged pipelines prefetch up to one lane group past the last pair),
/// and the input is finite. Violations panic; the kernel itself cannot fail.
pub fn lift4<T: Sample>(
    arr: &mut [T],
    off: usize,
    n: usize,
    k: &LiftOp4<T>,
    scaling: Scaling,
    schedule: Schedule,
) {
    assert!(n >= 2, "lift4 needs at least two coefficients");
    assert!(off <= 1, "offset must be 0 or 1");
    assert!(arr.len() >= n, "vector shorter than its declared length");
    debug_assert!(
        arr[..n].iter().all(|v| v.is_finite()),
        "non-finite input is a contract violation"
    );

    if n - off < 4 {
        boundary::short(arr, off, n, k, scaling);
        return;
    }

    boundary::prolog(arr, off, n, k, scaling);

    let steps = (even_floor(n - off) - 4) / 2;
    let body = &mut arr[off..];
    match schedule {
        Schedule::Baseline => merged(body, steps, k, scaling),
        Schedule::OffloadBanked => offload::banked(body, steps, k, scaling),
        Schedule::EdgesOnly => {}
        Schedule::OffloadWhole => offload::whole(body, steps, k, scaling),
        Schedule::DoubleLoop => dl::double_loop(body, steps, k, scaling),
        Schedule::Sdl => {
            if steps < 3 {
                merged(body, steps, k, scaling);
            } else {
                sdl::sdl(body, steps, k, scaling);
            }
        }
        Schedule::Sdl2 | Schedule::Sdl2Vec => {
            if short_for_sdl(body, steps, schedule) {
                merged(body, steps, k, scaling);
            } else if schedule == Schedule::Sdl2Vec {
                sdl2::run::<T, reg::Lane4<T>>(body, steps, k, scaling);
            } else {
                sdl2::run::<T, reg::ScalarReg<T>>(body, steps, k, scaling);
            }
        }
        Schedule::Sdl6 | Schedule::Sdl6Vec => {
            if short_for_sdl(body, steps, schedule) {
                merged(body, steps, k, scaling);
            } else if schedule == Schedule::Sdl6Vec {
                sdl6::run::<T, reg::Lane4<T>>(body, steps, k, scaling);
            } else {
                sdl6::run::<T, reg::ScalarReg<T>>(body, steps, k, scaling);
            }
        }
    }

    boundary::epilog(arr, off, n, k, scaling);
}

/// Applicability guard for the iteration-merged schedules: three interior
/// steps minimum, room for the one-lane prefetch, and (for the vector
/// forms) a 16-byte aligned body. Failing calls fall back to the baseline.
fn short_for_sdl<T: Sample>(body: &[T], steps: usize, schedule: Schedule) -> bool {
    if steps < 3 || body.len() < 2 * steps + 6 {
        return true;
    }
    if schedule.needs_alignment() && !is_aligned_16(body) {
        warn!(?schedule, "scratch not 16-byte aligned; using baseline");
        return true;
    }
    false
}

/// Baseline interior: four staggered sweeps plus the scale sweeps. Step
/// coefficients run `alpha` at offset 4 down to `delta` at offset 1.
pub(crate) fn merged<T: Sample>(body: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    let inv_zeta = k.zeta.recip();

    if scaling == Scaling::Before {
        for s in 0..steps {
            body[4 + s * 2] *= inv_zeta;
        }
        for s in 0..steps {
            body[5 + s * 2] *= k.zeta;
        }
    }

    let coeffs = [k.delta, k.gamma, k.beta, k.alpha];
    for off in (1..=4).rev() {
        let c = coeffs[off - 1];
        for s in 0..steps {
            let i = off + 2 * s;
            body[i] += c * (body[i - 1] + body[i + 1]);
        }
    }

    if scaling == Scaling::After {
        for s in 0..steps {
            body[s * 2] *= inv_zeta;
        }
        for s in 0..steps {
            body[1 + s * 2] *= k.zeta;
        }
    }
}
