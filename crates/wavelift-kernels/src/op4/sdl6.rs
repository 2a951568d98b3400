//! SDL with 6 iterations merged via register rotation.
//!
//! Like SDL2, but the explicit centre register is gone: the lifting
//! operation accumulates into the rotating `z`, and the cyclic shift of the
//! interior is performed *by argument order* across three light/full pass
//! pairs instead of by moving values between registers. Only the pipeline
//! fill/drain passes (prolog, postcore, epilog) rotate physically.

use wavelift_core::Sample;

use super::reg::{
    op_acc, output_high, output_low, shuffle, shuffle_input_high, shuffle_input_low, Reg,
};
use crate::wavelet::{LiftOp4, Scaling};

/// Physical rotation used outside the unrolled core:
/// `(z, l, r) <- (l, r, z)`.
#[inline]
fn rotate<R: Copy>(z: &mut R, l: &mut R, r: &mut R) {
    let t = *z;
    *z = *l;
    *l = *r;
    *r = t;
}

#[inline]
fn load<T: Sample, R: Reg<T>>(body: &[T], cur: usize, v: R, scaling: Scaling) -> R {
    let inr = R::load(&body[cur..]);
    if scaling == Scaling::Before {
        inr.mul(v)
    } else {
        inr
    }
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn prolog_full<T: Sample, R: Reg<T>>(
    body: &mut [T],
    cur: &mut usize,
    w: R,
    v: R,
    l: &mut R,
    r: &mut R,
    z: &mut R,
    inr: &mut R,
    scaling: Scaling,
) {
    *inr = load(body, *cur, v, scaling);
    shuffle_input_low(*inr, z, r);
    *z = op_acc(*z, w, *l, *r);
    rotate(z, l, r);
    *cur += 4;
}

#[inline]
fn prolog_light<T: Sample, R: Reg<T>>(w: R, l: &mut R, r: &mut R, z: &mut R, inr: R) {
    shuffle_input_high(inr, z, r);
    *z = op_acc(*z, w, *l, *r);
    rotate(z, l, r);
}

/// Light core pass on the given *roles*; the caller's argument rotation is
/// the register shift.
#[inline]
fn core_light<T: Sample, R: Reg<T>>(w: R, l: &mut R, r: &mut R, z: &mut R, inr: R, out: &mut R) {
    shuffle_input_high(inr, z, r);
    *z = op_acc(*z, w, *l, *r);
    output_low(out, *l, *z);
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn core_full<T: Sample, R: Reg<T>>(
    body: &mut [T],
    cur: &mut usize,
    w: R,
    v: R,
    l: &mut R,
    r: &mut R,
    z: &mut R,
    inr: &mut R,
    out: &mut R,
    scaling: Scaling,
) {
    *inr = load(body, *cur, v, scaling);
    shuffle_input_low(*inr, z, r);
    *z = op_acc(*z, w, *l, *r);
    output_high(out, *l, *z);
    let mut quad = *out;
    if scaling == Scaling::After {
        quad = quad.mul(v);
    }
    quad.store4(&mut body[*cur - 12..]);
    *cur += 4;
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn epilog_full<T: Sample, R: Reg<T>>(
    body: &mut [T],
    cur: &mut usize,
    w: R,
    v: R,
    l: &mut R,
    r: &mut R,
    z: &mut R,
    out: &mut R,
    scaling: Scaling,
) {
    shuffle(z, r);
    *z = op_acc(*z, w, *l, *r);
    output_high(out, *l, *z);
    let mut quad = *out;
    if scaling == Scaling::After {
        quad = quad.mul(v);
    }
    quad.store4(&mut body[*cur - 12..]);
    rotate(z, l, r);
    *cur += 4;
}

#[inline]
fn epilog_light<T: Sample, R: Reg<T>>(w: R, l: &mut R, r: &mut R, z: &mut R, out: &mut R) {
    shuffle(z, r);
    *z = op_acc(*z, w, *l, *r);
    output_low(out, *l, *z);
    rotate(z, l, r);
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn epilog_flush<T: Sample, R: Reg<T>>(
    body: &mut [T],
    cur: usize,
    w: R,
    v: R,
    l: &mut R,
    r: &mut R,
    z: &mut R,
    out: &mut R,
    scaling: Scaling,
) {
    shuffle(z, r);
    *z = op_acc(*z, w, *l, *r);
    output_low(out, *l, *z);
    let mut quad = *out;
    if scaling == Scaling::After {
        quad = quad.mul(v);
    }
    quad.store2(&mut body[cur - 12..]);
    rotate(z, l, r);
}

/// Run the SDL6 interior. Needs `steps >= 3`, a scaling direction, and two
/// elements of slack after the data (the pipeline prefetches one quad).
pub fn run<T: Sample, R: Reg<T>>(body: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    debug_assert!(steps >= 3);
    debug_assert!(body.len() >= 2 * steps + 6);
    assert!(
        scaling != Scaling::None,
        "the SDL schedules require a scaling direction"
    );

    let inv_zeta = k.zeta.recip();
    let w = R::from_coeffs([k.delta, k.gamma, k.beta, k.alpha]);
    let v = R::from_coeffs([inv_zeta, k.zeta, inv_zeta, k.zeta]);
    let (mut l, mut r, mut z) = (R::zero(), R::zero(), R::zero());
    let mut inr = R::zero();
    let mut out;
    let mut cur = 0usize;

    // Pipeline fill.
    out = R::load(&body[cur..]);
    cur += 4;
    l.set_lane(3, out.lane(3));
    prolog_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut inr, scaling);
    l.set_lane(2, out.lane(2));
    prolog_light(w, &mut l, &mut r, &mut z, inr);
    l.set_lane(1, out.lane(1));
    prolog_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut inr, scaling);
    l.set_lane(0, out.lane(0));

    let s = steps - 3;
    let groups = s / 6;
    let tail_pairs = (s % 6) / 2;

    // Unrolled core: six passes with the register shift expressed by the
    // rotated argument order (l, r, z) -> (r, z, l) -> (z, l, r) -> …
    for _ in 0..groups {
        core_light(w, &mut l, &mut r, &mut z, inr, &mut out);
        core_full(body, &mut cur, w, v, &mut r, &mut z, &mut l, &mut inr, &mut out, scaling);
        core_light(w, &mut z, &mut l, &mut r, inr, &mut out);
        core_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut inr, &mut out, scaling);
        core_light(w, &mut r, &mut z, &mut l, inr, &mut out);
        core_full(body, &mut cur, w, v, &mut z, &mut l, &mut r, &mut inr, &mut out, scaling);
    }

    // Leftover iterations run with physical rotation.
    for _ in 0..tail_pairs {
        core_light(w, &mut l, &mut r, &mut z, inr, &mut out);
        rotate(&mut z, &mut l, &mut r);
        core_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut inr, &mut out, scaling);
        rotate(&mut z, &mut l, &mut r);
    }
    if s % 2 == 1 {
        core_light(w, &mut l, &mut r, &mut z, inr, &mut out);
        rotate(&mut z, &mut l, &mut r);
    }

    // Pipeline drain.
    let base = 2 * steps;
    if s % 2 == 1 {
        body[base + 3] = l.lane(3);
        epilog_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut out, scaling);
        body[base + 2] = l.lane(2);
        epilog_light(w, &mut l, &mut r, &mut z, &mut out);
        body[base + 1] = l.lane(1);
        epilog_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut out, scaling);
        body[base] = l.lane(0);
    } else {
        body[base + 3] = l.lane(3);
        epilog_light(w, &mut l, &mut r, &mut z, &mut out);
        body[base + 2] = l.lane(2);
        epilog_full(body, &mut cur, w, v, &mut l, &mut r, &mut z, &mut out, scaling);
        body[base + 1] = l.lane(1);
        epilog_flush(body, cur, w, v, &mut l, &mut r, &mut z, &mut out, scaling);
        body[base] = l.lane(0);
    }
}
