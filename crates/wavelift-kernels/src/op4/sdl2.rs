//! SDL with 2 iterations merged: 4 coefficients in, 4 out per pass pair.
//!
//! Passes come in two flavours. A *light* pass consumes the high half of
//! the previously loaded quad; a *full* pass loads the next quad, consumes
//! its low half, and stores the quad of outputs completed three pairs ago
//! (12 elements behind the cursor). Pairing them opens up
//! instruction-level parallelism while keeping one load and one store per
//! four coefficients.
//!
//! Each pass phase is a single function parameterised by the scaling
//! direction and the register type; the scalar and four-lane vector
//! schedules share this driver.

use wavelift_core::Sample;

use super::reg::{
    op, output_high, output_low, shuffle, shuffle_input_high, shuffle_input_low, Reg,
};
use crate::wavelet::{LiftOp4, Scaling};

struct State<T, R> {
    l: R,
    c: R,
    r: R,
    z: R,
    inr: R,
    out: R,
    w: R,
    v: R,
    cur: usize,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Sample, R: Reg<T>> State<T, R> {
    fn new(k: &LiftOp4<T>) -> Self {
        let inv_zeta = k.zeta.recip();
        Self {
            l: R::zero(),
            c: R::zero(),
            r: R::zero(),
            z: R::zero(),
            inr: R::zero(),
            out: R::zero(),
            w: R::from_coeffs([k.delta, k.gamma, k.beta, k.alpha]),
            v: R::from_coeffs([inv_zeta, k.zeta, inv_zeta, k.zeta]),
            cur: 0,
            _marker: core::marker::PhantomData,
        }
    }

    /// Preload the first quad into the import register.
    fn preload(&mut self, arr: &[T]) {
        self.out = R::load(&arr[self.cur..]);
        self.cur += 4;
    }

    fn import(&mut self, idx: usize) {
        self.l.set_lane(idx, self.out.lane(idx));
    }

    fn export(&self, arr: &mut [T], base: usize, idx: usize) {
        arr[base + idx] = self.l.lane(idx);
    }

    fn load(&mut self, arr: &[T], scaling: Scaling) {
        self.inr = R::load(&arr[self.cur..]);
        if scaling == Scaling::Before {
            self.inr = self.inr.mul(self.v);
        }
    }

    fn update(&mut self) {
        self.c = self.l;
        self.l = self.r;
        self.r = self.z;
    }

    fn prolog_full(&mut self, arr: &mut [T], scaling: Scaling) {
        self.load(arr, scaling);
        shuffle_input_low(self.inr, &mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        self.update();
        self.cur += 4;
    }

    fn prolog_light(&mut self) {
        shuffle_input_high(self.inr, &mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        self.update();
    }

    fn core_light(&mut self) {
        shuffle_input_high(self.inr, &mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        output_low(&mut self.out, self.l, self.z);
        self.update();
    }

    fn core_full(&mut self, arr: &mut [T], scaling: Scaling) {
        self.load(arr, scaling);
        shuffle_input_low(self.inr, &mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        output_high(&mut self.out, self.l, self.z);
        if scaling == Scaling::After {
            self.out = self.out.mul(self.v);
        }
        self.out.store4(&mut arr[self.cur - 12..]);
        self.update();
        self.cur += 4;
    }

    fn epilog_light(&mut self) {
        shuffle(&mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        output_low(&mut self.out, self.l, self.z);
        self.update();
    }

    fn epilog_full(&mut self, arr: &mut [T], scaling: Scaling) {
        shuffle(&mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        output_high(&mut self.out, self.l, self.z);
        if scaling == Scaling::After {
            self.out = self.out.mul(self.v);
        }
        self.out.store4(&mut arr[self.cur - 12..]);
        self.update();
        self.cur += 4;
    }

    fn epilog_flush(&mut self, arr: &mut [T], scaling: Scaling) {
        shuffle(&mut self.c, &mut self.r);
        self.z = op(self.c, self.w, self.l, self.r);
        output_low(&mut self.out, self.l, self.z);
        if scaling == Scaling::After {
            self.out = self.out.mul(self.v);
        }
        self.out.store2(&mut arr[self.cur - 12..]);
        self.update();
    }
}

/// Run the SDL2 interior. Needs `steps >= 3`, a scaling direction, and two
/// elements of slack after the data (the pipeline prefetches one quad).
pub fn run<T: Sample, R: Reg<T>>(body: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    debug_assert!(steps >= 3);
    debug_assert!(body.len() >= 2 * steps + 6);
    assert!(
        scaling != Scaling::None,
        "the SDL schedules require a scaling direction"
    );

    let mut st = State::<T, R>::new(k);

    st.preload(body);
    st.import(3);
    st.prolog_full(body, scaling);
    st.import(2);
    st.prolog_light();
    st.import(1);
    st.prolog_full(body, scaling);
    st.import(0);

    let s = steps - 3;
    for _ in 0..s / 2 {
        st.core_light();
        st.core_full(body, scaling);
    }
    if s % 2 == 1 {
        st.core_light();
    }

    let base = 2 * steps;
    if s % 2 == 1 {
        st.export(body, base, 3);
        st.epilog_full(body, scaling);
        st.export(body, base, 2);
        st.epilog_light();
        st.export(body, base, 1);
        st.epilog_full(body, scaling);
        st.export(body, base, 0);
    } else {
        st.export(body, base, 3);
        st.epilog_light();
        st.export(body, base, 2);
        st.epilog_full(body, scaling);
        st.export(body, base, 1);
        st.epilog_flush(body, scaling);
        st.export(body, base, 0);
    }
}
