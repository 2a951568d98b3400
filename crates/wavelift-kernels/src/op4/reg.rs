//! Four-wide register abstraction for the shifted double-loop schedules.
//!
//! The SDL2/SDL6 state is three or four 4-vectors; the inner operation is
//! one add, one multiply, one add, fed by a sliding-window shuffle. The
//! scalar form works the lanes one by one; [`Lane4`] is a 16-byte aligned
//! whole-value form whose componentwise operations map onto 128-bit float
//! vectors. Both satisfy [`Reg`], so each pass phase exists once.

use wavelift_core::Sample;

/// The register operations a shifted double-loop needs.
pub(crate) trait Reg<T: Sample>: Copy {
    /// All-zero register (pipeline warm-up contents are never consumed).
    fn zero() -> Self;
    /// Build from four coefficients.
    fn from_coeffs(c: [T; 4]) -> Self;
    /// Load four consecutive elements.
    fn load(src: &[T]) -> Self;
    /// Store all four lanes.
    fn store4(self, dst: &mut [T]);
    /// Store the low pair.
    fn store2(self, dst: &mut [T]);
    /// Read lane `i`.
    fn lane(self, i: usize) -> T;
    /// Overwrite lane `i`.
    fn set_lane(&mut self, i: usize, v: T);
    /// Componentwise sum.
    fn add(self, o: Self) -> Self;
    /// Componentwise product.
    fn mul(self, o: Self) -> Self;
    /// Slide the window: lanes become `[1, 2, 3, 3]`; the stale top lane is
    /// overwritten by the following input step.
    fn shift_down(self) -> Self;
}

/// Lane-at-a-time register for the scalar SDL2/SDL6 schedules.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScalarReg<T>(pub [T; 4]);

impl<T: Sample> Reg<T> for ScalarReg<T> {
    #[inline]
    fn zero() -> Self {
        Self([T::ZERO; 4])
    }

    #[inline]
    fn from_coeffs(c: [T; 4]) -> Self {
        Self(c)
    }

    #[inline]
    fn load(src: &[T]) -> Self {
        Self([src[0], src[1], src[2], src[3]])
    }

    #[inline]
    fn store4(self, dst: &mut [T]) {
        dst[0] = self.0[0];
        dst[1] = self.0[1];
        dst[2] = self.0[2];
        dst[3] = self.0[3];
    }

    #[inline]
    fn store2(self, dst: &mut [T]) {
        dst[0] = self.0[0];
        dst[1] = self.0[1];
    }

    #[inline]
    fn lane(self, i: usize) -> T {
        self.0[i]
    }

    #[inline]
    fn set_lane(&mut self, i: usize, v: T) {
        self.0[i] = v;
    }

    #[inline]
    fn add(self, o: Self) -> Self {
        let mut out = self;
        for i in 0..4 {
            out.0[i] += o.0[i];
        }
        out
    }

    #[inline]
    fn mul(self, o: Self) -> Self {
        let mut out = self;
        for i in 0..4 {
            out.0[i] *= o.0[i];
        }
        out
    }

    #[inline]
    fn shift_down(self) -> Self {
        Self([self.0[1], self.0[2], self.0[3], self.0[3]])
    }
}

/// 16-byte aligned whole-value register; componentwise operations compile
/// to vector instructions.
#[derive(Clone, Copy, Debug)]
#[repr(align(16))]
pub(crate) struct Lane4<T>(pub [T; 4]);

impl<T: Sample> Reg<T> for Lane4<T> {
    #[inline]
    fn zero() -> Self {
        Self([T::ZERO; 4])
    }

    #[inline]
    fn from_coeffs(c: [T; 4]) -> Self {
        Self(c)
    }

    #[inline]
    fn load(src: &[T]) -> Self {
        Self([src[0], src[1], src[2], src[3]])
    }

    #[inline]
    fn store4(self, dst: &mut [T]) {
        dst[..4].copy_from_slice(&self.0);
    }

    #[inline]
    fn store2(self, dst: &mut [T]) {
        dst[..2].copy_from_slice(&self.0[..2]);
    }

    #[inline]
    fn lane(self, i: usize) -> T {
        self.0[i]
    }

    #[inline]
    fn set_lane(&mut self, i: usize, v: T) {
        self.0[i] = v;
    }

    #[inline]
    fn add(self, o: Self) -> Self {
        Self([
            self.0[0] + o.0[0],
            self.0[1] + o.0[1],
            self.0[2] + o.0[2],
            self.0[3] + o.0[3],
        ])
    }

    #[inline]
    fn mul(self, o: Self) -> Self {
        Self([
            self.0[0] * o.0[0],
            self.0[1] * o.0[1],
            self.0[2] * o.0[2],
            self.0[3] * o.0[3],
        ])
    }

    #[inline]
    fn shift_down(self) -> Self {
        Self([self.0[1], self.0[2], self.0[3], self.0[3]])
    }
}

/// `z = c + w * (l + r)` — the lifting operation on a full window.
#[inline]
pub(crate) fn op<T: Sample, R: Reg<T>>(c: R, w: R, l: R, r: R) -> R {
    c.add(w.mul(l.add(r)))
}

/// `z += w * (l + r)` — the SDL6 form, accumulating into the rotating
/// register.
#[inline]
pub(crate) fn op_acc<T: Sample, R: Reg<T>>(z: R, w: R, l: R, r: R) -> R {
    z.add(w.mul(l.add(r)))
}

/// Slide both window registers and feed the low input pair.
#[inline]
pub(crate) fn shuffle_input_low<T: Sample, R: Reg<T>>(inr: R, c: &mut R, r: &mut R) {
    let mut cc = c.shift_down();
    cc.set_lane(3, inr.lane(0));
    let mut rr = r.shift_down();
    rr.set_lane(3, inr.lane(1));
    *c = cc;
    *r = rr;
}

/// Slide both window registers and feed the high input pair.
#[inline]
pub(crate) fn shuffle_input_high<T: Sample, R: Reg<T>>(inr: R, c: &mut R, r: &mut R) {
    let mut cc = c.shift_down();
    cc.set_lane(3, inr.lane(2));
    let mut rr = r.shift_down();
    rr.set_lane(3, inr.lane(3));
    *c = cc;
    *r = rr;
}

/// Slide both window registers without new input (epilog drain).
#[inline]
pub(crate) fn shuffle<T: Sample, R: Reg<T>>(c: &mut R, r: &mut R) {
    *c = c.shift_down();
    *r = r.shift_down();
}

/// Emit a finished pair into the low half of the output register.
#[inline]
pub(crate) fn output_low<T: Sample, R: Reg<T>>(out: &mut R, l: R, z: R) {
    out.set_lane(0, l.lane(0));
    out.set_lane(1, z.lane(0));
}

/// Emit a finished pair into the high half of the output register.
#[inline]
pub(crate) fn output_high<T: Sample, R: Reg<T>>(out: &mut R, l: R, z: R) {
    out.set_lane(2, l.lane(0));
    out.set_lane(3, z.lane(0));
}
