//! Boundary handler: prolog, epilog, and the short case.
//!
//! Lifting near an edge differs from the interior: one neighbour is
//! missing, and symmetric reflection substitutes `2 * present_neighbour`.
//! Which straight-line sequence applies depends on `off` (whether the first
//! coefficient is a detail or an approximation), the parity of `n - off`,
//! and the scaling direction. The sequences below are the full enumeration;
//! each writes only the scratch positions it owns (first <= 5 for the
//! prolog, last <= 5 for the epilog, all of them for `short`).
//!
//! Scaling placement: the forward direction (`off == 1`, scale after) has
//! its edge scales split between prolog (`arr[0]`) and epilog (last 4 or 5);
//! the inverse (`off == 0`, scale before) descales the first four in the
//! prolog and at most `arr[n-1]` in the epilog — the interior pass covers
//! the rest.

use wavelift_core::Sample;

use crate::wavelet::{LiftOp4, Scaling};

/// Left-edge corrections. Needs `n - off >= 4`.
pub fn prolog<T: Sample>(arr: &mut [T], off: usize, n: usize, k: &LiftOp4<T>, scaling: Scaling) {
    debug_assert!(n - off >= 4);
    let (a, b, g, d) = (k.alpha, k.beta, k.gamma, k.delta);
    let two = T::TWO;

    if off == 1 {
        arr[1] += a * (arr[0] + arr[2]);
        arr[3] += a * (arr[2] + arr[4]);

        arr[0] += two * b * arr[1];
        arr[2] += b * (arr[1] + arr[3]);

        arr[1] += g * (arr[0] + arr[2]);

        arr[0] += two * d * arr[1];

        if scaling == Scaling::After {
            arr[0] *= k.zeta;
        }
    } else {
        if scaling == Scaling::Before {
            let inv_zeta = k.zeta.recip();
            arr[0] *= inv_zeta;
            arr[1] *= k.zeta;
            arr[2] *= inv_zeta;
            arr[3] *= k.zeta;
        }

        arr[0] += two * a * arr[1];
        arr[2] += a * (arr[1] + arr[3]);

        arr[1] += b * (arr[0] + arr[2]);

        arr[0] += two * g * arr[1];
    }
}

/// Right-edge corrections. Needs `n - off >= 4`.
pub fn epilog<T: Sample>(arr: &mut [T], off: usize, n: usize, k: &LiftOp4<T>, scaling: Scaling) {
    debug_assert!(n - off >= 4);
    let (a, b, g, d) = (k.alpha, k.beta, k.gamma, k.delta);
    let two = T::TWO;
    let inv_zeta = k.zeta.recip();

    if (n - off) % 2 == 0 {
        arr[n - 1] += two * b * arr[n - 2];

        arr[n - 2] += g * (arr[n - 1] + arr[n - 3]);

        arr[n - 1] += two * d * arr[n - 2];
        arr[n - 3] += d * (arr[n - 4] + arr[n - 2]);

        if scaling == Scaling::After {
            arr[n - 4] *= inv_zeta;
            arr[n - 3] *= k.zeta;
            arr[n - 2] *= inv_zeta;
            arr[n - 1] *= k.zeta;
        }
    } else {
        if scaling == Scaling::Before {
            arr[n - 1] *= inv_zeta;
        }

        arr[n - 1] += two * a * arr[n - 2];

        arr[n - 2] += b * (arr[n - 1] + arr[n - 3]);

        arr[n - 1] += two * g * arr[n - 2];
        arr[n - 3] += g * (arr[n - 2] + arr[n - 4]);

        arr[n - 2] += d * (arr[n - 1] + arr[n - 3]);
        arr[n - 4] += d * (arr[n - 5] + arr[n - 3]);

        if scaling == Scaling::After {
            arr[n - 5] *= inv_zeta;
            arr[n - 4] *= k.zeta;
            arr[n - 3] *= inv_zeta;
            arr[n - 2] *= k.zeta;
            arr[n - 1] *= inv_zeta;
        }
    }
}

/// Whole-vector handling for `n - off < 4`: prolog and epilog collapse into
/// one straight-line sequence per length.
pub fn short<T: Sample>(arr: &mut [T], off: usize, n: usize, k: &LiftOp4<T>, scaling: Scaling) {
    debug_assert!(n - off < 4 && n >= 2);
    let (a, b, g, d) = (k.alpha, k.beta, k.gamma, k.delta);
    let two = T::TWO;
    let inv_zeta = k.zeta.recip();

    if off == 1 {
        match n {
            2 => {
                arr[1] += two * a * arr[0];
                arr[0] += two * b * arr[1];
                arr[1] += two * g * arr[0];
                arr[0] += two * d * arr[1];

                if scaling == Scaling::After {
                    arr[0] *= k.zeta;
                    arr[1] *= inv_zeta;
                }
            }
            3 => {
                arr[1] += a * (arr[0] + arr[2]);

                arr[0] += two * b * arr[1];
                arr[2] += two * b * arr[1];

                arr[1] += g * (arr[0] + arr[2]);

                arr[0] += two * d * arr[1];
                arr[2] += two * d * arr[1];

                if scaling == Scaling::After {
                    arr[0] *= k.zeta;
                    arr[1] *= inv_zeta;
                    arr[2] *= k.zeta;
                }
            }
            _ => {
                arr[1] += a * (arr[0] + arr[2]);
                arr[3] += two * a * arr[2];

                arr[0] += two * b * arr[1];
                arr[2] += b * (arr[1] + arr[3]);

                arr[1] += g * (arr[0] + arr[2]);
                arr[3] += two * g * arr[2];

                arr[0] += two * d * arr[1];
                arr[2] += d * (arr[1] + arr[3]);

                if scaling == Scaling::After {
                    arr[0] *= k.zeta;
                    arr[1] *= inv_zeta;
                    arr[2] *= k.zeta;
                    arr[3] *= inv_zeta;
                }
            }
        }
    } else if n == 2 {
        if scaling == Scaling::Before {
            arr[0] *= inv_zeta;
            arr[1] *= k.zeta;
        }

        arr[0] += two * a * arr[1];
        arr[1] += two * b * arr[0];
        arr[0] += two * g * arr[1];
        arr[1] += two * d * arr[0];
    } else {
        if scaling == Scaling::Before {
            arr[0] *= inv_zeta;
            arr[1] *= k.zeta;
            arr[2] *= inv_zeta;
        }

        arr[0] += two * a * arr[1];
        arr[2] += two * a * arr[1];

        arr[1] += b * (arr[0] + arr[2]);

        arr[0] += two * g * arr[1];
        arr[2] += two * g * arr[1];

        arr[1] += d * (arr[0] + arr[2]);
    }
}
