//! Kutil's single-loop "double-loop" interior schedule.
//!
//! One left-to-right sweep holding a four-deep sliding state `l[0..4]`. Per
//! iteration: consume two input samples, resolve the four lifting steps in
//! reverse order into `r[3..=0]`, emit two finished outputs. Memory traffic
//! is half of the naive sweeps.

use wavelift_core::Sample;

use crate::wavelet::{LiftOp4, Scaling};

/// Run `steps` double-lifting iterations over `body`. A scaling-free call
/// degrades to the baseline (the fused loop has scaling baked into its
/// input/output stations).
pub fn double_loop<T: Sample>(body: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    if scaling == Scaling::None {
        super::merged(body, steps, k, scaling);
        return;
    }

    let w = [k.delta, k.gamma, k.beta, k.alpha];
    let inv_zeta = k.zeta.recip();

    // Slide in the left border.
    let mut l = [body[0], body[1], body[2], body[3]];

    for s in 0..steps {
        let mut in0 = body[4 + s * 2];
        let mut in1 = body[5 + s * 2];

        if scaling == Scaling::Before {
            in0 *= inv_zeta;
            in1 *= k.zeta;
        }

        let c = [l[1], l[2], l[3], in0];
        let mut out0 = l[0];

        // z[] = c[] + w[] * (l[] + r[]), resolved top-down: each lane feeds
        // the next step's missing right neighbour.
        let r3 = in1;
        let r2 = c[3] + w[3] * (l[3] + r3);
        let r1 = c[2] + w[2] * (l[2] + r2);
        let r0 = c[1] + w[1] * (l[1] + r1);
        let mut out1 = c[0] + w[0] * (l[0] + r0);

        if scaling == Scaling::After {
            out0 *= inv_zeta;
            out1 *= k.zeta;
        }

        body[s * 2] = out0;
        body[1 + s * 2] = out1;

        l = [r0, r1, r2, r3];
    }

    // Slide out the right border.
    body[steps * 2] = l[0];
    body[steps * 2 + 1] = l[1];
    body[steps * 2 + 2] = l[2];
    body[steps * 2 + 3] = l[3];
}
