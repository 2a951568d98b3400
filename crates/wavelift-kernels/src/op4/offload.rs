//! Offload stub.
//!
//! Models an external accelerator with a fixed-size coefficient bank: the
//! vector is partitioned into bank-sized blocks (overlapping by the
//! four-deep pipeline window) and each block is dispatched separately; a
//! tail too small to amortise the transfer runs on the host. No accelerator
//! exists in this build, so the device call downgrades to the baseline
//! kernel after logging — the block partitioning is still exercised, which
//! is what keeps the schedule honest.

use std::sync::atomic::{AtomicU8, Ordering};

use tracing::debug;
use wavelift_core::geom::even_floor;
use wavelift_core::Sample;

use crate::wavelet::{LiftOp4, Scaling};

/// Accelerator bank capacity in coefficients.
pub(crate) const BANK_SIZE: usize = 1024;

/// Steps below which a tail block is cheaper on the host than on the wire.
const HOST_TAIL_STEPS: usize = 25;

/// The kernel operation a device runs; the accelerator holds one at a time
/// and must be re-latched when the direction changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DeviceOp {
    ForwardKernel,
    InverseKernel,
}

/// Currently latched operation: 0 = none, 1 = forward, 2 = inverse.
static ACTIVE_OP: AtomicU8 = AtomicU8::new(0);

/// Latch `op` before a dispatch; a no-op when it is already active.
fn switch_op(op: DeviceOp) {
    let tag = match op {
        DeviceOp::ForwardKernel => 1,
        DeviceOp::InverseKernel => 2,
    };
    if ACTIVE_OP.swap(tag, Ordering::Relaxed) != tag {
        debug!(?op, "latching kernel operation into the accelerator");
    }
}

/// Block-partitioned offload: full bank-sized blocks to the device, the
/// remainder to whichever side amortises better.
pub fn banked<T: Sample>(body: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    let max_inner = even_floor(BANK_SIZE) - 4;
    let inner_len = 2 * steps;
    let blocks = inner_len / max_inner;

    for b in 0..blocks {
        let left = b * max_inner;
        device(&mut body[left..], max_inner / 2, k, scaling);
    }

    let done = blocks * max_inner;
    if done < inner_len {
        let tail_steps = (inner_len - done) / 2;
        if tail_steps > HOST_TAIL_STEPS {
            device(&mut body[done..], tail_steps, k, scaling);
        } else {
            super::merged(&mut body[done..], tail_steps, k, scaling);
        }
    }
}

/// Whole-vector offload (no bank partitioning).
pub fn whole<T: Sample>(body: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    device(body, steps, k, scaling);
}

/// One device dispatch: latch the direction, transfer, start, wait,
/// transfer back. With no accelerator present the call falls back to the
/// baseline kernel on the host; a refusal mid-flight would land here too.
fn device<T: Sample>(block: &mut [T], steps: usize, k: &LiftOp4<T>, scaling: Scaling) {
    switch_op(if scaling == Scaling::Before {
        DeviceOp::InverseKernel
    } else {
        DeviceOp::ForwardKernel
    });
    debug!(steps, "accelerator absent; lifting block on host");
    super::merged(block, steps, k, scaling);
}
