//! The separable 2-D driver.
//!
//! Rows of one level never share output cells, so the row pass distributes
//! frame rows across the pool with per-task scratch. Columns interleave in
//! memory and cannot be handed out as disjoint `&mut` slices; the column
//! pass therefore runs in two barrier-separated phases: gather + transform
//! every column into a column-major stage buffer (reading the frame
//! shared), then scatter the stage back row-wise. The stage is allocated
//! once per transform call and reused across levels, as is the per-task
//! scratch capacity.

use rayon::prelude::*;
use tracing::debug;

use wavelift_core::geom::{ceil_div2, ceil_div_pow2, floor_div2};
use wavelift_core::stride::fill_stride;
use wavelift_core::{Extent, FrameMut, Sample};
use wavelift_kernels::{Cdf53, Cdf97, Lifting1d, Schedule, Scratch};

use crate::config::TransformConfig;
use crate::levels;
use crate::padding::{zero_forward, zero_inverse};

/// Scratch slack past the longest axis (lane alignment + pipeline
/// prefetch).
const LINE_SLACK: usize = 8;

fn scratch_capacity(size_o: Extent) -> usize {
    size_o.max_axis() + LINE_SLACK
}

fn worker_pool(cfg: &TransformConfig) -> rayon::ThreadPool {
    assert!(cfg.num_threads >= 1, "worker count must be at least 1");
    rayon::ThreadPoolBuilder::new()
        .num_threads(cfg.num_threads)
        .build()
        .unwrap_or_else(|e| panic!("failed to spawn transform worker pool: {e}"))
}

/// Multi-level forward transform with the wavelet chosen by `W`.
///
/// `j_max` is in/out: negative or too-deep requests are clamped to the
/// frame limit and written back; a matching inverse call must pass the
/// written-back value. With `decompose_one` a length-1 axis keeps
/// decomposing along the other axis. `zero_padding` zeroes the frame cells
/// outside the produced subbands after every level.
pub fn forward_multi<T: Sample, W: Lifting1d<T>>(
    frame: &mut FrameMut<'_, T>,
    j_max: &mut i32,
    decompose_one: bool,
    zero_padding: bool,
    cfg: &TransformConfig,
) {
    let j_eff = levels::clamp_levels(j_max, frame.size_o, decompose_one);
    let pool = worker_pool(cfg);

    pool.install(|| {
        let mut stage = vec![T::ZERO; frame.size_o.cells()];
        for j in 0..j_eff.unsigned_abs() {
            forward_level::<T, W>(frame, j, zero_padding, cfg.schedule, &mut stage);
        }
    });
}

/// Multi-level inverse transform; the mirror of [`forward_multi`] in
/// reverse level order. `j_max` must be the value a forward call wrote
/// back (out-of-range values mean "as deep as the frame allows").
pub fn inverse_multi<T: Sample, W: Lifting1d<T>>(
    frame: &mut FrameMut<'_, T>,
    j_max: i32,
    decompose_one: bool,
    zero_padding: bool,
    cfg: &TransformConfig,
) {
    let j_eff = levels::effective_inverse_levels(j_max, frame.size_o, decompose_one);
    let pool = worker_pool(cfg);

    pool.install(|| {
        let mut stage = vec![T::ZERO; frame.size_o.cells()];
        for j in (1..=j_eff.unsigned_abs()).rev() {
            inverse_level::<T, W>(frame, j, zero_padding, cfg.schedule, &mut stage);
        }
    });
}

fn forward_level<T: Sample, W: Lifting1d<T>>(
    frame: &mut FrameMut<'_, T>,
    j: u32,
    zero_padding: bool,
    schedule: Schedule,
    stage: &mut [T],
) {
    let (o, i) = (frame.size_o, frame.size_i);
    let o_src = Extent::new(ceil_div_pow2(o.x, j), ceil_div_pow2(o.y, j));
    let o_dst = Extent::new(ceil_div_pow2(o.x, j + 1), ceil_div_pow2(o.y, j + 1));
    let i_src = Extent::new(ceil_div_pow2(i.x, j), ceil_div_pow2(i.y, j));
    let (stride_x, stride_y) = (frame.stride_x, frame.stride_y);
    let cap = scratch_capacity(o);

    debug!(level = j, rows = o_src.y, cols = o_src.x, "forward level");

    // Row pass.
    frame
        .data
        .par_chunks_mut(stride_x)
        .take(o_src.y)
        .for_each_init(
            || Scratch::with_capacity(cap),
            |scratch, row| {
                W::forward_split(row, stride_y, i_src.x, o_dst.x * stride_y, scratch, schedule);
            },
        );

    // Column pass, phase 1: every column into the stage.
    let stage_h = o.y;
    {
        let data: &[T] = frame.data;
        stage
            .par_chunks_mut(stage_h)
            .take(o_src.x)
            .enumerate()
            .for_each_init(
                || Scratch::with_capacity(cap),
                |scratch, (x, col)| {
                    for (y, cell) in col.iter_mut().enumerate().take(o_src.y) {
                        *cell = data[y * stride_x + x * stride_y];
                    }
                    W::forward_split(col, 1, i_src.y, o_dst.y, scratch, schedule);
                },
            );
    }

    // Column pass, phase 2: scatter back row-wise.
    {
        let stage_ro: &[T] = stage;
        frame
            .data
            .par_chunks_mut(stride_x)
            .take(o_src.y)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..o_src.x {
                    row[x * stride_y] = stage_ro[x * stage_h + y];
                }
            });
    }

    if zero_padding {
        let l_tail = ceil_div2(i_src.y)..o_dst.y;
        let h_tail = o_dst.y + floor_div2(i_src.y)..o_src.y;
        frame
            .data
            .par_chunks_mut(stride_x)
            .take(o_src.y)
            .enumerate()
            .for_each(|(y, row)| {
                zero_forward(
                    row,
                    stride_y,
                    i_src.x,
                    o_dst.x,
                    o_src.x - o_dst.x,
                    o_dst.x * stride_y,
                );
                if l_tail.contains(&y) || h_tail.contains(&y) {
                    fill_stride(row, stride_y, o_src.x, T::ZERO);
                }
            });
    }
}

fn inverse_level<T: Sample, W: Lifting1d<T>>(
    frame: &mut FrameMut<'_, T>,
    j: u32,
    zero_padding: bool,
    schedule: Schedule,
    stage: &mut [T],
) {
    let (o, i) = (frame.size_o, frame.size_i);
    let o_src = Extent::new(ceil_div_pow2(o.x, j), ceil_div_pow2(o.y, j));
    let o_dst = Extent::new(ceil_div_pow2(o.x, j - 1), ceil_div_pow2(o.y, j - 1));
    let i_dst = Extent::new(ceil_div_pow2(i.x, j - 1), ceil_div_pow2(i.y, j - 1));
    let (stride_x, stride_y) = (frame.stride_x, frame.stride_y);
    let cap = scratch_capacity(o);

    debug!(level = j, rows = o_dst.y, cols = o_dst.x, "inverse level");

    // Row pass.
    frame
        .data
        .par_chunks_mut(stride_x)
        .take(o_dst.y)
        .for_each_init(
            || Scratch::with_capacity(cap),
            |scratch, row| {
                W::inverse_merge(row, stride_y, i_dst.x, o_src.x * stride_y, scratch, schedule);
            },
        );

    // Column pass, phase 1.
    let stage_h = o.y;
    {
        let data: &[T] = frame.data;
        stage
            .par_chunks_mut(stage_h)
            .take(o_dst.x)
            .enumerate()
            .for_each_init(
                || Scratch::with_capacity(cap),
                |scratch, (x, col)| {
                    for (y, cell) in col.iter_mut().enumerate().take(o_dst.y) {
                        *cell = data[y * stride_x + x * stride_y];
                    }
                    W::inverse_merge(col, 1, i_dst.y, o_src.y, scratch, schedule);
                },
            );
    }

    // Column pass, phase 2.
    {
        let stage_ro: &[T] = stage;
        frame
            .data
            .par_chunks_mut(stride_x)
            .take(o_dst.y)
            .enumerate()
            .for_each(|(y, row)| {
                for x in 0..o_dst.x {
                    row[x * stride_y] = stage_ro[x * stage_h + y];
                }
            });
    }

    if zero_padding {
        let tail = i_dst.y..o_dst.y;
        frame
            .data
            .par_chunks_mut(stride_x)
            .take(o_dst.y)
            .enumerate()
            .for_each(|(y, row)| {
                zero_inverse(row, stride_y, i_dst.x, o_dst.x);
                if tail.contains(&y) {
                    fill_stride(row, stride_y, o_dst.x, T::ZERO);
                }
            });
    }
}

/// Forward 2-D CDF 9/7 transform.
pub fn forward_cdf97<T: Sample>(
    frame: &mut FrameMut<'_, T>,
    j_max: &mut i32,
    decompose_one: bool,
    zero_padding: bool,
    cfg: &TransformConfig,
) {
    forward_multi::<T, Cdf97>(frame, j_max, decompose_one, zero_padding, cfg);
}

/// Inverse 2-D CDF 9/7 transform.
pub fn inverse_cdf97<T: Sample>(
    frame: &mut FrameMut<'_, T>,
    j_max: i32,
    decompose_one: bool,
    zero_padding: bool,
    cfg: &TransformConfig,
) {
    inverse_multi::<T, Cdf97>(frame, j_max, decompose_one, zero_padding, cfg);
}

/// Forward 2-D CDF 5/3 transform.
pub fn forward_cdf53<T: Sample>(
    frame: &mut FrameMut<'_, T>,
    j_max: &mut i32,
    decompose_one: bool,
    zero_padding: bool,
    cfg: &TransformConfig,
) {
    forward_multi::<T, Cdf53>(frame, j_max, decompose_one, zero_padding, cfg);
}

/// Inverse 2-D CDF 5/3 transform.
pub fn inverse_cdf53<T: Sample>(
    frame: &mut FrameMut<'_, T>,
    j_max: i32,
    decompose_one: bool,
    zero_padding: bool,
    cfg: &TransformConfig,
) {
    inverse_multi::<T, Cdf53>(frame, j_max, decompose_one, zero_padding, cfg);
}
