//! Criterion benches for the 1-D CDF 9/7 kernel schedules.
//!
//! Input vectors are deterministic across runs (LCG-based) so results are
//! comparable over time. Throughput is reported in **elements**.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wavelift_kernels::cdf97;
use wavelift_kernels::{Schedule, Scratch};

/// Deterministic "random" sample vector of length `n`, seeded by `seed`.
#[inline]
fn det_vec(n: usize, seed: u64) -> Vec<f32> {
    const A: u64 = 1_664_525;
    const C: u64 = 1_013_904_223;
    const M: u64 = 1u64 << 32;

    let mut a = A.wrapping_mul(seed).wrapping_add(C);
    (0..n)
        .map(|_| {
            a = a.wrapping_mul(A).wrapping_add(C) % M;
            (a as f32 / M as f32) * 2.0 - 1.0
        })
        .collect()
}

fn bench_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("cdf97_forward_1d");

    for &n in &[1usize << 10, 1 << 14, 1 << 18] {
        group.throughput(Throughput::Elements(n as u64));
        let input = det_vec(n, 0x5eed);

        for schedule in [
            Schedule::Baseline,
            Schedule::DoubleLoop,
            Schedule::Sdl,
            Schedule::Sdl2,
            Schedule::Sdl6,
            Schedule::Sdl2Vec,
            Schedule::Sdl6Vec,
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("{schedule:?}"), n),
                &input,
                |b, input| {
                    let mut line = input.clone();
                    let mut scratch = Scratch::with_capacity(n + 8);
                    b.iter(|| {
                        line.copy_from_slice(input);
                        cdf97::forward_split(
                            black_box(&mut line),
                            1,
                            n,
                            n / 2,
                            &mut scratch,
                            schedule,
                        );
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_schedules);
criterion_main!(benches);
