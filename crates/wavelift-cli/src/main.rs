// crates/wavelift-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

mod pgm;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::{rngs::StdRng, Rng as _, SeedableRng};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wavelift_core::{compare, locate_subband, Band, Extent, Image, Layout, Sample};
use wavelift_kernels::Schedule;
use wavelift_pyramid::{
    forward_cdf53, forward_cdf97, inverse_cdf53, inverse_cdf97, TransformConfig,
};

#[derive(Parser, Debug)]
#[command(
    name = "wavelift",
    about = "2-D lifting-scheme wavelet transforms (CDF 9/7 and 5/3)",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Transform a synthetic image forward and back and verify restoration.
    Roundtrip {
        /// Image width in samples
        #[arg(long, default_value_t = 512)]
        width: usize,

        /// Image height in samples
        #[arg(long, default_value_t = 512)]
        height: usize,

        /// Decomposition levels (-1 = as deep as possible)
        #[arg(long, default_value_t = -1)]
        levels: i32,

        /// Frame layout
        #[arg(long, value_enum, default_value_t = LayoutOpt::Packed)]
        layout: LayoutOpt,

        /// Wavelet family
        #[arg(long, value_enum, default_value_t = WaveletOpt::Cdf97)]
        wavelet: WaveletOpt,

        /// Kernel schedule
        #[arg(long, value_enum, default_value_t = ScheduleOpt::Baseline)]
        schedule: ScheduleOpt,

        /// Fill with uniform noise instead of the deterministic pattern
        #[arg(long, default_value_t = false)]
        noise: bool,

        /// Worker threads (default: all cores)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Read a PGM, decompose it, and write the coefficient pyramid as PGM.
    Decompose {
        /// Input image (plain P2 PGM)
        #[arg(long)]
        input: PathBuf,

        /// Output image (plain P2 PGM)
        #[arg(long, default_value = "pyramid.pgm")]
        output: PathBuf,

        /// Decomposition levels
        #[arg(long, default_value_t = 3)]
        levels: i32,

        /// Wavelet family
        #[arg(long, value_enum, default_value_t = WaveletOpt::Cdf97)]
        wavelet: WaveletOpt,

        /// Kernel schedule
        #[arg(long, value_enum, default_value_t = ScheduleOpt::Baseline)]
        schedule: ScheduleOpt,

        /// Display gain for the log magnitude mapping
        #[arg(long, default_value_t = 100.0)]
        gain: f32,
    },

    /// Compare two PGM images in max norm.
    Compare {
        /// Left-hand image (plain P2 PGM)
        #[arg(long)]
        lhs: PathBuf,

        /// Right-hand image (plain P2 PGM)
        #[arg(long)]
        rhs: PathBuf,

        /// Largest tolerated per-sample difference
        #[arg(long, default_value_t = 1.0)]
        eps: f32,
    },

    /// Decompose a PGM and report per-subband statistics as JSON.
    Stats {
        /// Input image (plain P2 PGM)
        #[arg(long)]
        input: PathBuf,

        /// Decomposition levels
        #[arg(long, default_value_t = 3)]
        levels: i32,

        /// Wavelet family
        #[arg(long, value_enum, default_value_t = WaveletOpt::Cdf97)]
        wavelet: WaveletOpt,

        /// Output path (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum LayoutOpt {
    Simple,
    Sparse,
    Packed,
}

impl From<LayoutOpt> for Layout {
    fn from(v: LayoutOpt) -> Self {
        match v {
            LayoutOpt::Simple => Self::Simple,
            LayoutOpt::Sparse => Self::Sparse,
            LayoutOpt::Packed => Self::Packed,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum WaveletOpt {
    /// CDF 9/7 (four lifting steps)
    Cdf97,
    /// CDF 5/3 (two lifting steps)
    Cdf53,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
enum ScheduleOpt {
    Baseline,
    OffloadBanked,
    OffloadWhole,
    DoubleLoop,
    Sdl,
    Sdl2,
    Sdl6,
    Sdl2Vec,
    Sdl6Vec,
}

impl From<ScheduleOpt> for Schedule {
    fn from(v: ScheduleOpt) -> Self {
        match v {
            ScheduleOpt::Baseline => Self::Baseline,
            ScheduleOpt::OffloadBanked => Self::OffloadBanked,
            ScheduleOpt::OffloadWhole => Self::OffloadWhole,
            ScheduleOpt::DoubleLoop => Self::DoubleLoop,
            ScheduleOpt::Sdl => Self::Sdl,
            ScheduleOpt::Sdl2 => Self::Sdl2,
            ScheduleOpt::Sdl6 => Self::Sdl6,
            ScheduleOpt::Sdl2Vec => Self::Sdl2Vec,
            ScheduleOpt::Sdl6Vec => Self::Sdl6Vec,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Roundtrip {
            width,
            height,
            levels,
            layout,
            wavelet,
            schedule,
            noise,
            threads,
        } => roundtrip(
            width,
            height,
            levels,
            layout.into(),
            wavelet,
            schedule.into(),
            noise,
            threads,
        ),

        Cmd::Decompose {
            input,
            output,
            levels,
            wavelet,
            schedule,
            gain,
        } => decompose(&input, &output, levels, wavelet, schedule.into(), gain),

        Cmd::Compare { lhs, rhs, eps } => compare_files(&lhs, &rhs, eps),

        Cmd::Stats {
            input,
            levels,
            wavelet,
            out,
        } => stats(&input, levels, wavelet, out.as_deref()),
    }
}

fn compare_files(lhs: &Path, rhs: &Path, eps: f32) -> Result<()> {
    let (size_l, samples_l) = pgm::read_pgm(lhs)?;
    let (size_r, samples_r) = pgm::read_pgm(rhs)?;
    if size_l != size_r {
        bail!(
            "size mismatch: {} is {}x{}, {} is {}x{}",
            lhs.display(),
            size_l.x,
            size_l.y,
            rhs.display(),
            size_r.x,
            size_r.y
        );
    }

    let a = Image::<f32>::from_vec(size_l, samples_l);
    let b = Image::<f32>::from_vec(size_r, samples_r);
    match compare(a.frame(), b.frame(), eps) {
        None => {
            println!("images match within {eps}");
            Ok(())
        }
        Some(m) => bail!(
            "images differ at ({}, {}): {} vs {}",
            m.x,
            m.y,
            m.lhs,
            m.rhs
        ),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[allow(clippy::too_many_arguments)]
fn roundtrip(
    width: usize,
    height: usize,
    mut levels: i32,
    layout: Layout,
    wavelet: WaveletOpt,
    schedule: Schedule,
    noise: bool,
    threads: Option<usize>,
) -> Result<()> {
    if width == 0 || height == 0 {
        bail!("image must be non-empty");
    }

    let mut cfg = TransformConfig::with_schedule(schedule);
    if let Some(t) = threads {
        cfg.num_threads = t;
    }

    let mut img = Image::<f32>::alloc(layout, Extent::new(width, height));
    if noise {
        let mut rng = StdRng::seed_from_u64(42);
        img.fill_with(|_, _| rng.random_range(0.0f32..255.0));
    } else {
        img.fill_test_pattern();
    }
    let reference = img.clone();

    info!(width, height, ?layout, ?wavelet, ?schedule, "forward transform");
    let start = Instant::now();
    match wavelet {
        WaveletOpt::Cdf97 => forward_cdf97(&mut img.frame_mut(), &mut levels, false, false, &cfg),
        WaveletOpt::Cdf53 => forward_cdf53(&mut img.frame_mut(), &mut levels, false, false, &cfg),
    }
    let fwd_elapsed = start.elapsed();

    info!(levels, "inverse transform");
    let start = Instant::now();
    match wavelet {
        WaveletOpt::Cdf97 => inverse_cdf97(&mut img.frame_mut(), levels, false, false, &cfg),
        WaveletOpt::Cdf53 => inverse_cdf53(&mut img.frame_mut(), levels, false, false, &cfg),
    }
    let inv_elapsed = start.elapsed();

    println!(
        "forward: {:.3} ms, inverse: {:.3} ms, levels: {levels}",
        fwd_elapsed.as_secs_f64() * 1e3,
        inv_elapsed.as_secs_f64() * 1e3
    );

    match compare(img.frame(), reference.frame(), f32::ROUND_TRIP_EPS) {
        None => {
            println!("success: image restored within {:.0e}", f32::ROUND_TRIP_EPS);
            Ok(())
        }
        Some(m) => bail!(
            "images differ at ({}, {}): {} vs {}",
            m.x,
            m.y,
            m.lhs,
            m.rhs
        ),
    }
}

fn decompose(
    input: &Path,
    output: &Path,
    mut levels: i32,
    wavelet: WaveletOpt,
    schedule: Schedule,
    gain: f32,
) -> Result<()> {
    let (size, samples) = pgm::read_pgm(input)?;
    let mut img = Image::<f32>::from_vec(size, samples);

    let cfg = TransformConfig::with_schedule(schedule);
    info!(width = size.x, height = size.y, levels, ?wavelet, "decomposing");
    match wavelet {
        WaveletOpt::Cdf97 => forward_cdf97(&mut img.frame_mut(), &mut levels, false, false, &cfg),
        WaveletOpt::Cdf53 => forward_cdf53(&mut img.frame_mut(), &mut levels, false, false, &cfg),
    }

    // Log-magnitude display mapping, normalised to the brightest
    // coefficient.
    let mut peak = 0.0f32;
    for y in 0..size.y {
        for x in 0..size.x {
            peak = peak.max((img.get(x, y).abs() * gain).ln_1p());
        }
    }
    let scale = if peak > 0.0 { pgm::MAXVAL / peak } else { 0.0 };

    let mut display = Vec::with_capacity(size.cells());
    for y in 0..size.y {
        for x in 0..size.x {
            display.push((img.get(x, y).abs() * gain).ln_1p() * scale);
        }
    }
    pgm::write_pgm(output, size, &display)?;

    println!(
        "Decomposed {} at {} levels → {}",
        input.display(),
        levels,
        output.display()
    );
    Ok(())
}

#[derive(Debug, Serialize)]
struct BandStats {
    level: u32,
    band: String,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
    min: f64,
    max: f64,
    mean: f64,
    energy: f64,
}

#[derive(Debug, Serialize)]
struct StatsReport {
    width: usize,
    height: usize,
    levels: i32,
    wavelet: String,
    bands: Vec<BandStats>,
}

fn stats(input: &Path, mut levels: i32, wavelet: WaveletOpt, out: Option<&Path>) -> Result<()> {
    let (size, samples) = pgm::read_pgm(input)?;
    let mut img = Image::<f32>::from_vec(size, samples);

    let cfg = TransformConfig::default();
    match wavelet {
        WaveletOpt::Cdf97 => forward_cdf97(&mut img.frame_mut(), &mut levels, false, false, &cfg),
        WaveletOpt::Cdf53 => forward_cdf53(&mut img.frame_mut(), &mut levels, false, false, &cfg),
    }

    let mut bands = Vec::new();
    let mut collect = |level: u32, band: Band, tag: &str| {
        let r = locate_subband(img.size_o, img.size_i, level, band);
        if r.width == 0 || r.height == 0 {
            return;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut energy = 0.0f64;
        for y in r.y..r.y + r.height {
            for x in r.x..r.x + r.width {
                let v = f64::from(img.get(x, y));
                min = min.min(v);
                max = max.max(v);
                sum += v;
                energy += v * v;
            }
        }
        let cells = (r.width * r.height) as f64;
        bands.push(BandStats {
            level,
            band: tag.to_string(),
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
            min,
            max,
            mean: sum / cells,
            energy,
        });
    };

    let deepest = levels.unsigned_abs();
    collect(deepest, Band::Ll, "LL");
    for level in 1..=deepest {
        collect(level, Band::Hl, "HL");
        collect(level, Band::Lh, "LH");
        collect(level, Band::Hh, "HH");
    }

    let report = StatsReport {
        width: size.x,
        height: size.y,
        levels,
        wavelet: format!("{wavelet:?}"),
        bands,
    };
    let json = serde_json::to_string_pretty(&report).context("serializing statistics")?;

    match out {
        Some(path) => {
            std::fs::write(path, &json)
                .with_context(|| format!("writing statistics to {}", path.display()))?;
            println!("Wrote statistics for {} → {}", input.display(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
