//! wavelift-bench-harness
//!
//! Run small end-to-end benchmarks (synthesise -> forward -> inverse ->
//! compare) across kernel schedules and append CSV rows into
//! `benchmarks/reports/bench-<unix>.csv`.
//!
//! Usage examples:
//!   cargo run -p wavelift-bench-harness -- --profile configs/profiles/small.toml
//!   cargo run -p wavelift-bench-harness --release -- --profile configs/profiles/hd.toml --schedule sdl6-vec

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Deserialize;

use wavelift_core::{compare, Extent, Image, Layout, Sample};
use wavelift_kernels::Schedule;
use wavelift_pyramid::{forward_cdf97, inverse_cdf97, TransformConfig};

#[derive(Debug, Deserialize)]
struct Profile {
    /// Image width in samples
    width: usize,
    /// Image height in samples
    height: usize,
    /// Decomposition levels (-1 = as deep as possible)
    levels: i32,
    /// Repetitions of the whole pipeline
    repeats: u32,
}

fn parse_flag(name: &str, default: &str) -> String {
    let mut it = std::env::args().skip(1);
    while let Some(k) = it.next() {
        if k == format!("--{name}") {
            return it.next().unwrap_or_else(|| default.to_string());
        }
    }
    default.to_string()
}

fn dur_ms(d: Duration) -> u128 {
    d.as_millis()
}

fn parse_schedules(arg: &str) -> Result<Vec<Schedule>> {
    if arg == "all" {
        // Everything that produces a valid decomposition.
        return Ok(Schedule::ALL
            .into_iter()
            .filter(|s| *s != Schedule::EdgesOnly)
            .collect());
    }
    let s = match arg {
        "baseline" => Schedule::Baseline,
        "offload-banked" => Schedule::OffloadBanked,
        "offload-whole" => Schedule::OffloadWhole,
        "double-loop" => Schedule::DoubleLoop,
        "sdl" => Schedule::Sdl,
        "sdl2" => Schedule::Sdl2,
        "sdl6" => Schedule::Sdl6,
        "sdl2-vec" => Schedule::Sdl2Vec,
        "sdl6-vec" => Schedule::Sdl6Vec,
        other => anyhow::bail!("unknown --schedule {other}"),
    };
    Ok(vec![s])
}

fn main() -> Result<()> {
    let profile_path = PathBuf::from(parse_flag("profile", "configs/profiles/small.toml"));
    let schedules = parse_schedules(&parse_flag("schedule", "all"))?;

    let profile_src = fs::read_to_string(&profile_path)
        .with_context(|| format!("read profile {:?}", profile_path))?;
    let profile: Profile = toml::from_str(&profile_src).context("parse profile toml")?;
    println!(
        "Profile: {}x{}, levels={}, repeats={}, schedules={}",
        profile.width,
        profile.height,
        profile.levels,
        profile.repeats,
        schedules.len()
    );

    fs::create_dir_all("benchmarks/reports").ok();

    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let csv_path = PathBuf::from(format!("benchmarks/reports/bench-{ts}.csv"));
    let mut csv = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&csv_path)?;
    writeln!(csv, "timestamp,schedule,width,height,levels,repeat,stage,ms,extra")?;

    for schedule in schedules {
        let cfg = TransformConfig::with_schedule(schedule);
        let tag = format!("{schedule:?}");

        for rep in 0..profile.repeats {
            // 1) synthesise
            let t0 = Instant::now();
            let mut img = Image::<f32>::alloc(
                Layout::Packed,
                Extent::new(profile.width, profile.height),
            );
            img.fill_test_pattern();
            let reference = img.clone();
            let t_gen = t0.elapsed();
            writeln!(
                csv,
                "{ts},{tag},{},{},{},{rep},gen,{},",
                profile.width,
                profile.height,
                profile.levels,
                dur_ms(t_gen)
            )?;

            // 2) forward
            let mut levels = profile.levels;
            let t0 = Instant::now();
            forward_cdf97(&mut img.frame_mut(), &mut levels, false, false, &cfg);
            let t_fwd = t0.elapsed();
            writeln!(
                csv,
                "{ts},{tag},{},{},{},{rep},forward,{},j={levels}",
                profile.width,
                profile.height,
                profile.levels,
                dur_ms(t_fwd)
            )?;

            // 3) inverse
            let t0 = Instant::now();
            inverse_cdf97(&mut img.frame_mut(), levels, false, false, &cfg);
            let t_inv = t0.elapsed();
            writeln!(
                csv,
                "{ts},{tag},{},{},{},{rep},inverse,{},",
                profile.width,
                profile.height,
                profile.levels,
                dur_ms(t_inv)
            )?;

            // 4) compare against the untouched copy
            let t0 = Instant::now();
            let outcome = compare(img.frame(), reference.frame(), f32::ROUND_TRIP_EPS);
            let t_cmp = t0.elapsed();
            anyhow::ensure!(
                outcome.is_none(),
                "round trip failed for {tag} at repeat {rep}: {outcome:?}"
            );
            writeln!(
                csv,
                "{ts},{tag},{},{},{},{rep},compare,{},ok",
                profile.width,
                profile.height,
                profile.levels,
                dur_ms(t_cmp)
            )?;
        }
    }

    println!("Wrote report → {}", csv_path.display());
    Ok(())
}
