//! Plain (P2) PGM reading and writing.
//!
//! Header `P2\n<w> <h>\n<maxval>\n` followed by whitespace-separated
//! decimal samples. The writer expects samples already mapped to
//! `[0, maxval]`; out-of-range coefficients saturate and are reported with
//! a single diagnostic line per file.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;

use wavelift_core::Extent;

/// Grayscale maximum for 8-bit output.
pub const MAXVAL: f32 = 255.0;

/// Read a P2 image; samples are returned as `f32` in `[0, maxval]`.
pub fn read_pgm(path: &Path) -> Result<(Extent, Vec<f32>)> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading PGM from {}", path.display()))?;

    // Strip comment lines, then tokenise.
    let mut tokens = text
        .lines()
        .map(|l| l.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace);

    match tokens.next() {
        Some("P2") => {}
        Some(other) => bail!("unsupported PGM magic {other:?} (only plain P2 is handled)"),
        None => bail!("empty PGM file"),
    }

    let mut header = || -> Result<usize> {
        tokens
            .next()
            .context("truncated PGM header")?
            .parse::<usize>()
            .context("malformed PGM header field")
    };
    let width = header()?;
    let height = header()?;
    let maxval = header()?;
    if width == 0 || height == 0 || maxval == 0 {
        bail!("degenerate PGM dimensions {width}x{height}/{maxval}");
    }

    let mut samples = Vec::with_capacity(width * height);
    for tok in tokens {
        let v: f32 = tok.parse().context("malformed PGM sample")?;
        samples.push(v);
    }
    if samples.len() != width * height {
        bail!(
            "PGM body holds {} samples, header promises {}",
            samples.len(),
            width * height
        );
    }

    Ok((Extent::new(width, height), samples))
}

/// Write a P2 image. Samples outside `[0, 255]` saturate; the first
/// offender triggers one diagnostic for the whole file.
pub fn write_pgm(path: &Path, size: Extent, samples: &[f32]) -> Result<()> {
    assert_eq!(samples.len(), size.cells(), "sample count mismatch");

    let file = fs::File::create(path)
        .with_context(|| format!("creating PGM at {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "P2")?;
    writeln!(w, "{} {}", size.x, size.y)?;
    writeln!(w, "{}", MAXVAL as u32)?;

    let mut clipped = 0usize;
    for row in samples.chunks(size.x) {
        let mut line = String::with_capacity(row.len() * 4);
        for (i, &v) in row.iter().enumerate() {
            if !(0.0..=MAXVAL).contains(&v) {
                clipped += 1;
            }
            let q = v.clamp(0.0, MAXVAL).round() as u32;
            if i > 0 {
                line.push(' ');
            }
            line.push_str(&q.to_string());
        }
        writeln!(w, "{line}")?;
    }
    w.flush()?;

    if clipped > 0 {
        warn!(
            path = %path.display(),
            clipped,
            "samples outside [0, 255] were saturated"
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.pgm");
        let size = Extent::new(3, 2);
        let samples = vec![0.0, 10.0, 255.0, 300.0, -4.0, 128.0];
        write_pgm(&path, size, &samples).unwrap();

        let (read_size, read_samples) = read_pgm(&path).unwrap();
        assert_eq!(read_size, size);
        assert_eq!(read_samples, vec![0.0, 10.0, 255.0, 255.0, 0.0, 128.0]);
    }

    #[test]
    fn rejects_binary_pgm() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.pgm");
        std::fs::write(&path, "P5\n2 2\n255\n").unwrap();
        assert!(read_pgm(&path).is_err());
    }

    #[test]
    fn skips_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.pgm");
        std::fs::write(&path, "P2\n# a comment\n2 1\n255\n7 9\n").unwrap();
        let (size, samples) = read_pgm(&path).unwrap();
        assert_eq!(size, Extent::new(2, 1));
        assert_eq!(samples, vec![7.0, 9.0]);
    }
}
