//! Forward-then-inverse restoration across sizes, parities, and wavelets.

mod utils;

use proptest::prelude::*;
use utils::{max_abs_diff, pattern_image};
use wavelift_core::{compare, Extent, Image, Layout};
use wavelift_pyramid::{
    forward_cdf53, forward_cdf97, inverse_cdf53, inverse_cdf97, TransformConfig,
};

#[test]
fn restores_packed_512_auto_depth() {
    let cfg = TransformConfig::default();
    let reference = pattern_image::<f32>(Layout::Packed, 512, 512);
    let mut img = reference.clone();

    let mut j = -1;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 9, "auto depth on 512x512 must be log2");
    assert!(
        compare(img.frame(), reference.frame(), 1e-3).is_some(),
        "forward must actually change the samples"
    );

    inverse_cdf97(&mut img.frame_mut(), j, false, false, &cfg);
    let err = max_abs_diff(&img, &reference);
    assert!(err < 1e-3, "max error {err}");
}

#[test]
fn restores_odd_17x17_two_levels() {
    let cfg = TransformConfig::default();
    let reference = pattern_image::<f32>(Layout::Packed, 17, 17);
    let mut img = reference.clone();

    let mut j = 2;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 2);
    inverse_cdf97(&mut img.frame_mut(), j, false, false, &cfg);

    let err = max_abs_diff(&img, &reference);
    assert!(err < 1e-3, "max error {err}");
}

#[test]
fn restores_2x2_short_boundary() {
    let cfg = TransformConfig::default();
    let mut img = Image::<f64>::alloc(Layout::Packed, Extent::new(2, 2));
    img.fill_with(|x, y| 1.0 + x as f64 * 0.25 - y as f64 * 0.5);
    let reference = img.clone();

    let mut j = -1;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 1);
    inverse_cdf97(&mut img.frame_mut(), j, false, false, &cfg);

    let err = max_abs_diff(&img, &reference);
    assert!(err < 1e-6, "max error {err}");
}

#[test]
fn restores_double_precision_tightly() {
    let cfg = TransformConfig::default();
    let reference = pattern_image::<f64>(Layout::Packed, 96, 64);
    let mut img = reference.clone();

    let mut j = -1;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 6);
    inverse_cdf97(&mut img.frame_mut(), j, false, false, &cfg);

    let err = max_abs_diff(&img, &reference);
    assert!(err < 1e-6, "max error {err}");
}

#[test]
fn restores_with_cdf53() {
    let cfg = TransformConfig::default();
    let reference = pattern_image::<f32>(Layout::Packed, 120, 85);
    let mut img = reference.clone();

    let mut j = -1;
    forward_cdf53(&mut img.frame_mut(), &mut j, false, false, &cfg);
    inverse_cdf53(&mut img.frame_mut(), j, false, false, &cfg);

    let err = max_abs_diff(&img, &reference);
    assert!(err < 1e-3, "max error {err}");
}

/// Lifting preserves constants: every detail band of a flat image is tiny
/// relative to the constant (bounded by the precision of the published
/// 9/7 coefficients).
#[test]
fn constant_image_yields_tiny_details() {
    let cfg = TransformConfig::default();
    let c = 64.0f64;
    let mut img = Image::<f64>::alloc(Layout::Packed, Extent::new(32, 32));
    img.fill_constant(c);

    let mut j = 1;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);

    // Everything outside the 16x16 LL quadrant is detail.
    for y in 0..32 {
        for x in 0..32 {
            if x >= 16 || y >= 16 {
                let v = img.get(x, y).abs();
                assert!(v < 1e-3 * c, "detail at ({x},{y}) = {v}");
            }
        }
    }
}

#[test]
fn assorted_sizes_roundtrip() {
    let cfg = TransformConfig::default();
    for (w, h) in [(3, 3), (5, 2), (2, 5), (7, 7), (16, 1), (1, 16), (33, 20)] {
        let reference = pattern_image::<f64>(Layout::Packed, w, h);
        let mut img = reference.clone();

        let mut j = -1;
        forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
        inverse_cdf97(&mut img.frame_mut(), j, false, false, &cfg);

        let err = max_abs_diff(&img, &reference);
        assert!(err < 1e-6, "{w}x{h} max error {err}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn random_sizes_roundtrip(w in 2usize..48, h in 2usize..48, seed in 0u64..1000) {
        let cfg = TransformConfig::default();
        let mut img = Image::<f64>::alloc(Layout::Packed, Extent::new(w, h));
        img.fill_with(|x, y| {
            let v = (x as f64 * 31.0 + y as f64 * 17.0 + seed as f64).sin();
            v * 100.0
        });
        let reference = img.clone();

        let mut j = -1;
        forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
        inverse_cdf97(&mut img.frame_mut(), j, false, false, &cfg);

        let err = max_abs_diff(&img, &reference);
        prop_assert!(err < 1e-6, "{w}x{h} seed {seed}: max error {err}");
    }
}

#[test]
fn skinny_frames_decompose_one_roundtrip() {
    let cfg = TransformConfig::default();
    for decompose_one in [false, true] {
        let reference = pattern_image::<f64>(Layout::Packed, 64, 3);
        let mut img = reference.clone();

        let mut j = -1;
        forward_cdf97(&mut img.frame_mut(), &mut j, decompose_one, false, &cfg);
        let expect = if decompose_one { 6 } else { 2 };
        assert_eq!(j, expect, "decompose_one={decompose_one}");
        inverse_cdf97(&mut img.frame_mut(), j, decompose_one, false, &cfg);

        let err = max_abs_diff(&img, &reference);
        assert!(err < 1e-6, "decompose_one={decompose_one} max error {err}");
    }
}
