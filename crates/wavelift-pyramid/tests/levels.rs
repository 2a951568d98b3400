//! Level-count clamping and write-back through the public driver.

mod utils;

use utils::pattern_image;
use wavelift_core::Layout;
use wavelift_pyramid::{forward_cdf97, TransformConfig};

#[test]
fn auto_depth_square() {
    let cfg = TransformConfig::default();
    let mut img = pattern_image::<f32>(Layout::Packed, 256, 256);
    let mut j = -1;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 8);
}

#[test]
fn auto_depth_rectangular_uses_min_axis() {
    let cfg = TransformConfig::default();
    let mut img = pattern_image::<f32>(Layout::Packed, 300, 200);
    let mut j = -1;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    // ceil(log2 200) = 8.
    assert_eq!(j, 8);
}

#[test]
fn auto_depth_rectangular_decompose_one_uses_max_axis() {
    let cfg = TransformConfig::default();
    let mut img = pattern_image::<f32>(Layout::Packed, 300, 200);
    let mut j = -1;
    forward_cdf97(&mut img.frame_mut(), &mut j, true, false, &cfg);
    // ceil(log2 300) = 9.
    assert_eq!(j, 9);
}

#[test]
fn overdeep_request_is_clamped() {
    let cfg = TransformConfig::default();
    let mut img = pattern_image::<f32>(Layout::Packed, 64, 64);
    let mut j = 100;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 6);
}

#[test]
fn explicit_depth_is_kept() {
    let cfg = TransformConfig::default();
    let mut img = pattern_image::<f32>(Layout::Packed, 64, 64);
    let mut j = 2;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 2);
}

#[test]
fn zero_levels_is_identity() {
    let cfg = TransformConfig::default();
    let reference = pattern_image::<f64>(Layout::Packed, 40, 40);
    let mut img = reference.clone();
    let mut j = 0;
    forward_cdf97(&mut img.frame_mut(), &mut j, false, false, &cfg);
    assert_eq!(j, 0);
    assert_eq!(utils::max_abs_diff(&img, &reference), 0.0);
}
