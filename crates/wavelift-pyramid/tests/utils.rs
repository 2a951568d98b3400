//! Shared helpers for the scenario tests.

#![allow(dead_code)]

use wavelift_core::{Extent, Image, Layout, Sample};

/// Allocate a layout-fitted image filled with the deterministic benchmark
/// pattern `2xy / (x^2 + y^2 + 1)`.
#[must_use]
pub fn pattern_image<T: Sample>(layout: Layout, w: usize, h: usize) -> Image<T> {
    let mut img = Image::alloc(layout, Extent::new(w, h));
    img.fill_test_pattern();
    img
}

/// Largest absolute difference over the nested region.
#[must_use]
pub fn max_abs_diff<T: Sample>(a: &Image<T>, b: &Image<T>) -> f64 {
    let mut worst = 0.0f64;
    for y in 0..a.size_i.y {
        for x in 0..a.size_i.x {
            let d = (a.get(x, y).to_f64() - b.get(x, y).to_f64()).abs();
            if d > worst {
                worst = d;
            }
        }
    }
    worst
}
