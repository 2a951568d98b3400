//! Configuration is read once per call: rewriting the process default
//! while a transform is in flight never perturbs it.

mod utils;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use utils::{max_abs_diff, pattern_image};
use wavelift_core::Layout;
use wavelift_kernels::Schedule;
use wavelift_pyramid::{
    default_schedule, forward_cdf97, set_default_schedule, TransformConfig,
};

#[test]
fn resetting_schedule_during_transform_is_benign() {
    set_default_schedule(Schedule::Sdl2Vec);
    let reference = {
        let mut img = pattern_image::<f32>(Layout::Packed, 256, 256);
        let mut j = 4;
        forward_cdf97(
            &mut img.frame_mut(),
            &mut j,
            false,
            false,
            &TransformConfig::default(),
        );
        img
    };

    let stop = Arc::new(AtomicBool::new(false));
    let churner = {
        let stop = Arc::clone(&stop);
        std::thread::spawn(move || {
            // Idempotent stores of the value already in place.
            while !stop.load(Ordering::Relaxed) {
                set_default_schedule(Schedule::Sdl2Vec);
                std::hint::spin_loop();
            }
        })
    };

    let mut img = pattern_image::<f32>(Layout::Packed, 256, 256);
    let mut j = 4;
    forward_cdf97(
        &mut img.frame_mut(),
        &mut j,
        false,
        false,
        &TransformConfig::default(),
    );

    stop.store(true, Ordering::Relaxed);
    churner.join().unwrap();

    assert_eq!(default_schedule(), Schedule::Sdl2Vec);
    assert_eq!(max_abs_diff(&img, &reference), 0.0);
    set_default_schedule(Schedule::Baseline);
}
