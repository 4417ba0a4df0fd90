//! Example that normalizes a block of audio samples using the numeric helpers.

#![allow(
    missing_docs,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "example code"
)]

use leaf_math::{Range, approx_eq, clamp, clamp_abs, max, min, range, round_toward};

fn main() {
    let samples = [0.12_f32, -0.48, 0.96, -1.44, 0.3];

    let mut extent = Range::point(samples[0]);
    for &sample in &samples {
        extent |= sample;
    }

    assert_eq!(extent, range!(0.12_f32, -0.48, 0.96, -1.44, 0.3));
    println!("extent: [{}, {}]", extent.min(), extent.max());

    let peak = max!(extent.max(), -extent.min());
    let normalized: Vec<f32> = samples.iter().map(|&s| s / peak).collect();
    println!("normalized: {normalized:?}");

    let limited: Vec<f32> = samples.iter().map(|&s| clamp_abs(s, 1.0)).collect();
    println!("limited: {limited:?}");

    let gain = clamp(2.5, Range::new(0.0_f32, 2.0));
    println!("gain: {gain}, smallest sample: {}", min!(0.12_f32, -0.48, 0.96));

    let frames_needed = round_toward(44_100.0_f32 / 1_024.0, 1.0);
    println!("frames needed: {frames_needed}");

    assert!(approx_eq(normalized[3], -1.0));
}
