//! Example that demonstrates picking a compile-time specialized code path from a runtime value.

#![allow(
    missing_debug_implementations,
    missing_docs,
    clippy::must_use_candidate,
    clippy::arithmetic_side_effects,
    reason = "example code"
)]

use ordinal_switch::{Ordinal, OrdinalFn, Tag};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Ordinal)]
pub enum SampleFormat {
    Mono,
    Stereo,
    Quad,
}

/// Interleaves `frames` of silence for a channel count known at compile time.
fn silence<const CHANNELS: usize>(frames: usize) -> Vec<[f32; CHANNELS]> {
    vec![[0.0; CHANNELS]; frames]
}

struct SilenceLen {
    frames: usize,
}

impl OrdinalFn<SampleFormat> for SilenceLen {
    type Output = usize;

    fn call<const I: usize>(self, tag: Tag<SampleFormat, I>) -> usize {
        let buffer = match tag.value() {
            SampleFormat::Mono => silence::<1>(self.frames).len(),
            SampleFormat::Stereo => silence::<2>(self.frames).len() * 2,
            SampleFormat::Quad => silence::<4>(self.frames).len() * 4,
        };

        println!("{:?} (ordinal {I}) needs {buffer} samples", Tag::<SampleFormat, I>::VALUE);

        buffer
    }
}

fn main() {
    println!("=== ordinal_switch README Example ===");

    // The format would typically come from a file header or a user setting.
    let raw_format = 1;

    let samples = ordinal_switch::dispatch_ordinal::<{ SampleFormat::COUNT }, SampleFormat, _>(
        raw_format,
        SilenceLen { frames: 480 },
    );
    assert_eq!(samples, Some(960));

    let unknown = ordinal_switch::dispatch_ordinal::<{ SampleFormat::COUNT }, SampleFormat, _>(
        17,
        SilenceLen { frames: 480 },
    );
    assert_eq!(unknown, None);

    println!("README example completed successfully!");
}
