//! Example that shares an expensive lookup table among its users and rebuilds it only after
//! every user is done with it.

#![allow(
    missing_docs,
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    clippy::modulo_arithmetic,
    reason = "example code"
)]

use std::f32::consts::TAU;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

static TABLES_BUILT: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug)]
struct SineTable {
    samples: Vec<f32>,
}

impl SineTable {
    fn build() -> Self {
        TABLES_BUILT.fetch_add(1, Ordering::Relaxed);

        let samples = (0..256_u16)
            .map(|i| (f32::from(i) / 256.0 * TAU).sin())
            .collect();

        Self { samples }
    }
}

fn sine_table() -> Arc<SineTable> {
    weak_singleton::get_or_create(SineTable::build)
}

#[derive(Debug)]
struct Oscillator {
    table: Arc<SineTable>,
    phase: usize,
}

impl Oscillator {
    fn new() -> Self {
        Self {
            table: sine_table(),
            phase: 0,
        }
    }

    fn next_sample(&mut self) -> f32 {
        let sample = self.table.samples[self.phase % self.table.samples.len()];
        self.phase += 1;
        sample
    }
}

weak_singleton::singleton! {
    static GREETING: String = "oscillators ready".to_string();
}

fn main() {
    let mut left = Oscillator::new();
    let mut right = Oscillator::new();

    // Both oscillators share the one table.
    assert!(Arc::ptr_eq(&left.table, &right.table));
    println!("{}", GREETING.get());
    println!("first samples: {} {}", left.next_sample(), right.next_sample());

    drop(left);
    drop(right);

    // The table was released with its last user, so a new oscillator builds it again.
    let mut solo = Oscillator::new();
    println!("solo sample: {}", solo.next_sample());

    println!("tables built: {}", TABLES_BUILT.load(Ordering::Relaxed));
}
