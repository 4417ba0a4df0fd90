//! Dispatching runtime values to ordinal-specialized operations.

#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use ordinal_switch::{Ordinal, OrdinalFn, Tag};
use seq_macro::seq;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

seq!(N in 0..32 {
    #[derive(Clone, Copy, Debug, Ordinal)]
    enum Kernel {
        #(
            Width~N,
        )*
    }
});

struct Accumulate<'a>(&'a [u32]);

impl OrdinalFn<Kernel> for Accumulate<'_> {
    type Output = u32;

    fn call<const I: usize>(self, _tag: Tag<Kernel, I>) -> u32 {
        self.0.iter().take(I).fold(0, |acc, x| acc.wrapping_add(*x))
    }
}

fn accumulate_runtime(width: usize, data: &[u32]) -> u32 {
    data.iter().take(width).fold(0, |acc, x| acc.wrapping_add(*x))
}

fn entrypoint(c: &mut Criterion) {
    let data: Vec<u32> = (0..64).collect();

    let mut g = c.benchmark_group("dispatch");

    g.bench_function("specialized", |b| {
        b.iter(|| {
            ordinal_switch::dispatch_all(black_box(Kernel::Width17), Accumulate(&data))
        });
    });

    g.bench_function("runtime_width", |b| {
        b.iter(|| accumulate_runtime(black_box(Kernel::Width17.ordinal()), &data));
    });

    g.bench_function("out_of_range", |b| {
        b.iter(|| {
            ordinal_switch::dispatch::<16, _, _>(black_box(Kernel::Width17), Accumulate(&data))
        });
    });

    g.finish();
}
