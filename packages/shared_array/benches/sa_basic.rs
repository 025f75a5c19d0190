//! Basic benchmarks for the `shared_array` crate.
#![allow(
    missing_docs,
    reason = "No need for API documentation in benchmark code"
)]

use std::hint::black_box;
use std::rc::Rc;
use std::time::Instant;

use criterion::{Criterion, criterion_group, criterion_main};
use shared_array::SharedArray;

criterion_group!(benches, entrypoint);
criterion_main!(benches);

type TestItem = usize;
const TEST_VALUE: TestItem = 1024;
const ITEM_COUNT: usize = 1000;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_array_basic");

    group.bench_function("build_empty", |b| {
        b.iter(|| drop(black_box(SharedArray::<TestItem>::new())));
    });

    group.bench_function("push_with_growth", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let mut array = SharedArray::<TestItem>::new();

                for _ in 0..ITEM_COUNT {
                    array.push(black_box(Rc::new(TEST_VALUE)));
                }

                drop(black_box(array));
            }

            start.elapsed()
        });
    });

    group.bench_function("push_preallocated", |b| {
        b.iter_custom(|iters| {
            let start = Instant::now();

            for _ in 0..iters {
                let mut array = SharedArray::<TestItem>::with_capacity(ITEM_COUNT);

                for _ in 0..ITEM_COUNT {
                    array.push(black_box(Rc::new(TEST_VALUE)));
                }

                drop(black_box(array));
            }

            start.elapsed()
        });
    });

    group.bench_function("remove_front", |b| {
        b.iter_custom(|iters| {
            let mut arrays = (0..iters)
                .map(|_| {
                    (0..ITEM_COUNT)
                        .map(|_| Rc::new(TEST_VALUE))
                        .collect::<SharedArray<_>>()
                })
                .collect::<Vec<_>>();

            let start = Instant::now();

            for array in &mut arrays {
                _ = black_box(array.remove_at(0));
            }

            start.elapsed()
        });
    });

    group.finish();
}
