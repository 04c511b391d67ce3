use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use introsort::prelude::*;
use rand::Rng;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M u32");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(30));

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;
    let random: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("intro_sort", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| intro_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("heap_sort", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| heap_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("radix_sort", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| radix_sort(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_integers);
criterion_main!(benches);
