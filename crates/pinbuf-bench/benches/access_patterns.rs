//! Criterion benchmarks: checked vs unchecked access per pattern and size.
//!
//! One group per access pattern, one id per (container, size), throughput
//! in elements so the HTML report shows elements/second directly.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pinbuf_bench::{AccessPattern, BenchConfig, ContainerKind, Fixture};

/// Sizes from here up get Criterion's minimum sample count.
const LARGE: usize = 1024 * 1024;

fn bench_pattern(c: &mut Criterion, pattern: AccessPattern) {
    let config = BenchConfig::default();
    let mut group = c.benchmark_group(pattern.name());

    for size in BenchConfig::DEFAULT_SIZES {
        let mut fixture = Fixture::build(pattern, size, &config).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.sample_size(if size >= LARGE { 10 } else { 100 });

        for kind in ContainerKind::ALL {
            group.bench_function(BenchmarkId::new(kind.name(), size), |b| {
                b.iter(|| black_box(fixture.run_once(black_box(kind))));
            });
        }
    }

    group.finish();
}

fn bench_sequential_read(c: &mut Criterion) {
    bench_pattern(c, AccessPattern::SequentialRead);
}

fn bench_random_read(c: &mut Criterion) {
    bench_pattern(c, AccessPattern::RandomRead);
}

fn bench_random_write(c: &mut Criterion) {
    bench_pattern(c, AccessPattern::RandomWrite);
}

criterion_group!(
    benches,
    bench_sequential_read,
    bench_random_read,
    bench_random_write
);
criterion_main!(benches);
