use criterion::{criterion_group, criterion_main, Criterion};
use math::{find_sum_hard_way, find_sum_optimized_way};

fn run_all_benchmarks(c: &mut Criterion) {
    let mut group_1k = c.benchmark_group("sum_multiples_limit_1000");
    group_1k.bench_function("hard_way", |b| b.iter(|| find_sum_hard_way(1_000, 3, 5)));
    group_1k.bench_function("optimized", |b| {
        b.iter(|| find_sum_optimized_way(1_000, 3, 5))
    });
    group_1k.finish();

    let mut group_100k = c.benchmark_group("sum_multiples_limit_100000");
    group_100k.bench_function("hard_way", |b| b.iter(|| find_sum_hard_way(100_000, 3, 5)));
    group_100k.bench_function("optimized", |b| {
        b.iter(|| find_sum_optimized_way(100_000, 3, 5))
    });
    group_100k.finish();

    let mut group_10m = c.benchmark_group("sum_multiples_limit_10000000");
    group_10m.sample_size(10);
    group_10m.bench_function("hard_way", |b| {
        b.iter(|| find_sum_hard_way(10_000_000, 3, 5))
    });
    group_10m.bench_function("optimized", |b| {
        b.iter(|| find_sum_optimized_way(10_000_000, 3, 5))
    });
    group_10m.finish();
}

criterion_group!(benches, run_all_benchmarks);
criterion_main!(benches);
