//! Sequential vs. partitioned aggregation benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use school_stats::data::StudentGenerator;
use school_stats::{aggregate_parallel, aggregate_sequential};

fn benchmark_aggregation(c: &mut Criterion) {
    let students = StudentGenerator::new(100)
        .generate(200_000)
        .expect("generate students");

    let mut group = c.benchmark_group("aggregation");
    group.sample_size(20);

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(aggregate_sequential(&students).unwrap().len()))
    });

    for workers in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("parallel", workers),
            &workers,
            |b, &workers| {
                b.iter(|| black_box(aggregate_parallel(&students, workers).unwrap().len()))
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_aggregation);
criterion_main!(benches);
