//! Benchmarks for question synthesis and answer inversion.
//!
//! Both components are closed-form per coordinate, so a single question
//! should cost the same in every domain apart from prompt rendering and the
//! self-referential scan.
//!
//! ```bash
//! cargo bench -p mensa engine
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mensa::{generate_question, generate_test, solve_question, Domain};

// ============================================================================
// Benchmark: one question per domain
// ============================================================================

fn bench_generate_per_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_question");
    group.throughput(Throughput::Elements(1));

    for domain in Domain::ALL {
        let idx = *domain.range().start();
        group.bench_with_input(BenchmarkId::from_parameter(domain.slug()), &idx, |b, &i| {
            b.iter(|| black_box(generate_question(black_box(421), i)));
        });
    }

    group.finish();
}

fn bench_solve_per_domain(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_question");
    group.throughput(Throughput::Elements(1));

    for domain in Domain::ALL {
        let idx = *domain.range().start();
        group.bench_with_input(BenchmarkId::from_parameter(domain.slug()), &idx, |b, &i| {
            b.iter(|| black_box(solve_question(black_box(421), i)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: whole tests
// ============================================================================

fn bench_full_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_test");
    group.throughput(Throughput::Elements(100));

    group.bench_function("generate_test", |b| {
        b.iter(|| black_box(generate_test(black_box(777))));
    });

    group.bench_function("solve_all", |b| {
        b.iter(|| {
            for i in 1..=100 {
                black_box(solve_question(black_box(777), i)).ok();
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_per_domain,
    bench_solve_per_domain,
    bench_full_test,
);
criterion_main!(benches);
