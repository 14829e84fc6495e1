//! Criterion benchmarks for the string GA.
//!
//! Measures whole runs with a fixed generation budget and a target that
//! cannot be matched early, so every sample does the same amount of work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use string_ga::ga::{operators, GaConfig, GaRunner, GeneBounds, Population, RngSource, SilentProgress};

const TARGET: &[u8] = b"THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG";

fn bench_epochs(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_epochs");
    group.sample_size(10);

    for (pop, gen) in [(10usize, 200usize), (100, 50), (500, 10)] {
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &config,
            |b, config| {
                b.iter(|| {
                    let mut population =
                        Population::create(TARGET, TARGET.len(), config).unwrap();
                    let result = GaRunner::run(&mut population, black_box(gen), &mut SilentProgress);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");

    for &len in &[8usize, 64, 512] {
        let mut rng = RngSource::new(string_ga::ga::create_rng(7));
        let mut genes = vec![b'M'; len];
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                operators::mutate(black_box(&mut genes), 0.1, GeneBounds::PRINTABLE, &mut rng);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_epochs, bench_mutation);
criterion_main!(benches);
