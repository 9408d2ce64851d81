//! Benchmarks for the search pipeline.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use genexpr::gp::{
    EvolutionConfig, Genotype, decode, evaluate, evolve, random_population, score_population,
    select,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn bench_decode_evaluate(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let population = random_population(&mut rng, 1000, 10);

    c.bench_function("decode_1000", |b| {
        b.iter(|| {
            for genotype in &population {
                black_box(decode(black_box(genotype)));
            }
        });
    });

    let decoded: Vec<_> = population.iter().map(decode).collect();
    c.bench_function("evaluate_1000", |b| {
        b.iter(|| {
            for tokens in &decoded {
                black_box(evaluate(black_box(tokens)));
            }
        });
    });
}

fn bench_select(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let population = random_population(&mut rng, 100, 10);
    let scored = score_population(&population, 42.0);

    c.bench_function("score_population_100", |b| {
        b.iter(|| black_box(score_population(black_box(&population), 42.0)));
    });

    c.bench_function("select_100_from_100", |b| {
        b.iter(|| black_box(select(&scored, 100, &mut rng).unwrap()));
    });
}

fn bench_full_run(c: &mut Criterion) {
    // Unreachable target, so every run uses the full budget
    let config = EvolutionConfig {
        target: 1_000_000.0,
        seed: Some(7),
        ..EvolutionConfig::default()
    };

    c.bench_function("evolve_10_generations", |b| {
        b.iter(|| black_box(evolve(&config, |_| {}).unwrap()));
    });

    c.bench_function("genotype_random_10", |b| {
        let mut rng = SmallRng::seed_from_u64(1);
        b.iter(|| black_box(Genotype::random(&mut rng, 10)));
    });
}

criterion_group!(benches, bench_decode_evaluate, bench_select, bench_full_run);
criterion_main!(benches);
