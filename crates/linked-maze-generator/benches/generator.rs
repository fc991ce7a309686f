//! Benchmarks for linked maze pair generation.
//!
//! One iteration runs a full generation of the default 3×4 pair at
//! sidetrack depth 2: mutate-and-solve rounds from empty pages until a pair
//! is accepted. Seeds are derived from fixed phrases, so every iteration of a
//! case replays the same rounds.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use linked_maze_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed};

const PHRASES: [&str; 3] = ["first page", "second page", "joint goal"];

fn bench_generate_default_pair(c: &mut Criterion) {
    let generator = PuzzleGenerator::new(GeneratorConfig::default());

    let mut group = c.benchmark_group("generate_default_pair");
    for phrase in PHRASES {
        let seed = PuzzleSeed::from_phrase(phrase);
        group.bench_with_input(BenchmarkId::from_parameter(phrase), &seed, |b, &seed| {
            b.iter(|| generator.generate_with_seed(hint::black_box(seed)));
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(8));
    targets = bench_generate_default_pair
);
criterion_main!(benches);
