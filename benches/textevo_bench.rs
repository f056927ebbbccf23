//! Criterion benchmarks for u-textevo.
//!
//! Measures the edit-distance fitness function on its own and a complete
//! text-evolution run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_textevo::ga::{GaConfig, GaRunner};
use u_textevo::text::{edit_distance, Alphabet, TextProblem};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");

    for &len in &[20usize, 100, 500] {
        let a: Vec<char> = "SKYNET IS NOW ONLINE".chars().cycle().take(len).collect();
        let b: Vec<char> = "SKYNOT WAS NEVER ONLINE".chars().cycle().take(len).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(edit_distance(black_box(a.as_slice()), black_box(b.as_slice()))))
        });
    }
    group.finish();
}

fn bench_ga_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_text");
    group.sample_size(10);

    for (pop, gen) in [(100usize, 50usize), (300, 50), (300, 200)] {
        let problem = TextProblem::new("SKYNET IS NOW ONLINE", Alphabet::default())
            .expect("goal uses the default alphabet");
        let config = GaConfig {
            population_size: pop,
            max_generations: gen,
            seed: Some(4),
            ..GaConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_g{}", pop, gen), pop),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_edit_distance, bench_ga_text);
criterion_main!(benches);
