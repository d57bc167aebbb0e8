use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tirage::sample::sample_indices_with_strategy;
use tirage::{Generators, SampleStrategy};

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_sample");

    // Around the crossover both should be viable; far from it one dominates.
    let cases = [(1_000, 10), (1_000, 100), (1_000, 333), (100_000, 10)];

    for &(n, k) in &cases {
        for strategy in [SampleStrategy::Pool, SampleStrategy::Rejection] {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            group.bench_function(format!("{strategy:?}_n{n}_k{k}"), |b| {
                b.iter(|| {
                    let out =
                        sample_indices_with_strategy(&mut rng, black_box(n), black_box(k), strategy);
                    black_box(out)
                })
            });
        }
    }
    group.finish();
}

fn bench_auto_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_auto");
    let sizes = [100usize, 10_000];
    let k = 10;

    for &size in &sizes {
        let pop: Vec<u64> = (0..size as u64).collect();
        let mut g = Generators::seeded("bench");
        group.bench_function(format!("n{size}_k{k}"), |b| {
            b.iter(|| black_box(g.sample(black_box(&pop), k)))
        });
    }
    group.finish();
}

fn bench_bounded(c: &mut Criterion) {
    let mut g = Generators::new(ChaCha8Rng::seed_from_u64(7));
    c.bench_function("bounded_int", |b| {
        b.iter(|| black_box(g.int(black_box(-50), black_box(50))))
    });
}

criterion_group!(benches, bench_strategies, bench_auto_select, bench_bounded);
criterion_main!(benches);
