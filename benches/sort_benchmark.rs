use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use gamesort::catalog::{Game, create_rng, generate_catalog};
use gamesort::sort::{Algorithm, DEFAULT_RUN_SIZE, Relation, SortConfig, sort_games};

fn bench_algorithms(c: &mut Criterion) {
    for relation in [Relation::Title, Relation::Score] {
        let mut group = c.benchmark_group(format!("sort_by_{}", relation));
        for count in [1_000, 10_000] {
            let catalog = generate_catalog(count, &mut create_rng(Some(42)));
            let handles: Vec<&Game> = catalog.iter().collect();
            for algorithm in Algorithm::all(DEFAULT_RUN_SIZE) {
                // Quadratic; keep it to the small catalog.
                if algorithm == Algorithm::BinaryInsertion && count > 1_000 {
                    continue;
                }
                let config = SortConfig::new(relation, algorithm);
                group.bench_with_input(
                    BenchmarkId::new(algorithm.name(), count),
                    &handles,
                    |b, handles| {
                        b.iter_batched(
                            || handles.clone(),
                            |mut order| {
                                sort_games(&mut order, &config);
                                black_box(order)
                            },
                            BatchSize::SmallInput,
                        )
                    },
                );
            }
        }
        group.finish();
    }
}

fn bench_run_sizes(c: &mut Criterion) {
    let catalog = generate_catalog(10_000, &mut create_rng(Some(7)));
    let handles: Vec<&Game> = catalog.iter().collect();
    let mut group = c.benchmark_group("timsort_run_size");
    for run in [8usize, 32, 128, 512] {
        let Some(run_size) = std::num::NonZeroUsize::new(run) else {
            continue;
        };
        let config = SortConfig::new(Relation::Title, Algorithm::Timsort { run_size });
        group.bench_with_input(BenchmarkId::from_parameter(run), &handles, |b, handles| {
            b.iter_batched(
                || handles.clone(),
                |mut order| {
                    sort_games(&mut order, &config);
                    black_box(order)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_run_sizes);
criterion_main!(benches);
