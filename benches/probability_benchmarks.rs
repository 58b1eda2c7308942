//! Calculator benchmarks.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trialodds::config::{SearchConfig, UnreachablePolicy};
use trialodds::domains::binomial::upper_tail;
use trialodds::domains::probability::{at_least_one_success, TrialSolver};
use trialodds::domains::simulation::{estimate_at_least_one, run_simulations};
use trialodds::engine::SimRng;

/// Binomial upper tail on both sides of the direct-sum cutoff.
fn bench_upper_tail(c: &mut Criterion) {
    let mut group = c.benchmark_group("upper_tail");
    group.sample_size(100);
    group.confidence_level(0.95);

    for n in [50u64, 500, 1000, 5000, 20_000] {
        group.bench_with_input(BenchmarkId::new("n", n), &n, |b, &n| {
            b.iter(|| black_box(upper_tail(black_box(n), 5, 0.001)));
        });
    }

    group.finish();
}

fn bench_trials_needed(c: &mut Criterion) {
    let mut group = c.benchmark_group("trials_needed");

    group.bench_function("single_success", |b| {
        let solver = TrialSolver::default();
        b.iter(|| black_box(solver.solve(black_box(0.01), 1, 0.95)));
    });

    for bound in [1000u64, 20_000] {
        let solver = TrialSolver::new(SearchConfig {
            max_trials: bound,
            on_unreachable: UnreachablePolicy::Saturate,
        });
        group.bench_with_input(
            BenchmarkId::new("multiple_success", bound),
            &solver,
            |b, solver| {
                b.iter(|| black_box(solver.solve(black_box(0.001), 5, 0.99)));
            },
        );
    }

    group.finish();
}

fn bench_at_least_one(c: &mut Criterion) {
    c.bench_function("at_least_one_success", |b| {
        b.iter(|| black_box(at_least_one_success(black_box(0.1), black_box(10))));
    });
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");

    for trials in [1_000u64, 100_000] {
        group.bench_with_input(BenchmarkId::new("run", trials), &trials, |b, &trials| {
            let mut rng = SimRng::new(42);
            b.iter(|| black_box(run_simulations(0.3, trials, &mut rng)));
        });
    }

    group.bench_function("estimate_at_least_one", |b| {
        let mut rng = SimRng::new(42);
        b.iter(|| black_box(estimate_at_least_one(0.1, 10, 10_000, &mut rng)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_upper_tail,
    bench_trials_needed,
    bench_at_least_one,
    bench_simulation
);
criterion_main!(benches);
