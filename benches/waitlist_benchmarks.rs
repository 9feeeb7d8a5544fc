use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use waitlist::WaitList;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

/// Returns `keys` with every key that appeared earlier removed, so it can be fed to a `Vec` model.
fn unique(keys: &[i64]) -> Vec<i64> {
    let mut seen = std::collections::HashSet::new();
    keys.iter().copied().filter(|k| seen.insert(*k)).collect()
}

// ─── Benchmarks ─────────────────────────────────────────────────────────────

fn bench_insert(c: &mut Criterion) {
    let keys = unique(&random_keys(N));

    let mut group = c.benchmark_group("insert");

    group.bench_function(BenchmarkId::new("WaitList", N), |b| {
        b.iter(|| {
            let mut list = WaitList::new();
            for &k in &keys {
                list.insert(k);
            }
            list
        });
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for &k in &keys {
                vec.push(k);
            }
            vec
        });
    });

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let keys = unique(&random_keys(N));
    let list: WaitList<i64> = keys.iter().copied().collect();

    let mut group = c.benchmark_group("rank");

    group.bench_function(BenchmarkId::new("WaitList", N), |b| {
        b.iter(|| keys.iter().map(|k| list.try_rank(k)).sum::<usize>());
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter(|| keys.iter().map(|k| keys.iter().position(|m| m == k).map_or(0, |i| i + 1)).sum::<usize>());
    });

    group.finish();
}

fn bench_remove_front(c: &mut Criterion) {
    let keys = ordered_keys(N);

    let mut group = c.benchmark_group("remove_front");

    group.bench_function(BenchmarkId::new("WaitList", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<WaitList<i64>>(),
            |mut list| {
                while list.pop_first().is_some() {}
                list
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter_batched(
            || keys.clone(),
            |mut vec| {
                while !vec.is_empty() {
                    vec.remove(0);
                }
                vec
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_remove_random(c: &mut Criterion) {
    let keys = unique(&random_keys(N));

    let mut group = c.benchmark_group("remove_random");

    group.bench_function(BenchmarkId::new("WaitList", N), |b| {
        b.iter_batched(
            || keys.iter().copied().collect::<WaitList<i64>>(),
            |mut list| {
                for k in keys.iter().rev() {
                    list.discard(k);
                }
                list
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("Vec", N), |b| {
        b.iter_batched(
            || keys.clone(),
            |mut vec| {
                for k in keys.iter().rev() {
                    if let Some(i) = vec.iter().position(|m| m == k) {
                        vec.remove(i);
                    }
                }
                vec
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_iter_after_churn(c: &mut Criterion) {
    // Most ids have been retired; only every 100th key is still waiting.
    let keys = ordered_keys(N * 10);
    let mut list: WaitList<i64> = keys.iter().copied().collect();
    for k in keys.iter().filter(|&&k| k % 100 != 0) {
        list.discard(k);
    }

    let mut group = c.benchmark_group("iter_after_churn");

    group.bench_function(BenchmarkId::new("WaitList", list.len()), |b| {
        b.iter(|| list.iter().map(|(rank, _)| rank).sum::<usize>());
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(insert_benches, bench_insert,);

criterion_group!(rank_benches, bench_rank,);

criterion_group!(remove_benches, bench_remove_front, bench_remove_random,);

criterion_group!(iter_benches, bench_iter_after_churn,);

criterion_main!(insert_benches, rank_benches, remove_benches, iter_benches,);
