//! Criterion benchmarks comparing the list-reversal strategies.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ordo_bench::ascending;
use ordo_core::{NodeArena, ReverseStrategy, Reverser};

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for size in [10, 100, 1000, 5000] {
        let (arena, head) = NodeArena::from_values(ascending(size));
        group.throughput(Throughput::Elements(size as u64));

        for strategy in [
            ReverseStrategy::Iterative,
            ReverseStrategy::Recursive,
            ReverseStrategy::HeadInsertion,
        ] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), size),
                &size,
                |b, _| {
                    let mut arena = arena.clone();
                    let mut head = head;
                    // Reversal is its own inverse, so the arena can be reused.
                    b.iter(|| {
                        head = strategy.reverse(black_box(&mut arena), head).unwrap();
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_reverse);
criterion_main!(benches);
