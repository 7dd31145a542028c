use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use target_sum_core::Strategy;

fn benchmark_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");
    for len in [12usize, 18] {
        let numbers: Vec<i64> = (1..=len as i64).collect();
        let target = if len % 4 == 0 || len % 4 == 3 { 0 } else { 1 };
        for strategy in Strategy::ALL {
            group.bench_with_input(BenchmarkId::new(strategy.name(), len), &numbers, |b, numbers| {
                b.iter(|| black_box(strategy.count(black_box(numbers), target)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, benchmark_strategies);
criterion_main!(benches);
