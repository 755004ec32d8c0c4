mod utils;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use prio_heap::MaxHeap;
use utils::{get_random_values, get_sorted_values};

fn push_pop(values: &[i64]) -> i64 {
    let mut heap = MaxHeap::with_capacity(values.len());
    heap.try_extend(values.iter().copied()).unwrap();
    let mut total = 0;
    while let Ok(value) = heap.pop() {
        total += value;
    }
    total
}

pub fn push_pop_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    for size in [100, 10_000].iter() {
        let random = get_random_values(*size, 342);
        let sorted = get_sorted_values(*size);
        group.bench_with_input(BenchmarkId::new("prio_heap_random", size), &random, |b, v| {
            b.iter(|| black_box(push_pop(v)))
        });
        group.bench_with_input(BenchmarkId::new("prio_heap_sorted", size), &sorted, |b, v| {
            b.iter(|| black_box(push_pop(v)))
        });
        group.bench_with_input(BenchmarkId::new("std_random", size), &random, |b, v| {
            b.iter(|| black_box(utils::other_impls::push_pop_std(v)))
        });
    }

    group.finish();
}

criterion_group!(benches, push_pop_benchmark);
criterion_main!(benches);
