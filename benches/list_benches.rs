use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use single_linked_list::LinkedList;
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 1_024, 65_536];

fn random_list(len: usize) -> LinkedList<u64> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.random()).collect()
}

// --- Constant-time operations: timings must stay flat across sizes ---

fn swap_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap");
    for &len in &SIZES {
        let mut a = random_list(len);
        let mut b = random_list(len / 2);
        group.bench_function(BenchmarkId::from_parameter(len), |bench| {
            bench.iter(|| {
                a.swap(&mut b);
                black_box(a.len())
            })
        });
    }
    group.finish();
}

fn end_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("end");
    for &len in &SIZES {
        let list = random_list(len);
        group.bench_function(BenchmarkId::from_parameter(len), |bench| {
            bench.iter(|| black_box(&list).end())
        });
    }
    group.finish();
}

fn push_front_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_front");
    for &len in &SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |bench| {
            bench.iter(|| {
                let mut list = LinkedList::new();
                for i in 0..len as u64 {
                    list.push_front(black_box(i));
                }
                list
            })
        });
    }
    group.finish();
}

// --- Linear operations ---

fn iterate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    for &len in &SIZES {
        let list = random_list(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |bench| {
            bench.iter(|| list.iter().fold(0u64, |acc, v| acc.wrapping_add(*v)))
        });
    }
    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for &len in &SIZES {
        let list = random_list(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |bench| {
            bench.iter(|| black_box(list.clone()))
        });
    }
    group.finish();
}

fn erase_after_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("erase_after");
    for &len in &SIZES {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |bench| {
            bench.iter_batched(
                || random_list(len),
                |mut list| {
                    let anchor = list.before_begin();
                    while list.erase_after(anchor).is_ok() {}
                    list
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    swap_benchmark,
    end_benchmark,
    push_front_benchmark,
    iterate_benchmark,
    clone_benchmark,
    erase_after_benchmark
);
criterion_main!(benches);
