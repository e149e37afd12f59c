//! Push/pop throughput of `BinaryMaxHeap` against `std::collections::BinaryHeap`
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench heap_bench
//!
//! # Only the pseudo-random workload
//! cargo bench --bench heap_bench -- 'random/'
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dynamic_containers::binary_max::BinaryMaxHeap;
use dynamic_containers::Heap;
use std::collections::BinaryHeap;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_priorities(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| (rng.next() >> 33) as u32).collect()
}

fn run_binary_max(priorities: &[u32]) -> u64 {
    let mut heap = BinaryMaxHeap::new();
    for (i, &p) in priorities.iter().enumerate() {
        heap.push(p, i);
    }
    let mut checksum = 0u64;
    while let Ok((p, i)) = heap.pop() {
        checksum = checksum.wrapping_add(p as u64 ^ i as u64);
    }
    checksum
}

fn run_std(priorities: &[u32]) -> u64 {
    let mut heap = BinaryHeap::new();
    for (i, &p) in priorities.iter().enumerate() {
        heap.push((p, i));
    }
    let mut checksum = 0u64;
    while let Some((p, i)) = heap.pop() {
        checksum = checksum.wrapping_add(p as u64 ^ i as u64);
    }
    checksum
}

fn benchmark_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.sample_size(20);

    for exp in [10u32, 14, 18] {
        let n = 1usize << exp;
        let priorities = random_priorities(n, 0xC0FFEE);
        let label = format!("2^{}", exp);

        group.bench_with_input(
            BenchmarkId::new("binary_max", &label),
            &priorities,
            |b, ps| b.iter(|| black_box(run_binary_max(ps))),
        );
        group.bench_with_input(
            BenchmarkId::new("std_binary_heap", &label),
            &priorities,
            |b, ps| b.iter(|| black_box(run_std(ps))),
        );
    }

    group.finish();
}

fn benchmark_ascending(c: &mut Criterion) {
    let mut group = c.benchmark_group("ascending");
    group.sample_size(20);

    let priorities: Vec<u32> = (0..1u32 << 16).collect();
    group.bench_function("binary_max", |b| {
        b.iter(|| black_box(run_binary_max(&priorities)))
    });
    group.bench_function("std_binary_heap", |b| {
        b.iter(|| black_box(run_std(&priorities)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_random, benchmark_ascending);

criterion_main!(benches);
