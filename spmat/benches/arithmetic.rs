//! Criterion benchmarks for the sparse arithmetic operations

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{SparseMatrix, Triple};

/// Build a size x size matrix with roughly `density` of its cells populated
fn random_matrix(size: usize, density: f64, rng: &mut StdRng) -> SparseMatrix {
    let nnz = ((size * size) as f64 * density) as usize;
    let triples = (0..nnz).map(|_| {
        Triple::new(
            rng.gen_range(0..size),
            rng.gen_range(0..size),
            rng.gen_range(-100..=100),
        )
    });
    SparseMatrix::from_triples(size, size, triples)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in [64, 256, 1024] {
        let mut rng = StdRng::seed_from_u64(7);
        let a = random_matrix(size, 0.05, &mut rng);
        let b = random_matrix(size, 0.05, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| black_box(a.add(&b).unwrap()));
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    for size in [16, 64, 128] {
        let mut rng = StdRng::seed_from_u64(11);
        let a = random_matrix(size, 0.05, &mut rng);
        let b = random_matrix(size, 0.05, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, _| {
            bencher.iter(|| black_box(a.multiply(&b).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_add, bench_multiply);
criterion_main!(benches);
