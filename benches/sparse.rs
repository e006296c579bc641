use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsediff::{gradient, SparseDual64, SparseVector};

/// Every `stride`-th index in `0..n * stride`, with smoothly varying values.
fn strided(n: usize, stride: usize, offset: usize) -> SparseVector<f64> {
    SparseVector::from_pairs((0..n).map(|k| ((k * stride + offset) as u32, 0.5 + 0.01 * k as f64)))
        .unwrap()
}

fn rosenbrock_sparse(x: &[SparseDual64]) -> SparseDual64 {
    let mut sum = SparseDual64::constant(0.0);
    for i in 0..x.len() - 1 {
        let t1 = 1.0 - x[i].clone();
        let t2 = &x[i + 1] - &(&x[i] * &x[i]);
        sum = sum + &t1 * &t1 + 100.0 * (&t2 * &t2);
    }
    sum
}

fn bench_vector_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_algebra");
    for n in [10, 100, 1000] {
        let a = strided(n, 2, 0);
        let b = strided(n, 3, 1);

        group.bench_with_input(BenchmarkId::new("dot", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(black_box(*a).dot(black_box(*b))))
        });

        group.bench_with_input(BenchmarkId::new("add", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(black_box(*a) + black_box(*b)))
        });

        group.bench_with_input(BenchmarkId::new("mul", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(black_box(*a) * black_box(*b)))
        });
    }
    group.finish();
}

fn bench_outer_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("outer_product");
    for n in [10, 100] {
        let a = strided(n, 2, 0);
        let b = strided(n, 5, 3);
        group.bench_with_input(BenchmarkId::new("outerproduct", n), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(black_box(*a).outerproduct(black_box(*b))))
        });
    }
    group.finish();
}

fn bench_sparse_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("sparse_dual_gradient");
    for n in [2, 10, 100] {
        let x: Vec<f64> = (0..n).map(|i| 0.5 + 0.01 * i as f64).collect();

        group.bench_with_input(BenchmarkId::new("rosenbrock", n), &x, |b, x| {
            b.iter(|| {
                let inputs: Vec<SparseDual64> = x
                    .iter()
                    .enumerate()
                    .map(|(k, &xi)| SparseDual64::variable(xi, k))
                    .collect();
                black_box(gradient(&rosenbrock_sparse(black_box(&inputs))))
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vector_algebra,
    bench_outer_product,
    bench_sparse_gradient
);
criterion_main!(benches);
