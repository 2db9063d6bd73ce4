use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modular::reduce::*;
use rand::prelude::*;

const P: u64 = 1152921504606830593;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    let x = rng.gen_range(0..P);
    let y = rng.gen_range(1..P);

    let mut group = c.benchmark_group("u64 modulus");

    group.bench_function("u64 modulus add", |b| {
        b.iter(|| black_box(x).add_reduce(black_box(y), P))
    });

    group.bench_function("u64 modulus sub", |b| {
        b.iter(|| black_box(x).sub_reduce(black_box(y), P))
    });

    group.bench_function("u64 modulus mul", |b| {
        b.iter(|| black_box(x).mul_reduce(black_box(y), P))
    });

    group.bench_function("u64 modulus neg", |b| {
        b.iter(|| black_box(x).neg_reduce(P))
    });

    group.bench_function("u64 modulus pow", |b| {
        b.iter(|| black_box(x).pow_reduce(black_box(y), P))
    });

    group.bench_function("u64 modulus inv", |b| {
        b.iter(|| black_box(y).inv_reduce(P))
    });

    group.bench_function("u64 modulus div", |b| {
        b.iter(|| black_box(x).div_reduce(black_box(y), P))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
