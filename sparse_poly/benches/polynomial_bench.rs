use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::thread_rng;
use sparse_poly::{Polynomial, Term};

const TERM_COUNT: usize = 64;
const MAX_DEGREE: u32 = 255;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = thread_rng();

    let a = Polynomial::random(TERM_COUNT, MAX_DEGREE, &mut rng);
    let b = Polynomial::random(TERM_COUNT, MAX_DEGREE, &mut rng);

    c.bench_function("poly add", |bench| {
        bench.iter(|| black_box(&a) + black_box(&b))
    });

    c.bench_function("poly add assign", |bench| {
        bench.iter_batched(
            || a.clone(),
            |mut x| {
                x += black_box(&b);
                x
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("poly sub", |bench| {
        bench.iter(|| black_box(&a) - black_box(&b))
    });

    c.bench_function("poly mul", |bench| {
        bench.iter(|| black_box(&a) * black_box(&b))
    });

    c.bench_function("poly mul term", |bench| {
        bench.iter(|| black_box(&a) * black_box(Term::new(3.0, -2.0)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
