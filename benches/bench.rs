use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rpoly::{
    __testing::{test_case_conj_roots, test_case_roots, RandStreamC64Polar, RandStreamR64},
    poly, Poly64,
};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, closed_form, roots_of_unity);

pub fn closed_form(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed form");
    group.bench_function("linear", |b| {
        b.iter(|| black_box(black_box(poly![2.0, -3.0]).roots()))
    });
    group.bench_function("quadratic", |b| {
        b.iter(|| black_box(black_box(poly![1.0, -6.0, -3.0]).roots()))
    });
    group.finish();
}

pub fn roots_of_unity(c: &mut Criterion) {
    let mut group = c.benchmark_group("roots of unity");
    for n in [4, 8, 16, 32] {
        let p = Poly64::term(1.0, n) - poly![1.0];
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p).roots()))
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, random_real_roots, random_conj_roots);

pub fn random_real_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("random real roots");
    let mut roots_stream = RandStreamR64::new(1, -10.0, 10.0);
    let mut scale_stream = RandStreamR64::new(2, 0.1, 10.0);
    for n in [4, 8, 16] {
        let (p, _) = test_case_roots(&mut roots_stream, &mut scale_stream, n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p).roots()))
        });
    }
    group.finish();
}

pub fn random_conj_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("random conjugate roots");
    let mut roots_stream = RandStreamC64Polar::new(3, 0.1, 10.0, 0.0, 0.5);
    let mut scale_stream = RandStreamR64::new(4, 0.1, 10.0);
    for n in [4, 8, 16, 32] {
        let (p, _) = test_case_conj_roots(&mut roots_stream, &mut scale_stream, n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p).roots()))
        });
    }
    group.finish();
}
