use criterion::{criterion_group, criterion_main, Criterion};
use kingman_process::bessel::{explicit_bessel, implicit_bessel};
use kingman_process::bridge::{brownian_bridge, brownian_motion};
use kingman_process::excursion::{brownian_excursion_lengths, excursion_lengths};
use kingman_process::kingman::poisson_dirichlet;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::hint::black_box;

fn bench_bessel_10k(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("bessel_10k");
    group.bench_function("explicit", |b| {
        b.iter(|| black_box(explicit_bessel(0.5, 10_000, &mut rng)))
    });
    group.bench_function("implicit", |b| {
        b.iter(|| black_box(implicit_bessel(0.5, 10_000, &mut rng)))
    });
    group.finish();
}

fn bench_bridge_10k(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    c.bench_function("brownian_bridge_10k", |b| {
        b.iter(|| black_box(brownian_bridge(10_000, &mut rng)))
    });
}

fn bench_excursions_100k(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2026);
    let bessel_path = explicit_bessel(0.5, 100_000, &mut rng);
    let brownian_path = brownian_motion(100_000, &mut rng);

    let mut group = c.benchmark_group("excursions_100k");
    group.bench_function("threshold", |b| {
        b.iter(|| black_box(excursion_lengths(&bessel_path, 0.1)))
    });
    group.bench_function("sign_change", |b| {
        b.iter(|| black_box(brownian_excursion_lengths(&brownian_path)))
    });
    group.finish();
}

fn bench_poisson_dirichlet(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    c.bench_function("poisson_dirichlet_1k", |b| {
        b.iter(|| black_box(poisson_dirichlet(0.75, 0.0, 1000, &mut rng)))
    });
}

criterion_group!(
    benches,
    bench_bessel_10k,
    bench_bridge_10k,
    bench_excursions_100k,
    bench_poisson_dirichlet
);
criterion_main!(benches);
