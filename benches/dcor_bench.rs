//! speed comparison of the fast O(n*log(n)) engine against the O(n*n) reference,
//! on the sin/cos fixture, from n = 1024 up to n = 2^20.
//! run with : cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

use fastdcor::{dist_corr, dist_corr_naive};

fn samples(sample_size: usize) -> (Vec<f64>, Vec<f64>) {
    let v1: Vec<f64> = (0..sample_size).map(|i| (i as f64).sin()).collect();
    let v2: Vec<f64> = (0..sample_size).map(|i| (i as f64).cos()).collect();

    (v1, v2)
}

fn dcor_small(c: &mut Criterion) {
    let (v1, v2) = samples(1024);

    let mut group = c.benchmark_group("small_1024");

    println!("n : {} - dist_corr : {:?}", 1024, dist_corr(&v1, &v2));

    group.bench_function("fast", |b| {
        b.iter(|| dist_corr(&v1, &v2).unwrap());
    });
    group.bench_function("naive", |b| {
        b.iter(|| dist_corr_naive(&v1, &v2).unwrap());
    });
}

fn dcor_little(c: &mut Criterion) {
    let (v1, v2) = samples(8013);

    let mut group = c.benchmark_group("little_8013");

    group.bench_function("fast", |b| {
        b.iter(|| dist_corr(&v1, &v2).unwrap());
    });
    group.bench_function("naive", |b| {
        b.iter(|| dist_corr_naive(&v1, &v2).unwrap());
    });
}

fn dcor_medium(c: &mut Criterion) {
    let n = 2_usize.pow(15);
    let (v1, v2) = samples(n);

    let mut group = c.benchmark_group("medium_2pow15");

    println!("n : {} - dist_corr : {:?}", n, dist_corr(&v1, &v2));

    // the naive engine is already around a thousand times slower here, fast only
    group.bench_function("fast", |b| {
        b.iter(|| dist_corr(&v1, &v2).unwrap());
    });
}

fn dcor_big(c: &mut Criterion) {
    let n = 2_usize.pow(20);
    let (v1, v2) = samples(n);

    let mut group = c.benchmark_group("big_2pow20");

    println!("n : {} - dist_corr : {:?}", n, dist_corr(&v1, &v2));

    group.bench_function("fast", |b| {
        b.iter(|| dist_corr(&v1, &v2).unwrap());
    });
}

criterion_group!(
    name = dcor_speed;

    config = Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(30))
        .sample_size(10);

    targets =
        dcor_small,
        dcor_little,
        dcor_medium,
        dcor_big,

);

criterion_main!(dcor_speed);
