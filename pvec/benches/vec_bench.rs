//! Benchmarks comparing the persistent vector against persistent structures
//! from the `im` crate for versioned workloads.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rng, Rng};

use im::Vector as ImVector;
use pvec::Vector;

const SIZES: [usize; 3] = [1 << 8, 1 << 10, 1 << 12];

pub fn push_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_comparison");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("pvec", size), &size, |b, &size| {
            b.iter(|| {
                let mut v: Vector<usize> = Vector::new();
                for i in 0..size {
                    v = v.push(i).unwrap();
                }
                std::hint::black_box(v.len());
            })
        });

        group.bench_with_input(BenchmarkId::new("im_vector", size), &size, |b, &size| {
            b.iter(|| {
                let mut v = ImVector::new();
                for i in 0..size {
                    v.push_back(i);
                }
                std::hint::black_box(v.len());
            })
        });
    }

    group.finish();
}

pub fn lookup_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup_comparison");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        let mut v: Vector<usize> = Vector::new();
        let mut imv = ImVector::new();
        for i in 0..size {
            v = v.push(i).unwrap();
            imv.push_back(i);
        }

        group.bench_with_input(BenchmarkId::new("pvec", size), &size, |b, &size| {
            let mut rng = rng();
            b.iter(|| {
                let index = rng.random_range(0..size);
                std::hint::black_box(v.get(index).unwrap());
            })
        });

        group.bench_with_input(BenchmarkId::new("im_vector", size), &size, |b, &size| {
            let mut rng = rng();
            b.iter(|| {
                let index = rng.random_range(0..size);
                std::hint::black_box(imv.get(index));
            })
        });
    }

    group.finish();
}

/// Derive a fresh version per update, the workload structural sharing is for.
pub fn versioned_update_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("versioned_update_comparison");
    group.throughput(Throughput::Elements(1));

    for size in SIZES {
        let mut v: Vector<usize> = Vector::new();
        let mut imv = ImVector::new();
        for i in 0..size {
            v = v.push(i).unwrap();
            imv.push_back(i);
        }

        group.bench_with_input(BenchmarkId::new("pvec", size), &size, |b, &size| {
            let mut rng = rng();
            b.iter(|| {
                let index = rng.random_range(0..size);
                std::hint::black_box(v.put(index, index).unwrap());
            })
        });

        group.bench_with_input(BenchmarkId::new("im_vector", size), &size, |b, &size| {
            let mut rng = rng();
            b.iter(|| {
                let index = rng.random_range(0..size);
                std::hint::black_box(imv.update(index, index));
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    push_comparison,
    lookup_comparison,
    versioned_update_comparison
);
criterion_main!(benches);
