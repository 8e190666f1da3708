//! Benchmarks for lina operations.
//!
//! Run with: `cargo bench`

use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use lina_core::{FastMath, StdMath};
use lina_mat::Mat4;
use lina_quat::Quat;
use lina_vec::{Vec3, batch};

fn sample_vectors(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Vec3::new(f * 0.5 - 100.0, (i % 17) as f32, -f * 0.25)
        })
        .collect()
}

/// Benchmark normalize across providers.
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1000, 10000, 100000].iter() {
        let vectors = sample_vectors(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("std", size), &vectors, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|v| black_box(*v).normalize_with(&StdMath))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("fast", size), &vectors, |b, vs| {
            b.iter(|| {
                vs.iter()
                    .map(|v| black_box(*v).normalize_with(&FastMath))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark axis rotation: Rodrigues vs quaternion vs matrix.
fn bench_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotation");

    let vectors = sample_vectors(10000);
    let axis = Vec3::new(1.0, 2.0, -1.0).normalize();
    let angle = 0.73;
    let quat = Quat::from_axis_angle(axis, angle);
    let mat = Mat4::from_quat(quat);

    group.throughput(Throughput::Elements(vectors.len() as u64));

    group.bench_function("rodrigues", |b| {
        b.iter(|| {
            vectors
                .iter()
                .map(|v| black_box(*v).rotate_rad(axis, angle))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("quat", |b| {
        b.iter(|| {
            vectors
                .iter()
                .map(|v| quat * black_box(*v))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("mat4", |b| {
        b.iter(|| {
            vectors
                .iter()
                .map(|v| mat.transform_vector3(black_box(*v)))
                .collect::<Vec<_>>()
        })
    });

    group.bench_function("quat_batch_inplace", |b| {
        b.iter_batched(
            || vectors.clone(),
            |mut points| {
                quat.rotate_points(&mut points);
                points
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

/// Benchmark the planar SIMD kernels against scalar loops.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [1000, 100000].iter() {
        let a: Vec<f32> = (0..*size).map(|i| i as f32 * 0.001).collect();
        let b: Vec<f32> = (0..*size).map(|i| 1.0 + (i % 7) as f32).collect();
        let cc: Vec<f32> = vec![0.5; *size];

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("fma_simd", size), size, |bch, _| {
            bch.iter(|| batch::batch_fma(black_box(&a), black_box(&b), black_box(&cc)))
        });

        group.bench_with_input(BenchmarkId::new("fma_scalar", size), size, |bch, _| {
            bch.iter(|| {
                a.iter()
                    .zip(&b)
                    .zip(&cc)
                    .map(|((&x, &y), &z)| x.mul_add(y, z))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("length3", size), size, |bch, _| {
            bch.iter(|| batch::batch_length3(black_box(&a), black_box(&b), black_box(&cc)))
        });
    }

    group.finish();
}

/// Benchmark Mat4 point transforms, serial and batch.
fn bench_mat4_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4_transform");

    let m = Mat4::from_scale_rotation_translation(
        Vec3::new(1.0, 2.0, 1.0),
        Quat::from_rotation_y(0.5),
        Vec3::new(10.0, 0.0, -4.0),
    );

    for size in [1000, 100000].iter() {
        let points = sample_vectors(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("map", size), &points, |b, ps| {
            b.iter(|| {
                ps.iter()
                    .map(|p| m.transform_point3(black_box(*p)))
                    .collect::<Vec<_>>()
            })
        });

        group.bench_with_input(BenchmarkId::new("inplace", size), &points, |b, ps| {
            b.iter_batched(
                || ps.clone(),
                |mut ps| {
                    m.transform_points(&mut ps);
                    ps
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_rotation,
    bench_batch,
    bench_mat4_transform
);
criterion_main!(benches);
