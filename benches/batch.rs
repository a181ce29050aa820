//! Scalar versus eight-wide batch benchmarks.
//!
//! # Benchmark Categories
//!
//! ## 1. **Vector kernels**
//! - dot, cross and normalise on `Vec3` one vector at a time (baseline)
//! - the same operations on `Vec3x8`, eight vectors per call
//!
//! ## 2. **Colour packing**
//! - `Colour::to_rgb24` per pixel versus `ColourX8::to_rgb24` per eight pixels
//!
//! ## 3. **Image emission**
//! - scalar, batched and row-parallel rendering of the gradient image

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdray::image::{render_batched, render_parallel, render_scalar, ImageConfig};
use simdray::{Colour, ColourX8, Vec3, Vec3x8};

/// Number of vectors (or pixels) per measured iteration; a multiple of 8.
const ELEMENTS: usize = 4096;

/// Image sizes for the emitter benchmarks.
const IMAGE_SIZES: &[usize] = &[64, 256, 1024];

/// Generates reproducible pseudo-random vectors in `[-1, 1]^3`.
fn generate_vectors(len: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            Vec3::new(
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
                rng.random_range(-1.0..=1.0),
            )
        })
        .collect()
}

fn to_batches(vectors: &[Vec3]) -> Vec<Vec3x8> {
    vectors
        .chunks_exact(8)
        .map(|chunk| {
            let lanes: [Vec3; 8] = std::array::from_fn(|i| chunk[i]);
            Vec3x8::from_lanes(&lanes)
        })
        .collect()
}

fn vector_benchmarks(c: &mut Criterion) {
    let a = generate_vectors(ELEMENTS, 42);
    let b = generate_vectors(ELEMENTS, 43);
    let batch_a = to_batches(&a);
    let batch_b = to_batches(&b);

    let mut group = c.benchmark_group("Vec3");
    group.throughput(Throughput::Elements(ELEMENTS as u64));

    group.bench_function(BenchmarkId::new("dot", "scalar"), |bench| {
        bench.iter(|| {
            for (x, y) in a.iter().zip(&b) {
                black_box(x.dot(y));
            }
        })
    });
    group.bench_function(BenchmarkId::new("dot", "x8"), |bench| {
        bench.iter(|| {
            for (x, y) in batch_a.iter().zip(&batch_b) {
                black_box(x.dot(y));
            }
        })
    });

    group.bench_function(BenchmarkId::new("cross", "scalar"), |bench| {
        bench.iter(|| {
            for (x, y) in a.iter().zip(&b) {
                black_box(x.cross(y));
            }
        })
    });
    group.bench_function(BenchmarkId::new("cross", "x8"), |bench| {
        bench.iter(|| {
            for (x, y) in batch_a.iter().zip(&batch_b) {
                black_box(x.cross(y));
            }
        })
    });

    group.bench_function(BenchmarkId::new("normalise", "scalar"), |bench| {
        bench.iter(|| {
            for x in &a {
                black_box(x.unit_vector());
            }
        })
    });
    group.bench_function(BenchmarkId::new("normalise", "x8"), |bench| {
        bench.iter(|| {
            for x in &batch_a {
                black_box(x.normalised());
            }
        })
    });

    group.finish();
}

fn colour_benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let pixels: Vec<Colour> = (0..ELEMENTS)
        .map(|_| Colour::new(rng.random(), rng.random(), rng.random()))
        .collect();
    let batches: Vec<ColourX8> = pixels
        .chunks_exact(8)
        .map(|chunk| {
            let lanes: [Colour; 8] = std::array::from_fn(|i| chunk[i]);
            ColourX8::from_pixels(&lanes)
        })
        .collect();

    let mut group = c.benchmark_group("RGB24");
    group.throughput(Throughput::Elements(ELEMENTS as u64));

    group.bench_function("scalar", |bench| {
        bench.iter(|| {
            for p in &pixels {
                black_box(p.to_rgb24());
            }
        })
    });
    group.bench_function("x8", |bench| {
        bench.iter(|| {
            for batch in &batches {
                black_box(batch.to_rgb24());
            }
        })
    });

    group.finish();
}

fn image_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gradient image");

    for &size in IMAGE_SIZES {
        let config = ImageConfig::new(size, size).expect("benchmark sizes are non-zero");
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &config, |bench, config| {
            bench.iter(|| {
                let mut out = Vec::with_capacity(config.pixel_count() * 12);
                render_scalar(&mut out, config).unwrap();
                black_box(out)
            })
        });
        group.bench_with_input(BenchmarkId::new("batched", size), &config, |bench, config| {
            bench.iter(|| {
                let mut out = Vec::with_capacity(config.pixel_count() * 12);
                render_batched(&mut out, config).unwrap();
                black_box(out)
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &config, |bench, config| {
            bench.iter(|| {
                let mut out = Vec::with_capacity(config.pixel_count() * 12);
                render_parallel(&mut out, config).unwrap();
                black_box(out)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, vector_benchmarks, colour_benchmarks, image_benchmarks);
criterion_main!(benches);
