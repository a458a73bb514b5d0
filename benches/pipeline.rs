//! Benchmarks for the pxsvg pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use pxsvg::{build, render, vectorize, BlockSampler};

/// Horizontal bands with a diagonal stripe: mixes long runs and merges.
fn banded_image(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = if (x + y) % 37 < 3 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([(y / 16 * 40) as u8, 64, 128, 255])
        };
    }
    img
}

fn checkerboard(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for (x, y, px) in img.enumerate_pixels_mut() {
        *px = if (x + y) % 2 == 0 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        };
    }
    img
}

// -- Merge benchmarks --

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    let banded = banded_image(256);
    let checker = checkerboard(256);
    let uniform = RgbaImage::from_pixel(256, 256, Rgba([10, 20, 30, 255]));

    group.bench_function("uniform_256", |b| {
        let sampler = BlockSampler::new(&uniform, 1).unwrap();
        b.iter(|| build(black_box(&sampler.grid()), &sampler).unwrap())
    });

    group.bench_function("banded_256", |b| {
        let sampler = BlockSampler::new(&banded, 1).unwrap();
        b.iter(|| build(black_box(&sampler.grid()), &sampler).unwrap())
    });

    group.bench_function("checkerboard_256", |b| {
        let sampler = BlockSampler::new(&checker, 1).unwrap();
        b.iter(|| build(black_box(&sampler.grid()), &sampler).unwrap())
    });

    group.bench_function("banded_1024_block_4", |b| {
        let large = banded_image(1024);
        b.iter(|| vectorize(black_box(&large), 4).unwrap())
    });

    group.finish();
}

// -- Render benchmarks --

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    let banded = vectorize(&banded_image(256), 1).unwrap();
    let checker = vectorize(&checkerboard(256), 1).unwrap();

    group.bench_function("svg_banded_256", |b| {
        b.iter(|| render(black_box(&banded.regions), &banded.grid))
    });

    group.bench_function("svg_checkerboard_256", |b| {
        b.iter(|| render(black_box(&checker.regions), &checker.grid))
    });

    group.finish();
}

criterion_group!(benches, bench_merge, bench_render);
criterion_main!(benches);
