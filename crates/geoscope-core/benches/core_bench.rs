//! Benchmarks for the hot coordinate-pipeline math.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geoscope_core::axis::divide;
use geoscope_core::coordinate::Coordinate;
use geoscope_core::geom::{Point, Rect, Transform};
use geoscope_core::projection::{Orientation, Projection};

fn bench_divide(c: &mut Criterion) {
    c.bench_function("axis_divide", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for i in 1..100u32 {
                acc += divide(black_box(i as f64 * 13.7), black_box(5));
            }
            acc
        })
    });
}

fn bench_projection(c: &mut Criterion) {
    let bounds = Rect::new(-137.0, 42.0, 512.0, 384.0);
    c.bench_function("coordinate_and_projection", |b| {
        b.iter(|| {
            let coord = Coordinate::new(black_box(bounds), 5);
            let proj = Projection::new(&coord, 250.0, 5, 32.0, Orientation::YUp);
            proj.composite().apply(black_box(Point::new(7.0, -3.0)))
        })
    });
}

fn bench_transform_compose(c: &mut Criterion) {
    let a = Transform::scale(2.0, 3.0).then_rotate(0.4);
    let t = Transform::translation(10.0, -4.0).then_rotate(-1.1);
    c.bench_function("transform_compose_apply", |b| {
        b.iter(|| {
            let composed = black_box(a).then(&black_box(t));
            composed.apply(Point::new(1.0, 2.0))
        })
    });
}

criterion_group!(benches, bench_divide, bench_projection, bench_transform_compose);
criterion_main!(benches);
