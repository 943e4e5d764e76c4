// benches/geometric_product.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pga_engine::prelude::*;

/// Full 16x16 product, every kernel runs
fn full_product(a: Multivector, b: Multivector) -> Entity<Mask<0b1111>> {
    a * b
}

/// Plane * plane, a single kernel (gp00)
fn plane_product(a: Plane, b: Plane) -> Entity<Mask<0b0110>> {
    a * b
}

/// Motor * point, four kernels
fn motor_point(m: Motor, p: Point) -> Entity<Mask<0b1001>> {
    m * p
}

fn bench_geometric_product(c: &mut Criterion) {
    let a = Multivector::new(
        [1.0, 2.0, 3.0, 4.0],
        [0.5, -1.0, 0.25, 2.0],
        [1.5, 0.0, -2.0, 1.0],
        [1.0, 0.5, 0.5, -0.5],
    );
    let b = a.reverse();
    let x = Plane::new(1.0, 2.0, 3.0, -4.0);
    let y = Plane::new(0.0, 1.0, 0.0, 2.0);
    let m = Motor::new(0.9, 0.3, 0.1, 0.2, 0.0, 0.5, -0.5, 1.0);
    let p = Point::new(1.0, 2.0, 3.0);

    c.bench_function("gp_multivector_multivector", |bn| {
        bn.iter(|| full_product(black_box(a), black_box(b)))
    });

    c.bench_function("gp_plane_plane", |bn| {
        bn.iter(|| plane_product(black_box(x), black_box(y)))
    });

    c.bench_function("gp_motor_point", |bn| {
        bn.iter(|| motor_point(black_box(m), black_box(p)))
    });
}

criterion_group!(benches, bench_geometric_product);
criterion_main!(benches);
