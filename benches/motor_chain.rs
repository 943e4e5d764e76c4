// benches/motor_chain.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pga_engine::prelude::*;

/// Rotation about z by `angle` followed by a shift along x
fn generate_motor(angle: f32) -> Motor {
    let half = 0.5 * angle;
    let rotor = Motor::new(half.cos(), half.sin(), 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
    let translator = Motor::new(1.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0);
    translator.compose(&rotor)
}

/// Compose 100 motors
fn compose_chain(m: Motor) -> Motor {
    let mut acc = Motor::identity();
    for _ in 0..100 {
        acc = acc.compose(&m);
    }
    acc
}

/// Apply the sandwich `m p ~m` 100 times
fn sandwich_chain(m: Motor, p: Point) -> Point {
    let rev = m.reverse();
    let mut result = p;
    for _ in 0..100 {
        let moved = m * result * rev;
        result = Point::from(Entity::<Mask<0b1000>>::from_partitions([Partition::from(moved.p3())]));
    }
    result
}

fn bench_motor_chain(c: &mut Criterion) {
    let m = generate_motor(std::f32::consts::FRAC_PI_4);
    let p = Point::new(1.0, 0.0, 0.0);

    c.bench_function("motor_compose_100", |b| {
        b.iter(|| compose_chain(black_box(m)))
    });

    c.bench_function("motor_sandwich_100", |b| {
        b.iter(|| sandwich_chain(black_box(m), black_box(p)))
    });
}

criterion_group!(benches, bench_motor_chain);
criterion_main!(benches);
