extern crate orrery;

#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};

fn create_ring(n_bodies: usize) -> orrery::State {
    let bodies = (0..n_bodies).map(|i| {
        let angle = orrery::constants::TWO_PI * (i as f64) / (n_bodies as f64);
        let (sin, cos) = angle.sin_cos();
        orrery::Body::new(1. / n_bodies as f64, [cos, sin, 0.], [-0.5 * sin, 0.5 * cos, 0.])
    }).collect();
    orrery::State::new(bodies)
}


fn criterion_benchmark_state(c: &mut Criterion) {
    let gravity = orrery::GravityParameters::default();
    let time_step = 0.001;

    let triangle = orrery::cases::rotating_triangle();
    c.bench_function("calculate_accelerations/triangle", |b| b.iter(|| orrery::calculate_accelerations(&triangle, &gravity)));
    c.bench_function("leapfrog_step/triangle", |b| b.iter(|| orrery::leapfrog::step(&triangle, time_step, &gravity)));
    c.bench_function("total_energy/triangle", |b| b.iter(|| triangle.total_energy(&gravity)));

    let mut group = c.benchmark_group("calculate_accelerations");
    for n_bodies in [8, 32, 128].iter() {
        let state = create_ring(*n_bodies);
        group.bench_with_input(BenchmarkId::from_parameter(n_bodies), &state, |b, state| b.iter(|| orrery::calculate_accelerations(state, &gravity)));
    }
    group.finish();

    let mut group = c.benchmark_group("leapfrog_step");
    for n_bodies in [8, 32, 128].iter() {
        let state = create_ring(*n_bodies);
        group.bench_with_input(BenchmarkId::from_parameter(n_bodies), &state, |b, state| b.iter(|| orrery::leapfrog::step(state, time_step, &gravity)));
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark_state);
criterion_main!(benches);
