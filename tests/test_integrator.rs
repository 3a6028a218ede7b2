extern crate orrery;
extern crate assert_approx_eq;

mod common;
use assert_approx_eq::assert_approx_eq;
use orrery::{GravityParameters, Integrator, State};
use orrery::leapfrog::{drift, half_kick, step};
use orrery::tools::calculate_relative_energy_error;

#[test]
fn rotating_triangle_conserves_energy() {
    let gravity = GravityParameters::default();
    let time_step = 0.001;
    let mut state = orrery::cases::rotating_triangle();
    let initial_energy = state.total_energy(&gravity);
    for _ in 0..5000 {
        state = step(&state, time_step, &gravity);
    }
    let final_energy = state.total_energy(&gravity);
    let relative_energy_error = calculate_relative_energy_error(initial_energy, final_energy);
    assert!(relative_energy_error < 1e-4, "Relative energy error too large: {:e}", relative_energy_error);
}

#[test]
fn driver_conserves_energy_on_the_rotating_triangle() {
    let mut universe_integrator = orrery::cases::rotating_triangle_case(0.001, 5.).into_integrator().unwrap();
    let n_energy_logs = common::iterate(&mut universe_integrator);
    assert_eq!(universe_integrator.get_current_iteration(), 5000);
    assert_eq!(n_energy_logs, 10);
    let record = universe_integrator.energy_record();
    assert_approx_eq!(record.time, 5., 1e-12);
    assert!(record.relative_energy_error < 1e-4);
}

#[test]
fn step_is_deterministic() {
    let gravity = GravityParameters::default();
    let state = orrery::cases::demo_state();
    assert_eq!(step(&state, 0.01, &gravity), step(&state, 0.01, &gravity));
}

#[test]
fn step_leaves_its_input_untouched() {
    let gravity = GravityParameters::default();
    let state = orrery::cases::demo_state();
    let _ = step(&state, 0.01, &gravity);
    assert_eq!(state, orrery::cases::demo_state());
}

#[test]
fn demo_state_single_step() {
    let gravity = GravityParameters::default();
    let state = orrery::cases::demo_state();
    let new_state = step(&state, 0.01, &gravity);
    // The body at rest starts falling towards the other two (|a| = sqrt(3))
    let velocity = new_state.bodies()[2].velocity();
    assert_approx_eq!(velocity.y, -0.01 * 3_f64.sqrt(), 1e-4);
    assert_ne!(new_state.positions(), state.positions());
    let relative_energy_error = calculate_relative_energy_error(state.total_energy(&gravity), new_state.total_energy(&gravity));
    assert!(relative_energy_error < 1e-3, "Relative energy error too large: {:e}", relative_energy_error);
}

#[test]
fn composition_order_matters() {
    let gravity = GravityParameters::default();
    let time_step = 0.01;
    let state = orrery::cases::rotating_triangle();
    let kick_drift_kick = step(&state, time_step, &gravity);
    let drift_kick_kick = half_kick(&half_kick(&drift(&state, time_step), time_step, &gravity), time_step, &gravity);
    assert_ne!(kick_drift_kick, drift_kick_kick);
    assert_ne!(kick_drift_kick.positions(), drift_kick_kick.positions());
}

#[test]
fn step_is_kick_drift_kick() {
    let gravity = GravityParameters::default();
    let time_step = 0.01;
    let state = common::scenarios::scattered();
    let expected = half_kick(&drift(&half_kick(&state, time_step, &gravity), time_step), time_step, &gravity);
    assert_eq!(step(&state, time_step, &gravity), expected);
}

#[test]
fn drift_moves_along_velocities() {
    let state = State::from_triples(vec![(1., [0., 0., 0.], [1., -2., 0.5])]);
    let drifted = drift(&state, 0.5);
    assert_eq!(drifted.positions()[0], orrery::Axes::new(0.5, -1., 0.25));
    assert_eq!(drifted.velocities(), state.velocities());
}

#[test]
fn half_kick_of_a_lone_body_changes_nothing() {
    let state = State::from_triples(vec![(1., [3., 0., 0.], [0., 1., 0.])]);
    assert_eq!(half_kick(&state, 0.1, &GravityParameters::default()), state);
}

#[test]
fn momentum_and_angular_momentum_are_conserved() {
    let gravity = GravityParameters::default();
    let mut state = common::scenarios::ring(8, 1., 0.8).to_center_of_mass_frame();
    let initial_momentum = state.total_momentum();
    let initial_angular_momentum = state.total_angular_momentum();
    for _ in 0..1000 {
        state = step(&state, 0.001, &gravity);
    }
    assert!((state.total_momentum() - initial_momentum).norm() < 1e-12);
    assert_approx_eq!(state.total_angular_momentum(), initial_angular_momentum, 1e-10);
}

#[test]
fn lagrange_triangle_rotates_rigidly() {
    let gravity = GravityParameters::default();
    let (radius, time_step) = (1., 0.001);
    let initial_state = orrery::cases::lagrange_triangle(radius, 1., 1.);
    let angular_frequency = initial_state.velocities()[0].norm() / radius;
    let mut state = initial_state.clone();
    for _ in 0..1000 {
        state = step(&state, time_step, &gravity);
    }
    let elapsed_time = 1000. * time_step;
    let expected_position = orrery::Axes::new(radius * (angular_frequency * elapsed_time).cos(), radius * (angular_frequency * elapsed_time).sin(), 0.);
    assert!((state.positions()[0] - expected_position).norm() < 1e-5);
    assert_approx_eq!(state.total_energy(&gravity), initial_state.total_energy(&gravity), 1e-6);
}

#[test]
fn driver_follows_the_pure_step() {
    let gravity = GravityParameters::default();
    let initial_state = common::scenarios::scattered();
    let mut universe_integrator = orrery::LeapFrog::new(0.002, 0.1, 0.01, gravity, initial_state.clone());
    let mut expected_state = initial_state;
    for _ in 0..50 {
        expected_state = step(&expected_state, 0.002, &gravity);
    }
    common::iterate(&mut universe_integrator);
    assert_eq!(universe_integrator.get_current_iteration(), 50);
    common::assert_states(universe_integrator.get_state(), &expected_state, 1e-15);
}
