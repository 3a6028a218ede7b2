use orrery::{State, GravityParameters};

pub fn unsoftened() -> GravityParameters {
    GravityParameters { gravitational_constant: 1., softening: 0. }
}

/// Two bodies at rest, separated by `distance` along x.
pub fn two_bodies(distance: f64, mass_a: f64, mass_b: f64) -> State {
    State::from_triples(vec![
        (mass_a, [-distance / 2., 0., 0.], [0., 0., 0.]),
        (mass_b, [ distance / 2., 0., 0.], [0., 0., 0.]),
    ])
}

/// Equal masses on a ring in the xy plane, slightly perturbed along z so that no symmetry
/// hides an indexing mistake.
pub fn ring(n_bodies: usize, radius: f64, speed: f64) -> State {
    let triples: Vec<(f64, [f64; 3], [f64; 3])> = (0..n_bodies).map(|i| {
        let angle = orrery::constants::TWO_PI * (i as f64) / (n_bodies as f64);
        let (sin, cos) = angle.sin_cos();
        let mass = 1. / (n_bodies as f64) * (1. + 0.01 * (i as f64));
        (mass, [radius * cos, radius * sin, 0.001 * (i as f64)], [-speed * sin, speed * cos, 0.])
    }).collect();
    State::from_triples(triples)
}

/// Bodies with unrelated masses and positions.
pub fn scattered() -> State {
    State::from_triples(vec![
        (1.0,  [ 0.1,  0.2, -0.3], [ 0.0,  0.3, 0.1]),
        (0.5,  [ 1.2, -0.4,  0.0], [-0.2,  0.1, 0.0]),
        (2.0,  [-0.7,  0.9,  0.5], [ 0.1, -0.1, 0.2]),
        (0.25, [ 0.3, -1.1,  1.4], [ 0.0,  0.0, -0.3]),
    ])
}
