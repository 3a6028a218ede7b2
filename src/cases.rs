use super::constants::TWO_PI;
use super::particles::{Axes, Body, State, GravityParameters};
use super::integrator::LeapFrog;

/// Initial conditions and run parameters, as stored in a JSON case file.
///
/// ```json
/// {
///   "time_step": 0.001,
///   "time_limit": 5.0,
///   "energy_log_period": 0.5,
///   "gravity": { "gravitational_constant": 1.0, "softening": 1e-12 },
///   "bodies": [
///     { "mass": 1.0, "position": { "x": 1.0, "y": 0.0, "z": 0.0 }, "velocity": { "x": 0.0, "y": 1.0, "z": 0.0 } }
///   ]
/// }
/// ```
///
/// `gravity` may be omitted, defaults are then used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub time_step: f64,
    pub time_limit: f64,
    pub energy_log_period: f64,
    #[serde(default)]
    pub gravity: GravityParameters,
    pub bodies: Vec<Body>,
}

impl Case {
    pub fn new(time_step: f64, time_limit: f64, energy_log_period: f64, gravity: GravityParameters, state: &State) -> Case {
        Case {
            time_step: time_step,
            time_limit: time_limit,
            energy_log_period: energy_log_period,
            gravity: gravity,
            bodies: state.bodies().to_vec(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.time_step.is_finite() || self.time_step <= 0. {
            return Err(format!("The time step must be positive and finite ({})", self.time_step));
        }
        if !self.time_limit.is_finite() || self.time_limit < 0. {
            return Err(format!("The time limit must be non-negative and finite ({})", self.time_limit));
        }
        if !self.energy_log_period.is_finite() || self.energy_log_period <= 0. {
            return Err(format!("The energy log period must be positive and finite ({})", self.energy_log_period));
        }
        self.gravity.validate()?;
        State::new(self.bodies.clone()).validate()
    }

    pub fn into_integrator(self) -> Result<LeapFrog, String> {
        self.validate()?;
        let state = State::new(self.bodies);
        Ok(LeapFrog::new(self.time_step, self.time_limit, self.energy_log_period, self.gravity, state))
    }
}

/// Three unit masses on the unit circle, 120 degrees apart, each moving tangentially at unit
/// speed (G = 1). The speed exceeds the circular one, so the triangle rotates while it expands.
pub fn rotating_triangle() -> State {
    let half_sqrt_3 = 3f64.sqrt() / 2.;
    State::from_triples(vec![
        (1., [ 1.,  0.,          0.], [ 0.,           1.,  0.]),
        (1., [-0.5, half_sqrt_3, 0.], [-half_sqrt_3, -0.5, 0.]),
        (1., [-0.5, -half_sqrt_3, 0.], [ half_sqrt_3, -0.5, 0.]),
    ])
}

/// Lagrange equilateral solution: three equal masses on a circle of `radius` around the origin
/// with the exact circular velocity, so the triangle rigidly rotates.
pub fn lagrange_triangle(radius: f64, mass: f64, gravitational_constant: f64) -> State {
    // Each body feels sqrt(3) G m / side^2 towards the center, with side = sqrt(3) radius
    let circular_speed = (gravitational_constant * mass / (3f64.sqrt() * radius)).sqrt();
    let bodies = (0..3).map(|i| {
        let angle = TWO_PI * (i as f64) / 3.;
        let (sin, cos) = angle.sin_cos();
        Body::new(mass,
                  Axes::new(radius * cos, radius * sin, 0.),
                  Axes::new(-circular_speed * sin, circular_speed * cos, 0.))
    }).collect();
    State::new(bodies)
}

/// Two bodies approaching each other plus a third one at rest, the triangle being almost
/// equilateral. `orrery demo` advances it by one step.
pub fn demo_state() -> State {
    State::from_triples(vec![
        (1., [0., 0., 0.], [0., 0.1, 0.]),
        (1., [1., 0., 0.], [0., -0.1, 0.]),
        (1., [0.5, 0.8660254, 0.], [0., 0., 0.]),
    ])
}

pub fn rotating_triangle_case(time_step: f64, time_limit: f64) -> Case {
    Case::new(time_step, time_limit, time_limit / 10., GravityParameters::default(), &rotating_triangle())
}
