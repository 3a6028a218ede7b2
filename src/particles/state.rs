use super::{Axes, Body};

/// Snapshot of the whole system at one instant.
///
/// The order of the bodies is significant and never changes: index `i` refers to the same
/// physical body in every state derived from this one. A state has no mutators, every relation
/// (`add_velocity`, `add_position`, `to_center_of_mass_frame`) returns a new state of the same
/// length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct State {
    bodies: Vec<Body>,
}

impl State {
    pub fn new(bodies: Vec<Body>) -> State {
        State { bodies: bodies }
    }

    /// Build a state from `(mass, position, velocity)` triples.
    pub fn from_triples<I, P, V>(triples: I) -> State
        where I: IntoIterator<Item=(f64, P, V)>, P: Into<Axes>, V: Into<Axes> {
        let bodies = triples.into_iter()
                            .map(|(mass, position, velocity)| Body::new(mass, position, velocity))
                            .collect();
        State { bodies: bodies }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    ////////////////////////////////////////////////////////////////////////////
    // Extractors: rebuilt on every call, aligned by body index
    pub fn masses(&self) -> Vec<f64> {
        self.bodies.iter().map(|body| body.mass()).collect()
    }

    pub fn positions(&self) -> Vec<Axes> {
        self.bodies.iter().map(|body| body.position()).collect()
    }

    pub fn velocities(&self) -> Vec<Axes> {
        self.bodies.iter().map(|body| body.velocity()).collect()
    }

    ////////////////////////////////////////////////////////////////////////////
    // Relations
    /// New state where the velocity of body `i` is `v_i + dv[i]`.
    ///
    /// Panics if `dv` does not hold exactly one entry per body.
    pub fn add_velocity(&self, dv: &[Axes]) -> State {
        if dv.len() != self.bodies.len() {
            panic!("Velocity delta has {} entries but the state holds {} bodies", dv.len(), self.bodies.len());
        }
        let bodies = self.bodies.iter()
                            .zip(dv.iter())
                            .map(|(body, dv)| body.with_velocity(body.velocity() + *dv))
                            .collect();
        State { bodies: bodies }
    }

    /// New state where the position of body `i` is `r_i + dx[i]`.
    ///
    /// Panics if `dx` does not hold exactly one entry per body.
    pub fn add_position(&self, dx: &[Axes]) -> State {
        if dx.len() != self.bodies.len() {
            panic!("Position delta has {} entries but the state holds {} bodies", dx.len(), self.bodies.len());
        }
        let bodies = self.bodies.iter()
                            .zip(dx.iter())
                            .map(|(body, dx)| body.with_position(body.position() + *dx))
                            .collect();
        State { bodies: bodies }
    }

    ////////////////////////////////////////////////////////////////////////////
    // Barycentric quantities
    /// Position and velocity of the center of mass.
    pub fn center_of_mass(&self) -> (Axes, Axes) {
        let mut center_of_mass_position = Axes::zeros();
        let mut center_of_mass_velocity = Axes::zeros();
        let mut center_of_mass_mass = 0.;
        for body in self.bodies.iter() {
            center_of_mass_position += body.position() * body.mass();
            center_of_mass_velocity += body.velocity() * body.mass();
            center_of_mass_mass += body.mass();
        }
        if center_of_mass_mass > 0. {
            center_of_mass_position = center_of_mass_position * (1. / center_of_mass_mass);
            center_of_mass_velocity = center_of_mass_velocity * (1. / center_of_mass_mass);
        }
        (center_of_mass_position, center_of_mass_velocity)
    }

    /// Same bodies, shifted so that the center of mass sits at rest on the origin.
    pub fn to_center_of_mass_frame(&self) -> State {
        let (center_of_mass_position, center_of_mass_velocity) = self.center_of_mass();
        let bodies = self.bodies.iter()
                            .map(|body| Body::new(body.mass(),
                                                  body.position() - center_of_mass_position,
                                                  body.velocity() - center_of_mass_velocity))
                            .collect();
        State { bodies: bodies }
    }

    pub fn total_momentum(&self) -> Axes {
        let mut total_momentum = Axes::zeros();
        for body in self.bodies.iter() {
            total_momentum += body.velocity() * body.mass();
        }
        total_momentum
    }

    /// Norm of the total angular momentum with respect to the origin.
    pub fn total_angular_momentum(&self) -> f64 {
        let mut total_angular_momentum = Axes::zeros(); // L
        for body in self.bodies.iter() {
            total_angular_momentum += body.position().cross(&body.velocity()) * body.mass();
        }
        total_angular_momentum.norm()
    }

    ////////////////////////////////////////////////////////////////////////////
    /// Check that every body has a finite positive mass and finite position/velocity.
    ///
    /// The force and energy kernels never call this: degenerate input simply propagates into
    /// NaN/Inf results. Callers loading external data should.
    pub fn validate(&self) -> Result<(), String> {
        if self.bodies.is_empty() {
            return Err("The state does not contain any body".to_string());
        }
        for (i, body) in self.bodies.iter().enumerate() {
            if !body.mass().is_finite() || body.mass() <= 0. {
                return Err(format!("Body #{} has a non-positive or non-finite mass ({})", i, body.mass()));
            }
            if !body.position().is_finite() {
                return Err(format!("Body #{} has a non-finite position ({:?})", i, body.position()));
            }
            if !body.velocity().is_finite() {
                return Err(format!("Body #{} has a non-finite velocity ({:?})", i, body.velocity()));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a State {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
