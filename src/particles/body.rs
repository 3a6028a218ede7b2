use super::Axes;

/// A point mass.
///
/// Bodies are never modified in place: `with_position` and `with_velocity` build new values.
/// Position and velocity are copied on construction, so later edits to the caller's arrays
/// cannot reach a body that has already been built. No check is made on the sign or finiteness
/// of the mass (see `State::validate`).
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Body {
    mass: f64,
    position: Axes,
    velocity: Axes,
}

impl Body {
    pub fn new<P: Into<Axes>, V: Into<Axes>>(mass: f64, position: P, velocity: V) -> Body {
        Body {
            mass: mass,
            position: position.into(),
            velocity: velocity.into(),
        }
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn position(&self) -> Axes {
        self.position
    }

    pub fn velocity(&self) -> Axes {
        self.velocity
    }

    pub fn with_position(&self, position: Axes) -> Body {
        Body { position: position, ..*self }
    }

    pub fn with_velocity(&self, velocity: Axes) -> Body {
        Body { velocity: velocity, ..*self }
    }
}
