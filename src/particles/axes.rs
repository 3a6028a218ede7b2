use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Three component vector used for positions, velocities and accelerations.
///
/// It is a plain `Copy` value: every body, state and derived array owns its own components, so
/// two snapshots never share storage.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Axes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Axes {
    pub fn new(x: f64, y: f64, z: f64) -> Axes {
        Axes { x, y, z }
    }

    pub fn zeros() -> Axes {
        Axes { x: 0., y: 0., z: 0. }
    }

    pub fn dot(&self, other: &Axes) -> f64 {
        self.x*other.x + self.y*other.y + self.z*other.z
    }

    pub fn cross(&self, other: &Axes) -> Axes {
        Axes {
            x: self.y*other.z - self.z*other.y,
            y: self.z*other.x - self.x*other.z,
            z: self.x*other.y - self.y*other.x,
        }
    }

    /// Squared norm
    pub fn norm_2(&self) -> f64 {
        self.x.powi(2) + self.y.powi(2) + self.z.powi(2)
    }

    pub fn norm(&self) -> f64 {
        self.norm_2().sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Axes {
    fn from(components: [f64; 3]) -> Axes {
        Axes { x: components[0], y: components[1], z: components[2] }
    }
}

impl From<&[f64; 3]> for Axes {
    fn from(components: &[f64; 3]) -> Axes {
        Axes::from(*components)
    }
}

impl Add for Axes {
    type Output = Axes;
    fn add(self, other: Axes) -> Axes {
        Axes { x: self.x + other.x, y: self.y + other.y, z: self.z + other.z }
    }
}

impl AddAssign for Axes {
    fn add_assign(&mut self, other: Axes) {
        self.x += other.x;
        self.y += other.y;
        self.z += other.z;
    }
}

impl Sub for Axes {
    type Output = Axes;
    fn sub(self, other: Axes) -> Axes {
        Axes { x: self.x - other.x, y: self.y - other.y, z: self.z - other.z }
    }
}

impl Mul<f64> for Axes {
    type Output = Axes;
    fn mul(self, factor: f64) -> Axes {
        Axes { x: self.x * factor, y: self.y * factor, z: self.z * factor }
    }
}

impl Neg for Axes {
    type Output = Axes;
    fn neg(self) -> Axes {
        Axes { x: -self.x, y: -self.y, z: -self.z }
    }
}
