use super::super::constants::{G, SOFTENING, SELF_PAIR_DISTANCE, SELF_PAIR_WEIGHT};
use super::{Axes, State};

#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct GravityParameters {
    pub gravitational_constant: f64,
    pub softening: f64,
}

impl Default for GravityParameters {
    fn default() -> GravityParameters {
        GravityParameters {
            gravitational_constant: G,
            softening: SOFTENING,
        }
    }
}

impl GravityParameters {
    pub fn validate(&self) -> Result<(), String> {
        if !self.gravitational_constant.is_finite() || self.gravitational_constant <= 0. {
            return Err(format!("The gravitational constant must be positive and finite ({})", self.gravitational_constant));
        }
        if !self.softening.is_finite() || self.softening < 0. {
            return Err(format!("The softening length must be non-negative and finite ({})", self.softening));
        }
        Ok(())
    }
}

/// Dense row-major N x N matrix indexed by body pairs `(i, j)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairMatrix<T> {
    n: usize,
    values: Vec<T>,
}

impl<T: Copy> PairMatrix<T> {
    fn from_fn<F: FnMut(usize, usize) -> T>(n: usize, mut f: F) -> PairMatrix<T> {
        let mut values = Vec::with_capacity(n*n);
        for i in 0..n {
            for j in 0..n {
                values.push(f(i, j));
            }
        }
        PairMatrix { n: n, values: values }
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> T {
        self.values[i*self.n + j]
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.values[i*self.n..(i+1)*self.n]
    }

    pub fn fill_diagonal(&mut self, value: T) {
        for i in 0..self.n {
            self.values[i*self.n + i] = value;
        }
    }

    pub fn map<U: Copy, F: Fn(T) -> U>(&self, f: F) -> PairMatrix<U> {
        PairMatrix { n: self.n, values: self.values.iter().map(|value| f(*value)).collect() }
    }
}

impl PairMatrix<f64> {
    /// Sum over `j > i`: every unordered pair exactly once.
    pub fn strict_upper_triangle_sum(&self) -> f64 {
        let mut sum = 0.;
        for i in 0..self.n {
            for j in i+1..self.n {
                sum += self.get(i, j);
            }
        }
        sum
    }

    /// Sum over `j < i`, visiting pairs in the same order as `strict_upper_triangle_sum`.
    pub fn strict_lower_triangle_sum(&self) -> f64 {
        let mut sum = 0.;
        for i in 0..self.n {
            for j in i+1..self.n {
                sum += self.get(j, i);
            }
        }
        sum
    }
}

/// `dx[i, j] = pos[j] - pos[i]` for every ordered pair (zero on the diagonal).
pub fn calculate_pairwise_displacements(positions: &[Axes]) -> PairMatrix<Axes> {
    PairMatrix::from_fn(positions.len(), |i, j| positions[j] - positions[i])
}

/// Gravitational weights `G * m[j] / (r[i, j]^3 + eps)`.
///
/// The squared distances get a placeholder diagonal before the square root so no self pair is
/// ever divided by zero, and the weight diagonal is then forced to zero: a body never pulls
/// on itself whatever the placeholder was.
pub fn calculate_acceleration_weights(displacements: &PairMatrix<Axes>, masses: &[f64], gravity: &GravityParameters) -> PairMatrix<f64> {
    let mut distances_2 = displacements.map(|dx| dx.norm_2());
    distances_2.fill_diagonal(SELF_PAIR_DISTANCE);
    let mut weights = PairMatrix::from_fn(distances_2.size(), |i, j| {
        let distance_2 = distances_2.get(i, j);
        let distance = distance_2.sqrt();
        let distance_3 = distance * distance_2;
        gravity.gravitational_constant * masses[j] / (distance_3 + gravity.softening)
    });
    weights.fill_diagonal(SELF_PAIR_WEIGHT);
    weights
}

/// All-pairs gravitational acceleration of every body, `acc[i] = sum_j dx[i, j] * w[i, j]`.
///
/// Both N x N matrices are materialized (O(N^2) time and memory); there is no approximation.
pub fn calculate_accelerations(state: &State, gravity: &GravityParameters) -> Vec<Axes> {
    let masses = state.masses();
    let displacements = calculate_pairwise_displacements(&state.positions());
    let weights = calculate_acceleration_weights(&displacements, &masses, gravity);

    let mut accelerations = Vec::with_capacity(state.len());
    for i in 0..state.len() {
        let mut acceleration = Axes::zeros();
        for (dx, weight) in displacements.row(i).iter().zip(weights.row(i).iter()) {
            acceleration += *dx * *weight;
        }
        accelerations.push(acceleration);
    }
    accelerations
}

/// Pairwise potential `U[i, j] = -G m_i m_j / (r[i, j] + eps)` with a zero diagonal.
///
/// The matrix is symmetric; only one triangle must be summed to get the potential energy.
pub fn calculate_pairwise_potential(state: &State, gravity: &GravityParameters) -> PairMatrix<f64> {
    let masses = state.masses();
    let displacements = calculate_pairwise_displacements(&state.positions());
    let mut distances = displacements.map(|dx| dx.norm_2().sqrt());
    distances.fill_diagonal(SELF_PAIR_DISTANCE);
    let mut potential = PairMatrix::from_fn(distances.size(), |i, j| {
        -gravity.gravitational_constant * (masses[i] * masses[j]) / (distances.get(i, j) + gravity.softening)
    });
    potential.fill_diagonal(SELF_PAIR_WEIGHT);
    potential
}
