use super::gravity::{calculate_pairwise_potential, GravityParameters};
use super::State;

// Diagnostics only: none of these take part in advancing the system.
impl State {
    pub fn kinetic_energy(&self) -> f64 {
        let mut e_kin = 0.;
        for body in self.iter() {
            e_kin += body.mass() * body.velocity().norm_2();
        }
        0.5 * e_kin
    }

    /// Gravitational potential energy, each unordered pair counted once.
    pub fn potential_energy(&self, gravity: &GravityParameters) -> f64 {
        calculate_pairwise_potential(self, gravity).strict_upper_triangle_sum()
    }

    pub fn total_energy(&self, gravity: &GravityParameters) -> f64 {
        self.kinetic_energy() + self.potential_energy(gravity)
    }
}
