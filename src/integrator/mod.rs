pub mod leapfrog;
pub mod output;

pub use self::leapfrog::{LeapFrog, EnergyRecord};

use super::particles::State;


pub trait Integrator {
    fn get_n_particles(&self) -> usize;
    fn get_current_time(&self) -> f64;
    fn get_current_iteration(&self) -> u64;
    fn get_state(&self) -> &State;
    /// Advance one time step. `Ok(true)` means an energy record is due for the new state,
    /// `Err` means the run is over (or cannot continue).
    fn iterate(&mut self) -> Result<bool, String>;
}

