//! LeapFrog is a second order symplectic integrator
//! http://adsabs.harvard.edu/cgi-bin/bib_query?arXiv:astro-ph/9710043
//!
//! The Hamiltonian is split into the kinetic and the potential part. Velocities are advanced
//! for half a time step with the accelerations at the current positions (kick), positions are
//! then advanced for a full time step with those velocities (drift), and the velocities are
//! advanced again for half a time step with the accelerations at the new positions (kick).
//! This kick-drift-kick form is equivalent to velocity Verlet: it conserves a shadow
//! Hamiltonian, so the energy error oscillates instead of growing with time.

use super::Integrator;
use super::super::particles::{Axes, State, GravityParameters, calculate_accelerations};
use super::super::constants::{MIN_STEPS_PER_ENERGY_LOG, TIME_TOLERANCE_IN_STEPS};
use super::super::tools::{calculate_relative_energy_error, timestamp};

/// Velocity half step: `v += a(r) * dt/2`.
pub fn half_kick(state: &State, time_step: f64, gravity: &GravityParameters) -> State {
    let half_time_step = 0.5 * time_step;
    let dv: Vec<Axes> = calculate_accelerations(state, gravity)
                            .into_iter()
                            .map(|acceleration| acceleration * half_time_step)
                            .collect();
    state.add_velocity(&dv)
}

/// Position full step: `r += v * dt`.
pub fn drift(state: &State, time_step: f64) -> State {
    let dx: Vec<Axes> = state.velocities()
                            .into_iter()
                            .map(|velocity| velocity * time_step)
                            .collect();
    state.add_position(&dx)
}

/// One kick-drift-kick step. The order of the three stages must not change.
pub fn step(state: &State, time_step: f64, gravity: &GravityParameters) -> State {
    let kicked = half_kick(state, time_step, gravity);
    let drifted = drift(&kicked, time_step);
    half_kick(&drifted, time_step, gravity)
}

/// Energy diagnostics at one instant of a run.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnergyRecord {
    pub time: f64,
    pub iteration: u64,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub relative_energy_error: f64,
    pub angular_momentum: f64,
}

/// Drives `step` over a whole run: owns the current state and the clock.
///
/// The run ends after `floor(time_limit / time_step)` iterations. Energy records are due at
/// `t = 0` (before the first iteration, taken by the caller) and then every
/// `energy_log_period`; `iterate` reports when one is due for the state it just produced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeapFrog {
    time_step: f64,
    half_time_step: f64,
    pub gravity: GravityParameters,
    pub state: State,
    pub current_time: f64,
    pub time_limit: f64,
    current_iteration: u64,
    pub energy_log_period: f64,
    n_energy_logs: u64,
    initial_energy: f64,
}

impl LeapFrog {
    pub fn new(time_step: f64, time_limit: f64, energy_log_period: f64, gravity: GravityParameters, state: State) -> LeapFrog {
        let initial_energy = state.total_energy(&gravity);
        LeapFrog {
                    time_step: time_step,
                    half_time_step: 0.5*time_step,
                    gravity: gravity,
                    state: state,
                    current_time: 0.,
                    time_limit: time_limit,
                    current_iteration: 0,
                    energy_log_period: energy_log_period.max(MIN_STEPS_PER_ENERGY_LOG*time_step),
                    n_energy_logs: 1, // Initial conditions
                    initial_energy: initial_energy,
                    }
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn initial_energy(&self) -> f64 {
        self.initial_energy
    }

    /// Number of iterations needed to reach the time limit.
    pub fn n_iterations(&self) -> u64 {
        // Tolerance so that 5.0 / 0.001 does not end one step short
        (self.time_limit / self.time_step + TIME_TOLERANCE_IN_STEPS).floor() as u64
    }

    pub fn set_time_limit(&mut self, time_limit: f64) -> Result<(), String> {
        if !time_limit.is_finite() || time_limit < 0. {
            return Err(format!("Invalid time limit ({})", time_limit));
        }
        if time_limit < self.current_time {
            return Err(format!("The new time limit ({}) is smaller than the current time ({})", time_limit, self.current_time));
        }
        if time_limit != self.time_limit {
            println!("[INFO {} UTC] The time limit changed from {} to {}", timestamp(), self.time_limit, time_limit);
            self.time_limit = time_limit;
        }
        Ok(())
    }

    pub fn energy_record(&self) -> EnergyRecord {
        let kinetic_energy = self.state.kinetic_energy();
        let potential_energy = self.state.potential_energy(&self.gravity);
        let total_energy = kinetic_energy + potential_energy;
        EnergyRecord {
            time: self.current_time,
            iteration: self.current_iteration,
            kinetic_energy: kinetic_energy,
            potential_energy: potential_energy,
            total_energy: total_energy,
            relative_energy_error: calculate_relative_energy_error(self.initial_energy, total_energy),
            angular_momentum: self.state.total_angular_momentum(),
        }
    }
}

impl Integrator for LeapFrog {

    fn get_n_particles(&self) -> usize {
        self.state.len()
    }

    fn get_current_time(&self) -> f64 {
        self.current_time
    }

    fn get_current_iteration(&self) -> u64 {
        self.current_iteration
    }

    fn get_state(&self) -> &State {
        &self.state
    }

    fn iterate(&mut self) -> Result<bool, String> {
        if self.current_iteration >= self.n_iterations() {
            return Err("Simulation completed".to_string());
        }

        self.state = step(&self.state, self.time_step, &self.gravity);
        self.current_iteration += 1;
        self.current_time = self.current_iteration as f64*self.time_step; // Instead of accumulating dt to avoid small deviations

        let next_energy_log_time = self.n_energy_logs as f64*self.energy_log_period;
        let energy_log_time_trigger = self.current_time + self.half_time_step >= next_energy_log_time;
        if energy_log_time_trigger {
            self.n_energy_logs += 1;
        }
        Ok(energy_log_time_trigger)
    }
}
