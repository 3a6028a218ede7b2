
//// Gravity defaults
// Dimensionless units: masses, lengths and times are chosen so that G = 1.
pub const G : f64 = 1.;                         // Default gravitational constant
pub const SOFTENING : f64 = 1e-12;              // Default softening length added to r^3 (forces) and r (potential)

//// Pairwise matrices
pub const SELF_PAIR_DISTANCE : f64 = 1.;        // Placeholder written on the diagonal before any reciprocal
pub const SELF_PAIR_WEIGHT : f64 = 0.;          // No self-interaction

//// Energy diagnostics
pub const ENERGY_ERROR_FLOOR : f64 = 1e-15;     // Keeps the relative error finite when the initial energy is zero
pub const MAX_RELATIVE_ENERGY_ERROR : f64 = 1e-4; // Above this, a run is reported as poorly conserving energy

//// Driver
pub const MIN_STEPS_PER_ENERGY_LOG : f64 = 1.;  // Energy log period must cover at least one time step
pub const TIME_TOLERANCE_IN_STEPS : f64 = 1e-6; // Round-off allowance when converting a time span into a number of steps

pub const TWO_PI : f64 = std::f64::consts::PI * 2.;
