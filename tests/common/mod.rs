pub mod scenarios;

extern crate assert_approx_eq;
use self::assert_approx_eq::assert_approx_eq;
use orrery::Integrator;

/// Iterate until the integrator reports that the run is over.
pub fn iterate<T>(universe_integrator: &mut T) -> usize where T: Integrator {
    let mut n_energy_logs = 0;
    loop {
        match universe_integrator.iterate() {
            Ok(energy_log_trigger) => {
                if energy_log_trigger {
                    n_energy_logs += 1;
                }
            },
            Err(_) => { break; }
        };
    }
    n_energy_logs
}

pub fn assert_states(state: &orrery::State, expected_state: &orrery::State, precision: f64) {
    assert_eq!(state.len(), expected_state.len());
    for (body, expected_body) in state.iter().zip(expected_state.iter()) {
        assert_approx_eq!(body.mass(), expected_body.mass(), precision);
        assert_approx_eq!(body.position().x, expected_body.position().x, precision);
        assert_approx_eq!(body.position().y, expected_body.position().y, precision);
        assert_approx_eq!(body.position().z, expected_body.position().z, precision);
        assert_approx_eq!(body.velocity().x, expected_body.velocity().x, precision);
        assert_approx_eq!(body.velocity().y, expected_body.velocity().y, precision);
        assert_approx_eq!(body.velocity().z, expected_body.velocity().z, precision);
    }
}
