use time::{OffsetDateTime, format_description};
use super::constants::ENERGY_ERROR_FLOOR;

pub fn format_timestamp(datetime: &OffsetDateTime) -> Result<String, String> {
    let layout = format_description::parse("[year].[month].[day] [hour]:[minute]:[second]")
        .map_err(|why| format!("Invalid timestamp layout: {}", why))?;
    datetime.format(&layout)
        .map_err(|why| format!("Couldn't format timestamp: {}", why))
}

/// Current UTC time as used in log lines ("2026.10.19 09:13:00"). A formatting failure is
/// reported in place of the time.
pub fn timestamp() -> String {
    format_timestamp(&OffsetDateTime::now_utc()).unwrap_or_else(|why| why)
}

/// `|current - initial| / (|initial| + floor)`
pub fn calculate_relative_energy_error(initial_energy: f64, current_energy: f64) -> f64 {
    (current_energy - initial_energy).abs() / (initial_energy.abs() + ENERGY_ERROR_FLOOR)
}
