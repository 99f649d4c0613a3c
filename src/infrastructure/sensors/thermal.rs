//! CPU temperature from the sysfs thermal zone.

use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the CPU temperature in degrees Celsius.
///
/// The kernel exposes the value as an integer in millidegrees. Hosts without
/// a usable sensor (virtual machines, some boards) have no thermal zone at
/// all, so every read failure degrades to `None` instead of aborting the run.
pub fn read_cpu_temperature(path: &Path) -> Option<f64> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            debug!("thermal zone {} unavailable: {}", path.display(), e);
            return None;
        }
    };

    match raw.trim().parse::<i64>() {
        Ok(millidegrees) => Some(millidegrees as f64 / 1000.0),
        Err(_) => {
            debug!("thermal zone {} returned non-numeric data", path.display());
            None
        }
    }
}
